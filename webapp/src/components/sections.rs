use dioxus::prelude::*;

use portfolio_common::{content::PORTFOLIO, nav::MenuState};

use crate::components::navigation::NavAnchor;

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    menu_signal: Signal<MenuState>,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let menu_signal = props.menu_signal;
    let hero = PORTFOLIO.hero;

    rsx! {
        section { id: "home", class: "hero-section",
            div { class: "hero-content",
                div { class: "hero-image",
                    img { src: hero.photo, alt: hero.name }
                }
                div { class: "hero-text",
                    div { class: "hero-badge", "{hero.badge}" }
                    h1 { class: "hero-name", "{hero.name}" }
                    h2 { class: "hero-title", "{hero.title}" }
                    p { class: "hero-description", "{hero.description}" }
                    div { class: "hero-buttons",
                        for action in hero.actions.iter() {
                            NavAnchor {
                                key: "{action.href}",
                                href: action.href.to_owned(),
                                class: action.class,
                                menu_signal,
                                "{action.label}"
                            }
                        }
                    }
                    div { class: "hero-social",
                        for link in hero.social.iter() {
                            if link.external {
                                a {
                                    href: link.href,
                                    class: "social-link",
                                    aria_label: link.label,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    i { class: link.icon }
                                }
                            } else {
                                a {
                                    href: link.href,
                                    class: "social-link",
                                    aria_label: link.label,
                                    i { class: link.icon }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let about = PORTFOLIO.about;

    rsx! {
        section { id: "about", class: "about-section",
            div { class: "container",
                h2 { class: "section-title", "About Me" }
                div { class: "about-content",
                    p { "{about.bio}" }
                    div { class: "about-highlights",
                        for highlight in about.highlights.iter() {
                            div { key: "{highlight.label}", class: "highlight-item",
                                span { class: "highlight-number", "{highlight.figure}" }
                                span { class: "highlight-label", "{highlight.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Experience() -> Element {
    rsx! {
        section { id: "experience", class: "experience-section",
            div { class: "container",
                h2 { class: "section-title", "Professional Experience" }
                div { class: "timeline",
                    for job in PORTFOLIO.experience.iter() {
                        div { key: "{job.company}", class: "timeline-item",
                            div { class: "timeline-marker" }
                            div { class: "timeline-content",
                                div { class: "timeline-header",
                                    h3 { "{job.role}" }
                                    span { class: "company", "{job.company}" }
                                    span { class: "duration", "{job.duration}" }
                                }
                                ul { class: "timeline-details",
                                    for detail in job.details.iter() {
                                        li { "{detail}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "skills-section",
            div { class: "container",
                h2 { class: "section-title", "Technical Skills" }
                div { class: "skills-grid",
                    for category in PORTFOLIO.skills.iter() {
                        div { key: "{category.title}", class: "skill-category",
                            div { class: "skill-header",
                                div { class: "skill-icon", "{category.icon}" }
                                h3 { class: "skill-category-title", "{category.title}" }
                            }
                            div { class: "skill-tags",
                                for tag in category.tags.iter() {
                                    span { class: "skill-tag", "{tag}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: "projects", class: "projects-section",
            div { class: "container",
                h2 { class: "section-title", "Projects" }
                div { class: "projects-grid",
                    for project in PORTFOLIO.projects.iter() {
                        div { key: "{project.title}", class: "project-card",
                            div { class: "project-header",
                                h3 { "{project.title}" }
                                if let Some(badge) = project.badge {
                                    span { class: "project-badge", "{badge}" }
                                }
                            }
                            p { class: "project-description", "{project.description}" }
                            ul { class: "project-features",
                                for feature in project.features.iter() {
                                    li { "{feature}" }
                                }
                            }
                            div { class: "tech-stack-section",
                                p { class: "tech-stack-text",
                                    strong { "Tech Stack:" }
                                    " {project.tech_stack}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Education() -> Element {
    rsx! {
        section { id: "education", class: "education-section",
            div { class: "container",
                h2 { class: "section-title", "Education" }
                div { class: "education-grid",
                    for entry in PORTFOLIO.education.iter() {
                        div { key: "{entry.degree}", class: "education-card",
                            div { class: "education-icon",
                                i { class: entry.icon }
                            }
                            h3 { "{entry.degree}" }
                            p { class: "education-institution", "{entry.institution}" }
                            p { class: "education-grade", "{entry.grade}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Certifications() -> Element {
    rsx! {
        section { class: "certifications-section",
            div { class: "container",
                h2 { class: "section-title", "Certifications & Achievements" }
                div { class: "certifications-list",
                    for cert in PORTFOLIO.certifications.iter() {
                        div { key: "{cert.title}", class: "certification-item",
                            i { class: cert.icon }
                            div {
                                h4 { "{cert.title}" }
                                p { "{cert.detail}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "contact-section",
            div { class: "container",
                h2 { class: "section-title", "Get In Touch" }
                div { class: "contact-content",
                    div { class: "contact-info",
                        for item in PORTFOLIO.contact.iter() {
                            div { key: "{item.label}", class: "contact-item",
                                i { class: item.icon }
                                div {
                                    h4 { "{item.label}" }
                                    if item.external {
                                        a {
                                            href: item.href,
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "{item.text}"
                                        }
                                    } else {
                                        a { href: item.href, "{item.text}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let footer = PORTFOLIO.footer;

    rsx! {
        footer { class: "portfolio-footer",
            div { class: "container",
                p { "{footer.copyright}" }
                p { "{footer.tagline}" }
            }
        }
    }
}
