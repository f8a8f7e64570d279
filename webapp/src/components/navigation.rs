use dioxus::prelude::*;

use portfolio_common::{
    content::{PORTFOLIO, SECTIONS},
    nav::{MenuState, NavEvent},
};

use crate::{
    common::dom::{DocumentRoot, PageSurface},
    home::PageTheme,
};

// NavAnchor
//
// every in-page link on the page goes through here, so the browser's jump is replaced with a
// smooth scroll and the mobile menu closes no matter where the link sits
#[derive(Clone, PartialEq, Props)]
pub struct NavAnchorProps {
    href: String,
    #[props(default)]
    class: &'static str,
    menu_signal: Signal<MenuState>,
    children: Element,
}

#[component]
pub fn NavAnchor(props: NavAnchorProps) -> Element {
    let mut menu_signal = props.menu_signal;
    let href = props.href.clone();

    rsx! {
        a {
            href: "{props.href}",
            class: props.class,
            onclick: move |evt: MouseEvent| {
                let outcome = menu_signal.write().handle_anchor_click(&href, &PageSurface);
                if outcome.default_prevented {
                    evt.prevent_default();
                }
            },
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    menu_signal: Signal<MenuState>,
    theme_signal: Signal<PageTheme>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut menu_signal = props.menu_signal;
    let mut theme_signal = props.theme_signal;

    let theme = theme_signal.read().current();
    let active = menu_signal.read().active_class();

    rsx! {
        nav { class: "portfolio-nav",
            div { class: "nav-container",
                div { class: "nav-logo", "{PORTFOLIO.logo}" }
                div { class: "nav-actions",
                    button {
                        class: "theme-toggle",
                        aria_label: "Toggle theme",
                        title: theme.toggle_title(),
                        onclick: move |_| {
                            theme_signal.write().toggle(&DocumentRoot);
                        },
                        i { class: theme.toggle_icon() }
                    }
                    button {
                        class: "mobile-menu-toggle",
                        aria_label: "Toggle menu",
                        onclick: move |_| menu_signal.write().apply(NavEvent::Toggle),
                        span { class: active }
                        span { class: active }
                        span { class: active }
                    }
                }
                ul { class: "nav-menu {active}",
                    for section in SECTIONS.iter() {
                        li { key: "{section.id}",
                            NavAnchor {
                                href: format!("#{}", section.id),
                                menu_signal,
                                "{section.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
