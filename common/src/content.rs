// static page content
//
// everything the page says lives here as plain records, so the markup only decides layout.  the
// section ids double as the anchor targets used by the navigation

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: [Section; 7] = [
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "experience", label: "Experience" },
    Section { id: "skills", label: "Skills" },
    Section { id: "projects", label: "Projects" },
    Section { id: "education", label: "Education" },
    Section { id: "contact", label: "Contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub external: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
    pub class: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hero {
    pub name: &'static str,
    pub photo: &'static str,
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub actions: &'static [CallToAction],
    pub social: &'static [Link],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub figure: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct About {
    pub bio: &'static str,
    pub highlights: &'static [Highlight],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Job {
    pub role: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub icon: &'static str,
    pub title: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub badge: Option<&'static str>,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tech_stack: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub icon: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub grade: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub text: &'static str,
    pub href: &'static str,
    pub external: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footer {
    pub copyright: &'static str,
    pub tagline: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Portfolio {
    pub logo: &'static str,
    pub hero: Hero,
    pub about: About,
    pub experience: &'static [Job],
    pub skills: &'static [SkillCategory],
    pub projects: &'static [Project],
    pub education: &'static [Education],
    pub certifications: &'static [Certification],
    pub contact: &'static [ContactItem],
    pub footer: Footer,
}

const EMAIL: &str = "mailto:priyankabsr12@gmail.com";
const LINKEDIN: &str = "https://linkedin.com/in/priyankaer";

pub const PORTFOLIO: Portfolio = Portfolio {
    logo: "Priyanka",
    hero: Hero {
        name: "Priyanka",
        photo: "/priyanka_photo.jpeg",
        badge: "Full Stack Developer",
        title: "Building Scalable Backend Systems & Modern Web Applications",
        description: "Passionate Full Stack Developer with 4.5+ years crafting robust backend \
            architectures and seamless user experiences. Specializing in Node.js, microservices, \
            and modern web technologies to deliver high-performance solutions.",
        actions: &[
            CallToAction {
                label: "Get In Touch",
                href: "#contact",
                class: "btn btn-primary",
            },
            CallToAction {
                label: "View Projects",
                href: "#projects",
                class: "btn btn-secondary",
            },
        ],
        social: &[
            Link {
                label: "Email",
                href: EMAIL,
                icon: "bi bi-envelope",
                external: false,
            },
            Link {
                label: "LinkedIn",
                href: LINKEDIN,
                icon: "bi bi-linkedin",
                external: true,
            },
        ],
    },
    about: About {
        bio: "A Full Stack Developer with 4.5+ years of experience building scalable, \
            high-performance applications. Specializing in Node.js backend development and modern \
            frontend technologies, I architect robust server-side systems and seamless user \
            experiences. My expertise includes designing efficient APIs, optimizing database \
            performance, implementing microservices architecture, and crafting maintainable, \
            production-ready code that scales.",
        highlights: &[
            Highlight {
                figure: "4.5+",
                label: "Years Experience",
            },
            Highlight {
                figure: "10+",
                label: "Projects Delivered",
            },
            Highlight {
                figure: "50+",
                label: "REST APIs Developed",
            },
        ],
    },
    experience: &[
        Job {
            role: "Senior Software Engineer",
            company: "BNG Advanced Mobile Solutions Pvt. Ltd, Gurgaon",
            duration: "Feb 2024 – Present",
            details: &[
                "Architected and developed scalable backend services using Node.js and Express.js for WAP promotion management platforms, serving 10,000+ concurrent users with 99.9% uptime.",
                "Designed and implemented 20+ RESTful APIs for promotion lifecycle, callback interfaces, and DND data handling, reducing API response time by 40% through caching and query optimization.",
                "Led development of IOBD project, a real-time reporting system for marketing campaigns, improving data accuracy by 35% and reducing report generation time from 5 minutes to 30 seconds.",
                "Optimized existing services by implementing async processing, connection pooling, and error handling best practices, resulting in 20% performance improvement and 30% reduction in server costs.",
                "Collaborated with cross-functional teams, mentored junior developers, and maintained comprehensive API documentation, reducing integration time by 50%.",
            ],
        },
        Job {
            role: "Associate Product Engineer",
            company: "MarinePals, Gurgaon",
            duration: "Oct 2023 – Feb 2024",
            details: &[
                "Developed 15+ RESTful APIs for AeFlix educational video app backend using Node.js and Express.js, implementing JWT-based authentication serving 5,000+ active users.",
                "Integrated multiple third-party APIs (video streaming, payment gateways) and implemented real-time data synchronization, reducing data inconsistency issues by 90%.",
                "Collaborated closely with frontend and mobile teams, optimized API responses through pagination and selective field queries, reducing average response time from 800ms to 250ms.",
            ],
        },
        Job {
            role: "Associate Product Engineer",
            company: "Innologic Lab, Gurgaon",
            duration: "Jan 2021 – Sep 2023",
            details: &[
                "Led backend development of Digital Learning Management System (DLMS) using Node.js, Express.js, and MySQL, serving 15,000+ users across 50+ organizations with role-based access control and SCORM compliance.",
                "Architected and developed 30+ RESTful APIs for School ERP system, optimizing database queries with indexing and query optimization, improving query performance by 60% and reducing database load by 45%.",
                "Built modular, reusable backend components following MVC architecture, implemented comprehensive unit and integration testing (80%+ code coverage), reducing production bugs by 70%.",
                "Developed competency management system backend with MongoDB aggregation pipelines, processing 100,000+ records daily and reducing report generation time from 10 minutes to 2 minutes.",
                "Mentored 2 junior developers, conducted code reviews, and established coding standards, improving team productivity by 25%.",
            ],
        },
    ],
    skills: &[
        SkillCategory {
            icon: "⚡",
            title: "Backend Technologies",
            tags: &[
                "Node.js",
                "Express.js",
                "RESTful APIs",
                "GraphQL",
                "Microservices",
                "Event-driven Architecture",
                "JWT & OAuth2",
                "WebSockets",
                "Serverless (AWS Lambda)",
            ],
        },
        SkillCategory {
            icon: "🗄️",
            title: "Databases & Caching",
            tags: &[
                "MongoDB",
                "Mongoose",
                "MongoDB Aggregation",
                "MySQL",
                "PostgreSQL",
                "Redis",
                "Elasticsearch",
                "Database Optimization",
            ],
        },
        SkillCategory {
            icon: "💬",
            title: "Message Queues & Jobs",
            tags: &[
                "RabbitMQ",
                "Bull/BullMQ",
                "Background Jobs",
                "Queue Management",
                "Task Scheduling",
                "Event Processing",
            ],
        },
        SkillCategory {
            icon: "📊",
            title: "Logging & Monitoring",
            tags: &[
                "ELK Stack",
                "Elasticsearch",
                "Logstash",
                "Kibana",
                "Log Management",
                "Performance Monitoring",
            ],
        },
        SkillCategory {
            icon: "⚛️",
            title: "Frontend Technologies",
            tags: &[
                "React.js",
                "JavaScript (ES6+)",
                "TypeScript",
                "HTML5 & CSS3",
                "Tailwind CSS",
                "Redux",
                "AJAX",
                "Responsive Design",
            ],
        },
        SkillCategory {
            icon: "☁️",
            title: "Cloud & DevOps",
            tags: &[
                "AWS Lambda",
                "AWS Services",
                "Docker",
                "CI/CD",
                "Git & GitHub",
                "Jenkins",
                "Linux",
                "Nginx",
            ],
        },
        SkillCategory {
            icon: "🧪",
            title: "Testing & Quality",
            tags: &[
                "Jest",
                "Mocha & Chai",
                "Unit Testing",
                "Integration Testing",
                "API Testing",
                "Postman",
            ],
        },
        SkillCategory {
            icon: "🏗️",
            title: "Architecture & Patterns",
            tags: &[
                "MVC Architecture",
                "OOP & Design Patterns",
                "SOLID Principles",
                "RESTful Design",
                "API Design",
                "Performance Optimization",
                "Code Refactoring",
            ],
        },
        SkillCategory {
            icon: "🤖",
            title: "AI Tools & Automation",
            tags: &[
                "ChatGPT",
                "Amazon Q",
                "Cursor",
                "N8N",
                "AI Code Generation",
                "Workflow Automation",
                "AI-Assisted Development",
            ],
        },
        SkillCategory {
            icon: "🛠️",
            title: "Tools & Others",
            tags: &[
                "VS Code",
                "Jira",
                "Confluence",
                "Postman",
                "MongoDB Compass",
                "CSV Processing",
                "Third-party APIs",
            ],
        },
    ],
    projects: &[
        Project {
            title: "IOBD (Interactive Outbound Dialing)",
            badge: None,
            description: "Campaign management platform for outbound dialing systems using Node.js, \
                Express, and MongoDB. Provides RESTful API for creating and managing automated \
                calling campaigns.",
            features: &[
                "Handles CSV file uploads for phone numbers with data scrubbing and validation.",
                "Implements role-based authentication and campaign lifecycle management.",
                "Generates analytics using MongoDB aggregation pipelines.",
                "Integrates with external telephony services and uses background job queues for scheduling.",
            ],
            tech_stack: "Node.js, Express.js, MongoDB, Mongoose, Bull Queue, Redis, JWT, RESTful APIs, MongoDB Aggregation, CSV Processing, Background Jobs",
        },
        Project {
            title: "Offer Platform",
            badge: None,
            description: "Affiliate marketing and offer tracking system that manages the complete \
                lifecycle of digital advertising offers.",
            features: &[
                "Click and conversion tracking with device, browser, and OS detection.",
                "Callback/postback management for affiliate networks.",
                "Capping control (daily, hourly, weekly, monthly) on clicks and conversions.",
                "Revenue tracking with multiple models (CPC, CPA, CPL) and real-time analytics.",
            ],
            tech_stack: "Node.js, Express.js, MongoDB, Mongoose, Redis, Device Detection, User-Agent Parsing, Real-time Analytics, MongoDB Aggregation, RESTful APIs, Postback Management",
        },
        Project {
            title: "CCI (Customer Care Interface)",
            badge: None,
            description: "Web-based subscription management platform for telecommunications and \
                value-added services (VAS).",
            features: &[
                "User management and subscription lifecycle management.",
                "Bulk operations via CSV uploads with background job processing.",
                "DND management and complaint tracking.",
                "Real-time status checking and MIS reporting with MongoDB aggregation.",
            ],
            tech_stack: "Node.js, Express.js, MongoDB, Mongoose, Bull Queue, Redis, JWT, RESTful APIs, MongoDB Aggregation, CSV Processing, Background Jobs, MIS Reporting",
        },
        Project {
            title: "DLMS (Digital Learning Management System)",
            badge: None,
            description: "Learning Management System for corporate training using Node.js, \
                Express, and MongoDB. The platform enables administrators to create and manage \
                courses, enroll employees, track progress, and generate reports.",
            features: &[
                "Role-based access control with secure authentication and authorization.",
                "Multimedia content support with quizzes and certifications.",
                "RESTful API for integration with third-party HR systems.",
                "SCORM-compliant content support and background jobs for email notifications.",
                "Progress tracking and comprehensive reporting system.",
            ],
            tech_stack: "Node.js, Express.js, MongoDB, Mongoose, JWT, OAuth2, SCORM, RESTful APIs, Role-Based Access Control, Email Services, Background Jobs, Progress Tracking",
        },
        Project {
            title: "AE Flix - Educational Video App",
            badge: None,
            description: "Android educational video app offering curated learning content across \
                subjects. Built as a Node.js backend developer, creating RESTful APIs for course \
                catalog, authentication, enrollment, bookmarks and progress tracking.",
            features: &[
                "RESTful APIs for course catalog and content management.",
                "JWT-based authentication with secure input validation.",
                "User enrollment, bookmarks, and progress tracking features.",
                "Video metadata integration and reporting capabilities.",
                "Scalable, maintainable endpoints optimized for mobile users.",
            ],
            tech_stack: "Node.js, Express.js, MongoDB, Mongoose, JWT, RESTful APIs, Mobile Backend, Input Validation, Video Metadata, Progress Tracking",
        },
        Project {
            title: "FreshCart – Grocery Delivery Application",
            badge: Some("Personal"),
            description: "Developed the backend services for FreshCart using Node.js and \
                Express.js, implementing RESTful APIs to manage product listings, user \
                authentication, cart operations, and order processing.",
            features: &[
                "Designed and optimized MongoDB schemas to efficiently handle product inventory, user data, and order transactions.",
                "Integrated payment gateway APIs and implemented secure authentication with JWT.",
                "Implemented role-based access control and input validation to ensure data security and integrity.",
                "Applied asynchronous programming and error handling to maintain application responsiveness and stability.",
            ],
            tech_stack: "Node.js, Express.js, MongoDB, Mongoose, JWT, RESTful APIs, Payment Gateway, Role-Based Access Control, Input Validation, Error Handling, Asynchronous Programming",
        },
    ],
    education: &[
        Education {
            icon: "bi bi-mortarboard",
            degree: "B. Tech. in Computer Science & Engineering",
            institution: "Skyline Institute of Engg. and Tech., Gr. Noida",
            grade: "87% (2020)",
        },
        Education {
            icon: "bi bi-book",
            degree: "XII (CBSE)",
            institution: "Jawahar Navodaya Vidyalaya",
            grade: "72% (2016)",
        },
        Education {
            icon: "bi bi-award",
            degree: "X (CBSE)",
            institution: "Jawahar Navodaya Vidyalaya",
            grade: "CGPA 9.8 (2014)",
        },
    ],
    certifications: &[Certification {
        icon: "bi bi-trophy",
        title: "Certificate of Appreciation",
        detail: "Innologic Lab — Dec 2022 & June 2023",
    }],
    contact: &[
        ContactItem {
            icon: "bi bi-envelope",
            label: "Email",
            text: "priyankabsr12@gmail.com",
            href: EMAIL,
            external: false,
        },
        ContactItem {
            icon: "bi bi-linkedin",
            label: "LinkedIn",
            text: "linkedin.com/in/priyankaer",
            href: LINKEDIN,
            external: true,
        },
    ],
    footer: Footer {
        copyright: "© 2024 Priyanka. All rights reserved.",
        tagline: "Full Stack Developer | Node.js Specialist",
    },
};

impl Portfolio {
    // every href on the page that is meant to stay on the page
    pub fn in_page_hrefs(&self) -> impl Iterator<Item = &'static str> {
        let hero = self.hero.actions.iter().map(|a| a.href);
        let social = self.hero.social.iter().map(|l| l.href);
        let contact = self.contact.iter().map(|c| c.href);

        hero.chain(social)
            .chain(contact)
            .filter(|href| href.starts_with('#'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::fragment;

    #[test]
    fn in_page_links_resolve_to_sections() {
        for href in PORTFOLIO.in_page_hrefs() {
            let id = fragment(href).unwrap();
            assert!(
                SECTIONS.iter().any(|s| s.id == id),
                "{href} does not match any section"
            );
        }
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in SECTIONS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn external_links_are_not_fragments() {
        assert_eq!(PORTFOLIO.in_page_hrefs().count(), 2);
        assert!(PORTFOLIO.contact.iter().all(|c| fragment(c.href).is_none()));
    }
}
