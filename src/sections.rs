use dioxus::prelude::*;
use dioxus::web::WebEventExt;

use crate::content;
use crate::effects;

fn ripple(event: &Event<MouseData>) {
    let click = event.data.as_ref().as_web_event();
    if let Err(message) = effects::ripple_from_click(&click) {
        tracing::debug!("effects: ripple skipped: {message}");
    }
}

fn contact_icon_class(link: &content::ContactLink) -> String {
    if link.brand {
        format!("fa-brands fa-{}", link.icon)
    } else {
        format!("fa-solid fa-{}", link.icon)
    }
}

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-icons",
                for icon in content::HERO_ICONS.iter() {
                    i { key: "{icon}", class: "fa-solid fa-{icon}" }
                }
            }
            h1 { class: "gradient-text", "{content::SITE_NAME}" }
            p { class: "hero-subtitle",
                i { class: "fa-solid fa-shield-virus" }
                "{content::SITE_TAGLINE}"
            }
            p { class: "hero-role",
                i { class: "fa-solid fa-location-dot" }
                "{content::HERO_ROLE}"
            }
            p { class: "hero-description", "{content::HERO_DESCRIPTION}" }
            div { class: "hero-buttons",
                a {
                    href: "#projects",
                    class: "btn btn-primary",
                    onclick: move |event| ripple(&event),
                    i { class: "fa-solid fa-laptop-code" }
                    "View My Research"
                }
                a {
                    href: "#contact",
                    class: "btn btn-secondary",
                    onclick: move |event| ripple(&event),
                    i { class: "fa-solid fa-handshake" }
                    "Get In Touch"
                }
            }
        }
    }
}

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { id: "about", class: "about",
            h2 { class: "section-title gradient-text",
                i { class: "fa-solid fa-user-graduate" }
                "About Me"
            }
            div { class: "about-content",
                div { class: "about-image",
                    i { class: "fa-solid fa-shield-halved" }
                }
                div { class: "about-text",
                    for paragraph in content::ABOUT_PARAGRAPHS.iter() {
                        p { "{paragraph}" }
                    }
                    div { class: "stats",
                        for stat in content::STATS.iter() {
                            div { key: "{stat.label}", class: "stat",
                                i { class: "fa-solid fa-{stat.icon}" }
                                div { class: "stat-number", "{stat.figure}" }
                                div { class: "stat-label", "{stat.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ToolsSection() -> Element {
    rsx! {
        section { id: "tools", class: "tools",
            h2 { class: "section-title gradient-text",
                i { class: "fa-solid fa-toolbox" }
                "Tools & Technologies"
            }
            div { class: "tools-grid",
                for category in content::TOOL_CATEGORIES.iter() {
                    div { key: "{category.title}", class: "tool-category",
                        h3 {
                            i { class: "fa-solid fa-{category.icon}" }
                            "{category.title}"
                        }
                        ul {
                            for tool in category.tools.iter() {
                                li { key: "{tool.name}",
                                    i { class: "fa-solid fa-{tool.icon}" }
                                    div {
                                        div { class: "tool-name", "{tool.name}" }
                                        div { class: "tool-desc", "{tool.blurb}" }
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
pub fn ExperienceSection() -> Element {
    rsx! {
        section { id: "experience", class: "experience",
            h2 { class: "section-title gradient-text",
                i { class: "fa-solid fa-timeline" }
                "Research & Focus Areas"
            }
            div { class: "timeline",
                for entry in content::TIMELINE.iter() {
                    div { key: "{entry.title}", class: "timeline-item",
                        div { class: "timeline-date", "{entry.period}" }
                        h3 { "{entry.title}" }
                        p { class: "timeline-company", "{entry.context}" }
                        p { "{entry.body}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        section { id: "projects", class: "projects",
            h2 { class: "section-title gradient-text",
                i { class: "fa-solid fa-rocket" }
                "Featured Projects"
            }
            div { class: "projects-grid",
                for project in content::PROJECTS.iter() {
                    a {
                        key: "{project.title}",
                        href: "{project.link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "project-card",
                        div { class: "project-icon",
                            i { class: "fa-solid fa-{project.icon}" }
                        }
                        h3 { "{project.title}" }
                        p { "{project.blurb}" }
                        div { class: "project-tags",
                            for tag in project.tags.iter() {
                                span { key: "{tag}", "{tag}" }
                            }
                        }
                    }
                }
                a {
                    href: "{content::GITHUB_PROFILE_URL}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "project-card view-more",
                    i { class: "fa-brands fa-github" }
                    h3 { "View More Projects" }
                    p { "Explore my complete collection on GitHub" }
                    span { class: "arrow", "→" }
                }
            }
        }
    }
}

#[component]
pub fn BlogSection() -> Element {
    rsx! {
        section { id: "blog", class: "blog",
            h2 { class: "section-title gradient-text",
                i { class: "fa-solid fa-blog" }
                "Latest Research & Articles"
            }
            div { class: "blog-grid",
                for post in content::BLOG_POSTS.iter() {
                    a {
                        key: "{post.title}",
                        href: "{post.link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "blog-card",
                        div { class: "blog-icon",
                            i { class: "fa-solid fa-{post.icon}" }
                        }
                        div { class: "blog-date",
                            i { class: "fa-solid fa-calendar" }
                            "{post.date}"
                        }
                        h3 { "{post.title}" }
                        p { "{post.blurb}" }
                        div { class: "blog-link",
                            "Read Article "
                            i { class: "fa-solid fa-arrow-right" }
                        }
                    }
                }
                a {
                    href: "{content::BLOG_HOME_URL}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "blog-card view-all",
                    i { class: "fa-solid fa-newspaper" }
                    h3 { "View All Articles" }
                    p { "Visit Techtonic Hive for more cybersecurity research" }
                }
            }
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section { id: "contact", class: "contact",
            h2 { class: "section-title gradient-text",
                i { class: "fa-solid fa-handshake" }
                "Let's Connect"
            }
            p { class: "contact-text", "{content::CONTACT_TEXT}" }
            div { class: "contact-links",
                for link in content::CONTACT_LINKS.iter() {
                    a {
                        key: "{link.label}",
                        href: "{link.href}",
                        target: if link.href.starts_with("https://") { "_blank" },
                        rel: if link.href.starts_with("https://") { "noopener noreferrer" },
                        i { class: "{contact_icon_class(link)}" }
                        span { "{link.label}" }
                    }
                }
            }
        }
    }
}
