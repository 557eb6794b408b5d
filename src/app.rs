use dioxus::prelude::*;

use crate::content::{self, NAV_ITEMS};
use crate::cursor::CursorOverlay;
use crate::konami::use_konami;
use crate::mascot::{use_mascot, CharacterGuide};
use crate::particles::ParticleField;
use crate::scrollspy::{use_active_section, use_scrolled};
use crate::sections::{
    AboutSection, BlogSection, ContactSection, ExperienceSection, HeroSection, ProjectsSection,
    ToolsSection,
};
use crate::theme;
use crate::viewport::use_viewport_flags;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_AWESOME_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

const PAGE_TITLE: &str = "Anubhav Mohandas | Cybersecurity Researcher";

#[component]
pub fn App() -> Element {
    let theme = use_signal(theme::load_theme);
    use_effect(move || {
        theme::apply_theme(theme());
    });

    let flags = use_viewport_flags();
    use_context_provider(|| flags);

    let mascot = use_mascot();
    let active_section = use_active_section(mascot);
    let scrolled = use_scrolled();
    let celebration = use_konami(mascot);
    let mut menu_open = use_signal(|| false);

    let nav_class = if scrolled() { "nav scrolled" } else { "nav" };
    let current = active_section().unwrap_or("home");
    let toggle_icon = theme().toggle_icon();
    let menu_label = if menu_open() { "Close menu" } else { "Open menu" };

    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Meta { name: "description", content: "{content::SITE_TAGLINE}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_URL }

        if celebration() {
            div { class: "konami-overlay" }
        }
        CursorOverlay {}
        ParticleField {}
        a { href: "#main-content", class: "skip-link", "Skip to main content" }
        CharacterGuide {}

        nav { class: "{nav_class}",
            div { class: "nav-container",
                div { class: "nav-logo", onclick: move |_| scroll_to_section("home"),
                    i { class: "fa-solid fa-user-secret" }
                    span { class: "logo-text", "{content::SITE_NAME}" }
                    span { class: "logo-text-mobile", "{content::SITE_NAME_SHORT}" }
                }
                ul { class: "nav-menu",
                    for item in NAV_ITEMS.iter() {
                        li { key: "{item.id}",
                            a {
                                href: "#{item.id}",
                                class: if current == item.id { "active" },
                                aria_current: if current == item.id { "page" },
                                i { class: "fa-solid fa-{item.icon}" }
                                " {item.label}"
                            }
                        }
                    }
                    li {
                        button {
                            class: "theme-toggle",
                            aria_label: "Toggle theme",
                            onclick: move |_| theme::toggle_theme(theme),
                            i { class: "fa-solid fa-{toggle_icon}" }
                        }
                    }
                }
                div { class: "mobile-controls",
                    button {
                        class: "theme-toggle",
                        aria_label: "Toggle theme",
                        onclick: move |_| theme::toggle_theme(theme),
                        i { class: "fa-solid fa-{toggle_icon}" }
                    }
                    button {
                        class: "mobile-menu-btn",
                        aria_label: "{menu_label}",
                        onclick: move |_| {
                            let open = !*menu_open.peek();
                            menu_open.set(open);
                        },
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }
            if flags().collapse_nav && menu_open() {
                div { class: "mobile-menu",
                    for item in NAV_ITEMS.iter() {
                        a {
                            key: "{item.id}",
                            href: "#{item.id}",
                            onclick: move |_| menu_open.set(false),
                            i { class: "fa-solid fa-{item.icon}" }
                            "{item.label}"
                        }
                    }
                }
            }
        }

        main { id: "main-content",
            HeroSection {}
            AboutSection {}
            ToolsSection {}
            ExperienceSection {}
            ProjectsSection {}
            BlogSection {}
            ContactSection {}
        }

        footer {
            for line in content::FOOTER_LINES.iter() {
                p { "{line}" }
            }
        }
    }
}

fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    element.scroll_into_view();
}
