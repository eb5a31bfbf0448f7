use dioxus::prelude::*;

use crate::contact::ContactForm;
use crate::date::current_year;
use crate::navigation::{scroll_to_anchor, AnchorLink};
use crate::projects::ProjectGallery;
use crate::reveal::{title_reveal_delay, use_reveal_once, Reveal, RevealVariant, SECTION_REVEAL};
use crate::skills::SkillsGrid;
use crate::state::use_ui_state;
use crate::stats::StatsRow;
use crate::typing::TypingText;

pub const OWNER_NAME: &str = "Mounica Polisetty";

const ABOUT_CARDS: &[(&str, &str, &str)] = &[
    (
        "fas fa-graduation-cap",
        "Education",
        "Computer science graduate with a focus on software engineering and databases.",
    ),
    (
        "fas fa-code",
        "Development",
        "Building Java and Spring Boot services with React front ends.",
    ),
    (
        "fas fa-lightbulb",
        "Approach",
        "Clean, tested code and interfaces that stay out of the way.",
    ),
];

const CONTACT_CARDS: &[(&str, &str, &str)] = &[
    ("fas fa-envelope", "Email", "Send a message with the form"),
    ("fab fa-github", "GitHub", "github.com/Mounicapolisetty"),
    ("fas fa-map-marker-alt", "Location", "Open to remote work"),
];

#[component]
pub fn HeroSection() -> Element {
    let ui = use_ui_state();
    let indicator_style = if (ui.scrolled)() { "opacity: 0" } else { "opacity: 1" };

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-content",
                p { class: "hero-greeting", "Hello, I'm" }
                h1 { class: "hero-name", "{OWNER_NAME}" }
                h2 { class: "hero-role",
                    "I'm a "
                    TypingText {}
                }
                p { class: "hero-description",
                    "I build reliable backends and friendly interfaces for the web."
                }
                div { class: "hero-buttons",
                    AnchorLink { href: "#projects".to_string(), class: Some("btn btn-primary".to_string()), "View My Work" }
                    AnchorLink { href: "#contact".to_string(), class: Some("btn btn-secondary".to_string()), "Get In Touch" }
                }
            }
            div {
                class: "scroll-indicator",
                style: "{indicator_style}",
                onclick: move |_| scroll_to_anchor("#about"),
                i { class: "fas fa-chevron-down" }
            }
        }
    }
}

/// Fading header whose title slides in on its own, delayed by position.
#[component]
pub fn SectionHeader(index: usize, title: String, subtitle: String) -> Element {
    let title_reveal = use_reveal_once(SECTION_REVEAL);
    let title_class = RevealVariant::Slide.class(title_reveal.revealed());
    let delay = title_reveal_delay(index);

    rsx! {
        Reveal { class: "section-header".to_string(),
            h2 {
                class: "section-title {title_class}",
                style: "{delay}",
                onmounted: move |event| title_reveal.observe(event),
                "{title}"
            }
            p { class: "section-subtitle", "{subtitle}" }
        }
    }
}

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { id: "about", class: "about",
            div { class: "container",
                SectionHeader {
                    index: 0,
                    title: "About Me".to_string(),
                    subtitle: "A little about who I am".to_string(),
                }
                div { class: "about-grid",
                    for (icon, title, body) in ABOUT_CARDS.iter().copied() {
                        Reveal { key: "{title}", class: "about-card".to_string(),
                            i { class: "{icon}" }
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SkillsSection() -> Element {
    rsx! {
        section { id: "skills", class: "skills",
            div { class: "container",
                SectionHeader {
                    index: 1,
                    title: "Skills".to_string(),
                    subtitle: "Tools I reach for".to_string(),
                }
                SkillsGrid {}
                StatsRow {}
            }
        }
    }
}

#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        section { id: "projects", class: "projects",
            div { class: "container",
                SectionHeader {
                    index: 2,
                    title: "Projects".to_string(),
                    subtitle: "Things I have built".to_string(),
                }
                ProjectGallery {}
            }
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section { id: "contact", class: "contact",
            div { class: "container",
                SectionHeader {
                    index: 3,
                    title: "Contact".to_string(),
                    subtitle: "Let's work together".to_string(),
                }
                div { class: "contact-grid",
                    div { class: "contact-info",
                        for (icon, title, body) in CONTACT_CARDS.iter().copied() {
                            Reveal { key: "{title}", class: "contact-card".to_string(),
                                i { class: "{icon}" }
                                h4 { "{title}" }
                                p { "{body}" }
                            }
                        }
                    }
                    ContactForm {}
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = current_year();
    rsx! {
        footer { class: "footer",
            p {
                "© "
                span { id: "year", "{year}" }
                " {OWNER_NAME}. All rights reserved."
            }
        }
    }
}
