use dioxus::prelude::*;

use crate::reveal::{use_reveal_once, RevealVariant, CARD_REVEAL};
use crate::state::use_ui_state;

pub const CARD_STAGGER_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Web,
    Backend,
    Mobile,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::Backend => "backend",
            Category::Mobile => "mobile",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "all" => Some(Filter::All),
            "web" => Some(Filter::Only(Category::Web)),
            "backend" => Some(Filter::Only(Category::Backend)),
            "mobile" => Some(Filter::Only(Category::Mobile)),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(category) => category.as_str(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => project.category == category,
        }
    }
}

/// `data-filter` value and label for each gallery button.
pub const FILTER_BUTTONS: &[(&str, &str)] = &[
    ("all", "All"),
    ("web", "Web"),
    ("backend", "Backend"),
    ("mobile", "Mobile"),
];

/// Gallery buttons with their parsed filter; unknown values are skipped.
pub fn filter_buttons() -> Vec<(Filter, &'static str)> {
    FILTER_BUTTONS
        .iter()
        .filter_map(|(value, label)| Filter::parse(value).map(|filter| (filter, *label)))
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub category: Category,
    pub source_url: &'static str,
    pub live_url: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Flash Learn - Smart Practice Platform",
        description: "Developed a full-stack web app for student exam prep. Built RESTful APIs and database schema, integrated front-end (React) and back-end services (Spring Boot). Features include coding/aptitude quizzes and flashcard review. Achieved a responsive UI and streamlined learning workflow.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=200&fit=crop",
        technologies: &["Java", "Spring Boot", "React", "MySQL"],
        category: Category::Web,
        source_url: "https://github.com/Mounicapolisetty",
        live_url: "#",
    },
    Project {
        title: "Full-Stack E-commerce Application",
        description: "Implemented product catalog, shopping cart, checkout flows and an admin panel with role-based views; integrated sandbox payment flow and server-side order validation, added backend product search and filtering, and created seed scripts plus integration tests to validate key user journeys.",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=400&h=200&fit=crop",
        technologies: &["Java", "Spring Boot", "React", "MySQL"],
        category: Category::Web,
        source_url: "https://github.com/Mounicapolisetty",
        live_url: "#",
    },
    Project {
        title: "Weather App Dashboard",
        description: "Built an interactive weather dashboard using a real-time API to show forecasts and location-based data; added robust error handling and a lightweight local Storage cache to reduce repeated API calls and improve perceived performance.",
        image: "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?w=400&h=200&fit=crop",
        technologies: &["JavaScript", "HTML", "CSS", "OpenWeatherMap API"],
        category: Category::Web,
        source_url: "https://github.com/Mounicapolisetty",
        live_url: "#",
    },
];

/// Projects passing `filter`, in source order.
pub fn visible_projects(projects: &[Project], filter: Filter) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .collect()
}

pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * CARD_STAGGER_MS
}

#[component]
pub fn ProjectGallery() -> Element {
    let mut ui = use_ui_state();
    // Bumped on every filter click so all cards are rebuilt, not diffed.
    let mut render_pass = use_signal(|| 0u32);

    let filter = (ui.active_filter)();
    let pass = render_pass();
    let visible = visible_projects(PROJECTS, filter);
    let empty = visible.is_empty();
    let buttons = filter_buttons();

    rsx! {
        div { class: "projects-filter", role: "tablist",
            for (button_filter, label) in buttons.into_iter() {
                button {
                    key: "{button_filter.as_str()}",
                    r#type: "button",
                    class: if button_filter == filter { "filter-btn active" } else { "filter-btn" },
                    "data-filter": button_filter.as_str(),
                    aria_pressed: "{button_filter == filter}",
                    onclick: move |_| {
                        tracing::debug!("projects: filter {}", button_filter.as_str());
                        ui.active_filter.set(button_filter);
                        render_pass += 1;
                    },
                    "{label}"
                }
            }
        }
        div { id: "projects-grid", class: "projects-grid",
            if empty {
                p { class: "projects-empty", "No projects in this category yet." }
            }
            for (index, project) in visible.into_iter().enumerate() {
                ProjectCard {
                    key: "{pass}-{project.title}",
                    project: project.clone(),
                    index,
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> Element {
    let reveal = use_reveal_once(CARD_REVEAL);
    let reveal_class = RevealVariant::Fade.class(reveal.revealed());
    let delay = stagger_delay_ms(index);

    rsx! {
        div {
            class: "project-card {reveal_class}",
            style: "animation-delay: {delay}ms",
            onmounted: move |event| reveal.observe(event),
            div { class: "project-image",
                img { src: "{project.image}", alt: "{project.title}", loading: "lazy" }
                div { class: "project-overlay",
                    a { href: "{project.source_url}", target: "_blank", rel: "noopener noreferrer", aria_label: "View on GitHub",
                        i { class: "fab fa-github" }
                    }
                    a { href: "{project.live_url}", target: "_blank", rel: "noopener noreferrer", aria_label: "View Live Demo",
                        i { class: "fas fa-external-link-alt" }
                    }
                }
            }
            div { class: "project-content",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                div { class: "project-tech",
                    for tech in project.technologies.iter() {
                        span { key: "{tech}", class: "tech-tag", "{tech}" }
                    }
                }
                div { class: "project-links",
                    a { href: "{project.source_url}", target: "_blank", rel: "noopener noreferrer",
                        i { class: "fab fa-github" }
                        span { "Code" }
                    }
                    a { href: "{project.live_url}", target: "_blank", rel: "noopener noreferrer",
                        i { class: "fas fa-external-link-alt" }
                        span { "Live" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles(projects: Vec<&Project>) -> Vec<&'static str> {
        projects.into_iter().map(|project| project.title).collect()
    }

    fn sample(title: &'static str, category: Category) -> Project {
        Project {
            title,
            description: "",
            image: "",
            technologies: &[],
            category,
            source_url: "",
            live_url: "",
        }
    }

    #[test]
    fn filter_round_trips_through_its_label() {
        for (value, _) in FILTER_BUTTONS {
            assert_eq!(Filter::parse(value).map(Filter::as_str), Some(*value));
        }
        assert_eq!(filter_buttons().len(), FILTER_BUTTONS.len());
        assert_eq!(Filter::parse("games"), None);
    }

    #[test]
    fn category_filter_keeps_source_order() {
        let projects = vec![
            sample("a", Category::Web),
            sample("b", Category::Backend),
            sample("c", Category::Web),
            sample("d", Category::Mobile),
        ];
        assert_eq!(
            titles(visible_projects(&projects, Filter::Only(Category::Web))),
            vec!["a", "c"]
        );
        assert_eq!(
            titles(visible_projects(&projects, Filter::All)),
            vec!["a", "b", "c", "d"]
        );
    }

    #[test]
    fn unmatched_category_is_empty() {
        assert!(visible_projects(PROJECTS, Filter::Only(Category::Mobile)).is_empty());
    }

    #[test]
    fn stagger_grows_by_a_tenth_of_a_second() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(2), 200);
    }
}
