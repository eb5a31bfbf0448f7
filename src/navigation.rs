use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::dom;
use crate::state::{use_ui_state, UiState};
#[cfg(target_arch = "wasm32")]
use crate::throttle::{Throttle, ThrottleDecision};

pub const SCROLL_THRESHOLD: f64 = 100.0;
pub const HEADER_OFFSET: f64 = 80.0;
pub const SECTION_MARGIN: f64 = 100.0;
pub const SCROLL_THROTTLE_MS: f64 = 100.0;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y >= SCROLL_THRESHOLD
}

/// The last section (document order) whose margin-adjusted span contains
/// `scroll_y`.
pub fn current_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        let top = section.top - SECTION_MARGIN;
        if scroll_y >= top && scroll_y < top + section.height {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Target element id for a same-page anchor such as `#about`.
pub fn anchor_id(href: &str) -> Option<String> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(fragment)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| fragment.to_string());
    Some(decoded)
}

pub fn scroll_target(offset_top: f64) -> f64 {
    (offset_top - HEADER_OFFSET).max(0.0)
}

pub fn link_is_active(href: &str, active_section: Option<&str>) -> bool {
    match (anchor_id(href), active_section) {
        (Some(id), Some(active)) => id == active,
        _ => false,
    }
}

/// Smoothly scrolls to the anchor's target; unknown ids do nothing.
pub fn scroll_to_anchor(href: &str) {
    let Some(id) = anchor_id(href) else {
        return;
    };
    match dom::element_offset_top(&id) {
        Some(offset_top) => dom::smooth_scroll_to(scroll_target(offset_top)),
        None => tracing::debug!("nav: no scroll target for #{id}"),
    }
}

fn refresh_scroll_state(mut ui: UiState) {
    let y = dom::scroll_y();
    ui.set_scrolled(is_scrolled(y));
    let sections = dom::section_bounds();
    ui.set_active_section(current_section(&sections, y).map(str::to_string));
}

#[cfg(target_arch = "wasm32")]
struct ScrollListener {
    closure: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

/// Keeps `scrolled` and `active_section` in step with the window scroll
/// position, throttled.
pub fn use_scroll_tracking(ui: UiState) {
    #[cfg(target_arch = "wasm32")]
    {
        let mut listener = use_signal(|| None::<ScrollListener>);

        use_effect(move || {
            if listener.read().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            tracing::debug!("nav: attach scroll listener");
            refresh_scroll_state(ui);

            let throttle = Rc::new(RefCell::new(Throttle::new(SCROLL_THROTTLE_MS)));
            let closure = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let decision = throttle.borrow_mut().call(crate::timing::now_ms());
                match decision {
                    ThrottleDecision::Run => refresh_scroll_state(ui),
                    ThrottleDecision::Defer(delay) => {
                        let throttle = throttle.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            crate::timing::sleep_ms(delay.ceil() as u32).await;
                            throttle.borrow_mut().flush(crate::timing::now_ms());
                            refresh_scroll_state(ui);
                        });
                    }
                    ThrottleDecision::Drop => {}
                }
            }) as Box<dyn FnMut(_)>));

            let _ = window.add_event_listener_with_callback(
                "scroll",
                closure.as_ref().as_ref().unchecked_ref(),
            );
            listener.set(Some(ScrollListener { closure }));
        });

        use_drop(move || {
            if let Some(listener) = listener.read().as_ref() {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        listener.closure.as_ref().as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        refresh_scroll_state(ui);
    }
}

/// Same-page link that scrolls with a header offset instead of jumping.
#[component]
pub fn AnchorLink(href: String, class: Option<String>, children: Element) -> Element {
    let mut ui = use_ui_state();
    let class = class.unwrap_or_default();
    let target = href.clone();
    rsx! {
        a {
            href: "{href}",
            class: "{class}",
            onclick: move |event| {
                event.prevent_default();
                ui.close_menu();
                scroll_to_anchor(&target);
            },
            {children}
        }
    }
}

#[component]
pub fn Navbar(brand: String) -> Element {
    let mut ui = use_ui_state();
    use_scroll_tracking(ui);

    let scrolled = (ui.scrolled)();
    let menu_open = (ui.menu_open)();
    let theme = (ui.theme)();
    let active_section = (ui.active_section)();

    let navbar_class = if scrolled { "navbar scrolled" } else { "navbar" };
    let links_class = if menu_open { "nav-links active" } else { "nav-links" };
    let hamburger_class = if menu_open { "hamburger active" } else { "hamburger" };

    rsx! {
        nav {
            class: "{navbar_class}",
            // Clicks inside the bar never count as "outside".
            onclick: move |event| event.stop_propagation(),
            div { class: "nav-container",
                AnchorLink { href: "#home".to_string(), class: Some("nav-logo".to_string()), "{brand}" }
                ul { class: "{links_class}",
                    for (href, label) in NAV_LINKS.iter().copied() {
                        li { key: "{href}",
                            AnchorLink {
                                href: href.to_string(),
                                class: Some(if link_is_active(href, active_section.as_deref()) {
                                    "nav-link active".to_string()
                                } else {
                                    "nav-link".to_string()
                                }),
                                "{label}"
                            }
                        }
                    }
                }
                div { class: "nav-actions",
                    button {
                        id: "theme-toggle",
                        r#type: "button",
                        class: "theme-toggle",
                        aria_label: "Toggle theme",
                        onclick: move |_| ui.toggle_theme(),
                        i { class: "{theme.icon_class()}" }
                    }
                    button {
                        id: "hamburger",
                        r#type: "button",
                        class: "{hamburger_class}",
                        aria_label: "Toggle navigation menu",
                        aria_expanded: "{menu_open}",
                        onclick: move |_| ui.toggle_menu(),
                        span { class: "bar" }
                        span { class: "bar" }
                        span { class: "bar" }
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

    fn section(id: &str, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            top,
            height,
        }
    }

    #[test]
    fn scrolled_state_flips_at_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(99.9));
        assert!(is_scrolled(100.0));
        assert!(is_scrolled(2_400.0));
    }

    #[test]
    fn current_section_uses_margin_adjusted_top() {
        let sections = vec![section("home", 0.0, 800.0), section("about", 800.0, 600.0)];
        assert_eq!(current_section(&sections, 650.0), Some("home"));
        assert_eq!(current_section(&sections, 700.0), Some("about"));
        assert_eq!(current_section(&sections, 1_299.0), Some("about"));
    }

    #[test]
    fn no_section_matches_past_the_last_one() {
        let sections = vec![section("home", 0.0, 500.0)];
        assert_eq!(current_section(&sections, 450.0), None);
    }

    #[test]
    fn overlapping_sections_resolve_to_last_match() {
        let sections = vec![
            section("outer", 0.0, 2_000.0),
            section("inner", 400.0, 300.0),
        ];
        assert_eq!(current_section(&sections, 500.0), Some("inner"));
        assert_eq!(current_section(&sections, 900.0), Some("outer"));
    }

    #[test]
    fn anchor_id_requires_same_page_fragment() {
        assert_eq!(anchor_id("#about").as_deref(), Some("about"));
        assert_eq!(anchor_id("#caf%C3%A9").as_deref(), Some("café"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/about"), None);
        assert_eq!(anchor_id("https://example.com/#about"), None);
    }

    #[test]
    fn scroll_target_subtracts_header_height() {
        assert_eq!(scroll_target(880.0), 800.0);
        assert_eq!(scroll_target(30.0), 0.0);
    }

    #[test]
    fn only_matching_link_is_active() {
        assert!(link_is_active("#projects", Some("projects")));
        assert!(!link_is_active("#about", Some("projects")));
        assert!(!link_is_active("#about", None));
    }
}
