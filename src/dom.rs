//! Thin wrappers over the browser APIs the controllers touch. Every function
//! here is a silent no-op when the window, document or target is missing.

#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::navigation::SectionBounds;
use crate::state::{BodyClasses, UiState};

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

pub fn apply_body_classes(classes: BodyClasses) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = document().and_then(|document| document.body()) else {
            return;
        };
        let list = body.class_list();
        for (name, enabled) in classes.entries() {
            let _ = list.toggle_with_force(name, enabled);
        }
        let _ = list.add_1("loaded");
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = classes;
    }
}

pub fn scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Offset of the element from the top of the document, if it exists.
pub fn element_offset_top(id: &str) -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        let element = document()?.get_element_by_id(id)?;
        let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
        Some(f64::from(element.offset_top()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}

pub fn smooth_scroll_to(top: f64) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = top;
    }
}

/// Every `section[id]` in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = document() else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all("section[id]") else {
            return Vec::new();
        };
        let mut sections = Vec::with_capacity(nodes.length() as usize);
        for index in 0..nodes.length() {
            let Some(node) = nodes.item(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() else {
                continue;
            };
            sections.push(SectionBounds {
                id: element.id(),
                top: f64::from(element.offset_top()),
                height: f64::from(element.client_height()),
            });
        }
        sections
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Vec::new()
    }
}

#[cfg(target_arch = "wasm32")]
struct GlobalListeners {
    keydown: Rc<Closure<dyn FnMut(web_sys::Event)>>,
    mousedown: Rc<Closure<dyn FnMut(web_sys::Event)>>,
    error: Rc<Closure<dyn FnMut(web_sys::Event)>>,
    rejection: Rc<Closure<dyn FnMut(web_sys::Event)>>,
}

/// Document and window listeners that belong to no single controller:
/// Escape closes the menu, Tab/mousedown flip keyboard-navigation styling,
/// and uncaught errors are logged.
pub fn use_global_listeners(ui: UiState) {
    #[cfg(target_arch = "wasm32")]
    {
        let mut listeners = use_signal(|| None::<GlobalListeners>);

        use_effect(move || {
            if listeners.read().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };
            let Some(document) = window.document() else {
                return;
            };
            tracing::debug!("page: attach global listeners");

            let mut keydown_ui = ui;
            let keydown = Rc::new(Closure::wrap(Box::new(move |event: web_sys::Event| {
                let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                    return;
                };
                match event.key().as_str() {
                    "Escape" => keydown_ui.close_menu(),
                    "Tab" => keydown_ui.set_keyboard_navigation(true),
                    _ => {}
                }
            }) as Box<dyn FnMut(_)>));

            let mut mousedown_ui = ui;
            let mousedown = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
                mousedown_ui.set_keyboard_navigation(false);
            }) as Box<dyn FnMut(_)>));

            let error = Rc::new(Closure::wrap(Box::new(move |event: web_sys::Event| {
                match event.dyn_ref::<web_sys::ErrorEvent>() {
                    Some(event) => tracing::error!(
                        "uncaught error: {} ({}:{})",
                        event.message(),
                        event.filename(),
                        event.lineno()
                    ),
                    None => tracing::error!("uncaught error event"),
                }
            }) as Box<dyn FnMut(_)>));

            let rejection = Rc::new(Closure::wrap(Box::new(move |event: web_sys::Event| {
                let reason = event
                    .dyn_ref::<web_sys::PromiseRejectionEvent>()
                    .map(|event| event.reason())
                    .unwrap_or(wasm_bindgen::JsValue::UNDEFINED);
                tracing::error!("unhandled promise rejection: {reason:?}");
            }) as Box<dyn FnMut(_)>));

            let _ = document.add_event_listener_with_callback(
                "keydown",
                keydown.as_ref().as_ref().unchecked_ref(),
            );
            let _ = document.add_event_listener_with_callback(
                "mousedown",
                mousedown.as_ref().as_ref().unchecked_ref(),
            );
            let _ = window
                .add_event_listener_with_callback("error", error.as_ref().as_ref().unchecked_ref());
            let _ = window.add_event_listener_with_callback(
                "unhandledrejection",
                rejection.as_ref().as_ref().unchecked_ref(),
            );

            listeners.set(Some(GlobalListeners {
                keydown,
                mousedown,
                error,
                rejection,
            }));
        });

        use_drop(move || {
            let binding = listeners.read();
            let Some(listeners) = binding.as_ref() else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some(document) = window.document() {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    listeners.keydown.as_ref().as_ref().unchecked_ref(),
                );
                let _ = document.remove_event_listener_with_callback(
                    "mousedown",
                    listeners.mousedown.as_ref().as_ref().unchecked_ref(),
                );
            }
            let _ = window.remove_event_listener_with_callback(
                "error",
                listeners.error.as_ref().as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                "unhandledrejection",
                listeners.rejection.as_ref().as_ref().unchecked_ref(),
            );
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ui;
    }
}
