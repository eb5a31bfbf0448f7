use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use dioxus::web::WebEventExt;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Section headers and cards: 10% visible and 50px clear of the bottom edge.
pub const SECTION_REVEAL: RevealOptions = RevealOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

pub const CARD_REVEAL: RevealOptions = RevealOptions {
    threshold: 0.1,
    root_margin: "0px",
};

pub const HALF_VISIBLE_REVEAL: RevealOptions = RevealOptions {
    threshold: 0.5,
    root_margin: "0px",
};

pub const TITLE_STAGGER_MS: u32 = 120;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealVariant {
    Slide,
    Fade,
}

impl RevealVariant {
    pub fn class(self, revealed: bool) -> &'static str {
        match (self, revealed) {
            (RevealVariant::Slide, false) => "slide-init",
            (RevealVariant::Slide, true) => "slide-in",
            (RevealVariant::Fade, false) => "",
            (RevealVariant::Fade, true) => "fade-in-up",
        }
    }
}

pub fn title_reveal_delay(index: usize) -> String {
    format!("--reveal-delay: {}ms", index as u32 * TITLE_STAGGER_MS)
}

#[cfg(target_arch = "wasm32")]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _closure: Rc<Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

/// One-way "visible at least once" flag for a single element.
#[derive(Clone, Copy)]
pub struct RevealOnce {
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    options: RevealOptions,
    revealed: Signal<bool>,
    #[cfg(target_arch = "wasm32")]
    observer: Signal<Option<ObserverHandle>>,
}

impl RevealOnce {
    pub fn revealed(&self) -> bool {
        (self.revealed)()
    }

    /// Starts watching the mounted element. Intended for `onmounted`.
    pub fn observe(&self, event: MountedEvent) {
        #[cfg(target_arch = "wasm32")]
        {
            let element = event.data.as_ref().as_web_event();
            self.observe_element(element);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = event;
            let mut revealed = self.revealed;
            revealed.set(true);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn observe_element(&self, element: web_sys::Element) {
        let mut slot = self.observer;
        if *self.revealed.peek() || slot.peek().is_some() {
            return;
        }
        let mut revealed = self.revealed;
        let closure = Rc::new(Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        observer.unobserve(&entry.target());
                        if !*revealed.peek() {
                            revealed.set(true);
                        }
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.options.threshold));
        init.set_root_margin(self.options.root_margin);
        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            closure.as_ref().as_ref().unchecked_ref(),
            &init,
        ) else {
            tracing::warn!("reveal: observer unavailable, revealing immediately");
            revealed.set(true);
            return;
        };
        observer.observe(&element);
        slot.set(Some(ObserverHandle {
            observer,
            _closure: closure,
        }));
    }
}

pub fn use_reveal_once(options: RevealOptions) -> RevealOnce {
    let revealed = use_signal(|| false);
    #[cfg(target_arch = "wasm32")]
    {
        let observer = use_signal(|| None::<ObserverHandle>);
        use_drop(move || {
            if let Some(handle) = observer.peek().as_ref() {
                handle.observer.disconnect();
            }
        });
        RevealOnce {
            options,
            revealed,
            observer,
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        RevealOnce { options, revealed }
    }
}

/// Block wrapper that fades or slides in the first time it scrolls into
/// view and stays revealed afterwards.
#[component]
pub fn Reveal(
    class: String,
    variant: Option<RevealVariant>,
    options: Option<RevealOptions>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(RevealVariant::Fade);
    let reveal = use_reveal_once(options.unwrap_or(SECTION_REVEAL));
    let state_class = variant.class(reveal.revealed());
    rsx! {
        div {
            class: "{class} {state_class}",
            onmounted: move |event| reveal.observe(event),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn slide_variant_swaps_initial_class() {
        assert_eq!(RevealVariant::Slide.class(false), "slide-init");
        assert_eq!(RevealVariant::Slide.class(true), "slide-in");
    }

    #[test]
    fn fade_variant_only_adds_terminal_class() {
        assert_eq!(RevealVariant::Fade.class(false), "");
        assert_eq!(RevealVariant::Fade.class(true), "fade-in-up");
    }

    #[test]
    fn title_delay_is_staggered_by_index() {
        assert_eq!(title_reveal_delay(0), "--reveal-delay: 0ms");
        assert_eq!(title_reveal_delay(3), "--reveal-delay: 360ms");
    }
}
