use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::config::{use_runtime_config, RuntimeConfig};
use crate::dom::use_global_listeners;
use crate::navigation::Navbar;
use crate::notifications::{use_notifier_provider, ToastHost};
use crate::particles::ParticleBackground;
use crate::sections::{
    AboutSection, ContactSection, Footer, HeroSection, ProjectsSection, SkillsSection, OWNER_NAME,
};
use crate::state::{use_body_class_sync, use_ui_state, use_ui_state_provider};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";
const EMAILJS_SDK: &str = "https://cdn.jsdelivr.net/npm/@emailjs/browser@4/dist/email.min.js";

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let Some(config) = config_resource() else {
        return rsx! {
            document::Title { "{OWNER_NAME} | Portfolio" }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            div { class: "page loading",
                h1 { "Loading..." }
            }
        };
    };

    rsx! {
        document::Title { "{OWNER_NAME} | Portfolio" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }
        script { src: EMAILJS_SDK, defer: true }
        Shell { config }
    }
}

/// Everything that needs the loaded config: shared state, page-wide
/// listeners, the router and the toast stack.
#[component]
fn Shell(config: RuntimeConfig) -> Element {
    use_context_provider(|| config);
    let ui = use_ui_state_provider();
    use_notifier_provider();
    use_body_class_sync(ui);
    use_global_listeners(ui);

    rsx! {
        Router::<Route> {}
        ToastHost {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    let mut ui = use_ui_state();
    rsx! {
        // Any click that reaches here came from outside the navbar.
        div { class: "page", onclick: move |_| ui.close_menu(),
            ParticleBackground {}
            Navbar { brand: OWNER_NAME.to_string() }
            main {
                HeroSection {}
                AboutSection {}
                SkillsSection {}
                ProjectsSection {}
                ContactSection {}
            }
            Footer {}
        }
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    tracing::warn!("router: no page at /{path}");
    rsx! {
        document::Title { "Not Found | {OWNER_NAME}" }
        div { class: "page not-found",
            h1 { "404" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back home" }
        }
    }
}
