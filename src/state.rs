use std::cell::RefCell;
use std::collections::HashMap;

use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

use crate::projects::Filter;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than `"light"` reads as the default dark theme.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-sun",
            Theme::Dark => "fas fa-moon",
        }
    }
}

pub trait ThemeStore {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
}

pub fn load_theme(store: &impl ThemeStore) -> Theme {
    store
        .read()
        .map(|value| Theme::parse(&value))
        .unwrap_or_default()
}

pub fn toggle_theme(current: Theme, store: &impl ThemeStore) -> Theme {
    let next = current.toggled();
    store.write(next.as_str());
    next
}

/// `localStorage`-backed preference. Host builds have no durable storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeStore;

impl ThemeStore for BrowserThemeStore {
    fn read(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            // Stored as a bare string, not JSON.
            let storage = LocalStorage::raw();
            storage.get_item(THEME_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn write(&self, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Err(err) = LocalStorage::raw().set_item(THEME_STORAGE_KEY, value) {
                tracing::warn!("theme: persist failed: {err:?}");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = value;
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    values: RefCell<HashMap<&'static str, String>>,
}

impl MemoryThemeStore {
    pub fn with_value(value: &str) -> Self {
        let store = Self::default();
        store.write(value);
        store
    }
}

impl ThemeStore for MemoryThemeStore {
    fn read(&self) -> Option<String> {
        self.values.borrow().get(THEME_STORAGE_KEY).cloned()
    }

    fn write(&self, value: &str) {
        self.values
            .borrow_mut()
            .insert(THEME_STORAGE_KEY, value.to_string());
    }
}

/// Page-wide UI flags shared by the controllers. The body classes the
/// stylesheet keys on are derived from this, never read back.
#[derive(Clone, Copy, PartialEq)]
pub struct UiState {
    pub menu_open: Signal<bool>,
    pub theme: Signal<Theme>,
    pub active_filter: Signal<Filter>,
    pub scrolled: Signal<bool>,
    pub active_section: Signal<Option<String>>,
    pub keyboard_navigation: Signal<bool>,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        let open = *self.menu_open.peek();
        self.menu_open.set(!open);
    }

    pub fn close_menu(&mut self) {
        if *self.menu_open.peek() {
            self.menu_open.set(false);
        }
    }

    pub fn toggle_theme(&mut self) {
        let next = toggle_theme(*self.theme.peek(), &BrowserThemeStore);
        tracing::debug!("theme: switched to {}", next.as_str());
        self.theme.set(next);
    }

    pub fn set_scrolled(&mut self, scrolled: bool) {
        if *self.scrolled.peek() != scrolled {
            self.scrolled.set(scrolled);
        }
    }

    pub fn set_active_section(&mut self, section: Option<String>) {
        if *self.active_section.peek() != section {
            self.active_section.set(section);
        }
    }

    pub fn set_keyboard_navigation(&mut self, active: bool) {
        if *self.keyboard_navigation.peek() != active {
            self.keyboard_navigation.set(active);
        }
    }
}

pub fn use_ui_state_provider() -> UiState {
    let menu_open = use_signal(|| false);
    let theme = use_signal(|| load_theme(&BrowserThemeStore));
    let active_filter = use_signal(Filter::default);
    let scrolled = use_signal(|| false);
    let active_section = use_signal(|| None::<String>);
    let keyboard_navigation = use_signal(|| false);
    use_context_provider(|| UiState {
        menu_open,
        theme,
        active_filter,
        scrolled,
        active_section,
        keyboard_navigation,
    })
}

pub fn use_ui_state() -> UiState {
    use_context::<UiState>()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyClasses {
    pub light: bool,
    pub menu_open: bool,
    pub keyboard_navigation: bool,
}

impl BodyClasses {
    pub fn entries(self) -> [(&'static str, bool); 3] {
        [
            ("light", self.light),
            ("menu-open", self.menu_open),
            ("keyboard-navigation", self.keyboard_navigation),
        ]
    }
}

/// Mirrors the UI state onto `<body>` and marks the page as loaded.
pub fn use_body_class_sync(ui: UiState) {
    use_effect(move || {
        let classes = BodyClasses {
            light: (ui.theme)() == Theme::Light,
            menu_open: (ui.menu_open)(),
            keyboard_navigation: (ui.keyboard_navigation)(),
        };
        crate::dom::apply_body_classes(classes);
    });
}
