//! Theme Store
//!
//! Light/dark toggle persisted under the `"theme"` key. Defaults to the
//! system preference in the browser. The dark class on the document root is
//! applied from here so every page picks it up.

use leptos::prelude::*;

use crate::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeStore {
    theme: RwSignal<Theme>,
}

/// Get the theme store from context
pub fn use_theme() -> ThemeStore {
    expect_context::<ThemeStore>()
}

impl ThemeStore {
    /// Saved theme wins; otherwise fall back to the system preference.
    pub fn init() -> Self {
        let initial = storage::get(storage::THEME_KEY)
            .and_then(|raw| Theme::from_str(&raw))
            .unwrap_or_else(system_preference);
        apply_to_document(initial);
        Self {
            theme: RwSignal::new(initial),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().flipped();
        storage::set(storage::THEME_KEY, next.as_str());
        apply_to_document(next);
        self.theme.set(next);
    }
}

#[cfg(target_arch = "wasm32")]
fn system_preference() -> Theme {
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn system_preference() -> Theme {
    Theme::Light
}

#[cfg(target_arch = "wasm32")]
fn apply_to_document(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let class_list = root.class_list();
        let _ = match theme {
            Theme::Dark => class_list.add_1("dark"),
            Theme::Light => class_list.remove_1("dark"),
        };
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_to_document(_theme: Theme) {}
