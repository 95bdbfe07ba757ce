//! Theme management module for the application.
//!
//! Provides a context-based theme system with light and dark themes.
//! Theme preference is persisted in localStorage.

mod theme_select;

pub use theme_select::ThemeSelect;

use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme` and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the display name for the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Parse theme from string.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }
}

const THEME_STORAGE_KEY: &str = "atmc-admin-theme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Тема применяется атрибутом `data-theme` на body
fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_light() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("forest"), Theme::Light);
        assert_eq!(Theme::all().map(|t| Theme::parse(t.as_str())), Theme::all());
    }
}
