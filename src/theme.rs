use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn flipped(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn attribute(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "sun",
            Theme::Light => "moon",
        }
    }
}

pub fn load_theme() -> Theme {
    LocalStorage::get(THEME_KEY).unwrap_or_default()
}

fn save_theme(theme: Theme) {
    let _ = LocalStorage::set(THEME_KEY, theme);
}

pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let _ = root.set_attribute("data-theme", theme.attribute());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

pub fn toggle_theme(mut theme: Signal<Theme>) {
    let next = theme().flipped();
    theme.set(next);
    save_theme(next);
    tracing::debug!("theme: switched to {}", next.attribute());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn flipping_twice_returns_to_start() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.flipped().flipped(), theme);
        }
    }

    #[test]
    fn attribute_strings_match_storage_values() {
        assert_eq!(Theme::Dark.attribute(), "dark");
        assert_eq!(Theme::Light.attribute(), "light");
    }

    #[test]
    fn stored_form_is_the_lowercase_name() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn theme_round_trips_through_its_stored_form() {
        for theme in [Theme::Dark, Theme::Light] {
            let stored = serde_json::to_string(&theme).unwrap();
            let loaded: Theme = serde_json::from_str(&stored).unwrap();
            assert_eq!(loaded, theme);
        }
    }

    #[test]
    fn unknown_stored_strings_fall_back_to_dark() {
        let parsed: Result<Theme, _> = serde_json::from_str("\"banana\"");
        assert!(parsed.is_err());
        assert_eq!(parsed.unwrap_or_default(), Theme::Dark);
    }

    #[test]
    fn toggle_icon_points_at_the_other_mode() {
        assert_eq!(Theme::Dark.toggle_icon(), "sun");
        assert_eq!(Theme::Light.toggle_icon(), "moon");
    }
}
