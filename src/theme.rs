use serde::{Deserialize, Serialize};

/// Colour scheme, persisted in local storage by the header toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class on the root element; tailwind keys `dark:` variants off it.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::default();
        assert!(theme.is_dark());
        assert_eq!(theme.toggled(), Theme::Light);
        assert_eq!(theme.toggled().toggled(), theme);
    }

    #[test]
    fn test_labels_describe_next_state() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
    }

    #[test]
    fn test_stored_form() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"Light\"");
        assert_eq!(serde_json::from_str::<Theme>("\"Dark\"").unwrap(), Theme::Dark);
    }
}
