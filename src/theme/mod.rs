//! Theming system for Studymate

mod chalkboard;
mod tokyo_night;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A color theme for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Cards
    pub card_bg: Color,
    pub card_border: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub disabled: Color,
}

impl Theme {
    /// Look up a built-in theme by name (case-insensitive)
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "chalkboard" => Some(Self::chalkboard()),
            "tokyo night" | "tokyo-night" => Some(Self::tokyo_night()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::chalkboard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_chalkboard() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Chalkboard");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Theme::by_name("TOKYO NIGHT").unwrap().name, "Tokyo Night");
        assert!(Theme::by_name("solarized").is_none());
    }
}
