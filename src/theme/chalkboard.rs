//! Chalkboard theme: dark green slate with chalk accents

use ratatui::style::Color;

use super::Theme;

impl Theme {
    pub fn chalkboard() -> Self {
        Theme {
            name: "Chalkboard".to_string(),

            bg_primary: Color::Rgb(30, 42, 36),   // #1e2a24
            bg_secondary: Color::Rgb(38, 54, 46), // #26362e
            bg_tertiary: Color::Rgb(54, 74, 63),  // #364a3f

            fg_primary: Color::Rgb(226, 232, 222),   // #e2e8de
            fg_secondary: Color::Rgb(200, 210, 196), // #c8d2c4
            fg_muted: Color::Rgb(124, 143, 130),     // #7c8f82

            accent_primary: Color::Rgb(250, 214, 110),   // #fad66e
            accent_secondary: Color::Rgb(134, 196, 232), // #86c4e8

            success: Color::Rgb(152, 214, 140), // #98d68c
            warning: Color::Rgb(240, 180, 110), // #f0b46e
            error: Color::Rgb(238, 128, 128),   // #ee8080
            info: Color::Rgb(134, 196, 232),    // #86c4e8

            card_bg: Color::Rgb(44, 62, 53),      // #2c3e35
            card_border: Color::Rgb(96, 120, 106), // #60786a

            border: Color::Rgb(70, 92, 80),            // #465c50
            border_focused: Color::Rgb(250, 214, 110), // #fad66e
            selection: Color::Rgb(60, 84, 70),         // #3c5446
            disabled: Color::Rgb(84, 100, 90),         // #54645a
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chalkboard_colors_are_rgb() {
        let theme = Theme::chalkboard();
        assert!(matches!(theme.bg_primary, Color::Rgb(_, _, _)));
        assert!(matches!(theme.card_bg, Color::Rgb(_, _, _)));
    }
}
