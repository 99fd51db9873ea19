//! Terminal color themes with dark/light OS detection.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color set used by every TUI widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Border and title color
    pub primary: Color,
    /// Cursor and selection highlight color
    pub accent: Color,
    /// Confirmation message color
    pub success: Color,
    /// Error message color
    pub error: Color,
    /// Unsaved-changes indicator color
    pub warning: Color,
    /// Body text color
    pub text: Color,
    /// Help text and de-emphasized label color
    pub text_muted: Color,
    /// Screen background color
    pub background: Color,
    /// Empty peg marker color on the board
    pub peg: Color,
}

impl Theme {
    /// Resolves the theme for a configured mode.
    ///
    /// `Auto` asks the OS which appearance is active; `Dark` and `Light`
    /// force a variant regardless of the OS setting.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Detects the OS appearance and returns the matching theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Dark, unspecified, and detection failures all read best dark
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            text_muted: Color::DarkGray,
            background: Color::Black,
            peg: Color::Rgb(90, 90, 90),
        }
    }

    /// Theme for light terminal backgrounds.
    ///
    /// Accent and success shades are darkened so they stay readable on
    /// white; bright yellow in particular is unusable there.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(190, 95, 0),
            success: Color::Rgb(0, 130, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 110, 0),
            text: Color::Black,
            text_muted: Color::Gray,
            background: Color::White,
            peg: Color::Rgb(190, 190, 190),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_contrast() {
        let theme = Theme::dark();
        assert_eq!(theme.text, Color::White);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_light_theme_contrast() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        // Bright yellow would vanish on a white background
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_from_mode_forced_variants() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_from_mode_auto_resolves() {
        let theme = Theme::from_mode(ThemeMode::Auto);
        assert!(theme == Theme::dark() || theme == Theme::light());
    }

    #[test]
    fn test_semantic_colors_distinct() {
        let theme = Theme::dark();
        assert_ne!(theme.success, theme.error);
        assert_ne!(theme.text, theme.text_muted);
    }
}
