//! Theming system for AlgoQuest

mod tokyo_night;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A color theme for the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
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

    // Game elements
    pub points: Color,
    pub level: Color,
    pub badge_earned: Color,
    pub badge_locked: Color,
    pub gauge: Color,

    // UI elements
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}

impl Theme {
    /// Look up a built-in theme by name (case-insensitive)
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "tokyo night" | "tokyo-night" | "dark" => Some(Theme::tokyo_night()),
            "tokyo day" | "tokyo-day" | "light" => Some(Theme::tokyo_day()),
            _ => None,
        }
    }

    /// The other built-in theme (dark <-> light)
    pub fn toggled(&self) -> Self {
        if self.name == tokyo_night::DAY_NAME { Theme::tokyo_night() } else { Theme::tokyo_day() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_tokyo_night() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Tokyo Night");
    }

    #[test]
    fn by_name_accepts_aliases() {
        assert_eq!(Theme::by_name("dark").map(|t| t.name), Some("Tokyo Night".to_string()));
        assert_eq!(Theme::by_name("Tokyo Day").map(|t| t.name), Some("Tokyo Day".to_string()));
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn toggling_twice_returns_to_start() {
        let theme = Theme::default();
        assert_eq!(theme.toggled().name, "Tokyo Day");
        assert_eq!(theme.toggled().toggled(), theme);
    }
}
