//! Tokyo Night palettes (dark "Night" and light "Day")

use ratatui::style::Color;

use super::Theme;

pub(super) const NIGHT_NAME: &str = "Tokyo Night";
pub(super) const DAY_NAME: &str = "Tokyo Day";

impl Theme {
    /// Dark palette
    pub fn tokyo_night() -> Self {
        Theme {
            name: NIGHT_NAME.to_string(),

            bg_primary: Color::Rgb(26, 27, 38),   // #1a1b26
            bg_secondary: Color::Rgb(36, 40, 59), // #24283b
            bg_tertiary: Color::Rgb(65, 72, 104), // #414868

            fg_primary: Color::Rgb(169, 177, 214),   // #a9b1d6
            fg_secondary: Color::Rgb(192, 202, 245), // #c0caf5
            fg_muted: Color::Rgb(86, 95, 137),       // #565f89

            accent_primary: Color::Rgb(122, 162, 247),   // #7aa2f7
            accent_secondary: Color::Rgb(187, 154, 247), // #bb9af7

            success: Color::Rgb(158, 206, 106), // #9ece6a
            warning: Color::Rgb(224, 175, 104), // #e0af68
            error: Color::Rgb(247, 118, 142),   // #f7768e
            info: Color::Rgb(125, 207, 255),    // #7dcfff

            points: Color::Rgb(224, 175, 104),       // #e0af68
            level: Color::Rgb(255, 158, 100),        // #ff9e64
            badge_earned: Color::Rgb(158, 206, 106), // #9ece6a
            badge_locked: Color::Rgb(86, 95, 137),   // #565f89
            gauge: Color::Rgb(42, 195, 222),         // #2ac3de

            border: Color::Rgb(65, 72, 104),           // #414868
            border_focused: Color::Rgb(122, 162, 247), // #7aa2f7
            selection: Color::Rgb(40, 52, 87),         // #283457
        }
    }

    /// Light palette
    pub fn tokyo_day() -> Self {
        Theme {
            name: DAY_NAME.to_string(),

            bg_primary: Color::Rgb(225, 226, 231),   // #e1e2e7
            bg_secondary: Color::Rgb(208, 213, 227), // #d0d5e3
            bg_tertiary: Color::Rgb(196, 200, 218),  // #c4c8da

            fg_primary: Color::Rgb(55, 96, 191),   // #3760bf
            fg_secondary: Color::Rgb(97, 114, 176), // #6172b0
            fg_muted: Color::Rgb(132, 140, 181),   // #848cb5

            accent_primary: Color::Rgb(46, 125, 233),   // #2e7de9
            accent_secondary: Color::Rgb(152, 84, 241), // #9854f1

            success: Color::Rgb(88, 117, 57),  // #587539
            warning: Color::Rgb(140, 108, 62), // #8c6c3e
            error: Color::Rgb(245, 42, 101),   // #f52a65
            info: Color::Rgb(0, 113, 151),     // #007197

            points: Color::Rgb(140, 108, 62),      // #8c6c3e
            level: Color::Rgb(177, 92, 0),         // #b15c00
            badge_earned: Color::Rgb(88, 117, 57), // #587539
            badge_locked: Color::Rgb(132, 140, 181), // #848cb5
            gauge: Color::Rgb(17, 140, 116),       // #118c74

            border: Color::Rgb(196, 200, 218),        // #c4c8da
            border_focused: Color::Rgb(46, 125, 233), // #2e7de9
            selection: Color::Rgb(183, 193, 227),     // #b7c1e3
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_have_their_names() {
        assert_eq!(Theme::tokyo_night().name, NIGHT_NAME);
        assert_eq!(Theme::tokyo_day().name, DAY_NAME);
    }

    #[test]
    fn palette_colors_are_rgb() {
        for theme in [Theme::tokyo_night(), Theme::tokyo_day()] {
            assert!(matches!(theme.bg_primary, Color::Rgb(_, _, _)));
            assert!(matches!(theme.gauge, Color::Rgb(_, _, _)));
        }
    }
}
