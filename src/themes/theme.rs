//! Palettes for the calculator screen

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Palette selection, as stored in the settings file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Classic,
}

/// Colors by role. Widgets never pick raw colors themselves.
#[derive(Clone, Debug)]
pub struct Theme {
    pub background: Color,
    /// Status bar and text boxes
    pub surface: Color,
    /// Help overlay
    pub surface_elevated: Color,

    pub text_primary: Color,
    /// Labels
    pub text_secondary: Color,
    /// Hints, the clock, stale values
    pub text_muted: Color,

    /// Focus marker and the share count
    pub accent: Color,
    /// Unfocused slider tracks
    pub accent_secondary: Color,

    /// Reward zone and reward amount
    pub success: Color,
    /// Waiting-for-input indicator
    pub warning: Color,
    /// Risk zone and risk amount
    pub error: Color,
    /// Zero line and the ratio
    pub info: Color,
    /// Dots at the far ends of the bars
    pub marker: Color,

    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Slate background with peach and pink accents
    pub fn dark() -> Self {
        let slate = Color::Rgb(0x3a, 0x41, 0x4b);
        let peach = Color::Rgb(0xf4, 0xb5, 0x8a);
        let off_white = Color::Rgb(0xf5, 0xf5, 0xf7);
        Self {
            background: Color::Rgb(0x1f, 0x24, 0x2b),
            surface: Color::Rgb(0x2a, 0x30, 0x38),
            surface_elevated: slate,
            text_primary: off_white,
            text_secondary: Color::Rgb(0xb4, 0xb4, 0xb9),
            text_muted: Color::Rgb(0x88, 0x88, 0x88),
            accent: peach,
            accent_secondary: Color::Rgb(0xf5, 0xa9, 0xb8),
            success: Color::Rgb(0x8b, 0xd5, 0xa2),
            warning: Color::Rgb(0xf9, 0xe2, 0xaf),
            error: Color::Rgb(0xff, 0x6b, 0x6b),
            info: Color::Rgb(0x89, 0xb4, 0xfa),
            marker: off_white,
            border: slate,
            border_focused: peach,
        }
    }

    /// Silver desktop look with a navy accent and black markers
    pub fn classic() -> Self {
        let navy = Color::Rgb(0x00, 0x00, 0x80);
        let grey = Color::Rgb(0x80, 0x80, 0x80);
        Self {
            background: Color::Rgb(0xc0, 0xc0, 0xc0),
            surface: Color::Rgb(0xd4, 0xd0, 0xc8),
            surface_elevated: Color::Rgb(0xff, 0xff, 0xe1),
            text_primary: Color::Black,
            text_secondary: Color::Rgb(0x40, 0x40, 0x40),
            text_muted: grey,
            accent: navy,
            accent_secondary: Color::Rgb(0x10, 0x84, 0xd0),
            success: Color::Rgb(0x00, 0x80, 0x00),
            warning: Color::Rgb(0x80, 0x80, 0x00),
            error: Color::Rgb(0xc0, 0x00, 0x00),
            info: Color::Rgb(0x00, 0x00, 0xff),
            marker: Color::Black,
            border: grey,
            border_focused: navy,
        }
    }

    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Classic => Self::classic(),
        }
    }

    /// Status dot for ready/not-ready indicators
    pub fn status_dot(&self, active: bool) -> &'static str {
        if active {
            "●"
        } else {
            "○"
        }
    }
}
