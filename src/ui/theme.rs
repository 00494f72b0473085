//! Color palette shared by every pane

use crate::playback::PlaybackMode;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub pointer: Color,   // Yellow for pointer markers
    pub kind: Color,      // Cyan for step kinds
    pub highlight: Color, // Pink for highlighted nodes and cells
}

impl Theme {
    /// Badge color for a playback mode
    pub fn mode(&self, mode: PlaybackMode) -> Color {
        match mode {
            PlaybackMode::Idle => self.success,
            PlaybackMode::Playing => self.secondary,
            PlaybackMode::Paused => self.primary,
            PlaybackMode::Finished => self.error,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    pointer: Color::Rgb(249, 226, 175),
    kind: Color::Rgb(148, 226, 213),
    highlight: Color::Rgb(245, 194, 231),
};
