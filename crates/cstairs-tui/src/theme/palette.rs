//! Color palette for the staircase diagram
//!
//! Level fills come from the level table; everything else is fixed here.

use cstairs_core::levels::{Level, TextTone};
use ratatui::style::Color;

// --- Canvas ---
pub const CANVAS_BG: Color = Color::Rgb(240, 248, 255); // aliceblue

// --- Text ---
pub const TEXT_DARK: Color = Color::Rgb(0, 0, 0);
pub const TEXT_LIGHT: Color = Color::Rgb(255, 255, 255);

// --- Step borders ---
pub const BORDER_IDLE: Color = Color::Rgb(128, 128, 128);
pub const BORDER_HOVER: Color = Color::Rgb(0, 0, 255);

/// Fill color for a step
pub fn level_fill(level: &Level) -> Color {
    let (r, g, b) = level.fill;
    Color::Rgb(r, g, b)
}

/// Label color contrasting with a step's fill
pub fn level_text(level: &Level) -> Color {
    match level.text_on_fill {
        TextTone::Dark => TEXT_DARK,
        TextTone::Light => TEXT_LIGHT,
    }
}
