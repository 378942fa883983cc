//! Shared color constants for the UI.

use egui::Color32;

use tally_business::{Severity, Tone};

/// Forest green for success chips.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for errors and the not-found indicator.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Blue for informational messages.
pub const COLOR_BLUE: Color32 = Color32::from_rgb(13, 110, 253);

/// Gray for neutral chips.
pub const COLOR_GRAY: Color32 = Color32::from_rgb(108, 117, 125);

pub fn tone_color(tone: Tone) -> Color32 {
    match tone {
        Tone::Default => COLOR_GRAY,
        Tone::Success => COLOR_GREEN,
        Tone::Error => COLOR_RED,
    }
}

pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => COLOR_BLUE,
        Severity::Error => COLOR_RED,
    }
}
