//! Draws a rendered [`Cell`].

use egui::{CornerRadius, Frame, Margin, Response, RichText, Stroke, Ui};
use tally_business::{Cell, Chip, Tone, Translate};

use crate::utils::colors::tone_color;

/// Small rounded chip, outlined in its tone color.
pub fn chip(ui: &mut Ui, label: &str, tone: Tone) -> Response {
    let color = tone_color(tone);
    Frame::NONE
        .fill(color.gamma_multiply(0.12))
        .stroke(Stroke::new(1.0, color))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| ui.label(RichText::new(label).small().color(color)))
        .inner
}

pub fn cell_view(ui: &mut Ui, cell: &Cell, tr: &dyn Translate) {
    match cell {
        Cell::Text(text) => {
            ui.label(text);
        }
        Cell::Number(number) => {
            ui.label(RichText::new(number.to_string()).monospace());
        }
        Cell::Chip(Chip { label, tone }) => {
            chip(ui, label, *tone);
        }
        Cell::Chips(chips) => {
            ui.horizontal_wrapped(|ui| {
                for Chip { label, tone } in chips {
                    chip(ui, label, *tone);
                }
            });
        }
        Cell::NotFound => {
            chip(ui, tr.translate("NOT_FOUND"), Tone::Error);
        }
        Cell::Empty => {}
    }
}
