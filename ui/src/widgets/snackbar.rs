//! Transient message pinned to the bottom of the window.

use egui::{Align2, Frame, Id, Margin, Order, RichText, Stroke, Ui, vec2};
use tally_business::{Severity, Translate};

use crate::utils::colors::severity_color;

/// Shows `message` in a bottom-centered snackbar.
///
/// Returns `true` when the close button was clicked.
pub fn snackbar(ui: &Ui, id: &str, message: &str, severity: Severity, tr: &dyn Translate) -> bool {
    let color = severity_color(severity);
    let mut closed = false;

    egui::Area::new(Id::new(id))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_BOTTOM, vec2(0.0, -16.0))
        .show(ui.ctx(), |ui| {
            Frame::popup(ui.style())
                .stroke(Stroke::new(1.0, color))
                .inner_margin(Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(message).color(color));
                        ui.add_space(8.0);
                        closed = ui.small_button(tr.translate("CLOSE")).clicked();
                    });
                });
        });

    closed
}

#[cfg(test)]
mod snackbar_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use tally_business::{I18n, Language, Severity};

    #[test]
    fn test_snackbar_shows_message_and_close() {
        let mut harness = Harness::new_ui_state(
            |ui, closed: &mut bool| {
                let tr = I18n::new(Language::English);
                if super::snackbar(ui, "test_snackbar", "Saved", Severity::Info, &tr) {
                    *closed = true;
                }
            },
            false,
        );

        assert!(harness.query_by_label("Saved").is_some());
        harness.get_by_label("Close").click();
        harness.step();
        assert!(*harness.state());
    }
}
