use egui::{Align, Layout, RichText, Ui};

/// Page title with a primary action on the right.
///
/// Returns `true` when the action button was clicked.
pub fn page_header(ui: &mut Ui, title: &str, action: &str) -> bool {
    ui.horizontal(|ui| {
        ui.heading(title);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.button(RichText::new(format!("➕ {action}")).strong())
                .clicked()
        })
        .inner
    })
    .inner
}
