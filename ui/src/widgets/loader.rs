use egui::{Response, Ui};
use tally_business::Translate;

/// Placeholder shown while records load.
pub fn loader(ui: &mut Ui, tr: &dyn Translate) -> Response {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(tr.translate("LOADING"));
    })
    .response
}
