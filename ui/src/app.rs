use tally_business::Translate;

use crate::{pages, state::State, widgets};

pub struct TallyApp {
    state: State,
}

impl TallyApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for TallyApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.time.tick();
        let now = self.state.time.now();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong(self.state.i18n.translate("APP_TITLE"));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let State {
                        i18n,
                        language_menu,
                        ..
                    } = &mut self.state;
                    widgets::language_switcher(ui, i18n, language_menu);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            pages::categories_page(&mut self.state, ui);
        });

        // Wake up again when the visible feedback message is due to hide.
        if let Some(remaining) = self.state.categories.tick(now) {
            ctx.request_repaint_after(remaining.to_std().unwrap_or_default());
        }
    }
}

#[cfg(test)]
mod app_test {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use egui_kittest::Harness;
    use kittest::Queryable;
    use tally_business::{Language, Translate as _};

    use super::TallyApp;
    use crate::state::State;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 21, 12, 0, 0).unwrap()
    }

    fn steps(harness: &mut Harness<'_, TallyApp>, n: usize) {
        for _ in 0..n {
            harness.step();
        }
    }

    #[test]
    fn test_delete_shows_one_message_then_auto_dismisses() {
        let app = TallyApp::new(State::test(start()));
        let mut harness = Harness::new_eframe(|_| app);

        harness
            .query_all_by_label("Eliminar")
            .next()
            .expect("a delete button per row")
            .click();
        steps(&mut harness, 3);

        assert_eq!(
            harness
                .query_all_by_label("Eliminando categoría: Test")
                .count(),
            1
        );

        harness
            .state_mut()
            .state_mut()
            .time
            .advance(Duration::milliseconds(5000));
        steps(&mut harness, 2);

        assert!(
            harness
                .query_by_label("Eliminando categoría: Test")
                .is_none()
        );
        assert!(harness.state().state().categories.feedback().is_none());
    }

    #[test]
    fn test_language_switch_retranslates_page() {
        let app = TallyApp::new(State::test(start()));
        let mut harness = Harness::new_eframe(|_| app);
        assert!(harness.query_by_label("Nombre").is_some());
        assert!(harness.query_by_label("Tally").is_some());

        harness.get_by_label("🌐").click();
        steps(&mut harness, 3);
        harness.get_by_label("English").click();
        steps(&mut harness, 3);

        assert_eq!(
            harness.state().state().i18n.language(),
            Language::English
        );
        assert!(harness.query_by_label("Name").is_some());
        assert!(harness.query_by_label("Nombre").is_none());
    }
}
