use egui::{Frame, Id, Order, Response, Ui};
use tally_business::{I18n, LanguageMenu, Translate};

/// Globe button opening a menu of the languages not currently active.
pub fn language_switcher(ui: &mut Ui, i18n: &mut I18n, menu: &mut LanguageMenu) -> Response {
    let button = ui
        .button("🌐")
        .on_hover_text(i18n.translate("CHANGE_LANGUAGE"));

    if button.clicked() {
        menu.toggle();
    }

    if menu.is_open() {
        let mut chosen = None;
        let area = egui::Area::new(Id::new("language_menu"))
            .order(Order::Foreground)
            .fixed_pos(button.rect.left_bottom())
            .show(ui.ctx(), |ui| {
                Frame::popup(ui.style()).show(ui, |ui| {
                    for language in LanguageMenu::options(i18n.language()) {
                        if ui.button(language.endonym()).clicked() {
                            chosen = Some(language);
                        }
                    }
                });
            });

        if let Some(language) = chosen {
            menu.choose(i18n, language);
        } else if !button.clicked() && area.response.clicked_elsewhere() {
            menu.close();
        }
    }

    button
}
