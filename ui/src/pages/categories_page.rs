//! Categories listing page.
//!
//! Draws exactly one of the page's display modes: a loading placeholder, an
//! error notice, or the table with an optional feedback snackbar on top.

use egui::{Response, Ui};
use tally_business::{DisplayMode, Feedback, I18n, Severity, Translate, column_registry};

use crate::state::State;
use crate::widgets;

const TABLE_ID: &str = "categories_table";
const ERROR_NOTICE_ID: &str = "categories_error";
const FEEDBACK_ID: &str = "categories_feedback";

enum Body {
    Loading,
    Error(Option<(String, Severity)>),
    Table(Option<Feedback>),
}

pub fn categories_page(state: &mut State, ui: &mut Ui) -> Response {
    let State {
        i18n,
        time,
        categories,
        ..
    } = state;
    let i18n: &I18n = i18n;
    let spec = *categories.spec();
    let now = time.now();

    ui.vertical(|ui| {
        let create = widgets::page_header(
            ui,
            i18n.translate(spec.title_key),
            i18n.translate(spec.create_key),
        );
        if create {
            categories.create_clicked(i18n, now);
        }
        ui.add_space(8.0);

        let body = match categories.display_mode() {
            DisplayMode::Loading => Body::Loading,
            DisplayMode::Error {
                message_key,
                severity,
                visible,
                ..
            } => Body::Error(visible.then(|| (i18n.translate(message_key).to_owned(), severity))),
            DisplayMode::Normal { feedback } => Body::Table(feedback.cloned()),
        };

        match body {
            Body::Loading => {
                widgets::loader(ui, i18n);
            }
            Body::Error(notice) => {
                if let Some((message, severity)) = notice {
                    if widgets::snackbar(ui, ERROR_NOTICE_ID, &message, severity, i18n) {
                        categories.dismiss_error();
                    }
                }
            }
            Body::Table(feedback) => {
                let clicked =
                    widgets::listing_table(ui, TABLE_ID, categories, column_registry(), i18n);
                if let Some((action, row)) = clicked {
                    categories.trigger_at(action, row, i18n, now);
                }

                if let Some(feedback) = feedback {
                    let closed = widgets::snackbar(
                        ui,
                        FEEDBACK_ID,
                        &feedback.message,
                        feedback.severity,
                        i18n,
                    );
                    if closed {
                        categories.dismiss_feedback();
                    }
                }
            }
        }
    })
    .response
}
