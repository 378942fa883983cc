//! Listing table driven by the column registry.
//!
//! Uses a Typora-like table style with clean borders and minimal styling.
//! Headers, cells and the per-row action buttons all go through the
//! registry and the active translator; nothing here knows about a
//! particular entity.

use egui::{
    Color32, ComboBox, Frame, Grid, InnerResponse, Margin, RichText, ScrollArea, Stroke, TextEdit,
    Ui,
};
use tally_business::{
    ColumnDescriptor, ColumnFilters, ColumnRegistry, Entity, FilterSpec, ListingPage, RowAction,
    Translate,
};

use super::cell_view::cell_view;

/// Border color for Typora-like table style (subtle gray)
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background color for Typora-like table style (light gray)
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Draws the filter bar and the table for `page`.
///
/// Returns the row action clicked this frame, with the row's index into the
/// page's record snapshot.
pub fn listing_table<E: Entity>(
    ui: &mut Ui,
    id_salt: &str,
    page: &mut ListingPage<E>,
    registry: &ColumnRegistry,
    tr: &dyn Translate,
) -> Option<(RowAction, usize)> {
    let (columns, rows) = page.visible_rows(registry);

    filter_bar(ui, &columns, &mut page.filters, tr);
    ui.add_space(8.0);

    let mut clicked = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::both().id_salt(id_salt).show(ui, |ui| {
                Grid::new(id_salt)
                    .num_columns(columns.len() + 1)
                    .striped(true)
                    .spacing([0.0, 0.0])
                    .show(ui, |ui| {
                        for column in &columns {
                            header_cell(ui, |ui| {
                                ui.set_min_width(column.width);
                                ui.strong(tr.translate(column.title_key));
                            });
                        }
                        header_cell(ui, |ui| {
                            ui.strong(tr.translate("ACTIONS"));
                        });
                        ui.end_row();

                        if rows.is_empty() {
                            data_cell(ui, |ui| {
                                ui.weak(tr.translate("NO_RECORDS"));
                            });
                            ui.end_row();
                        }

                        for (index, record) in &rows {
                            for column in &columns {
                                let cell = column.render(record, tr);
                                data_cell(ui, |ui| cell_view(ui, &cell, tr));
                            }
                            data_cell(ui, |ui| {
                                ui.horizontal(|ui| {
                                    for action in RowAction::ALL {
                                        if ui.small_button(tr.translate(action.label_key())).clicked()
                                        {
                                            clicked = Some((action, *index));
                                        }
                                    }
                                });
                            });
                            ui.end_row();
                        }
                    });
            });
        });

    clicked
}

fn filter_bar(
    ui: &mut Ui,
    columns: &[&ColumnDescriptor],
    filters: &mut ColumnFilters,
    tr: &dyn Translate,
) {
    ui.horizontal_wrapped(|ui| {
        for column in columns {
            let Some(spec) = &column.filter else {
                continue;
            };
            let title = tr.translate(column.title_key);
            if spec.filter_type.has_options() {
                choice_filter(ui, title, spec, filters, tr);
            } else {
                search_filter(ui, title, column.width, spec, filters, tr);
            }
        }
    });
}

fn search_filter(
    ui: &mut Ui,
    title: &str,
    width: f32,
    spec: &FilterSpec,
    filters: &mut ColumnFilters,
    tr: &dyn Translate,
) {
    let mut text = filters.search_text(spec.filter_id).to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut text)
            .id_salt(spec.filter_id.as_str())
            .hint_text(format!("{} {title}", tr.translate("SEARCH")))
            .desired_width(width),
    );
    if response.changed() {
        filters.set_search(spec.filter_id, text);
    }
}

fn choice_filter(
    ui: &mut Ui,
    title: &str,
    spec: &FilterSpec,
    filters: &mut ColumnFilters,
    tr: &dyn Translate,
) {
    let selected = filters.selected(spec.filter_id).to_vec();
    let summary = if selected.is_empty() {
        title.to_owned()
    } else {
        selected
            .iter()
            .filter_map(|i| spec.options.get(*i))
            .map(|option| tr.translate(option.label_key))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut picked = None;
    ComboBox::from_id_salt(spec.filter_id.as_str())
        .selected_text(RichText::new(summary))
        .show_ui(ui, |ui| {
            for (i, option) in spec.options.iter().enumerate() {
                if ui
                    .selectable_label(selected.contains(&i), tr.translate(option.label_key))
                    .clicked()
                {
                    picked = Some(i);
                }
            }
        });

    if let Some(option) = picked {
        filters.select(spec, option);
    }
}
