//! Default column configuration for the admin tables.
//!
//! Sections follow the entities they describe. Every nested access goes
//! through [`Record::path`] or [`Record::relation`], so a record that lacks
//! a relation renders the not-found indicator instead of failing.

use std::sync::OnceLock;

use crate::cell::{Cell, Chip, Tone};
use crate::filter::{FilterOption, FilterSpec, FilterType, OptionValue};
use crate::format::{date_cell, status_chip, text_or_not_found};
use crate::i18n::Translate;
use crate::record::Record;
use crate::registry::{ColumnDescriptor, ColumnRegistry, DataType};

/// The shared registry, validated on first use.
pub fn column_registry() -> &'static ColumnRegistry {
    static REGISTRY: OnceLock<ColumnRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| ColumnRegistry::new(default_columns()))
}

/// Column with a search-box filter.
fn search(
    id: &str,
    title_key: &'static str,
    data_type: DataType,
    width: f32,
    filter_id: &str,
) -> ColumnDescriptor {
    ColumnDescriptor::new(id, title_key, data_type, width)
        .with_filter(FilterSpec::search(filter_id))
}

pub fn default_columns() -> Vec<ColumnDescriptor> {
    vec![
        search("name", "Name", DataType::Custom, 120.0, "name"),
        search("age", "Age", DataType::Number, 100.0, "age"),
        ColumnDescriptor::new("status", "Status", DataType::String, 150.0)
            .with_filter(FilterSpec::choice(
                "status",
                FilterType::Dropdown,
                vec![
                    FilterOption {
                        value: OptionValue::Text("active"),
                        label_key: "Active",
                    },
                    FilterOption {
                        value: OptionValue::Text("inactive"),
                        label_key: "Inactive",
                    },
                ],
            ))
            .with_render(render_status),
        search("rating", "Rating", DataType::Number, 150.0, "rating"),
        // Users
        search("user_id", "USER_ID", DataType::Number, 100.0, "user_id"),
        search("first_name", "FIRST_NAME", DataType::String, 120.0, "first_name"),
        search("middle_name", "MIDDLE_NAME", DataType::String, 120.0, "middle_name")
            .with_render(render_middle_name),
        search("first_surname", "FIRST_SURNAME", DataType::String, 120.0, "first_surname"),
        search("second_surname", "SECOND_SURNAME", DataType::String, 120.0, "second_surname")
            .with_render(render_second_surname),
        search("email", "EMAIL", DataType::String, 200.0, "email"),
        search("phone_number", "PHONE_NUMBER", DataType::String, 150.0, "phone_number")
            .with_render(render_phone_number),
        search("birthdate", "BIRTHDATE", DataType::Date, 150.0, "birthdate")
            .with_render(render_birthdate),
        search("userRoles", "USER_ROLES", DataType::Custom, 200.0, "userRoles")
            .with_render(render_user_roles),
        // User roles
        search("user.user_id", "USER_ID", DataType::Number, 60.0, "user_id")
            .with_render(render_nested_user_id),
        search("user.first_name", "FIRST_NAME", DataType::String, 120.0, "first_name")
            .with_render(render_nested_first_name),
        search("user.middle_name", "MIDDLE_NAME", DataType::String, 120.0, "middle_name")
            .with_render(render_nested_middle_name),
        search("user.first_surname", "FIRST_SURNAME", DataType::String, 120.0, "first_surname")
            .with_render(render_nested_first_surname),
        search("user.email", "EMAIL", DataType::String, 200.0, "email")
            .with_render(render_nested_email),
        search("user.created_at", "CREATED_AT", DataType::Date, 150.0, "created_at")
            .with_render(render_nested_created_at),
        search("role.role_name", "ROLE_NAME", DataType::String, 100.0, "role_name")
            .with_render(render_role_name),
        // Budgets
        search("budget_id", "ID", DataType::Number, 100.0, "budget_id"),
        search("amount", "AMOUNT", DataType::Number, 100.0, "amount"),
        search("start_date", "START_DATE", DataType::Date, 150.0, "start_date")
            .with_render(render_start_date),
        search("end_date", "END_DATE", DataType::Date, 150.0, "end_date")
            .with_render(render_end_date),
        // Transactions
        search("transaction_id", "ID", DataType::Number, 100.0, "transaction_id"),
        search("amount", "AMOUNT", DataType::Number, 100.0, "amount"),
        search("date", "DATE", DataType::Date, 150.0, "date").with_render(render_date),
        search("category.name", "CATEGORY", DataType::String, 150.0, "category_name")
            .with_render(render_category_name),
        search("subcategory.name", "SUBCATEGORY", DataType::String, 150.0, "subcategory_name")
            .with_render(render_subcategory_name),
        search("classification.name", "CLASSIFICATION", DataType::String, 150.0, "classification_name")
            .with_render(render_classification_name),
        // Shared
        search("created_at", "CREATED_AT", DataType::Date, 150.0, "created_at")
            .with_render(render_created_at),
        search("classification_id", "CLASSIFICATION_ID", DataType::Number, 100.0, "classification_id"),
        search("updated_at", "UPDATED_AT", DataType::Date, 150.0, "updated_at")
            .with_render(render_updated_at),
        // Categories
        search("category_id", "ID", DataType::Number, 100.0, "category_id"),
    ]
}

fn render_status(record: &Record, _tr: &dyn Translate) -> Cell {
    status_chip(record.text("status"))
}

fn render_middle_name(record: &Record, _tr: &dyn Translate) -> Cell {
    text_or_not_found(record.text("middle_name"))
}

fn render_second_surname(record: &Record, _tr: &dyn Translate) -> Cell {
    text_or_not_found(record.text("second_surname"))
}

fn render_phone_number(record: &Record, _tr: &dyn Translate) -> Cell {
    text_or_not_found(record.text("phone_number"))
}

fn render_birthdate(record: &Record, tr: &dyn Translate) -> Cell {
    date_cell(record.get("birthdate"), "birthdate", tr)
}

fn render_user_roles(record: &Record, tr: &dyn Translate) -> Cell {
    let Some(roles) = record.get("userRoles").and_then(|v| v.as_array()) else {
        return Cell::Empty;
    };
    let chips = roles
        .iter()
        .map(|entry| {
            let name = entry
                .get("role")
                .and_then(|role| role.get("role_name"))
                .and_then(|name| name.as_str());
            match name {
                Some(name) => Chip::new(name, Tone::Default),
                None => Chip::new(tr.translate("NOT_FOUND"), Tone::Error),
            }
        })
        .collect();
    Cell::Chips(chips)
}

fn render_nested_user_id(record: &Record, _tr: &dyn Translate) -> Cell {
    match record.path("user.user_id") {
        Some(serde_json::Value::Number(n)) => Cell::Number(n.clone()),
        _ => Cell::NotFound,
    }
}

fn render_nested_first_name(record: &Record, _tr: &dyn Translate) -> Cell {
    text_or_not_found(record.text("user.first_name"))
}

fn render_nested_middle_name(record: &Record, _tr: &dyn Translate) -> Cell {
    text_or_not_found(record.text("user.middle_name"))
}

fn render_nested_first_surname(record: &Record, _tr: &dyn Translate) -> Cell {
    text_or_not_found(record.text("user.first_surname"))
}

fn render_nested_email(record: &Record, _tr: &dyn Translate) -> Cell {
    text_or_not_found(record.text("user.email"))
}

fn render_nested_created_at(record: &Record, tr: &dyn Translate) -> Cell {
    match record.relation("user") {
        Some(user) => date_cell(user.get("created_at"), "created_at", tr),
        None => Cell::NotFound,
    }
}

fn render_role_name(record: &Record, _tr: &dyn Translate) -> Cell {
    text_or_not_found(record.text("role.role_name"))
}

fn render_start_date(record: &Record, tr: &dyn Translate) -> Cell {
    date_cell(record.get("start_date"), "start_date", tr)
}

fn render_end_date(record: &Record, tr: &dyn Translate) -> Cell {
    date_cell(record.get("end_date"), "end_date", tr)
}

fn render_date(record: &Record, tr: &dyn Translate) -> Cell {
    date_cell(record.get("date"), "date", tr)
}

fn render_category_name(record: &Record, _tr: &dyn Translate) -> Cell {
    text_or_not_found(record.text("category.name"))
}

fn render_subcategory_name(record: &Record, _tr: &dyn Translate) -> Cell {
    text_or_not_found(record.text("subcategory.name"))
}

fn render_classification_name(record: &Record, _tr: &dyn Translate) -> Cell {
    text_or_not_found(record.text("classification.name"))
}

fn render_created_at(record: &Record, tr: &dyn Translate) -> Cell {
    date_cell(record.get("created_at"), "created_at", tr)
}

fn render_updated_at(record: &Record, tr: &dyn Translate) -> Cell {
    date_cell(record.get("updated_at"), "updated_at", tr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{I18n, Language};
    use crate::registry::RegistryDefect;
    use serde_json::{Value, json};
    use ustr::Ustr;

    fn record(value: Value) -> Record {
        Record::try_from(value).unwrap()
    }

    fn english() -> I18n {
        I18n::new(Language::English)
    }

    #[test]
    fn test_amount_is_the_only_duplicate() {
        let registry = ColumnRegistry::new(default_columns());
        assert_eq!(
            registry.defects(),
            &[RegistryDefect::DuplicateId {
                id: Ustr::from("amount"),
                occurrences: 2
            }]
        );
    }

    #[test]
    fn test_shared_registry_is_built_once() {
        let first = column_registry() as *const ColumnRegistry;
        let second = column_registry() as *const ColumnRegistry;
        assert_eq!(first, second);
    }

    #[test]
    fn test_status_active_is_success_chip() {
        let cell = column_registry()
            .render("status", &record(json!({ "status": "active" })), &english())
            .unwrap();
        assert_eq!(cell, Cell::Chip(Chip::new("ACTIVE", Tone::Success)));
    }

    #[test]
    fn test_status_inactive_is_default_chip() {
        let cell = column_registry()
            .render("status", &record(json!({ "status": "inactive" })), &english())
            .unwrap();
        assert_eq!(cell, Cell::Chip(Chip::new("INACTIVE", Tone::Default)));
    }

    #[test]
    fn test_nested_columns_without_relation_render_not_found() {
        let registry = column_registry();
        let bare = record(json!({ "user_id": 1, "role_id": 2 }));
        let nulled = record(json!({ "user": null, "role": null, "category": null }));
        let nested = [
            "user.user_id",
            "user.first_name",
            "user.middle_name",
            "user.first_surname",
            "user.email",
            "user.created_at",
            "role.role_name",
            "category.name",
            "subcategory.name",
            "classification.name",
        ];
        for id in nested {
            for rec in [&bare, &nulled] {
                let cell = registry.render(id, rec, &english()).unwrap();
                assert!(cell.is_not_found(), "{id} should render not found, got {cell:?}");
            }
        }
    }

    #[test]
    fn test_nested_columns_with_relation_render_values() {
        let registry = column_registry();
        let rec = record(json!({
            "user": {
                "user_id": 38,
                "first_name": "Ana",
                "middle_name": null,
                "first_surname": "Ruiz",
                "email": "ana@example.com",
                "created_at": "2024-02-29T08:00:00.000Z"
            },
            "role": { "role_name": "admin" }
        }));
        let tr = english();
        assert_eq!(registry.render("user.user_id", &rec, &tr), Some(Cell::Number(38.into())));
        assert_eq!(registry.render("user.first_name", &rec, &tr), Some(Cell::text("Ana")));
        assert_eq!(registry.render("user.middle_name", &rec, &tr), Some(Cell::NotFound));
        assert_eq!(registry.render("user.created_at", &rec, &tr), Some(Cell::text("29-02-2024")));
        assert_eq!(registry.render("role.role_name", &rec, &tr), Some(Cell::text("admin")));
    }

    #[test]
    fn test_nested_created_at_without_date_is_not_available() {
        let rec = record(json!({ "user": { "email": "a@b.c" } }));
        assert_eq!(
            column_registry().render("user.created_at", &rec, &english()),
            Some(Cell::text("N/A"))
        );
    }

    #[test]
    fn test_optional_text_fields_render_not_found() {
        let rec = record(json!({ "first_name": "Ana", "middle_name": null }));
        let registry = column_registry();
        for id in ["middle_name", "second_surname", "phone_number"] {
            assert_eq!(registry.render(id, &rec, &english()), Some(Cell::NotFound), "{id}");
        }
    }

    #[test]
    fn test_user_roles_render_chips_and_guard_entries() {
        let rec = record(json!({
            "userRoles": [
                { "role": { "role_name": "admin" } },
                { "role": null }
            ]
        }));
        assert_eq!(
            column_registry().render("userRoles", &rec, &english()),
            Some(Cell::Chips(vec![
                Chip::new("admin", Tone::Default),
                Chip::new("Not found", Tone::Error)
            ]))
        );
        assert_eq!(
            column_registry().render("userRoles", &rec, &I18n::new(Language::Spanish)),
            Some(Cell::Chips(vec![
                Chip::new("admin", Tone::Default),
                Chip::new("No encontrado", Tone::Error)
            ]))
        );
        assert_eq!(
            column_registry().render("userRoles", &record(json!({})), &english()),
            Some(Cell::Empty)
        );
    }

    #[test]
    fn test_category_columns_render_fixture_values() {
        let rec = record(json!({
            "category_id": 71,
            "name": "Test",
            "created_at": "2024-11-21T10:12:35.081Z",
            "updated_at": "not-a-date"
        }));
        let registry = column_registry();
        let tr = english();
        let cells: Vec<_> = registry
            .columns(&["category_id", "name", "created_at", "updated_at"])
            .into_iter()
            .map(|column| column.render(&rec, &tr))
            .collect();
        assert_eq!(
            cells,
            vec![
                Cell::Number(71.into()),
                Cell::text("Test"),
                Cell::text("21-11-2024"),
                Cell::text("Invalid date"),
            ]
        );
    }

    #[test]
    fn test_every_title_key_is_translated() {
        let tr = english();
        for column in column_registry() {
            assert!(
                tr.contains(column.title_key),
                "{} has no catalog entry for {}",
                column.id,
                column.title_key
            );
        }
    }
}
