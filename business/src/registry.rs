//! Column registry: ordered column metadata keyed by field identifier.
//!
//! The registry is built once at startup and never mutated. Construction
//! runs a validation pass over the ids; [`ColumnRegistry::new`] logs each
//! defect and keeps going, [`ColumnRegistry::strict`] refuses to build.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;
use ustr::Ustr;

use crate::cell::Cell;
use crate::filter::FilterSpec;
use crate::i18n::Translate;
use crate::record::{Record, value_text};

/// Custom render: pure over the record, total over any record shape.
pub type RenderFn = fn(&Record, &dyn Translate) -> Cell;

/// Informs default formatting when no custom render is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    String,
    Number,
    Boolean,
    Date,
    Custom,
}

#[derive(Clone)]
pub struct ColumnDescriptor {
    pub id: Ustr,
    pub title_key: &'static str,
    pub data_type: DataType,
    pub filter: Option<FilterSpec>,
    /// Layout hint in points.
    pub width: f32,
    pub render: Option<RenderFn>,
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("title_key", &self.title_key)
            .field("data_type", &self.data_type)
            .field("filter", &self.filter)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}

impl ColumnDescriptor {
    pub fn new(id: &str, title_key: &'static str, data_type: DataType, width: f32) -> Self {
        Self {
            id: Ustr::from(id),
            title_key,
            data_type,
            filter: None,
            width,
            render: None,
        }
    }

    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_render(mut self, render: RenderFn) -> Self {
        self.render = Some(render);
        self
    }

    /// Raw value addressed by the column id.
    pub fn extract<'r>(&self, record: &'r Record) -> Option<&'r Value> {
        record.path(self.id.as_str())
    }

    /// Raw value as plain text, used by filters.
    pub fn raw_text(&self, record: &Record) -> Option<String> {
        self.extract(record).map(value_text)
    }

    /// Formats the column for `record`.
    pub fn render(&self, record: &Record, tr: &dyn Translate) -> Cell {
        match self.render {
            Some(render) => render(record, tr),
            None => self.render_default(record),
        }
    }

    fn render_default(&self, record: &Record) -> Cell {
        let Some(value) = self.extract(record) else {
            return Cell::Empty;
        };
        match (self.data_type, value) {
            (DataType::Number, Value::Number(number)) => Cell::Number(number.clone()),
            (_, Value::String(text)) => Cell::Text(text.clone()),
            (_, other) => Cell::Text(value_text(other)),
        }
    }
}

/// A configuration defect found by the validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryDefect {
    DuplicateId { id: Ustr, occurrences: usize },
}

impl fmt::Display for RegistryDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryDefect::DuplicateId { id, occurrences } => {
                write!(f, "duplicate column id `{id}` registered {occurrences} times")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("column registry has {} configuration defect(s): {}", .0.len(), join_defects(.0))]
    Invalid(Vec<RegistryDefect>),
}

fn join_defects(defects: &[RegistryDefect]) -> String {
    defects
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Scans `columns` for duplicate ids, in first-occurrence order.
pub fn validate_unique_ids(columns: &[ColumnDescriptor]) -> Vec<RegistryDefect> {
    let mut counts: HashMap<Ustr, usize> = HashMap::with_capacity(columns.len());
    let mut order = Vec::new();
    for column in columns {
        let count = counts.entry(column.id).or_insert(0);
        *count += 1;
        if *count == 2 {
            order.push(column.id);
        }
    }
    order
        .into_iter()
        .map(|id| RegistryDefect::DuplicateId {
            id,
            occurrences: counts[&id],
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct ColumnRegistry {
    columns: Vec<ColumnDescriptor>,
    /// Index of the last registered column for each id.
    index: HashMap<Ustr, usize>,
    defects: Vec<RegistryDefect>,
}

impl ColumnRegistry {
    /// Builds the registry, logging every configuration defect as a warning.
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        let defects = validate_unique_ids(&columns);
        for defect in &defects {
            log::warn!("Column registry: {defect}");
        }
        Self::assemble(columns, defects)
    }

    /// Builds the registry, failing on any configuration defect.
    pub fn strict(columns: Vec<ColumnDescriptor>) -> Result<Self, RegistryError> {
        let defects = validate_unique_ids(&columns);
        if !defects.is_empty() {
            return Err(RegistryError::Invalid(defects));
        }
        Ok(Self::assemble(columns, defects))
    }

    fn assemble(columns: Vec<ColumnDescriptor>, defects: Vec<RegistryDefect>) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, column)| (column.id, i))
            .collect();
        Self {
            columns,
            index,
            defects,
        }
    }

    /// Looks up a column; for a duplicated id the last registration wins.
    pub fn get(&self, id: &str) -> Option<&ColumnDescriptor> {
        let id = Ustr::from_existing(id)?;
        self.index.get(&id).map(|&i| &self.columns[i])
    }

    /// Resolves a caller-supplied order of ids, skipping unknown ones.
    pub fn columns<'a>(&'a self, order: &[&str]) -> Vec<&'a ColumnDescriptor> {
        order
            .iter()
            .filter_map(|id| {
                let column = self.get(id);
                if column.is_none() {
                    log::warn!("Column registry: unknown column id `{id}` requested");
                }
                column
            })
            .collect()
    }

    /// Renders one cell; `None` when the id is not registered.
    pub fn render(&self, id: &str, record: &Record, tr: &dyn Translate) -> Option<Cell> {
        self.get(id).map(|column| column.render(record, tr))
    }

    pub fn defects(&self) -> &[RegistryDefect] {
        &self.defects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnDescriptor> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<'a> IntoIterator for &'a ColumnRegistry {
    type Item = &'a ColumnDescriptor;
    type IntoIter = std::slice::Iter<'a, ColumnDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;
    use serde_json::json;

    fn record(value: Value) -> Record {
        Record::try_from(value).unwrap()
    }

    fn upper_name(record: &Record, _tr: &dyn Translate) -> Cell {
        record
            .text("name")
            .map_or(Cell::Empty, |name| Cell::text(name.to_uppercase()))
    }

    #[test]
    fn test_unique_ids_have_no_defects() {
        let registry = ColumnRegistry::new(vec![
            ColumnDescriptor::new("a", "A", DataType::String, 10.0),
            ColumnDescriptor::new("b", "B", DataType::String, 10.0),
        ]);
        assert!(registry.defects().is_empty());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_are_flagged_but_usable() {
        let registry = ColumnRegistry::new(vec![
            ColumnDescriptor::new("amount", "FIRST", DataType::Number, 10.0),
            ColumnDescriptor::new("other", "OTHER", DataType::Number, 10.0),
            ColumnDescriptor::new("amount", "SECOND", DataType::Number, 10.0),
            ColumnDescriptor::new("amount", "THIRD", DataType::Number, 10.0),
        ]);
        assert_eq!(
            registry.defects(),
            &[RegistryDefect::DuplicateId {
                id: Ustr::from("amount"),
                occurrences: 3
            }]
        );
        assert_eq!(registry.get("amount").map(|c| c.title_key), Some("THIRD"));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_strict_rejects_duplicates() {
        let err = ColumnRegistry::strict(vec![
            ColumnDescriptor::new("x", "X", DataType::String, 10.0),
            ColumnDescriptor::new("x", "X", DataType::String, 10.0),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate column id `x`"));
    }

    #[test]
    fn test_columns_follow_requested_order_and_skip_unknown() {
        let registry = ColumnRegistry::new(vec![
            ColumnDescriptor::new("a", "A", DataType::String, 10.0),
            ColumnDescriptor::new("b", "B", DataType::String, 10.0),
            ColumnDescriptor::new("c", "C", DataType::String, 10.0),
        ]);
        let ids: Vec<_> = registry
            .columns(&["c", "missing-column-id", "a"])
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["c", "a"]);
    }

    #[test]
    fn test_default_render_passes_values_through() {
        let registry = ColumnRegistry::new(vec![
            ColumnDescriptor::new("id", "ID", DataType::Number, 10.0),
            ColumnDescriptor::new("name", "Name", DataType::String, 10.0),
            ColumnDescriptor::new("enabled", "On", DataType::Boolean, 10.0),
            ColumnDescriptor::new("user.email", "EMAIL", DataType::String, 10.0),
        ]);
        let rec = record(json!({ "id": 71, "name": "Test", "enabled": false }));
        let tr = I18n::default();

        assert_eq!(
            registry.render("id", &rec, &tr),
            Some(Cell::Number(71.into()))
        );
        assert_eq!(registry.render("name", &rec, &tr), Some(Cell::text("Test")));
        assert_eq!(registry.render("enabled", &rec, &tr), Some(Cell::text("false")));
        assert_eq!(registry.render("user.email", &rec, &tr), Some(Cell::Empty));
        assert_eq!(registry.render("nope", &rec, &tr), None);
    }

    #[test]
    fn test_custom_render_takes_precedence() {
        let registry = ColumnRegistry::new(vec![
            ColumnDescriptor::new("name", "Name", DataType::Custom, 10.0).with_render(upper_name),
        ]);
        let rec = record(json!({ "name": "Test" }));
        assert_eq!(
            registry.render("name", &rec, &I18n::default()),
            Some(Cell::text("TEST"))
        );
    }
}
