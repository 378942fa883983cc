//! Column filters.
//!
//! A column declares how a filter UI should query it ([`FilterSpec`]);
//! [`ColumnFilters`] holds the values the user entered, keyed by filter id.

use std::collections::HashMap;

use ustr::Ustr;

use crate::record::Record;
use crate::registry::ColumnDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    Search,
    Dropdown,
    Multiselect,
    RadioButton,
}

impl FilterType {
    /// Whether the filter picks from an enumerated option list.
    pub fn has_options(self) -> bool {
        !matches!(self, FilterType::Search)
    }
}

/// Value of an enumerated filter option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Text(&'static str),
    Number(i64),
}

impl OptionValue {
    fn matches(&self, raw: &str) -> bool {
        match self {
            OptionValue::Text(text) => *text == raw,
            OptionValue::Number(n) => raw.parse::<i64>().is_ok_and(|r| r == *n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: OptionValue,
    pub label_key: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub filter_id: Ustr,
    pub filter_type: FilterType,
    pub options: Vec<FilterOption>,
}

impl FilterSpec {
    pub fn search(filter_id: &str) -> Self {
        Self {
            filter_id: Ustr::from(filter_id),
            filter_type: FilterType::Search,
            options: Vec::new(),
        }
    }

    pub fn choice(filter_id: &str, filter_type: FilterType, options: Vec<FilterOption>) -> Self {
        Self {
            filter_id: Ustr::from(filter_id),
            filter_type,
            options,
        }
    }
}

/// A value entered into a filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Search(String),
    /// Indices into the column's option list.
    Selected(Vec<usize>),
}

impl FilterValue {
    fn is_inactive(&self) -> bool {
        match self {
            FilterValue::Search(text) => text.trim().is_empty(),
            FilterValue::Selected(selected) => selected.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilters {
    values: HashMap<Ustr, FilterValue>,
}

impl ColumnFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self, filter_id: Ustr) -> &str {
        match self.values.get(&filter_id) {
            Some(FilterValue::Search(text)) => text,
            _ => "",
        }
    }

    pub fn set_search(&mut self, filter_id: Ustr, text: impl Into<String>) {
        self.values.insert(filter_id, FilterValue::Search(text.into()));
    }

    pub fn selected(&self, filter_id: Ustr) -> &[usize] {
        match self.values.get(&filter_id) {
            Some(FilterValue::Selected(selected)) => selected,
            _ => &[],
        }
    }

    /// Selects an option; single-choice filters replace the previous choice,
    /// multiselect toggles membership.
    pub fn select(&mut self, spec: &FilterSpec, option: usize) {
        if option >= spec.options.len() {
            log::warn!(
                "Filter `{}` has no option at index {option}",
                spec.filter_id
            );
            return;
        }
        let entry = self
            .values
            .entry(spec.filter_id)
            .or_insert_with(|| FilterValue::Selected(Vec::new()));
        if !matches!(entry, FilterValue::Selected(_)) {
            *entry = FilterValue::Selected(Vec::new());
        }
        if let FilterValue::Selected(selected) = entry {
            match spec.filter_type {
                FilterType::Multiselect => {
                    if let Some(pos) = selected.iter().position(|&i| i == option) {
                        selected.remove(pos);
                    } else {
                        selected.push(option);
                    }
                }
                _ => {
                    selected.clear();
                    selected.push(option);
                }
            }
        }
    }

    pub fn clear(&mut self, filter_id: Ustr) {
        self.values.remove(&filter_id);
    }

    pub fn clear_all(&mut self) {
        self.values.clear();
    }

    pub fn is_active(&self) -> bool {
        self.values.values().any(|value| !value.is_inactive())
    }

    /// Whether `record` passes every active filter of the given columns.
    pub fn matches(&self, record: &Record, columns: &[&ColumnDescriptor]) -> bool {
        columns.iter().all(|column| {
            let Some(spec) = &column.filter else {
                return true;
            };
            let Some(value) = self.values.get(&spec.filter_id) else {
                return true;
            };
            if value.is_inactive() {
                return true;
            }
            let Some(raw) = column.raw_text(record) else {
                return false;
            };
            match value {
                FilterValue::Search(text) => raw
                    .to_lowercase()
                    .contains(&text.trim().to_lowercase()),
                FilterValue::Selected(selected) => selected.iter().any(|&i| {
                    spec.options
                        .get(i)
                        .is_some_and(|option| option.value.matches(&raw))
                }),
            }
        })
    }
}
