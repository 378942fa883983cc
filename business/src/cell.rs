//! Display-agnostic output of a column render.

use serde_json::Number;

use crate::i18n::Translate;

/// Visual tone of a chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    pub tone: Tone,
}

impl Chip {
    pub fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(Number),
    Chip(Chip),
    Chips(Vec<Chip>),
    /// A value that should exist but is missing.
    NotFound,
    /// Nothing to show.
    Empty,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Flattens the cell into a single label, as used for searching and tooltips.
    pub fn label(&self, tr: &dyn Translate) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Number(number) => number.to_string(),
            Cell::Chip(chip) => chip.label.clone(),
            Cell::Chips(chips) => chips
                .iter()
                .map(|chip| chip.label.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            Cell::NotFound => tr.translate("NOT_FOUND").to_string(),
            Cell::Empty => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{I18n, Language};

    #[test]
    fn test_label_flattens_chips() {
        let cell = Cell::Chips(vec![
            Chip::new("admin", Tone::Default),
            Chip::new("editor", Tone::Default),
        ]);
        assert_eq!(cell.label(&I18n::default()), "admin, editor");
    }

    #[test]
    fn test_not_found_label_is_translated() {
        let i18n = I18n::new(Language::English);
        assert_eq!(Cell::NotFound.label(&i18n), "Not found");
        assert!(Cell::NotFound.is_not_found());
    }
}
