//! Formatting helpers shared by the column renders.
//!
//! Nothing here depends on a UI toolkit, so every rule can be tested on
//! plain values.

use chrono::NaiveDate;
use serde_json::Value;

use crate::cell::{Cell, Chip, Tone};
use crate::i18n::Translate;

/// Display format for calendar dates.
pub const DATE_DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// Outcome of formatting a date-bearing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDisplay {
    Formatted(NaiveDate),
    /// Absent or empty input.
    NotAvailable,
    /// Present but not a `YYYY-MM-DD`-prefixed date.
    Invalid,
}

impl DateDisplay {
    pub fn label(&self, tr: &dyn Translate) -> String {
        match self {
            DateDisplay::Formatted(date) => date.format(DATE_DISPLAY_FORMAT).to_string(),
            DateDisplay::NotAvailable => tr.translate("N/A").to_string(),
            DateDisplay::Invalid => tr.translate("INVALID_DATE").to_string(),
        }
    }
}

/// Parses the `YYYY-MM-DD` prefix of `raw` as a UTC calendar date.
///
/// Anything after the day digits (a time of day, a zone suffix) is
/// ignored. Out of range components are rejected rather than rolled over.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.trim().splitn(3, '-');
    let year = leading_int(parts.next()?)?;
    let month = u32::try_from(leading_int(parts.next()?)?).ok()?;
    let day = u32::try_from(leading_int(parts.next()?)?).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats a raw JSON date field.
pub fn format_date(raw: Option<&Value>) -> DateDisplay {
    match raw {
        None | Some(Value::Null) => DateDisplay::NotAvailable,
        Some(Value::String(s)) if s.trim().is_empty() => DateDisplay::NotAvailable,
        Some(Value::String(s)) => {
            parse_calendar_date(s).map_or(DateDisplay::Invalid, DateDisplay::Formatted)
        }
        Some(_) => DateDisplay::Invalid,
    }
}

/// Date cell for `key`, logging a warning when the value is unparseable.
pub fn date_cell(raw: Option<&Value>, key: &str, tr: &dyn Translate) -> Cell {
    let display = format_date(raw);
    if display == DateDisplay::Invalid {
        log::warn!("Invalid date detected for key \"{key}\": {raw:?}");
    }
    Cell::Text(display.label(tr))
}

/// Text for optional string fields: a missing value becomes the not-found indicator.
pub fn text_or_not_found(value: Option<&str>) -> Cell {
    value.map_or(Cell::NotFound, Cell::text)
}

/// Status chip: uppercase label, success tone for `active`.
pub fn status_chip(status: Option<&str>) -> Cell {
    match status {
        Some(status) => {
            let tone = if status == "active" {
                Tone::Success
            } else {
                Tone::Default
            };
            Cell::Chip(Chip::new(status.to_uppercase(), tone))
        }
        None => Cell::NotFound,
    }
}

/// Leading decimal digits of `s`, optionally signed.
fn leading_int(s: &str) -> Option<i32> {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i32>().ok().map(|n| sign * n)
}
