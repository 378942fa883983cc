//! Row data handed to the column registry.
//!
//! A [`Record`] is an open JSON object. Access to nested relations goes
//! through [`Record::path`], which treats a missing segment, a non-object
//! intermediate and an explicit `null` the same way: `None`.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to serialize entity into a record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("record must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes any entity into a record.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, RecordError> {
        Self::try_from(serde_json::to_value(value)?)
    }

    /// Top-level field, `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    /// Dotted-path lookup, e.g. `user.email`.
    pub fn path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
            if current.is_null() {
                return None;
            }
        }
        Some(current)
    }

    /// Nested object at `path`, as a record of its own.
    pub fn relation(&self, path: &str) -> Option<Record> {
        self.path(path)?.as_object().cloned().map(Record)
    }

    pub fn text(&self, path: &str) -> Option<&str> {
        self.path(path)?.as_str()
    }

    /// Raw value at `path` rendered as plain text; strings are unquoted.
    pub fn raw_text(&self, path: &str) -> Option<String> {
        self.path(path).map(value_text)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(RecordError::NotAnObject {
                found: value_kind(&other),
            }),
        }
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
