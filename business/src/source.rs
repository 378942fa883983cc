//! Where listing pages get their records from.

use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;

use crate::entities::Category;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// A provider of entity snapshots.
///
/// The real backend client lives outside this crate; implementations here
/// resolve synchronously.
pub trait RecordSource<E> {
    fn load(&self) -> Result<Vec<E>, LoadError>;
}

/// Fixed categories used until the backend is wired in.
#[derive(Debug, Clone, Default)]
pub struct MockCategories;

impl RecordSource<Category> for MockCategories {
    fn load(&self) -> Result<Vec<Category>, LoadError> {
        Ok(mock_categories())
    }
}

/// A source that always fails, for exercising the error notice.
#[derive(Debug, Clone)]
pub struct FailingSource(pub String);

impl<E> RecordSource<E> for FailingSource {
    fn load(&self) -> Result<Vec<E>, LoadError> {
        Err(LoadError::Unavailable(self.0.clone()))
    }
}

pub fn mock_categories() -> Vec<Category> {
    vec![
        Category {
            category_id: 71,
            name: "Test".to_string(),
            user_id: 38,
            created_at: timestamp(2024, 11, 21, 10, 12, 35, 81),
            updated_at: timestamp(2024, 11, 21, 10, 12, 35, 81),
            budgets: vec![],
            subcategories: vec![],
            transactions: vec![],
        },
        Category {
            category_id: 72,
            name: "Example Category".to_string(),
            user_id: 40,
            created_at: timestamp(2024, 11, 20, 8, 0, 0, 0),
            updated_at: timestamp(2024, 11, 21, 8, 0, 0, 0),
            budgets: vec![],
            subcategories: vec![],
            transactions: vec![],
        },
    ]
}

fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .map(|t| t + chrono::Duration::milliseconds(ms))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_categories_fixture() {
        let categories = MockCategories.load().unwrap();
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Test", "Example Category"]);
        assert_eq!(
            categories[0].created_at.to_rfc3339(),
            "2024-11-21T10:12:35.081+00:00"
        );
    }

    #[test]
    fn test_failing_source_reports_reason() {
        let err = RecordSource::<Category>::load(&FailingSource("offline".into())).unwrap_err();
        assert_eq!(err.to_string(), "data source unavailable: offline");
    }
}
