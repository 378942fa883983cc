//! Typed schemas for the records shown by the admin tables.
//!
//! Field names follow the backend payloads (snake_case, with the
//! capitalized `Budget` / `Transaction` relation lists of a category).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::Translate;
use crate::record::{Record, RecordError};

/// An entity that can be listed in a table.
pub trait Entity: Serialize {
    /// Human readable name used in feedback messages.
    ///
    /// Entities without a name of their own fall back to a translated label.
    fn display_name(&self, tr: &dyn Translate) -> &str;

    fn to_record(&self) -> Result<Record, RecordError> {
        Record::from_serialize(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i64,
    pub name: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "Budget", default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
    #[serde(rename = "Transaction", default)]
    pub transactions: Vec<Transaction>,
}

impl Entity for Category {
    fn display_name(&self, _tr: &dyn Translate) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub subcategory_id: i64,
    pub name: String,
    pub category_id: i64,
}

impl Entity for Subcategory {
    fn display_name(&self, _tr: &dyn Translate) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub classification_id: i64,
    pub name: String,
}

impl Entity for Classification {
    fn display_name(&self, _tr: &dyn Translate) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub budget_id: i64,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category_id: i64,
}

impl Entity for Budget {
    fn display_name(&self, tr: &dyn Translate) -> &str {
        tr.translate("BUDGET")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: i64,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: Option<String>,
    /// Relations are only populated when the backend joins them.
    pub category: Option<Category>,
    pub subcategory: Option<Subcategory>,
    pub classification: Option<Classification>,
    pub classification_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Transaction {
    fn display_name(&self, tr: &dyn Translate) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| tr.translate("TRANSACTION"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub role_id: i64,
    pub role_name: String,
}

impl Entity for Role {
    fn display_name(&self, _tr: &dyn Translate) -> &str {
        &self.role_name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub first_surname: String,
    pub second_surname: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "userRoles", default)]
    pub user_roles: Vec<UserRole>,
}

impl Entity for User {
    fn display_name(&self, _tr: &dyn Translate) -> &str {
        &self.email
    }
}

/// Join row between a user and a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRole {
    pub user_id: i64,
    pub role_id: i64,
    pub user: Option<Box<User>>,
    pub role: Option<Role>,
}

impl Entity for UserRole {
    fn display_name(&self, tr: &dyn Translate) -> &str {
        self.role
            .as_ref()
            .map_or_else(|| tr.translate("USER_ROLE"), |role| role.role_name.as_str())
    }
}
