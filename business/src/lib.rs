//! Domain logic for the Tally admin interface.
//!
//! Everything here is independent of the UI toolkit: the column registry and
//! its formatting rules, typed entities, filters, listing page state and the
//! translation catalogs. `tally-ui` reads this state and renders it.

mod cell;
mod columns;
mod config;
mod entities;
mod filter;
mod format;
mod i18n;
mod language_menu;
mod page;
mod record;
mod registry;
mod source;
mod time;

pub use cell::{Cell, Chip, Tone};
pub use columns::{column_registry, default_columns};
pub use config::AppConfig;
pub use entities::{
    Budget, Category, Classification, Entity, Role, Subcategory, Transaction, User, UserRole,
};
pub use filter::{
    ColumnFilters, FilterOption, FilterSpec, FilterType, FilterValue, OptionValue,
};
pub use format::{
    DATE_DISPLAY_FORMAT, DateDisplay, date_cell, format_date, parse_calendar_date, status_chip,
    text_or_not_found,
};
pub use i18n::{I18n, Language, Translate};
pub use language_menu::LanguageMenu;
pub use page::{
    CATEGORIES_LISTING, CategoriesPage, DEFAULT_FEEDBACK_MS, DisplayMode, Feedback, ListingPage,
    ListingSpec, RowAction, Severity,
};
pub use record::{Record, RecordError};
pub use registry::{
    ColumnDescriptor, ColumnRegistry, DataType, RegistryDefect, RegistryError, RenderFn,
    validate_unique_ids,
};
pub use source::{FailingSource, LoadError, MockCategories, RecordSource, mock_categories};
pub use time::Time;
