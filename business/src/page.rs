//! State for a CRUD listing page.
//!
//! The page owns a snapshot of records plus three pieces of display state:
//! `loading`, `error` and a transient `feedback` message. Row actions and
//! the create action only surface feedback; the mutation itself belongs to
//! a collaborator outside this crate.

use chrono::{DateTime, Duration, Utc};

use crate::entities::{Category, Entity};
use crate::filter::ColumnFilters;
use crate::i18n::Translate;
use crate::record::Record;
use crate::registry::{ColumnDescriptor, ColumnRegistry};
use crate::source::{LoadError, RecordSource};

/// Default time a feedback message stays visible, in milliseconds.
pub const DEFAULT_FEEDBACK_MS: i64 = 5000;

/// Static configuration of a listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSpec {
    pub title_key: &'static str,
    pub create_key: &'static str,
    pub create_click_key: &'static str,
    pub view_key: &'static str,
    pub edit_key: &'static str,
    pub delete_key: &'static str,
    pub error_key: &'static str,
    pub columns: &'static [&'static str],
}

pub const CATEGORIES_LISTING: ListingSpec = ListingSpec {
    title_key: "CATEGORY_PAGE",
    create_key: "CREATE_CATEGORY",
    create_click_key: "CREATE_CATEGORY_CLICK",
    view_key: "VIEWING_CATEGORY",
    edit_key: "EDITING_CATEGORY",
    delete_key: "DELETING_CATEGORY",
    error_key: "ERROR_LOADING_DATA",
    columns: &["category_id", "name", "created_at", "updated_at"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 3] = [RowAction::View, RowAction::Edit, RowAction::Delete];

    /// Key of the button label.
    pub fn label_key(self) -> &'static str {
        match self {
            RowAction::View => "VIEW",
            RowAction::Edit => "EDIT",
            RowAction::Delete => "DELETE",
        }
    }

    fn message_key(self, spec: &ListingSpec) -> &'static str {
        match self {
            RowAction::View => spec.view_key,
            RowAction::Edit => spec.edit_key,
            RowAction::Delete => spec.delete_key,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Error,
}

/// A transient message shown over the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub severity: Severity,
    pub shown_at: DateTime<Utc>,
    pub visible: bool,
}

impl Feedback {
    fn info(message: String, now: DateTime<Utc>) -> Self {
        Self {
            message,
            severity: Severity::Info,
            shown_at: now,
            visible: true,
        }
    }

    /// When the message hides; `None` if that lies beyond the calendar range.
    pub fn expires_at(&self, duration: Duration) -> Option<DateTime<Utc>> {
        self.shown_at.checked_add_signed(duration)
    }
}

/// The mutually exclusive ways a page can be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode<'a> {
    Loading,
    /// Error notice; `visible` is false once dismissed.
    Error {
        message_key: &'static str,
        severity: Severity,
        detail: &'a str,
        visible: bool,
    },
    Normal { feedback: Option<&'a Feedback> },
}

#[derive(Debug, Clone)]
pub struct ListingPage<E> {
    spec: ListingSpec,
    records: Vec<E>,
    loading: bool,
    error: Option<String>,
    error_visible: bool,
    feedback: Option<Feedback>,
    feedback_duration: Duration,
    pub filters: ColumnFilters,
}

pub type CategoriesPage = ListingPage<Category>;

impl<E: Entity> ListingPage<E> {
    pub fn new(spec: ListingSpec) -> Self {
        Self {
            spec,
            records: Vec::new(),
            loading: false,
            error: None,
            error_visible: false,
            feedback: None,
            feedback_duration: Duration::milliseconds(DEFAULT_FEEDBACK_MS),
            filters: ColumnFilters::default(),
        }
    }

    pub fn with_feedback_duration(mut self, duration: Duration) -> Self {
        self.feedback_duration = duration;
        self
    }

    pub fn spec(&self) -> &ListingSpec {
        &self.spec
    }

    pub fn records(&self) -> &[E] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref().filter(|f| f.visible)
    }

    pub fn feedback_duration(&self) -> Duration {
        self.feedback_duration
    }

    pub fn display_mode(&self) -> DisplayMode<'_> {
        if self.loading {
            return DisplayMode::Loading;
        }
        if let Some(detail) = &self.error {
            return DisplayMode::Error {
                message_key: self.spec.error_key,
                severity: Severity::Error,
                detail,
                visible: self.error_visible,
            };
        }
        DisplayMode::Normal {
            feedback: self.feedback(),
        }
    }

    /// Marks the page as waiting for data.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
        self.error_visible = false;
    }

    /// Applies a load result; the snapshot is replaced wholesale on success.
    pub fn finish_load(&mut self, result: Result<Vec<E>, LoadError>) {
        self.loading = false;
        match result {
            Ok(records) => {
                log::debug!("Listing loaded {} record(s)", records.len());
                self.records = records;
                self.error = None;
                self.error_visible = false;
            }
            Err(err) => {
                log::error!("Listing failed to load: {err}");
                self.error = Some(err.to_string());
                self.error_visible = true;
            }
        }
    }

    pub fn load_from(&mut self, source: &dyn RecordSource<E>) {
        self.begin_load();
        self.finish_load(source.load());
    }

    pub fn dismiss_error(&mut self) {
        self.error_visible = false;
    }

    /// Handles a row action: logs it and shows `"<action>: <name>"`.
    pub fn trigger(
        &mut self,
        action: RowAction,
        record: &E,
        tr: &dyn Translate,
        now: DateTime<Utc>,
    ) {
        announce(&self.spec, &mut self.feedback, action, record, tr, now);
    }

    /// Row action by index into the record snapshot.
    pub fn trigger_at(
        &mut self,
        action: RowAction,
        index: usize,
        tr: &dyn Translate,
        now: DateTime<Utc>,
    ) {
        let Some(record) = self.records.get(index) else {
            log::warn!("Row action {action:?} on missing row {index}");
            return;
        };
        announce(&self.spec, &mut self.feedback, action, record, tr, now);
    }

    pub fn create_clicked(&mut self, tr: &dyn Translate, now: DateTime<Utc>) {
        log::info!("Create requested ({})", self.spec.title_key);
        self.show_message(tr.translate(self.spec.create_click_key).to_string(), now);
    }

    /// Shows an info message, replacing any visible one and restarting the timer.
    pub fn show_message(&mut self, message: String, now: DateTime<Utc>) {
        self.feedback = Some(Feedback::info(message, now));
    }

    pub fn dismiss_feedback(&mut self) {
        if let Some(feedback) = &mut self.feedback {
            feedback.visible = false;
        }
    }

    /// Hides feedback whose display time has elapsed.
    ///
    /// Returns the time left when a message is still visible.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Duration> {
        let duration = self.feedback_duration;
        let feedback = self.feedback.as_mut().filter(|f| f.visible)?;
        let Some(expires_at) = feedback.expires_at(duration) else {
            return Some(Duration::MAX);
        };
        let remaining = expires_at - now;
        if remaining <= Duration::zero() {
            feedback.visible = false;
            None
        } else {
            Some(remaining)
        }
    }

    /// Records converted for rendering, paired with their snapshot index.
    ///
    /// Rows that fail to convert are skipped with a warning; rows rejected by
    /// the active filters are left out.
    pub fn visible_rows<'r>(
        &self,
        registry: &'r ColumnRegistry,
    ) -> (Vec<&'r ColumnDescriptor>, Vec<(usize, Record)>) {
        let columns = registry.columns(self.spec.columns);
        let rows = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(index, entity)| match entity.to_record() {
                Ok(record) => Some((index, record)),
                Err(err) => {
                    log::warn!("Skipping row {index}: {err}");
                    None
                }
            })
            .filter(|(_, record)| self.filters.matches(record, &columns))
            .collect();
        (columns, rows)
    }
}

/// Logs a row action and replaces the feedback with `"<action>: <name>"`.
fn announce<E: Entity>(
    spec: &ListingSpec,
    feedback: &mut Option<Feedback>,
    action: RowAction,
    record: &E,
    tr: &dyn Translate,
    now: DateTime<Utc>,
) {
    let name = record.display_name(tr);
    log::info!("Row action {action:?} on `{name}` ({})", spec.title_key);
    let label = tr.translate(action.message_key(spec));
    *feedback = Some(Feedback::info(format!("{label}: {name}"), now));
}
