use chrono::{DateTime, Utc};
use tally_business::{
    AppConfig, CATEGORIES_LISTING, CategoriesPage, Category, I18n, LanguageMenu, MockCategories,
    RecordSource, Time,
};

/// The main application state.
pub struct State {
    /// Active translation catalog.
    pub i18n: I18n,
    /// Clock driving feedback timers.
    pub time: Time,
    pub config: AppConfig,
    /// The categories listing.
    pub categories: CategoriesPage,
    pub language_menu: LanguageMenu,
}

impl Default for State {
    fn default() -> Self {
        Self::new(AppConfig::init_or_default(), Time::default(), &MockCategories)
    }
}

impl State {
    pub fn new(config: AppConfig, time: Time, source: &dyn RecordSource<Category>) -> Self {
        let mut categories = CategoriesPage::new(CATEGORIES_LISTING)
            .with_feedback_duration(config.feedback_duration());
        categories.load_from(source);

        Self {
            i18n: I18n::new(config.language()),
            time,
            config,
            categories,
            language_menu: LanguageMenu::default(),
        }
    }

    /// State with a frozen clock and the bundled categories.
    pub fn test(now: DateTime<Utc>) -> Self {
        Self::new(AppConfig::default(), Time::fixed(now), &MockCategories)
    }

    /// Like [`State::test`], loading from `source`.
    pub fn test_with_source(now: DateTime<Utc>, source: &dyn RecordSource<Category>) -> Self {
        Self::new(AppConfig::default(), Time::fixed(now), source)
    }
}
