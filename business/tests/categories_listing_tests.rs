//! End-to-end checks for the categories listing, driven through the public API.

use chrono::{DateTime, Duration, TimeZone, Utc};
use tally_business::{
    CATEGORIES_LISTING, CategoriesPage, Cell, DisplayMode, FailingSource, I18n, Language,
    LanguageMenu, MockCategories, RowAction, Time, column_registry,
};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 21, 12, 0, 0).unwrap()
}

fn rendered_rows(page: &CategoriesPage, i18n: &I18n) -> Vec<Vec<String>> {
    let (columns, rows) = page.visible_rows(column_registry());
    rows.iter()
        .map(|(_, record)| {
            columns
                .iter()
                .map(|column| column.render(record, i18n).label(i18n))
                .collect()
        })
        .collect()
}

mod listing {
    use super::*;

    #[test]
    fn test_rows_render_in_column_order() {
        let mut page = CategoriesPage::new(CATEGORIES_LISTING);
        page.load_from(&MockCategories);
        let i18n = I18n::new(Language::Spanish);

        assert_eq!(
            rendered_rows(&page, &i18n),
            vec![
                vec!["71", "Test", "21-11-2024", "21-11-2024"],
                vec!["72", "Example Category", "20-11-2024", "21-11-2024"],
            ]
        );
    }

    #[test]
    fn test_headers_follow_language() {
        let mut i18n = I18n::new(Language::Spanish);
        let columns = column_registry().columns(CATEGORIES_LISTING.columns);
        let headers = |i18n: &I18n| -> Vec<String> {
            columns
                .iter()
                .map(|c| tally_business::Translate::translate(i18n, c.title_key).to_owned())
                .collect()
        };

        let spanish = headers(&i18n);
        i18n.set_language(Language::English);
        let english = headers(&i18n);

        assert_eq!(english, ["ID", "Name", "Created", "Updated"]);
        assert_ne!(spanish, english);
    }

    #[test]
    fn test_failed_load_shows_error_not_rows() {
        let mut page = CategoriesPage::new(CATEGORIES_LISTING);
        page.load_from(&FailingSource("timeout".to_owned()));

        assert!(matches!(
            page.display_mode(),
            DisplayMode::Error { visible: true, .. }
        ));
        assert!(rendered_rows(&page, &I18n::default()).is_empty());
    }
}

mod feedback {
    use super::*;

    #[test]
    fn test_delete_then_auto_dismiss_with_virtual_time() {
        let mut time = Time::fixed(start());
        let mut page = CategoriesPage::new(CATEGORIES_LISTING);
        page.load_from(&MockCategories);
        let i18n = I18n::new(Language::English);

        page.trigger_at(RowAction::Delete, 0, &i18n, time.now());
        assert_eq!(
            page.feedback().map(|f| f.message.as_str()),
            Some("Deleting category: Test")
        );

        time.advance(Duration::milliseconds(4000));
        assert!(page.tick(time.now()).is_some());

        time.advance(Duration::milliseconds(1000));
        assert!(page.tick(time.now()).is_none());
        assert!(matches!(
            page.display_mode(),
            DisplayMode::Normal { feedback: None }
        ));
    }

    #[test]
    fn test_switching_language_changes_next_message() {
        let mut menu = LanguageMenu::default();
        let mut i18n = I18n::new(Language::Spanish);
        let mut page = CategoriesPage::new(CATEGORIES_LISTING);
        page.load_from(&MockCategories);

        page.trigger_at(RowAction::View, 1, &i18n, start());
        let spanish = page.feedback().map(|f| f.message.clone());

        menu.open();
        menu.choose(&mut i18n, Language::English);
        page.trigger_at(RowAction::View, 1, &i18n, start());
        let english = page.feedback().map(|f| f.message.clone());

        assert_eq!(english.as_deref(), Some("Viewing category: Example Category"));
        assert_ne!(spanish, english);
    }
}

mod registry {
    use super::*;

    #[test]
    fn test_unknown_row_path_renders_not_found() {
        let record = tally_business::Record::new();
        let i18n = I18n::new(Language::English);
        let cell = column_registry()
            .render("category.name", &record, &i18n)
            .expect("column is registered");
        assert_eq!(cell, Cell::NotFound);
        assert_eq!(cell.label(&i18n), "Not found");
    }
}
