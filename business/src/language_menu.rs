//! Open/closed state of the language switcher menu.

use crate::i18n::{I18n, Language};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageMenu {
    open: bool,
}

impl LanguageMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Languages offered in the menu: all of them except the active one.
    pub fn options(current: Language) -> impl Iterator<Item = Language> {
        Language::ALL.into_iter().filter(move |lang| *lang != current)
    }

    /// Switches to `language` and closes the menu.
    pub fn choose(&mut self, i18n: &mut I18n, language: Language) {
        i18n.set_language(language);
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Translate;

    #[test]
    fn test_options_exclude_current_language() {
        let options: Vec<_> = LanguageMenu::options(Language::Spanish).collect();
        assert_eq!(options, [Language::English]);

        let options: Vec<_> = LanguageMenu::options(Language::English).collect();
        assert_eq!(options, [Language::Spanish]);
    }

    #[test]
    fn test_choose_switches_and_closes() {
        let mut menu = LanguageMenu::default();
        let mut i18n = I18n::new(Language::Spanish);

        menu.open();
        assert!(menu.is_open());

        menu.choose(&mut i18n, Language::English);
        assert!(!menu.is_open());
        assert_eq!(i18n.language(), Language::English);
    }

    #[test]
    fn test_toggle() {
        let mut menu = LanguageMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }
}
