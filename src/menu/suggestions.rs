//! Spelling and thesaurus sections of the context menu
//!
//! A [`SuggestionMenu`] lives for one context-menu interaction. Opening the
//! menu builds fresh suggestion and language lists; the lists are read-only
//! until the user picks an entry or dismisses the menu.

use crate::config::LanguageKind;
use crate::position::CharPos;
use crate::spelling::{SpellChecker, Thesaurus};

use super::{MenuAction, MenuItem};

/// Suggestion lists captured when the menu was opened
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionMenu {
    word: String,
    position: CharPos,
    spelling: Vec<String>,
    thesaurus: Vec<String>,
    spell_languages: Vec<String>,
    thesaurus_languages: Vec<String>,
}

impl SuggestionMenu {
    /// Menu for `word`, found at code-point `position` of the buffer
    pub fn new(word: impl Into<String>, position: CharPos) -> Self {
        Self {
            word: word.into(),
            position,
            ..Self::default()
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Where the menu was opened; the word span is re-derived from here
    pub fn position(&self) -> CharPos {
        self.position
    }

    pub fn spelling_suggestions(&self) -> &[String] {
        &self.spelling
    }

    pub fn thesaurus_suggestions(&self) -> &[String] {
        &self.thesaurus
    }

    /// Spell checker entries followed by the dictionary language submenu.
    ///
    /// Empty when there is no word under the cursor.
    pub fn spelling_section(
        &mut self,
        checker: &dyn SpellChecker,
        current_language: &str,
    ) -> Vec<MenuItem> {
        if self.word.is_empty() {
            return Vec::new();
        }

        self.spelling = checker.suggestions(&self.word);
        let entries: Vec<MenuItem> = self
            .spelling
            .iter()
            .enumerate()
            .filter_map(|(i, sug)| MenuItem::action(sug, MenuAction::SpellingSuggestion(i)))
            .collect();

        let mut items = Vec::new();
        if checker.check_word(&self.word) {
            if entries.is_empty() {
                items.push(MenuItem::placeholder("No spell checker suggestions"));
            } else {
                items.push(MenuItem::Submenu {
                    label: format!("Spell checker suggestions for \"{}\"", self.word),
                    items: entries,
                });
            }
        } else {
            if entries.is_empty() {
                items.push(MenuItem::placeholder("No correction suggestions"));
            }
            items.extend(entries);
            items.push(MenuItem::Action {
                label: format!("Add \"{}\" to dictionary", self.word),
                action: MenuAction::AddToDictionary,
                enabled: checker.can_add_word(&self.word),
            });
        }

        self.spell_languages = checker.language_list();
        items.push(language_menu(
            "Spell checker language",
            LanguageKind::SpellChecker,
            current_language,
            &self.spell_languages,
        ));
        items.push(MenuItem::Separator);
        items
    }

    /// Thesaurus entries followed by the thesaurus language submenu.
    ///
    /// A headword with a single synonym is offered directly (the headword is
    /// what gets inserted); one with several synonyms gets a submenu. All
    /// entries share one flattened index space.
    pub fn thesaurus_section(
        &mut self,
        thesaurus: &dyn Thesaurus,
        current_language: &str,
    ) -> Vec<MenuItem> {
        if self.word.is_empty() {
            return Vec::new();
        }

        self.thesaurus.clear();
        let mut entries = Vec::new();
        for result in thesaurus.lookup(&self.word) {
            if let [_single] = result.synonyms.as_slice() {
                let index = self.thesaurus.len();
                self.thesaurus.push(result.headword.clone());
                entries.extend(MenuItem::action(
                    &result.headword,
                    MenuAction::ThesaurusSuggestion(index),
                ));
                continue;
            }

            let mut sub = Vec::with_capacity(result.synonyms.len());
            for synonym in result.synonyms {
                let index = self.thesaurus.len();
                sub.extend(MenuItem::action(
                    &synonym,
                    MenuAction::ThesaurusSuggestion(index),
                ));
                self.thesaurus.push(synonym);
            }
            entries.push(MenuItem::Submenu {
                label: result.headword,
                items: sub,
            });
        }

        let mut items = Vec::new();
        if entries.is_empty() {
            items.push(MenuItem::placeholder("No thesaurus suggestions"));
        } else {
            items.push(MenuItem::Submenu {
                label: format!("Thesaurus suggestions for \"{}\"", self.word),
                items: entries,
            });
        }

        self.thesaurus_languages = thesaurus.language_list();
        items.push(language_menu(
            "Thesaurus language",
            LanguageKind::Thesaurus,
            current_language,
            &self.thesaurus_languages,
        ));
        items.push(MenuItem::Separator);
        items
    }

    /// Replacement text for a suggestion action, annotation stripped.
    ///
    /// `None` for actions that are not suggestions or whose index is past
    /// the end of the captured list.
    pub fn resolve(&self, action: MenuAction) -> Option<String> {
        let raw = match action {
            MenuAction::SpellingSuggestion(i) => self.spelling.get(i),
            MenuAction::ThesaurusSuggestion(i) => self.thesaurus.get(i),
            _ => None,
        }?;
        Some(strip_annotation(raw).to_string())
    }

    /// Language code chosen by a language menu entry.
    ///
    /// `Some("")` for "Disable", `None` if the index is past the end of the
    /// list captured when the menu opened.
    pub fn language(&self, kind: LanguageKind, index: Option<usize>) -> Option<&str> {
        let Some(index) = index else {
            return Some("");
        };
        let list = match kind {
            LanguageKind::SpellChecker => &self.spell_languages,
            LanguageKind::Thesaurus => &self.thesaurus_languages,
        };
        list.get(index).map(String::as_str)
    }
}

/// Radio submenu: "Disable" plus one entry per installed language
fn language_menu(
    label: &str,
    kind: LanguageKind,
    current: &str,
    languages: &[String],
) -> MenuItem {
    let mut items = vec![MenuItem::Radio {
        label: "Disable".to_string(),
        action: MenuAction::SetLanguage(kind, None),
        checked: current.is_empty(),
    }];
    for (i, language) in languages.iter().enumerate() {
        let action = MenuAction::SetLanguage(kind, Some(i));
        if action.id().is_none() {
            break;
        }
        items.push(MenuItem::Radio {
            label: language.clone(),
            action,
            checked: language == current,
        });
    }
    MenuItem::Submenu {
        label: label.to_string(),
        items,
    }
}

/// Drop a trailing part-of-speech annotation from a thesaurus entry.
///
/// Everything from the character before the first `(` onwards is removed, so
/// `"quick (rapid)"` becomes `"quick"`. A leading `(` leaves nothing.
pub fn strip_annotation(suggestion: &str) -> &str {
    let Some(paren) = suggestion.find('(') else {
        return suggestion;
    };
    let before = &suggestion[..paren];
    match before.char_indices().next_back() {
        Some((last, _)) => &before[..last],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::ThesaurusEntry;

    struct Checker {
        correct: bool,
        suggestions: Vec<&'static str>,
        can_add: bool,
    }

    impl SpellChecker for Checker {
        fn check_word(&self, _word: &str) -> bool {
            self.correct
        }
        fn suggestions(&self, _word: &str) -> Vec<String> {
            self.suggestions.iter().map(|s| s.to_string()).collect()
        }
        fn can_add_word(&self, _word: &str) -> bool {
            self.can_add
        }
        fn add_word(&mut self, _word: &str) -> Result<(), String> {
            Ok(())
        }
        fn language_list(&self) -> Vec<String> {
            vec!["en_US".to_string(), "de_DE".to_string()]
        }
    }

    struct Entries(Vec<ThesaurusEntry>);

    impl Thesaurus for Entries {
        fn lookup(&self, _word: &str) -> Vec<ThesaurusEntry> {
            self.0.clone()
        }
        fn language_list(&self) -> Vec<String> {
            vec!["en_US".to_string()]
        }
    }

    fn entry(head: &str, synonyms: &[&str]) -> ThesaurusEntry {
        ThesaurusEntry::new(head, synonyms.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_misspelled_word_lists_corrections_and_add() {
        let checker = Checker {
            correct: false,
            suggestions: vec!["world", "would"],
            can_add: true,
        };
        let mut menu = SuggestionMenu::new("wrold", CharPos(6));
        let items = menu.spelling_section(&checker, "en_US");

        assert_eq!(items[0].label(), Some("world"));
        assert_eq!(items[1].label(), Some("would"));
        assert_eq!(
            items[2],
            MenuItem::Action {
                label: "Add \"wrold\" to dictionary".to_string(),
                action: MenuAction::AddToDictionary,
                enabled: true,
            }
        );
        assert_eq!(items[3].label(), Some("Spell checker language"));
        assert_eq!(items[4], MenuItem::Separator);
        assert_eq!(
            menu.resolve(MenuAction::SpellingSuggestion(1)).as_deref(),
            Some("would")
        );
    }

    #[test]
    fn test_misspelled_without_suggestions_has_placeholder() {
        let checker = Checker {
            correct: false,
            suggestions: vec![],
            can_add: false,
        };
        let mut menu = SuggestionMenu::new("qzx", CharPos(0));
        let items = menu.spelling_section(&checker, "");
        assert_eq!(
            items[0],
            MenuItem::placeholder("No correction suggestions")
        );
        assert!(matches!(items[1], MenuItem::Action { enabled: false, .. }));
    }

    #[test]
    fn test_correct_word_groups_suggestions_in_submenu() {
        let checker = Checker {
            correct: true,
            suggestions: vec!["hell"],
            can_add: true,
        };
        let mut menu = SuggestionMenu::new("hello", CharPos(0));
        let items = menu.spelling_section(&checker, "en_US");
        match &items[0] {
            MenuItem::Submenu { label, items } => {
                assert_eq!(label, "Spell checker suggestions for \"hello\"");
                assert_eq!(items.len(), 1);
            }
            other => panic!("expected submenu, got {:?}", other),
        }
        // no add-to-dictionary for a correct word
        assert!(!items
            .iter()
            .any(|i| i.action_of() == Some(MenuAction::AddToDictionary)));

        let checker = Checker {
            correct: true,
            suggestions: vec![],
            can_add: true,
        };
        let items = menu.spelling_section(&checker, "en_US");
        assert_eq!(
            items[0],
            MenuItem::placeholder("No spell checker suggestions")
        );
    }

    #[test]
    fn test_language_menu_checks_current() {
        let checker = Checker {
            correct: true,
            suggestions: vec![],
            can_add: false,
        };
        let mut menu = SuggestionMenu::new("word", CharPos(0));
        let items = menu.spelling_section(&checker, "de_DE");
        let MenuItem::Submenu { items: langs, .. } = &items[1] else {
            panic!("expected language submenu");
        };
        let checked: Vec<_> = langs
            .iter()
            .filter_map(|item| match item {
                MenuItem::Radio { label, checked, .. } => Some((label.as_str(), *checked)),
                _ => None,
            })
            .collect();
        assert_eq!(
            checked,
            vec![("Disable", false), ("en_US", false), ("de_DE", true)]
        );
        assert_eq!(
            menu.language(LanguageKind::SpellChecker, Some(1)),
            Some("de_DE")
        );
        assert_eq!(menu.language(LanguageKind::SpellChecker, None), Some(""));
        assert_eq!(menu.language(LanguageKind::SpellChecker, Some(2)), None);
    }

    #[test]
    fn test_thesaurus_flattens_headwords() {
        let thesaurus = Entries(vec![
            entry("fast (adj)", &["quick (rapid)", "speedy"]),
            entry("firm", &["steady"]),
        ]);
        let mut menu = SuggestionMenu::new("fast", CharPos(0));
        let items = menu.thesaurus_section(&thesaurus, "en_US");

        let MenuItem::Submenu { label, items: results } = &items[0] else {
            panic!("expected thesaurus submenu");
        };
        assert_eq!(label, "Thesaurus suggestions for \"fast\"");
        assert!(matches!(&results[0], MenuItem::Submenu { items, .. } if items.len() == 2));
        assert_eq!(
            results[1].action_of(),
            Some(MenuAction::ThesaurusSuggestion(2))
        );

        assert_eq!(
            menu.thesaurus_suggestions(),
            &["quick (rapid)", "speedy", "firm"]
        );
        assert_eq!(
            menu.resolve(MenuAction::ThesaurusSuggestion(0)).as_deref(),
            Some("quick")
        );
        assert_eq!(
            menu.resolve(MenuAction::ThesaurusSuggestion(2)).as_deref(),
            Some("firm")
        );
        assert_eq!(menu.resolve(MenuAction::ThesaurusSuggestion(3)), None);
    }

    #[test]
    fn test_no_thesaurus_results_placeholder() {
        let mut menu = SuggestionMenu::new("xyzzy", CharPos(0));
        let items = menu.thesaurus_section(&Entries(vec![]), "");
        assert_eq!(
            items[0],
            MenuItem::placeholder("No thesaurus suggestions")
        );
        assert_eq!(items[1].label(), Some("Thesaurus language"));
    }

    #[test]
    fn test_empty_word_builds_nothing() {
        let checker = Checker {
            correct: false,
            suggestions: vec!["a"],
            can_add: true,
        };
        let mut menu = SuggestionMenu::new("", CharPos(0));
        assert!(menu.spelling_section(&checker, "").is_empty());
        assert!(menu
            .thesaurus_section(&Entries(vec![entry("a", &["b"])]), "")
            .is_empty());
        assert_eq!(menu.resolve(MenuAction::SpellingSuggestion(0)), None);
    }

    #[test]
    fn test_strip_annotation() {
        assert_eq!(strip_annotation("quick (rapid)"), "quick");
        assert_eq!(strip_annotation("plain"), "plain");
        assert_eq!(strip_annotation("(noun)"), "");
        assert_eq!(strip_annotation("x(y)"), "");
        assert_eq!(strip_annotation("caf\u{e9} (n)"), "caf\u{e9}");
        assert_eq!(strip_annotation("caf\u{e9}(n)"), "caf");
    }
}
