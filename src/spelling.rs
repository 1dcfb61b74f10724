//! Spell checker and thesaurus collaborators
//!
//! The engines themselves live outside this crate. The edit box only needs
//! the narrow contracts below. An absent spell checker or thesaurus is an
//! `Option::None` at the call site, never an error.

/// Spell checking service
pub trait SpellChecker {
    /// Is `word` correctly spelled in the current language?
    fn check_word(&self, word: &str) -> bool;

    /// Ordered replacement candidates for `word`
    fn suggestions(&self, word: &str) -> Vec<String>;

    /// Whether `word` may be added to the user dictionary
    fn can_add_word(&self, word: &str) -> bool;

    /// Add `word` to the user dictionary
    fn add_word(&mut self, word: &str) -> Result<(), String>;

    /// Installed dictionary language codes
    fn language_list(&self) -> Vec<String>;

    /// Switch dictionaries. An empty code disables checking.
    fn set_language(&mut self, _language: &str) {}
}

/// One thesaurus result: a headword and its synonyms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThesaurusEntry {
    pub headword: String,
    pub synonyms: Vec<String>,
}

impl ThesaurusEntry {
    pub fn new(headword: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self {
            headword: headword.into(),
            synonyms,
        }
    }
}

/// Thesaurus lookup service
pub trait Thesaurus {
    /// Results grouped by headword, in display order
    fn lookup(&self, word: &str) -> Vec<ThesaurusEntry>;

    /// Installed thesaurus language codes
    fn language_list(&self) -> Vec<String>;

    /// Switch thesaurus language. An empty code disables lookups.
    fn set_language(&mut self, _language: &str) {}
}
