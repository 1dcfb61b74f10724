//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use subedit::clipboard::Clipboard;
use subedit::spelling::{SpellChecker, Thesaurus, ThesaurusEntry};
use subedit::syntax::{PlainTokenizer, Token, TokenKind, Tokenizer};
use subedit::{Cmd, ConfigBus, EditBox, EditBoxConfig};

// ========================================================================
// Spell checker
// ========================================================================

/// Dictionary of known words plus canned suggestions.
///
/// Observable state is shared through `Rc` so tests can inspect it after the
/// checker has been moved into an edit box.
#[derive(Clone, Default)]
pub struct FakeSpell {
    pub known: Rc<RefCell<Vec<String>>>,
    pub suggestions: HashMap<String, Vec<String>>,
    pub language: Rc<RefCell<String>>,
    pub languages: Vec<String>,
    pub refuse_add: Option<String>,
}

impl FakeSpell {
    pub fn knowing(words: &[&str]) -> Self {
        Self {
            known: Rc::new(RefCell::new(words.iter().map(|w| w.to_string()).collect())),
            languages: vec!["en_US".to_string(), "fr_FR".to_string()],
            ..Self::default()
        }
    }

    pub fn suggest(mut self, word: &str, suggestions: &[&str]) -> Self {
        self.suggestions.insert(
            word.to_string(),
            suggestions.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

impl SpellChecker for FakeSpell {
    fn check_word(&self, word: &str) -> bool {
        self.known.borrow().iter().any(|w| w == word)
    }

    fn suggestions(&self, word: &str) -> Vec<String> {
        self.suggestions.get(word).cloned().unwrap_or_default()
    }

    fn can_add_word(&self, word: &str) -> bool {
        !word.is_empty()
    }

    fn add_word(&mut self, word: &str) -> Result<(), String> {
        if let Some(reason) = &self.refuse_add {
            return Err(reason.clone());
        }
        self.known.borrow_mut().push(word.to_string());
        Ok(())
    }

    fn language_list(&self) -> Vec<String> {
        self.languages.clone()
    }

    fn set_language(&mut self, language: &str) {
        *self.language.borrow_mut() = language.to_string();
    }
}

// ========================================================================
// Thesaurus
// ========================================================================

#[derive(Clone, Default)]
pub struct FakeThesaurus {
    pub entries: HashMap<String, Vec<ThesaurusEntry>>,
    pub language: Rc<RefCell<String>>,
}

impl FakeThesaurus {
    pub fn with(mut self, word: &str, headword: &str, synonyms: &[&str]) -> Self {
        self.entries
            .entry(word.to_string())
            .or_default()
            .push(ThesaurusEntry::new(
                headword,
                synonyms.iter().map(|s| s.to_string()).collect(),
            ));
        self
    }
}

impl Thesaurus for FakeThesaurus {
    fn lookup(&self, word: &str) -> Vec<ThesaurusEntry> {
        self.entries.get(word).cloned().unwrap_or_default()
    }

    fn language_list(&self) -> Vec<String> {
        vec!["en_US".to_string()]
    }

    fn set_language(&mut self, language: &str) {
        *self.language.borrow_mut() = language.to_string();
    }
}

// ========================================================================
// Clipboard
// ========================================================================

/// In-memory clipboard; `contents: None` simulates an unavailable clipboard
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn holding(text: &str) -> Self {
        Self {
            contents: Rc::new(RefCell::new(Some(text.to_string()))),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn read(&mut self) -> Result<String, String> {
        self.contents
            .borrow()
            .clone()
            .ok_or_else(|| "clipboard unavailable".to_string())
    }

    fn write(&mut self, text: &str) -> Result<(), String> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

// ========================================================================
// Dialogue lexer
// ========================================================================

/// Minimal ASS dialogue lexer: override blocks are split into tag tokens,
/// everything else goes through the plain tokenizer.
pub struct DialogueLexer;

impl Tokenizer for DialogueLexer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            match rest.find('{') {
                Some(0) => {
                    let end = rest.find('}').map(|i| i + 1).unwrap_or(rest.len());
                    lex_override(&rest[..end], &mut tokens);
                    rest = &rest[end..];
                }
                Some(i) => {
                    tokens.extend(PlainTokenizer.tokenize(&rest[..i]));
                    rest = &rest[i..];
                }
                None => {
                    tokens.extend(PlainTokenizer.tokenize(rest));
                    rest = "";
                }
            }
        }
        tokens
    }
}

fn lex_override(block: &str, out: &mut Vec<Token>) {
    let closed = block.len() > 1 && block.ends_with('}');
    let inner_end = if closed { block.len() - 1 } else { block.len() };

    out.push(Token::new(TokenKind::OverrideBegin, 1));
    let mut i = 1;
    let mut expect_name = false;
    while i < inner_end {
        let rest = &block[i..inner_end];
        let c = rest.chars().next().unwrap();
        let (kind, len) = match c {
            '\\' => {
                expect_name = true;
                (TokenKind::TagStart, 1)
            }
            '(' => (TokenKind::OpenParen, 1),
            ')' => (TokenKind::CloseParen, 1),
            ',' => (TokenKind::ArgSep, 1),
            _ if expect_name => {
                expect_name = false;
                let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
                let letters = rest[digits..]
                    .chars()
                    .take_while(|c| c.is_ascii_alphabetic())
                    .count();
                if letters == 0 {
                    (TokenKind::Error, c.len_utf8())
                } else {
                    (TokenKind::TagName, digits + letters)
                }
            }
            _ => {
                let len = rest
                    .find(|c| matches!(c, '\\' | '(' | ')' | ','))
                    .unwrap_or(rest.len());
                (TokenKind::Arg, len)
            }
        };
        out.push(Token::new(kind, len));
        i += len;
    }
    if closed {
        out.push(Token::new(TokenKind::OverrideEnd, 1));
    }
}

// ========================================================================
// Edit box helpers
// ========================================================================

pub fn bus() -> Rc<ConfigBus> {
    ConfigBus::new(EditBoxConfig::default())
}

/// Edit box with `text`, caret at the end, on an empty in-memory clipboard
pub fn test_box(text: &str) -> EditBox {
    EditBox::new(bus())
        .with_clipboard(MemoryClipboard::unavailable())
        .with_text(text)
}

/// Leaf commands of an update result
pub fn flat(cmd: Option<Cmd>) -> Vec<Cmd> {
    cmd.map(Cmd::flatten).unwrap_or_default()
}

/// Total styled length of the last `ApplyStyling` in `cmds`
pub fn styled_len(cmds: &[Cmd]) -> Option<usize> {
    cmds.iter().rev().find_map(|cmd| match cmd {
        Cmd::ApplyStyling(styling) => Some(styling.total_len()),
        _ => None,
    })
}
