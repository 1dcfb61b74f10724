//! Error type for edit box operations
//!
//! Empty buffers, empty words and empty suggestion lists are ordinary states
//! and never show up here. These variants cover logic defects (stale spans,
//! unknown menu ids) and failures reported by external services.

use crate::position::CharRange;

/// Errors that can occur while applying an edit or a menu action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Replacement range is inverted or extends past the buffer
    RangeOutOfBounds { range: CharRange, len: usize },
    /// No word exists at the position the menu was opened for
    StaleWordSpan,
    /// Menu id outside every known range, or past the end of its list
    UnknownMenuId(u32),
    /// Clipboard could not be read or written
    Clipboard(String),
    /// Spell checker refused to add a word
    Dictionary(String),
}

impl EditError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Clipboard(msg) => format!("Clipboard unavailable: {}", msg),
            Self::Dictionary(msg) => format!("Could not add word to dictionary: {}", msg),
            other => format!("Edit aborted: {}", other),
        }
    }
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RangeOutOfBounds { range, len } => write!(
                f,
                "range {}..{} out of bounds (len {})",
                range.start.get(),
                range.end.get(),
                len
            ),
            Self::StaleWordSpan => write!(f, "word span no longer exists"),
            Self::UnknownMenuId(id) => write!(f, "unknown menu id {}", id),
            Self::Clipboard(msg) => write!(f, "clipboard: {}", msg),
            Self::Dictionary(msg) => write!(f, "dictionary: {}", msg),
        }
    }
}

impl std::error::Error for EditError {}
