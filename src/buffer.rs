//! Rope-backed text buffer for the edit box.
//!
//! All mutation goes through [`TextBuffer::replace`], so every edit (typing,
//! paste, suggestion replacement, programmatic set) has the same shape.

use ropey::Rope;

use crate::error::EditError;
use crate::position::{BytePos, CharPos, CharRange};

#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a TextBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total length in bytes
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Full content as String
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Text inside `range`, clamped to the buffer
    pub fn slice(&self, range: CharRange) -> String {
        let len = self.len_chars();
        let start = range.start.get().min(len);
        let end = range.end.get().min(len);
        self.rope.slice(start..end).to_string()
    }

    /// Byte offset to char offset, rounding down inside a character
    pub fn byte_to_char(&self, pos: BytePos) -> CharPos {
        let byte = pos.get().min(self.len_bytes());
        CharPos(self.rope.byte_to_char(byte))
    }

    pub fn char_to_byte(&self, pos: CharPos) -> BytePos {
        let ch = pos.get().min(self.len_chars());
        BytePos(self.rope.char_to_byte(ch))
    }

    /// Replace `range` with `text`.
    ///
    /// The buffer is untouched when the range does not fit.
    pub fn replace(&mut self, range: CharRange, text: &str) -> Result<(), EditError> {
        let len = self.len_chars();
        if range.start > range.end || range.end.get() > len {
            return Err(EditError::RangeOutOfBounds { range, len });
        }
        if !range.is_empty() {
            self.rope.remove(range.start.get()..range.end.get());
        }
        if !text.is_empty() {
            self.rope.insert(range.start.get(), text);
        }
        Ok(())
    }

    /// Set content: a replace over the full range
    pub fn set_text(&mut self, text: &str) {
        let all = self.full_range();
        if let Err(e) = self.replace(all, text) {
            tracing::error!("Full-buffer replace rejected: {}", e);
        }
    }

    /// Range covering the whole buffer
    pub fn full_range(&self) -> CharRange {
        CharRange::new(CharPos::zero(), CharPos(self.len_chars()))
    }
}
