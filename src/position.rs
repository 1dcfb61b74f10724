//! Typed text offsets and the translations between them.
//!
//! The edit box deals with three coordinate spaces over the same text:
//!
//! - [`BytePos`]: UTF-8 byte offsets (tokenizer and styling unit)
//! - [`CharPos`]: Unicode scalar value offsets (buffer edits, word spans)
//! - [`CaretPos`]: toolkit-native caret offsets, counted in UTF-16 code units
//!
//! Each space is its own type so offsets cannot be mixed by accident. Moving
//! between spaces always goes through one of the translation functions here.
//! Every translation is total: offsets past the end clamp to the end, and an
//! offset that lands inside an encoded character rounds down to that
//! character's start.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

macro_rules! offset_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub usize);

        impl $name {
            pub const fn new(offset: usize) -> Self {
                Self(offset)
            }

            pub const fn zero() -> Self {
                Self(0)
            }

            /// Raw offset value
            pub const fn get(self) -> usize {
                self.0
            }

            pub fn saturating_sub(self, n: usize) -> Self {
                Self(self.0.saturating_sub(n))
            }
        }

        impl Add<usize> for $name {
            type Output = $name;

            fn add(self, rhs: usize) -> Self::Output {
                Self(self.0 + rhs)
            }
        }

        /// Distance between two offsets of the same space
        impl Sub for $name {
            type Output = usize;

            fn sub(self, rhs: Self) -> Self::Output {
                self.0.saturating_sub(rhs.0)
            }
        }
    };
}

offset_type!(
    /// Byte offset into UTF-8 text
    BytePos
);
offset_type!(
    /// Offset counted in Unicode scalar values
    CharPos
);
offset_type!(
    /// Toolkit-native caret offset (UTF-16 code units)
    CaretPos
);

/// Half-open span `[start, end)` in code-point space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharRange {
    pub start: CharPos,
    pub end: CharPos,
}

impl CharRange {
    /// Create a range, normalizing so that `start <= end`
    pub fn new(a: CharPos, b: CharPos) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn collapsed(pos: CharPos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True if `pos` lies inside the range or on either edge
    pub fn touches(&self, pos: CharPos) -> bool {
        self.start <= pos && pos <= self.end
    }
}

/// Largest char boundary in `text` that is `<= byte`
fn floor_char_boundary(text: &str, byte: usize) -> usize {
    let mut byte = byte.min(text.len());
    while !text.is_char_boundary(byte) {
        byte -= 1;
    }
    byte
}

/// Convert a byte offset to a code-point offset.
pub fn to_char_pos(text: &str, pos: BytePos) -> CharPos {
    let byte = floor_char_boundary(text, pos.0);
    CharPos(text[..byte].chars().count())
}

/// Convert a code-point offset to a byte offset.
pub fn to_byte_pos(text: &str, pos: CharPos) -> BytePos {
    BytePos(
        text.char_indices()
            .nth(pos.0)
            .map(|(i, _)| i)
            .unwrap_or(text.len()),
    )
}

/// Convert a UTF-16 caret offset to a code-point offset.
pub fn caret_to_char(text: &str, pos: CaretPos) -> CharPos {
    let mut units = 0;
    let mut chars = 0;
    for ch in text.chars() {
        units += ch.len_utf16();
        if units > pos.0 {
            break;
        }
        chars += 1;
    }
    CharPos(chars)
}

/// Convert a code-point offset to a UTF-16 caret offset.
pub fn char_to_caret(text: &str, pos: CharPos) -> CaretPos {
    CaretPos(text.chars().take(pos.0).map(char::len_utf16).sum())
}

pub fn caret_to_byte(text: &str, pos: CaretPos) -> BytePos {
    to_byte_pos(text, caret_to_char(text, pos))
}

pub fn byte_to_caret(text: &str, pos: BytePos) -> CaretPos {
    char_to_caret(text, to_char_pos(text, pos))
}

/// Length of `text` in UTF-16 code units
pub fn caret_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}
