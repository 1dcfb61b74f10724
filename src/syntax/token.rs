//! Token stream produced by the dialogue lexer

use serde::{Deserialize, Serialize};

use crate::position::BytePos;

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Plain text that is not a spellable word (punctuation runs, digits)
    Text,
    /// A spellable word
    Word,
    /// `\N`, `\n` or `\h`
    LineBreak,
    /// `{` opening an override block
    OverrideBegin,
    /// `}` closing an override block
    OverrideEnd,
    /// The backslash introducing a tag
    TagStart,
    /// Tag name without its backslash (`pos`, `fs`, `1c`)
    TagName,
    OpenParen,
    CloseParen,
    /// Comma between tag arguments
    ArgSep,
    /// A tag argument
    Arg,
    /// Unrecognised or malformed input
    Error,
    /// Free text inside an override block
    Comment,
    Whitespace,
    /// Vector drawing commands (`\p1` mode)
    Drawing,
    /// Karaoke template code (`!...!`)
    KaraokeTemplate,
    /// Karaoke template variable (`$var`)
    KaraokeVariable,
}

/// A classified span of the buffer. `len` is in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub len: usize,
}

impl Token {
    pub const fn new(kind: TokenKind, len: usize) -> Self {
        Self { kind, len }
    }
}

/// Pair each token with the byte offset where it starts
pub fn token_spans(tokens: &[Token]) -> impl Iterator<Item = (BytePos, &Token)> + '_ {
    tokens.iter().scan(0usize, |offset, token| {
        let start = *offset;
        *offset = offset.saturating_add(token.len);
        Some((BytePos(start), token))
    })
}
