//! Tokenizer collaborator and word lookup over a token stream

use crate::position::{to_byte_pos, to_char_pos, BytePos, CharPos, CharRange};
use crate::util::{char_type, CharType};

use super::token::{token_spans, Token, TokenKind};

/// Turns dialogue text into an ordered token stream.
///
/// Implementations must be pure functions of `text`. The token lengths are
/// expected to sum to `text.len()`, but consumers repair streams that don't.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Fallback tokenizer used when no dialogue lexer is wired in.
///
/// Splits text into words, whitespace and punctuation, and recognises the
/// `\N`, `\n` and `\h` line-break markers. Override blocks are not parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTokenizer;

impl Tokenizer for PlainTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == '\\' {
                if let Some('N' | 'n' | 'h') = chars.peek() {
                    chars.next();
                    tokens.push(Token::new(TokenKind::LineBreak, 2));
                    continue;
                }
            }

            let kind = match char_type(ch) {
                CharType::WordChar => TokenKind::Word,
                CharType::Whitespace => TokenKind::Whitespace,
                CharType::Punctuation => TokenKind::Text,
            };
            let len = ch.len_utf8();

            // Line breaks always stand alone; everything else extends its run
            match tokens.last_mut() {
                Some(last) if last.kind == kind => last.len += len,
                _ => tokens.push(Token::new(kind, len)),
            }
        }

        tokens
    }
}

/// Find the word touching `pos`.
///
/// A word containing `pos` wins; otherwise a word ending exactly at `pos`
/// (caret just after the last letter) is returned.
pub fn word_at(tokens: &[Token], text: &str, pos: CharPos) -> Option<CharRange> {
    let byte = to_byte_pos(text, pos);
    let mut ending_here = None;

    for (start, token) in token_spans(tokens) {
        if token.kind != TokenKind::Word {
            continue;
        }
        let end = start + token.len;
        if start <= byte && byte < end {
            return Some(byte_span_to_chars(text, start, end));
        }
        if end == byte {
            ending_here = Some(byte_span_to_chars(text, start, end));
        }
        if start > byte {
            break;
        }
    }

    ending_here
}

fn byte_span_to_chars(text: &str, start: BytePos, end: BytePos) -> CharRange {
    CharRange::new(to_char_pos(text, start), to_char_pos(text, end))
}
