//! Dialogue syntax styling
//!
//! The dialogue lexer is an external collaborator behind [`Tokenizer`]; this
//! module owns what happens to its output:
//!
//! ```text
//! Buffer edit → Tokenizer::tokenize → project_styles → Cmd::ApplyStyling
//!                                   → word_at (menus, suggestion replacement)
//! ```
//!
//! Token lengths and style run lengths are UTF-8 byte counts, which is the
//! unit the styling surface consumes.

mod highlights;
mod token;
mod tokenizer;

pub use highlights::{
    is_template_line, project_styles, Indicator, IndicatorRun, StyleOptions, StyleRun, Styling,
    SyntaxStyle,
};
pub use token::{token_spans, Token, TokenKind};
pub use tokenizer::{word_at, PlainTokenizer, Tokenizer};
