//! Calltips for override tags under the caret

mod prototypes;
mod tracker;

pub use prototypes::{TagCalltips, TagPrototype, TAG_PROTOTYPES};
pub use tracker::{CalltipEffect, CalltipState, CalltipTracker};

use serde::Serialize;

use crate::position::BytePos;
use crate::syntax::Token;

/// Tip for the position under the caret.
///
/// `highlight_start..highlight_end` is a byte range within `text`. An empty
/// `text` means no tip applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Calltip {
    pub text: String,
    /// Byte offset in the buffer where the tip is anchored
    pub anchor: BytePos,
    pub highlight_start: usize,
    pub highlight_end: usize,
}

impl Calltip {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Computes the tip for a caret position
pub trait CalltipProvider {
    fn calltip(&self, tokens: &[Token], text: &str, caret: BytePos) -> Calltip;
}
