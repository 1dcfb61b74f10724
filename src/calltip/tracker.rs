//! Calltip visibility state machine

use crate::position::BytePos;

use super::Calltip;

/// What the overlay currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CalltipState {
    #[default]
    Hidden,
    Visible {
        anchor: BytePos,
        text: String,
        highlight_start: usize,
        highlight_end: usize,
    },
}

/// Side effect on the calltip overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalltipEffect {
    /// (Re)draw the overlay
    Show { anchor: BytePos, text: String },
    /// Move the highlighted argument of the visible overlay
    Highlight { start: usize, end: usize },
    Cancel,
}

/// Tracks the overlay across caret and text changes.
///
/// A `Show` is only issued when the overlay is hidden or its anchor or text
/// changed; the highlight is reissued on every recomputation.
#[derive(Debug, Clone, Default)]
pub struct CalltipTracker {
    state: CalltipState,
}

impl CalltipTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalltipState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, CalltipState::Visible { .. })
    }

    /// Feed a freshly computed tip for the current caret position
    pub fn update(&mut self, tip: Calltip) -> Vec<CalltipEffect> {
        if tip.is_empty() {
            return self.hide().into_iter().collect();
        }

        let mut effects = Vec::with_capacity(2);
        let redraw = match &self.state {
            CalltipState::Visible { anchor, text, .. } => {
                *anchor != tip.anchor || *text != tip.text
            }
            CalltipState::Hidden => true,
        };
        if redraw {
            tracing::debug!("Showing calltip {:?} at {}", tip.text, tip.anchor.get());
            effects.push(CalltipEffect::Show {
                anchor: tip.anchor,
                text: tip.text.clone(),
            });
        }
        effects.push(CalltipEffect::Highlight {
            start: tip.highlight_start,
            end: tip.highlight_end,
        });

        self.state = CalltipState::Visible {
            anchor: tip.anchor,
            text: tip.text,
            highlight_start: tip.highlight_start,
            highlight_end: tip.highlight_end,
        };
        effects
    }

    /// Calltips switched off; cancels only an overlay that is showing
    pub fn hide(&mut self) -> Option<CalltipEffect> {
        if std::mem::take(&mut self.state) == CalltipState::Hidden {
            return None;
        }
        tracing::debug!("Hiding calltip");
        Some(CalltipEffect::Cancel)
    }

    /// Focus loss always cancels, whatever the tracker believes is showing
    pub fn focus_lost(&mut self) -> CalltipEffect {
        self.state = CalltipState::Hidden;
        CalltipEffect::Cancel
    }
}
