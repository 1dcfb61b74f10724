//! Caret, selection and focus messages

use crate::commands::Cmd;
use crate::editbox::{EditBox, Selection};
use crate::position::{caret_to_char, CaretPos};

use super::refresh;

pub(super) fn select(model: &mut EditBox, anchor: CaretPos, head: CaretPos) -> Vec<Cmd> {
    if model.is_editing() {
        return Vec::new();
    }

    let text = model.buffer.text();
    let selection = Selection {
        anchor: caret_to_char(&text, anchor),
        head: caret_to_char(&text, head),
    };
    if selection == model.selection {
        return Vec::new();
    }
    model.selection = selection;
    refresh(model, false)
}

pub(super) fn focus_lost(model: &mut EditBox) -> Vec<Cmd> {
    model.tracker.focus_lost();
    vec![Cmd::CancelCalltip]
}
