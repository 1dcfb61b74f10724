//! Buffer-changing messages

use crate::clipboard::normalize_line_breaks;
use crate::commands::Cmd;
use crate::editbox::{EditBox, Selection};
use crate::error::EditError;
use crate::position::{caret_to_char, CaretPos, CharRange};

use super::{refresh_after_edit, set_text_cmd};

/// The widget already shows the edit; mirror it into the buffer
pub(super) fn edit(model: &mut EditBox, start: CaretPos, end: CaretPos, text: &str) -> Vec<Cmd> {
    if model.is_editing() {
        tracing::trace!("Ignoring edit echoed during a programmatic change");
        return Vec::new();
    }

    let current = model.buffer.text();
    let range = CharRange::new(caret_to_char(&current, start), caret_to_char(&current, end));
    if let Err(e) = model.buffer.replace(range, text) {
        tracing::warn!("Widget edit does not fit the buffer: {}", e);
        return vec![Cmd::ReportError(e.user_message())];
    }

    let caret = range.start + text.chars().count();
    model.selection = Selection::caret(caret);
    refresh_after_edit(model)
}

/// Replace the whole buffer, keeping the selection where it still fits
pub(super) fn set_text(model: &mut EditBox, text: &str) -> Vec<Cmd> {
    model.buffer.set_text(text);
    model.selection = model.selection.clamped(model.buffer.len_chars());

    let mut cmds = vec![set_text_cmd(model)];
    cmds.extend(refresh_after_edit(model));
    cmds
}

/// Replace `range` with `text` and select the inserted text.
///
/// The buffer is left untouched if the range no longer fits.
pub(super) fn replace_and_select(
    model: &mut EditBox,
    range: CharRange,
    text: &str,
) -> Result<Vec<Cmd>, EditError> {
    replace(model, range, text, true)
}

fn replace(
    model: &mut EditBox,
    range: CharRange,
    text: &str,
    select_inserted: bool,
) -> Result<Vec<Cmd>, EditError> {
    model.buffer.replace(range, text)?;

    let end = range.start + text.chars().count();
    model.selection = if select_inserted {
        Selection {
            anchor: range.start,
            head: end,
        }
    } else {
        Selection::caret(end)
    };

    let mut cmds = vec![set_text_cmd(model)];
    cmds.extend(refresh_after_edit(model));
    Ok(cmds)
}

pub(super) fn text_applied(model: &mut EditBox) -> Vec<Cmd> {
    if !model.finish_host_edit() {
        tracing::debug!("Text applied with no replacement pending");
    }
    Vec::new()
}

/// Insert the clipboard over the selection, with line endings turned into
/// `\N` markers. An empty clipboard still deletes the selection.
pub(super) fn paste(model: &mut EditBox) -> Vec<Cmd> {
    let data = match model.clipboard_mut().read() {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Clipboard read failed: {}", e);
            return vec![Cmd::ReportError(EditError::Clipboard(e).user_message())];
        }
    };
    let range = model.selection.range();
    if data.is_empty() && range.is_empty() {
        return Vec::new();
    }

    let data = normalize_line_breaks(&data);
    replace(model, range, &data, false).unwrap_or_else(|e| {
        tracing::warn!("Paste aborted: {}", e);
        vec![Cmd::ReportError(e.user_message())]
    })
}

/// Copy the selection to the clipboard, optionally deleting it
pub(super) fn copy_selection(model: &mut EditBox, cut: bool) -> Vec<Cmd> {
    let range = model.selection.range();
    if range.is_empty() {
        return Vec::new();
    }

    let selected = model.buffer.slice(range);
    if let Err(e) = model.clipboard_mut().write(&selected) {
        tracing::warn!("Clipboard write failed: {}", e);
        return vec![Cmd::ReportError(EditError::Clipboard(e).user_message())];
    }
    if !cut {
        return Vec::new();
    }

    replace(model, range, "", false).unwrap_or_else(|e| {
        tracing::warn!("Cut aborted: {}", e);
        vec![Cmd::ReportError(e.user_message())]
    })
}

pub(super) fn select_all(model: &mut EditBox) -> Vec<Cmd> {
    let all = model.buffer.full_range();
    model.selection = Selection {
        anchor: all.start,
        head: all.end,
    };
    let mut cmds = vec![super::selection_cmd(model)];
    cmds.extend(super::update_calltip(model));
    cmds
}
