//! Update functions for the Elm-style architecture
//!
//! All state transformations of an [`EditBox`] flow through [`update`].
//! Handlers return the commands they produced; `update` collapses them into
//! a single optional [`Cmd`].

mod caret;
mod config;
mod menu;
mod text;

use crate::calltip::CalltipEffect;
use crate::commands::Cmd;
use crate::editbox::EditBox;
use crate::messages::Msg;
use crate::position::{byte_to_caret, to_byte_pos};
use crate::syntax::{project_styles, StyleOptions};

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
#[inline]
pub fn update(model: &mut EditBox, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut EditBox, msg: Msg) -> Option<Cmd> {
    let cmds = match msg {
        Msg::Edit { start, end, text } => text::edit(model, start, end, &text),
        Msg::SetText(text) => text::set_text(model, &text),
        Msg::Paste => text::paste(model),
        Msg::TextApplied => text::text_applied(model),
        Msg::CaretMoved(pos) => caret::select(model, pos, pos),
        Msg::SelectionChanged { anchor, head } => caret::select(model, anchor, head),
        Msg::FocusLost => caret::focus_lost(model),
        Msg::ContextMenu { at } => menu::open(model, at),
        Msg::MenuSelected(action) => menu::select(model, action),
        Msg::MenuSelectedId(id) => menu::select_id(model, id),
        Msg::MenuDismissed => menu::dismiss(model),
        Msg::ConfigChanged(key) => config::changed(model, key),
        Msg::SetTemplateLine(template_line) => {
            if model.template_line == template_line {
                Vec::new()
            } else {
                model.template_line = template_line;
                refresh(model, true)
            }
        }
    };
    Cmd::collapse(cmds)
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut EditBox, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let before = (model.mode, model.selection);
    let result = update_inner(model, msg);
    if before != (model.mode, model.selection) {
        debug!(
            target: "state",
            mode = ?model.mode,
            anchor = model.selection.anchor.get(),
            head = model.selection.head.get(),
            "state changed"
        );
    }
    result
}

#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        // edits can carry whole pasted paragraphs
        Msg::Edit { start, end, text } => format!(
            "Edit({}..{}, {} bytes)",
            start.get(),
            end.get(),
            text.len()
        ),
        Msg::SetText(text) => format!("SetText({} bytes)", text.len()),
        other => format!("{:?}", other),
    }
}

/// Re-tokenize after the buffer changed, then refresh styling and calltip
pub(crate) fn refresh_after_edit(model: &mut EditBox) -> Vec<Cmd> {
    model.retokenize();
    refresh(model, false)
}

/// Recompute styling and the calltip for the current buffer and caret.
///
/// Styling is only sent when it differs from what the host already has,
/// unless `force` is set (style sheet or spell checker changed).
pub(crate) fn refresh(model: &mut EditBox, force: bool) -> Vec<Cmd> {
    let mut cmds: Vec<Cmd> = restyle(model, force).into_iter().collect();
    cmds.extend(update_calltip(model));
    cmds
}

fn restyle(model: &mut EditBox, force: bool) -> Option<Cmd> {
    let text = model.buffer.text();
    let options = StyleOptions {
        highlighting: model.config().read(|c| c.syntax_highlighting),
        template_line: model.template_line,
    };
    let styling = project_styles(&text, &model.tokens, options, model.spell_checker());

    if !force && model.applied.as_ref() == Some(&styling) {
        return None;
    }
    model.applied = Some(styling.clone());
    Some(Cmd::ApplyStyling(styling))
}

pub(crate) fn update_calltip(model: &mut EditBox) -> Vec<Cmd> {
    if !model.config().read(|c| c.call_tips) {
        return model
            .tracker
            .hide()
            .into_iter()
            .map(|_| Cmd::CancelCalltip)
            .collect();
    }

    let text = model.buffer.text();
    let caret = to_byte_pos(&text, model.selection.head);
    let tip = model
        .calltip_provider()
        .calltip(&model.tokens, &text, caret);

    model
        .tracker
        .update(tip)
        .into_iter()
        .map(|effect| match effect {
            CalltipEffect::Show { anchor, text: tip } => Cmd::ShowCalltip {
                anchor: byte_to_caret(&text, anchor),
                text: tip,
            },
            CalltipEffect::Highlight { start, end } => Cmd::SetCalltipHighlight { start, end },
            CalltipEffect::Cancel => Cmd::CancelCalltip,
        })
        .collect()
}

/// Selection as a host command
pub(crate) fn selection_cmd(model: &EditBox) -> Cmd {
    let (anchor, head) = model.caret_selection();
    Cmd::SetSelection { anchor, head }
}

/// Full text plus selection as a host command. Widget echoes are ignored
/// until the host answers with `Msg::TextApplied`.
pub(crate) fn set_text_cmd(model: &mut EditBox) -> Cmd {
    model.begin_host_edit();
    let (anchor, head) = model.caret_selection();
    Cmd::SetText {
        text: model.buffer.text(),
        anchor,
        head,
    }
}
