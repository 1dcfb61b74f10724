//! Context menu: building it, and acting on what the user picked

use crate::commands::{Cmd, SplitMode};
use crate::config::LanguageKind;
use crate::editbox::{EditBox, Mode};
use crate::error::EditError;
use crate::menu::{ContextMenu, EditState, MenuAction, SuggestionMenu};
use crate::position::{caret_to_char, CaretPos};
use crate::syntax::word_at;

use super::{config, refresh, text};

pub(super) fn open(model: &mut EditBox, at: Option<CaretPos>) -> Vec<Cmd> {
    let current = model.buffer.text();
    let position = match at {
        Some(pos) => caret_to_char(&current, pos),
        None => model.selection.head,
    };
    let word = word_at(&model.tokens, &current, position)
        .map(|span| model.buffer.slice(span))
        .unwrap_or_default();

    let mut suggestions = SuggestionMenu::new(word, position);
    let mut menu = ContextMenu::new();
    if !suggestions.word().is_empty() {
        let spell_language = model.language(LanguageKind::SpellChecker);
        if let Some(checker) = model.spell_checker() {
            menu.extend(suggestions.spelling_section(checker, &spell_language));
        }
        let thesaurus_language = model.language(LanguageKind::Thesaurus);
        if let Some(thesaurus) = model.thesaurus() {
            menu.extend(suggestions.thesaurus_section(thesaurus, &thesaurus_language));
        }
    }

    let can_paste = model.clipboard_mut().has_text();
    menu.push_edit_section(EditState {
        has_selection: !model.selection.is_empty(),
        can_paste,
        line_attached: model.line_attached,
    });

    tracing::debug!(
        "Context menu for {:?}: {} spelling, {} thesaurus suggestions",
        suggestions.word(),
        suggestions.spelling_suggestions().len(),
        suggestions.thesaurus_suggestions().len()
    );
    model.menu = Some(suggestions);
    model.mode = Mode::MenuOpen;
    vec![Cmd::PopupMenu(menu)]
}

pub(super) fn dismiss(model: &mut EditBox) -> Vec<Cmd> {
    model.menu = None;
    model.mode = Mode::Idle;
    Vec::new()
}

pub(super) fn select_id(model: &mut EditBox, id: u32) -> Vec<Cmd> {
    match MenuAction::from_id(id) {
        Some(action) => select(model, action),
        None => {
            tracing::warn!("{}", EditError::UnknownMenuId(id));
            dismiss(model)
        }
    }
}

pub(super) fn select(model: &mut EditBox, action: MenuAction) -> Vec<Cmd> {
    let menu = model.menu.take();
    model.mode = Mode::Idle;

    match action {
        MenuAction::Cut => text::copy_selection(model, true),
        MenuAction::Copy => text::copy_selection(model, false),
        MenuAction::Paste => text::paste(model),
        MenuAction::SelectAll => text::select_all(model),
        MenuAction::SplitPreserve => split(model, SplitMode::PreserveTimes),
        MenuAction::SplitEstimate => split(model, SplitMode::EstimateTimes),
        MenuAction::AddToDictionary => match menu {
            Some(menu) => add_to_dictionary(model, menu.word()),
            None => stale_menu(action),
        },
        MenuAction::SpellingSuggestion(_) | MenuAction::ThesaurusSuggestion(_) => match menu {
            Some(menu) => apply_suggestion(model, &menu, action),
            None => stale_menu(action),
        },
        MenuAction::SetLanguage(kind, index) => match menu {
            Some(menu) => set_language(model, &menu, kind, index),
            None => stale_menu(action),
        },
    }
}

fn stale_menu(action: MenuAction) -> Vec<Cmd> {
    tracing::warn!("{:?} selected with no open menu, ignoring", action);
    Vec::new()
}

fn split(model: &mut EditBox, mode: SplitMode) -> Vec<Cmd> {
    if !model.line_attached {
        tracing::warn!("Split requested on an edit box with no line");
        return Vec::new();
    }
    vec![Cmd::SplitLine(mode)]
}

/// Replace the word under the menu position with the chosen suggestion.
///
/// The word span is looked up again in the current buffer. If no word is
/// there any more, nothing is replaced.
fn apply_suggestion(model: &mut EditBox, menu: &SuggestionMenu, action: MenuAction) -> Vec<Cmd> {
    let Some(replacement) = menu.resolve(action) else {
        let id = action.id().unwrap_or_default();
        tracing::warn!("Suggestion aborted: {}", EditError::UnknownMenuId(id));
        return Vec::new();
    };

    let current = model.buffer.text();
    let Some(span) = word_at(&model.tokens, &current, menu.position()) else {
        tracing::warn!("Suggestion aborted: {}", EditError::StaleWordSpan);
        return Vec::new();
    };

    tracing::debug!(
        "Replacing {:?} with {:?}",
        model.buffer.slice(span),
        replacement
    );
    text::replace_and_select(model, span, &replacement).unwrap_or_else(|e| {
        tracing::warn!("Suggestion aborted: {}", e);
        Vec::new()
    })
}

fn add_to_dictionary(model: &mut EditBox, word: &str) -> Vec<Cmd> {
    let Some(checker) = model.spell_checker_mut() else {
        return Vec::new();
    };
    if let Err(e) = checker.add_word(word) {
        let error = EditError::Dictionary(e);
        tracing::warn!("{}", error);
        return vec![Cmd::ReportError(error.user_message())];
    }
    tracing::debug!("Added {:?} to dictionary", word);
    refresh(model, true)
}

/// Persist a language choice; the service and styling follow through the
/// config change it raises
fn set_language(
    model: &mut EditBox,
    menu: &SuggestionMenu,
    kind: LanguageKind,
    index: Option<usize>,
) -> Vec<Cmd> {
    let Some(language) = menu.language(kind, index) else {
        let id = MenuAction::SetLanguage(kind, index).id().unwrap_or_default();
        tracing::warn!("Language change aborted: {}", EditError::UnknownMenuId(id));
        return Vec::new();
    };

    model.config().set_language(kind, language);
    config::apply_pending(model)
}
