//! Menu actions and their numeric ids
//!
//! Hosts that can carry a payload on a menu entry use [`MenuAction`]
//! directly. Hosts limited to integer command ids go through
//! [`MenuAction::id`] / [`MenuAction::from_id`]. Each dynamic list owns a
//! disjoint id range of [`RANGE_SIZE`] ids; list entries that would not fit
//! have no id and are left out of the menu.

use serde::Serialize;

use crate::config::LanguageKind;

/// First id of the fixed edit commands
pub const COMMAND_BASE: u32 = 1400;
pub const SPELLING_BASE: u32 = 2000;
pub const THESAURUS_BASE: u32 = 3000;
/// `SPELL_LANGUAGE_BASE` itself is "Disable"; language `i` is `base + 1 + i`
pub const SPELL_LANGUAGE_BASE: u32 = 4000;
pub const THESAURUS_LANGUAGE_BASE: u32 = 5000;
pub const RANGE_SIZE: u32 = 1000;

/// What selecting a menu entry does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    Cut,
    Copy,
    Paste,
    SelectAll,
    /// Split the subtitle line at the caret, both halves keep the line's times
    SplitPreserve,
    /// Split the subtitle line at the caret, times divided by text length
    SplitEstimate,
    AddToDictionary,
    SpellingSuggestion(usize),
    ThesaurusSuggestion(usize),
    /// `None` disables the service
    SetLanguage(LanguageKind, Option<usize>),
}

const FIXED: [MenuAction; 7] = [
    MenuAction::Cut,
    MenuAction::Copy,
    MenuAction::Paste,
    MenuAction::SelectAll,
    MenuAction::SplitPreserve,
    MenuAction::SplitEstimate,
    MenuAction::AddToDictionary,
];

fn indexed(base: u32, index: usize) -> Option<u32> {
    u32::try_from(index)
        .ok()
        .filter(|&i| i < RANGE_SIZE)
        .map(|i| base + i)
}

fn language_base(kind: LanguageKind) -> u32 {
    match kind {
        LanguageKind::SpellChecker => SPELL_LANGUAGE_BASE,
        LanguageKind::Thesaurus => THESAURUS_LANGUAGE_BASE,
    }
}

impl MenuAction {
    /// Numeric id, or `None` if a list index is past its range
    pub fn id(&self) -> Option<u32> {
        match *self {
            MenuAction::SpellingSuggestion(i) => indexed(SPELLING_BASE, i),
            MenuAction::ThesaurusSuggestion(i) => indexed(THESAURUS_BASE, i),
            MenuAction::SetLanguage(kind, None) => Some(language_base(kind)),
            MenuAction::SetLanguage(kind, Some(i)) => {
                // slot 0 is taken by "Disable"
                let base = language_base(kind);
                indexed(base + 1, i).filter(|&id| id < base + RANGE_SIZE)
            }
            fixed => FIXED
                .iter()
                .position(|&a| a == fixed)
                .map(|i| COMMAND_BASE + i as u32),
        }
    }

    /// Inverse of [`Self::id`]. Ids outside every range give `None`.
    pub fn from_id(id: u32) -> Option<MenuAction> {
        let in_range = |base: u32| (base..base + RANGE_SIZE).contains(&id);

        if (COMMAND_BASE..COMMAND_BASE + FIXED.len() as u32).contains(&id) {
            return Some(FIXED[(id - COMMAND_BASE) as usize]);
        }
        if in_range(SPELLING_BASE) {
            return Some(MenuAction::SpellingSuggestion((id - SPELLING_BASE) as usize));
        }
        if in_range(THESAURUS_BASE) {
            return Some(MenuAction::ThesaurusSuggestion(
                (id - THESAURUS_BASE) as usize,
            ));
        }
        for kind in [LanguageKind::SpellChecker, LanguageKind::Thesaurus] {
            let base = language_base(kind);
            if in_range(base) {
                let index = (id - base) as usize;
                return Some(MenuAction::SetLanguage(kind, index.checked_sub(1)));
            }
        }
        None
    }
}
