//! Context menu description handed to the host
//!
//! The edit box never draws menus. It produces a [`ContextMenu`] tree and
//! gets back the [`MenuAction`] (or its numeric id) the user picked.

mod action;
mod suggestions;

pub use action::{
    MenuAction, COMMAND_BASE, RANGE_SIZE, SPELLING_BASE, SPELL_LANGUAGE_BASE, THESAURUS_BASE,
    THESAURUS_LANGUAGE_BASE,
};
pub use suggestions::{strip_annotation, SuggestionMenu};

use serde::Serialize;

/// One menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuItem {
    Action {
        label: String,
        action: MenuAction,
        enabled: bool,
    },
    Radio {
        label: String,
        action: MenuAction,
        checked: bool,
    },
    Submenu {
        label: String,
        items: Vec<MenuItem>,
    },
    Separator,
    /// Disabled entry with no action ("No thesaurus suggestions")
    Placeholder { label: String },
}

impl MenuItem {
    /// Enabled action entry, or `None` if the action has no id to carry
    pub fn action(label: &str, action: MenuAction) -> Option<MenuItem> {
        action.id()?;
        Some(MenuItem::Action {
            label: label.to_string(),
            action,
            enabled: true,
        })
    }

    pub fn placeholder(label: &str) -> MenuItem {
        MenuItem::Placeholder {
            label: label.to_string(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            MenuItem::Action { label, .. }
            | MenuItem::Radio { label, .. }
            | MenuItem::Submenu { label, .. }
            | MenuItem::Placeholder { label } => Some(label),
            MenuItem::Separator => None,
        }
    }

    pub fn action_of(&self) -> Option<MenuAction> {
        match self {
            MenuItem::Action { action, .. } | MenuItem::Radio { action, .. } => Some(*action),
            _ => None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            MenuItem::Action { enabled, .. } => *enabled,
            MenuItem::Placeholder { .. } | MenuItem::Separator => false,
            MenuItem::Radio { .. } | MenuItem::Submenu { .. } => true,
        }
    }
}

/// State of the edit box the standard section depends on
#[derive(Debug, Clone, Copy, Default)]
pub struct EditState {
    pub has_selection: bool,
    pub can_paste: bool,
    /// Attached to a subtitle line, so splitting is possible
    pub line_attached: bool,
}

/// Complete menu, top level first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextMenu {
    pub items: Vec<MenuItem>,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = MenuItem>) {
        self.items.extend(items);
    }

    /// Append Cut/Copy/Paste/Select All and, for line-attached boxes, the
    /// split commands
    pub fn push_edit_section(&mut self, state: EditState) {
        let item = |label: &str, action, enabled| MenuItem::Action {
            label: label.to_string(),
            action,
            enabled,
        };

        self.items.extend([
            item("Cut", MenuAction::Cut, state.has_selection),
            item("Copy", MenuAction::Copy, state.has_selection),
            item("Paste", MenuAction::Paste, state.can_paste),
            MenuItem::Separator,
            item("Select All", MenuAction::SelectAll, true),
        ]);

        if state.line_attached {
            self.items.extend([
                MenuItem::Separator,
                item(
                    "Split at cursor (preserve times)",
                    MenuAction::SplitPreserve,
                    true,
                ),
                item(
                    "Split at cursor (estimate times)",
                    MenuAction::SplitEstimate,
                    true,
                ),
            ]);
        }
    }

    /// Depth-first search for the entry carrying `action`
    pub fn find(&self, action: MenuAction) -> Option<&MenuItem> {
        fn walk(items: &[MenuItem], action: MenuAction) -> Option<&MenuItem> {
            items.iter().find_map(|item| match item {
                MenuItem::Submenu { items, .. } => walk(items, action),
                other if other.action_of() == Some(action) => Some(other),
                _ => None,
            })
        }
        walk(&self.items, action)
    }

    /// Every action in the menu, depth first
    pub fn actions(&self) -> Vec<MenuAction> {
        fn walk(items: &[MenuItem], out: &mut Vec<MenuAction>) {
            for item in items {
                match item {
                    MenuItem::Submenu { items, .. } => walk(items, out),
                    other => out.extend(other.action_of()),
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.items, &mut out);
        out
    }
}
