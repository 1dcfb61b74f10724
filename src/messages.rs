//! Message types for the Elm-style architecture
//!
//! Everything the host widget reports to the edit box arrives as a [`Msg`].
//! Positions coming from the host are in its native caret space.

use crate::config::ConfigKey;
use crate::menu::MenuAction;
use crate::position::CaretPos;

/// Input events handled by [`crate::update::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    // === Text ===
    /// The user changed the widget text: `start..end` was replaced by `text`
    Edit {
        start: CaretPos,
        end: CaretPos,
        text: String,
    },
    /// Replace the whole buffer programmatically (e.g. another line selected)
    SetText(String),
    /// Paste from the clipboard over the current selection
    Paste,
    /// The host finished applying the last `Cmd::SetText`
    TextApplied,

    // === Caret and focus ===
    CaretMoved(CaretPos),
    SelectionChanged { anchor: CaretPos, head: CaretPos },
    FocusLost,

    // === Context menu ===
    /// Open the menu at a pointer position, or at the caret for `None`
    ContextMenu { at: Option<CaretPos> },
    MenuSelected(MenuAction),
    /// Same as [`Msg::MenuSelected`] for hosts that only report numeric ids
    MenuSelectedId(u32),
    MenuDismissed,

    // === Environment ===
    ConfigChanged(ConfigKey),
    /// The active line became, or stopped being, a karaoke template line
    SetTemplateLine(bool),
}
