//! Command types for the Elm-style architecture
//!
//! Commands are the side effects the host performs after an update. The
//! edit box never touches the widget directly.

use crate::menu::ContextMenu;
use crate::position::CaretPos;
use crate::style::StyleSheet;
use crate::syntax::Styling;

/// How a split subtitle line's times are assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// Both halves keep the original start and end time
    PreserveTimes,
    /// Time is divided in proportion to the text on either side
    EstimateTimes,
}

/// Side effects for the host widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Execute multiple commands, in order
    Batch(Vec<Cmd>),

    // === Styling ===
    /// Replace all style and indicator runs
    ApplyStyling(Styling),
    /// Fonts or colours changed
    SetStyles(StyleSheet),

    // === Calltip ===
    ShowCalltip { anchor: CaretPos, text: String },
    /// Byte range within the calltip text to highlight
    SetCalltipHighlight { start: usize, end: usize },
    CancelCalltip,

    // === Text ===
    /// Replace the widget text and select `anchor..head`, then answer with
    /// `Msg::TextApplied`. Widget edits are ignored until then.
    SetText {
        text: String,
        anchor: CaretPos,
        head: CaretPos,
    },
    SetSelection { anchor: CaretPos, head: CaretPos },

    // === Other ===
    PopupMenu(ContextMenu),
    /// Ask the owning subtitle grid to split the line at the caret
    SplitLine(SplitMode),
    /// Show a message to the user
    ReportError(String),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// `None` for no commands, the command itself for one, a batch otherwise
    pub fn collapse(mut cmds: Vec<Cmd>) -> Option<Cmd> {
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// All leaf commands in execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
