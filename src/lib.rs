//! subedit - ASS subtitle edit box core
//!
//! The logic behind a subtitle text edit box, independent of any GUI
//! toolkit: style runs from a token stream, override-tag calltips, spelling
//! and thesaurus context menus, and paste handling. A host widget feeds
//! [`Msg`]s into [`update`] and performs the [`Cmd`]s that come back.

pub mod buffer;
pub mod calltip;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editbox;
pub mod error;
pub mod guard;
pub mod menu;
pub mod messages;
pub mod position;
pub mod spelling;
pub mod style;
pub mod syntax;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{ConfigBus, EditBoxConfig};
pub use editbox::EditBox;
pub use error::EditError;
pub use messages::Msg;
pub use update::update;
