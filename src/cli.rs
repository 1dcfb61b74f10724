//! Command-line arguments for the `subedit` inspection tool
//!
//! Runs one line of subtitle text through the edit box core and prints what
//! a host widget would be told: style runs, the calltip at the caret and,
//! on request, the context menu.

use std::path::PathBuf;

use clap::Parser;

/// Inspect styling, calltips and menus for a line of ASS subtitle text
#[derive(Parser, Debug)]
#[command(name = "subedit", version, about = "ASS subtitle edit box inspector")]
pub struct CliArgs {
    /// Line text, e.g. '{\pos(10,20)}Hello'
    #[arg(long)]
    pub text: String,

    /// Caret offset in UTF-16 code units (defaults to the end of the text)
    #[arg(long, value_name = "N")]
    pub caret: Option<usize>,

    /// JSON token stream from an external dialogue lexer
    #[arg(long, value_name = "FILE")]
    pub tokens: Option<PathBuf>,

    /// Treat the line as a karaoke template line
    #[arg(long)]
    pub template_line: bool,

    /// Config file to use instead of the user config
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also print the context menu for the caret position
    #[arg(long)]
    pub menu: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
