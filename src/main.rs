mod cli;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use subedit::calltip::{Calltip, CalltipProvider, TagCalltips};
use subedit::menu::ContextMenu;
use subedit::position::{caret_len, caret_to_byte, CaretPos};
use subedit::syntax::{project_styles, PlainTokenizer, StyleOptions, Styling, Token, Tokenizer};
use subedit::{update, Cmd, ConfigBus, EditBox, EditBoxConfig, Msg};

use cli::CliArgs;

/// Replays a token stream lexed elsewhere
struct Prelexed(Vec<Token>);

impl Tokenizer for Prelexed {
    fn tokenize(&self, _text: &str) -> Vec<Token> {
        self.0.clone()
    }
}

#[derive(Serialize)]
struct Report {
    text: String,
    caret: usize,
    tokens: Vec<Token>,
    styling: Styling,
    calltip: Option<Calltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    menu: Option<ContextMenu>,
}

fn load_tokens(path: &Path) -> Result<Vec<Token>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read token stream {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse token stream {}", path.display()))
}

fn context_menu(
    config: EditBoxConfig,
    args: &CliArgs,
    tokens: &[Token],
    caret: CaretPos,
) -> Option<ContextMenu> {
    let mut edit_box = EditBox::new(ConfigBus::new(config))
        .with_tokenizer(Prelexed(tokens.to_vec()))
        .with_text(&args.text);
    update(&mut edit_box, Msg::ContextMenu { at: Some(caret) })?
        .flatten()
        .into_iter()
        .find_map(|cmd| match cmd {
            Cmd::PopupMenu(menu) => Some(menu),
            _ => None,
        })
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    subedit::tracing::init_with_default(if args.verbose { "debug" } else { "warn" });

    let config = match &args.config {
        Some(path) => EditBoxConfig::load_from(path),
        None => EditBoxConfig::load(),
    };

    let text = args.text.clone();
    let tokens = match &args.tokens {
        Some(path) => load_tokens(path)?,
        None => PlainTokenizer.tokenize(&text),
    };
    let caret = CaretPos(args.caret.unwrap_or_else(|| caret_len(&text)));

    let options = StyleOptions {
        highlighting: config.syntax_highlighting,
        template_line: args.template_line,
    };
    let styling = project_styles(&text, &tokens, options, None);

    let calltip = config
        .call_tips
        .then(|| TagCalltips::default().calltip(&tokens, &text, caret_to_byte(&text, caret)))
        .filter(|tip| !tip.is_empty());

    let menu = if args.menu {
        context_menu(config, &args, &tokens, caret)
    } else {
        None
    };

    let report = Report {
        text,
        caret: caret.get(),
        tokens,
        styling,
        calltip,
        menu,
    };
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{}", json);
    Ok(())
}
