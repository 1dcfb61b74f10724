//! Style projection tests - run coverage, coverage repair, indicators

mod common;

use common::{flat, styled_len, test_box, DialogueLexer, FakeSpell};
use subedit::position::CaretPos;
use subedit::syntax::{
    project_styles, Indicator, PlainTokenizer, StyleOptions, SyntaxStyle, Token, TokenKind,
    Tokenizer,
};
use subedit::{update, Cmd, Msg};

const SAMPLES: &[&str] = &[
    "",
    "a",
    "Hello wrold",
    "{\\pos(10,20)}Hello",
    "{\\fs20\\c&H0000FF&}Big {\\i1}italic{\\i0}\\Nline two",
    "{unclosed \\b1",
    "}{}{",
    "caf\u{e9} \u{65e5}\u{672c} \u{1F600}!",
    "{\\k20}ka{\\k15}ra{\\kf30}oke",
    "\\N\\n\\h",
];

fn options(highlighting: bool, template_line: bool) -> StyleOptions {
    StyleOptions {
        highlighting,
        template_line,
    }
}

// ========================================================================
// Coverage
// ========================================================================

#[test]
fn test_runs_sum_to_text_length_for_every_sample() {
    for text in SAMPLES {
        for tokens in [PlainTokenizer.tokenize(text), DialogueLexer.tokenize(text)] {
            for opts in [
                options(true, false),
                options(true, true),
                options(false, false),
            ] {
                let styling = project_styles(text, &tokens, opts, None);
                assert_eq!(styling.total_len(), text.len(), "{:?} {:?}", text, opts);
                assert!(styling.runs.iter().all(|run| run.len > 0));
            }
        }
    }
}

#[test]
fn test_highlighting_disabled_is_one_normal_run() {
    let text = "{\\b1}bold";
    let styling = project_styles(text, &DialogueLexer.tokenize(text), options(false, false), None);
    assert_eq!(styling.runs.len(), 1);
    assert_eq!(styling.runs[0].style, SyntaxStyle::Normal);
    assert_eq!(styling.runs[0].len, text.len());
}

#[test]
fn test_short_token_stream_gets_unclassified_tail() {
    let text = "Hello world";
    let tokens = [Token::new(TokenKind::Word, 5)];
    let styling = project_styles(text, &tokens, options(true, false), None);

    assert_eq!(styling.total_len(), text.len());
    let last = styling.runs.last().unwrap();
    assert_eq!(last.style, SyntaxStyle::Unclassified);
    assert_eq!(last.len, 6);
}

#[test]
fn test_no_tokens_at_all_is_fully_unclassified() {
    let styling = project_styles("abc", &[], options(true, false), None);
    assert_eq!(styling.runs.len(), 1);
    assert_eq!(styling.runs[0].style, SyntaxStyle::Unclassified);
}

#[test]
fn test_overlong_token_stream_is_clipped() {
    let text = "abc";
    let tokens = [
        Token::new(TokenKind::Word, 2),
        Token::new(TokenKind::Word, 10),
        Token::new(TokenKind::Comment, 4),
    ];
    let styling = project_styles(text, &tokens, options(true, false), None);
    assert_eq!(styling.total_len(), 3);
    assert_eq!(styling.runs.len(), 1);
}

// ========================================================================
// Spelling indicators
// ========================================================================

#[test]
fn test_misspelled_words_get_indicator_over_base_style() {
    let text = "Hello wrold";
    let spell = FakeSpell::knowing(&["Hello"]);
    let styling = project_styles(
        text,
        &PlainTokenizer.tokenize(text),
        options(true, false),
        Some(&spell),
    );

    assert_eq!(styling.runs.len(), 1);
    assert_eq!(styling.indicator_len(), text.len());
    let indicators: Vec<_> = styling
        .indicators
        .iter()
        .map(|r| (r.indicator, r.len))
        .collect();
    assert_eq!(
        indicators,
        vec![(Indicator::None, 6), (Indicator::Misspelled, 5)]
    );
}

#[test]
fn test_indicators_cover_unclassified_tail() {
    let text = "ab cd";
    let spell = FakeSpell::knowing(&[]);
    let tokens = [Token::new(TokenKind::Word, 2)];
    let styling = project_styles(text, &tokens, options(true, false), Some(&spell));
    assert_eq!(styling.total_len(), 5);
    assert_eq!(styling.indicator_len(), 5);
}

// ========================================================================
// Through the edit box
// ========================================================================

#[test]
fn test_every_edit_restyles_full_buffer() {
    let mut edit_box = test_box("").with_tokenizer(DialogueLexer);

    let mut caret = 0;
    for piece in ["{\\b1}", "Hi ", "\u{1F600}", "\\N", "x"] {
        let cmds = flat(update(
            &mut edit_box,
            Msg::Edit {
                start: CaretPos(caret),
                end: CaretPos(caret),
                text: piece.to_string(),
            },
        ));
        caret += piece.encode_utf16().count();
        assert_eq!(styled_len(&cmds), Some(edit_box.text().len()));
    }
    assert_eq!(edit_box.text(), "{\\b1}Hi \u{1F600}\\Nx");
}

#[test]
fn test_caret_move_does_not_resend_identical_styling() {
    let mut edit_box = test_box("Hello world");
    let cmds = flat(update(&mut edit_box, Msg::SetTemplateLine(true)));
    assert!(cmds.iter().any(|c| matches!(c, Cmd::ApplyStyling(_))));

    let cmds = flat(update(&mut edit_box, Msg::CaretMoved(CaretPos(2))));
    assert!(!cmds.iter().any(|c| matches!(c, Cmd::ApplyStyling(_))));
}

#[test]
fn test_disabling_highlighting_restyles() {
    let mut edit_box = test_box("{\\b1}x").with_tokenizer(DialogueLexer);
    edit_box.config().set_syntax_highlighting(false);

    let mut cmds = Vec::new();
    for msg in edit_box.pump_config() {
        cmds.extend(flat(update(&mut edit_box, msg)));
    }
    let styling = cmds
        .iter()
        .find_map(|c| match c {
            Cmd::ApplyStyling(s) => Some(s),
            _ => None,
        })
        .expect("restyle after highlighting toggle");
    assert_eq!(styling.runs.len(), 1);
    assert_eq!(styling.runs[0].style, SyntaxStyle::Normal);
}
