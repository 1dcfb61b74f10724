//! Style projection: token stream to contiguous style runs
//!
//! Produces two passes over the buffer. The base pass classifies every byte
//! by token kind; the indicator pass marks misspelled words. Both passes are
//! contiguous and sum to the buffer length, so the styling surface can apply
//! them independently (indicator after base).

use serde::{Deserialize, Serialize};

use crate::spelling::SpellChecker;

use super::token::{token_spans, Token, TokenKind};

/// Style ids understood by the styling surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxStyle {
    Normal = 0,
    Comment,
    Drawing,
    /// Override block braces
    Override,
    /// Backslashes, parentheses and argument separators
    Punctuation,
    Tag,
    Error,
    Parameter,
    LineBreak,
    KaraokeTemplate,
    KaraokeVariable,
    /// Text the tokenizer failed to account for
    Unclassified,
}

impl SyntaxStyle {
    /// Every style, in id order
    pub const ALL: [SyntaxStyle; 12] = [
        SyntaxStyle::Normal,
        SyntaxStyle::Comment,
        SyntaxStyle::Drawing,
        SyntaxStyle::Override,
        SyntaxStyle::Punctuation,
        SyntaxStyle::Tag,
        SyntaxStyle::Error,
        SyntaxStyle::Parameter,
        SyntaxStyle::LineBreak,
        SyntaxStyle::KaraokeTemplate,
        SyntaxStyle::KaraokeVariable,
        SyntaxStyle::Unclassified,
    ];

    /// Numeric id passed to the styling surface
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Name of the colour category this style is configured under
    pub fn category_name(self) -> &'static str {
        match self {
            SyntaxStyle::Normal | SyntaxStyle::Unclassified => "Normal",
            SyntaxStyle::Comment => "Comment",
            SyntaxStyle::Drawing => "Drawing",
            SyntaxStyle::Override => "Brackets",
            SyntaxStyle::Punctuation => "Slashes",
            SyntaxStyle::Tag => "Tags",
            SyntaxStyle::Error => "Error",
            SyntaxStyle::Parameter => "Parameters",
            SyntaxStyle::LineBreak => "Line Break",
            SyntaxStyle::KaraokeTemplate => "Karaoke Template",
            SyntaxStyle::KaraokeVariable => "Karaoke Variable",
        }
    }

    fn for_token(kind: TokenKind, template_line: bool) -> Self {
        match kind {
            TokenKind::Text | TokenKind::Word | TokenKind::Whitespace => SyntaxStyle::Normal,
            TokenKind::Comment => SyntaxStyle::Comment,
            TokenKind::Drawing => SyntaxStyle::Drawing,
            TokenKind::OverrideBegin | TokenKind::OverrideEnd => SyntaxStyle::Override,
            TokenKind::TagStart
            | TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::ArgSep => SyntaxStyle::Punctuation,
            TokenKind::TagName => SyntaxStyle::Tag,
            TokenKind::Arg => SyntaxStyle::Parameter,
            TokenKind::Error => SyntaxStyle::Error,
            TokenKind::LineBreak => SyntaxStyle::LineBreak,
            TokenKind::KaraokeTemplate if template_line => SyntaxStyle::KaraokeTemplate,
            TokenKind::KaraokeVariable if template_line => SyntaxStyle::KaraokeVariable,
            TokenKind::KaraokeTemplate | TokenKind::KaraokeVariable => SyntaxStyle::Normal,
        }
    }
}

/// Decoration drawn over the base style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    None,
    /// Red squiggle under a misspelled word
    Misspelled,
}

/// A contiguous run of bytes sharing one base style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRun {
    pub len: usize,
    pub style: SyntaxStyle,
}

/// A contiguous run of bytes sharing one indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorRun {
    pub len: usize,
    pub indicator: Indicator,
}

/// Result of one styling pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Styling {
    /// Base classification, applied first
    pub runs: Vec<StyleRun>,
    /// Spelling decoration, applied after `runs`. Empty when no spell
    /// checker is available.
    pub indicators: Vec<IndicatorRun>,
}

impl Styling {
    /// Sum of base run lengths
    pub fn total_len(&self) -> usize {
        self.runs.iter().map(|r| r.len).sum()
    }

    /// Sum of indicator run lengths
    pub fn indicator_len(&self) -> usize {
        self.indicators.iter().map(|r| r.len).sum()
    }

    fn push_style(&mut self, len: usize, style: SyntaxStyle) {
        if len == 0 {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.style == style => last.len += len,
            _ => self.runs.push(StyleRun { len, style }),
        }
    }

    fn push_indicator(&mut self, len: usize, indicator: Indicator) {
        if len == 0 {
            return;
        }
        match self.indicators.last_mut() {
            Some(last) if last.indicator == indicator => last.len += len,
            _ => self.indicators.push(IndicatorRun { len, indicator }),
        }
    }
}

/// Inputs to a styling pass other than text and tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOptions {
    /// Syntax highlighting enabled in configuration
    pub highlighting: bool,
    /// The active line is a karaoke template line
    pub template_line: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            highlighting: true,
            template_line: false,
        }
    }
}

/// Project `tokens` over `text` into style runs.
///
/// Guarantees: runs are contiguous and sum to `text.len()`; an empty text
/// yields no runs; with highlighting disabled the whole text is one
/// `Normal` run. Token streams that fall short of the text get a trailing
/// `Unclassified` run, and streams that overshoot are clipped.
pub fn project_styles(
    text: &str,
    tokens: &[Token],
    options: StyleOptions,
    spell: Option<&dyn SpellChecker>,
) -> Styling {
    let mut styling = Styling::default();
    let len = text.len();

    if !options.highlighting {
        styling.push_style(len, SyntaxStyle::Normal);
        return styling;
    }

    if text.is_empty() {
        return styling;
    }

    let mut covered = 0;
    for (start, token) in token_spans(tokens) {
        let start = start.get();
        if start >= len {
            tracing::warn!("Token stream overshoots text of {} bytes, clipping", len);
            break;
        }
        let token_len = token.len.min(len - start);
        styling.push_style(token_len, SyntaxStyle::for_token(token.kind, options.template_line));

        if let Some(spell) = spell {
            let misspelled = token.kind == TokenKind::Word
                && text
                    .get(start..start + token_len)
                    .is_some_and(|word| !spell.check_word(word));
            let indicator = if misspelled {
                Indicator::Misspelled
            } else {
                Indicator::None
            };
            styling.push_indicator(token_len, indicator);
        }

        covered = start + token_len;
    }

    if covered < len {
        tracing::warn!(
            "Token stream covers {} of {} bytes, styling remainder as unclassified",
            covered,
            len
        );
        styling.push_style(len - covered, SyntaxStyle::Unclassified);
        if spell.is_some() {
            styling.push_indicator(len - covered, Indicator::None);
        }
    }

    styling
}

/// Karaoke template lines are comments whose effect starts with "template"
pub fn is_template_line(comment: bool, effect: &str) -> bool {
    comment
        && effect
            .get(..8)
            .is_some_and(|head| head.eq_ignore_ascii_case("template"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnlyKnows(&'static [&'static str]);

    impl SpellChecker for OnlyKnows {
        fn check_word(&self, word: &str) -> bool {
            self.0.contains(&word)
        }
        fn suggestions(&self, _word: &str) -> Vec<String> {
            Vec::new()
        }
        fn can_add_word(&self, _word: &str) -> bool {
            false
        }
        fn add_word(&mut self, _word: &str) -> Result<(), String> {
            Ok(())
        }
        fn language_list(&self) -> Vec<String> {
            Vec::new()
        }
    }

    fn tok(kind: TokenKind, len: usize) -> Token {
        Token::new(kind, len)
    }

    /// `{\pos(1,2)}Hi`
    fn pos_tokens() -> Vec<Token> {
        vec![
            tok(TokenKind::OverrideBegin, 1),
            tok(TokenKind::TagStart, 1),
            tok(TokenKind::TagName, 3),
            tok(TokenKind::OpenParen, 1),
            tok(TokenKind::Arg, 1),
            tok(TokenKind::ArgSep, 1),
            tok(TokenKind::Arg, 1),
            tok(TokenKind::CloseParen, 1),
            tok(TokenKind::OverrideEnd, 1),
            tok(TokenKind::Word, 2),
        ]
    }

    #[test]
    fn test_empty_text_has_no_runs() {
        let styling = project_styles("", &[], StyleOptions::default(), None);
        assert!(styling.runs.is_empty());
        assert!(styling.indicators.is_empty());
    }

    #[test]
    fn test_disabled_is_single_normal_run() {
        let options = StyleOptions {
            highlighting: false,
            template_line: false,
        };
        let styling = project_styles("{\\b1}x", &[], options, None);
        assert_eq!(
            styling.runs,
            vec![StyleRun {
                len: 6,
                style: SyntaxStyle::Normal
            }]
        );
    }

    #[test]
    fn test_override_block_classification() {
        let text = "{\\pos(1,2)}Hi";
        let styling = project_styles(text, &pos_tokens(), StyleOptions::default(), None);
        let styles: Vec<(SyntaxStyle, usize)> =
            styling.runs.iter().map(|r| (r.style, r.len)).collect();
        assert_eq!(
            styles,
            vec![
                (SyntaxStyle::Override, 1),
                (SyntaxStyle::Punctuation, 1),
                (SyntaxStyle::Tag, 3),
                (SyntaxStyle::Punctuation, 1),
                (SyntaxStyle::Parameter, 1),
                (SyntaxStyle::Punctuation, 1),
                (SyntaxStyle::Parameter, 1),
                (SyntaxStyle::Punctuation, 1),
                (SyntaxStyle::Override, 1),
                (SyntaxStyle::Normal, 2),
            ]
        );
        assert_eq!(styling.total_len(), text.len());
    }

    #[test]
    fn test_adjacent_same_style_runs_merge() {
        let tokens = [
            tok(TokenKind::Word, 5),
            tok(TokenKind::Whitespace, 1),
            tok(TokenKind::Word, 5),
        ];
        let styling = project_styles("Hello wrold", &tokens, StyleOptions::default(), None);
        assert_eq!(styling.runs.len(), 1);
        assert_eq!(styling.total_len(), 11);
    }

    #[test]
    fn test_short_token_stream_gets_unclassified_tail() {
        let tokens = [tok(TokenKind::Word, 3)];
        let styling = project_styles("abcdef", &tokens, StyleOptions::default(), None);
        assert_eq!(styling.total_len(), 6);
        assert_eq!(
            styling.runs.last(),
            Some(&StyleRun {
                len: 3,
                style: SyntaxStyle::Unclassified
            })
        );
    }

    #[test]
    fn test_long_token_stream_is_clipped() {
        let tokens = [tok(TokenKind::Word, 4), tok(TokenKind::Comment, 10)];
        let styling = project_styles("abcdef", &tokens, StyleOptions::default(), None);
        assert_eq!(styling.total_len(), 6);
        assert_eq!(styling.runs[1].len, 2);
    }

    #[test]
    fn test_token_lengths_near_usize_max_are_clipped() {
        let tokens = [tok(TokenKind::Word, usize::MAX), tok(TokenKind::Comment, 1)];
        let styling = project_styles("abc", &tokens, StyleOptions::default(), None);
        assert_eq!(styling.total_len(), 3);
        assert_eq!(styling.runs.len(), 1);
        assert_eq!(styling.runs[0].style, SyntaxStyle::Normal);
    }

    #[test]
    fn test_karaoke_styles_only_on_template_lines() {
        let tokens = [tok(TokenKind::KaraokeTemplate, 3), tok(TokenKind::KaraokeVariable, 2)];
        let plain = project_styles("!x!$a", &tokens, StyleOptions::default(), None);
        assert_eq!(plain.runs.len(), 1);
        assert_eq!(plain.runs[0].style, SyntaxStyle::Normal);

        let options = StyleOptions {
            highlighting: true,
            template_line: true,
        };
        let template = project_styles("!x!$a", &tokens, options, None);
        assert_eq!(template.runs[0].style, SyntaxStyle::KaraokeTemplate);
        assert_eq!(template.runs[1].style, SyntaxStyle::KaraokeVariable);
    }

    #[test]
    fn test_misspelling_is_separate_pass() {
        let tokens = [
            tok(TokenKind::Word, 5),
            tok(TokenKind::Whitespace, 1),
            tok(TokenKind::Word, 5),
        ];
        let spell = OnlyKnows(&["Hello"]);
        let styling = project_styles("Hello wrold", &tokens, StyleOptions::default(), Some(&spell));

        // base pass is unaffected by spelling
        assert_eq!(styling.runs.len(), 1);
        assert_eq!(
            styling.indicators,
            vec![
                IndicatorRun {
                    len: 6,
                    indicator: Indicator::None
                },
                IndicatorRun {
                    len: 5,
                    indicator: Indicator::Misspelled
                },
            ]
        );
        assert_eq!(styling.indicator_len(), 11);
    }

    #[test]
    fn test_no_spell_checker_means_no_indicators() {
        let tokens = [tok(TokenKind::Word, 5)];
        let styling = project_styles("wrold", &tokens, StyleOptions::default(), None);
        assert!(styling.indicators.is_empty());
    }

    #[test]
    fn test_template_line_detection() {
        assert!(is_template_line(true, "template line"));
        assert!(is_template_line(true, "Template"));
        assert!(!is_template_line(false, "template"));
        assert!(!is_template_line(true, "code once"));
        assert!(!is_template_line(true, "temp"));
    }
}
