//! Override tag prototypes and the default calltip provider

use crate::position::BytePos;
use crate::syntax::{Token, TokenKind};

use super::{Calltip, CalltipProvider};

/// Signature of one override tag overload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagPrototype {
    /// Tag name without the backslash
    pub name: &'static str,
    /// Argument list as shown in the tip, parentheses included if any
    pub args: &'static str,
}

impl TagPrototype {
    const fn new(name: &'static str, args: &'static str) -> Self {
        Self { name, args }
    }

    fn has_parens(&self) -> bool {
        self.args.starts_with('(')
    }

    fn arg_count(&self) -> usize {
        if self.has_parens() {
            self.args.split(',').count()
        } else {
            1
        }
    }

    /// Tip text, e.g. `\pos(X,Y)`
    fn text(&self) -> String {
        format!("\\{}{}", self.name, self.args)
    }

    /// Byte range of argument `index` within [`Self::text`]
    fn arg_range(&self, index: usize) -> Option<(usize, usize)> {
        let prefix = 1 + self.name.len();
        if !self.has_parens() {
            return (index == 0).then_some((prefix, prefix + self.args.len()));
        }

        let inner = &self.args[1..self.args.len() - 1];
        let mut offset = prefix + 1;
        for (i, arg) in inner.split(',').enumerate() {
            if i == index {
                return Some((offset, offset + arg.len()));
            }
            offset += arg.len() + 1;
        }
        None
    }
}

/// Overloads are listed shortest first; lookup takes the first one with room
/// for the argument under the caret.
pub const TAG_PROTOTYPES: &[TagPrototype] = &[
    TagPrototype::new("move", "(X1,Y1,X2,Y2)"),
    TagPrototype::new("move", "(X1,Y1,X2,Y2,StartTime,EndTime)"),
    TagPrototype::new("fn", "FontName"),
    TagPrototype::new("bord", "Width"),
    TagPrototype::new("xbord", "Width"),
    TagPrototype::new("ybord", "Width"),
    TagPrototype::new("shad", "Depth"),
    TagPrototype::new("xshad", "Depth"),
    TagPrototype::new("yshad", "Depth"),
    TagPrototype::new("be", "Strength"),
    TagPrototype::new("blur", "Strength"),
    TagPrototype::new("fscx", "Scale"),
    TagPrototype::new("fscy", "Scale"),
    TagPrototype::new("fsp", "Spacing"),
    TagPrototype::new("fs", "FontSize"),
    TagPrototype::new("fe", "Encoding"),
    TagPrototype::new("frx", "Angle"),
    TagPrototype::new("fry", "Angle"),
    TagPrototype::new("frz", "Angle"),
    TagPrototype::new("fr", "Angle"),
    TagPrototype::new("fax", "Factor"),
    TagPrototype::new("fay", "Factor"),
    TagPrototype::new("pbo", "Offset"),
    TagPrototype::new("clip", "(Command)"),
    TagPrototype::new("clip", "(Scale,Command)"),
    TagPrototype::new("clip", "(X1,Y1,X2,Y2)"),
    TagPrototype::new("iclip", "(Command)"),
    TagPrototype::new("iclip", "(Scale,Command)"),
    TagPrototype::new("iclip", "(X1,Y1,X2,Y2)"),
    TagPrototype::new("t", "(Tags)"),
    TagPrototype::new("t", "(Acceleration,Tags)"),
    TagPrototype::new("t", "(StartTime,EndTime,Tags)"),
    TagPrototype::new("t", "(StartTime,EndTime,Acceleration,Tags)"),
    TagPrototype::new("pos", "(X,Y)"),
    TagPrototype::new("p", "Exponent"),
    TagPrototype::new("org", "(X,Y)"),
    TagPrototype::new("fade", "(StartAlpha,MidAlpha,EndAlpha,StartIn,EndIn,StartOut,EndOut)"),
    TagPrototype::new("fad", "(FadeInDuration,FadeOutDuration)"),
    TagPrototype::new("c", "Colour"),
    TagPrototype::new("1c", "Colour"),
    TagPrototype::new("2c", "Colour"),
    TagPrototype::new("3c", "Colour"),
    TagPrototype::new("4c", "Colour"),
    TagPrototype::new("alpha", "Alpha"),
    TagPrototype::new("1a", "Alpha"),
    TagPrototype::new("2a", "Alpha"),
    TagPrototype::new("3a", "Alpha"),
    TagPrototype::new("4a", "Alpha"),
    TagPrototype::new("an", "Alignment"),
    TagPrototype::new("a", "Alignment"),
    TagPrototype::new("b", "Weight"),
    TagPrototype::new("i", "1/0"),
    TagPrototype::new("u", "1/0"),
    TagPrototype::new("s", "1/0"),
    TagPrototype::new("kf", "Duration"),
    TagPrototype::new("ko", "Duration"),
    TagPrototype::new("k", "Duration"),
    TagPrototype::new("K", "Duration"),
    TagPrototype::new("q", "WrapStyle"),
    TagPrototype::new("r", "Style"),
];

/// Calltips for ASS override tags.
///
/// Needs a dialogue lexer that emits `TagStart`/`TagName`/`ArgSep` tokens;
/// with any other token stream it never produces a tip.
#[derive(Debug, Clone, Copy)]
pub struct TagCalltips {
    prototypes: &'static [TagPrototype],
}

impl Default for TagCalltips {
    fn default() -> Self {
        Self {
            prototypes: TAG_PROTOTYPES,
        }
    }
}

impl TagCalltips {
    /// Overloads for the tag named by `name`.
    ///
    /// Lexers differ on whether a numeric argument is split from the name
    /// (`fs20` vs `fs` + `20`), so when there is no exact match the longest
    /// prototype name that prefixes `name` is used.
    fn overloads(&self, name: &str) -> Vec<&TagPrototype> {
        let exact: Vec<_> = self.prototypes.iter().filter(|p| p.name == name).collect();
        if !exact.is_empty() {
            return exact;
        }

        let Some(longest) = self
            .prototypes
            .iter()
            .filter(|p| name.starts_with(p.name))
            .map(|p| p.name.len())
            .max()
        else {
            return Vec::new();
        };
        self.prototypes
            .iter()
            .filter(|p| p.name.len() == longest && name.starts_with(p.name))
            .collect()
    }
}

impl CalltipProvider for TagCalltips {
    fn calltip(&self, tokens: &[Token], text: &str, caret: BytePos) -> Calltip {
        let mut remaining = caret.get();
        let mut offset = 0;
        // (token index, byte start) of the tag name the caret is inside
        let mut tag: Option<(usize, usize)> = None;
        let mut separators = 0;

        for (idx, token) in tokens.iter().enumerate() {
            if remaining == 0 {
                break;
            }
            match token.kind {
                TokenKind::Comment | TokenKind::OverrideEnd => tag = None,
                TokenKind::TagName => {
                    tag = Some((idx, offset));
                    separators = 0;
                }
                TokenKind::ArgSep => separators += 1,
                _ => {}
            }
            remaining = remaining.saturating_sub(token.len);
            offset = offset.saturating_add(token.len);
        }

        let Some((idx, name_start)) = tag else {
            return Calltip::default();
        };
        let Some(name) = text.get(name_start..name_start.saturating_add(tokens[idx].len)) else {
            return Calltip::default();
        };

        let Some(proto) = self
            .overloads(name)
            .into_iter()
            .find(|p| p.arg_count() > separators)
        else {
            return Calltip::default();
        };

        let anchor = match idx.checked_sub(1).map(|prev| tokens[prev].kind) {
            Some(TokenKind::TagStart) => name_start.saturating_sub(tokens[idx - 1].len),
            _ => name_start,
        };
        let (highlight_start, highlight_end) = proto.arg_range(separators).unwrap_or((0, 0));

        Calltip {
            text: proto.text(),
            anchor: BytePos(anchor),
            highlight_start,
            highlight_end,
        }
    }
}
