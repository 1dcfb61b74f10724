//! Colours and the style sheet handed to the styling surface
//!
//! The style sheet is derived entirely from [`EditBoxConfig`]; it is rebuilt
//! whenever a font or syntax colour key changes.

use serde::{Deserialize, Serialize};

use crate::config::EditBoxConfig;
use crate::syntax::{Indicator, SyntaxStyle};

/// RGB colour, serialized as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from "#RRGGBB" (leading `#` optional)
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("Invalid color {}: {}", s, e))
        };
        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Configured appearance of one syntax category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxColour {
    pub foreground: Color,
    /// Only applied when set; otherwise the surface background shows through
    #[serde(default)]
    pub background: Option<Color>,
    #[serde(default)]
    pub bold: bool,
}

impl SyntaxColour {
    pub const fn plain(foreground: Color) -> Self {
        Self {
            foreground,
            background: None,
            bold: false,
        }
    }

    /// Built-in appearance for a category
    pub fn default_for(style: SyntaxStyle) -> Self {
        match style {
            SyntaxStyle::Normal | SyntaxStyle::Unclassified => Self::plain(Color::rgb(0, 0, 0)),
            SyntaxStyle::Comment => Self::plain(Color::rgb(128, 128, 128)),
            SyntaxStyle::Drawing => Self::plain(Color::rgb(0, 0, 0)),
            SyntaxStyle::Override => Self {
                foreground: Color::rgb(20, 50, 255),
                background: None,
                bold: true,
            },
            SyntaxStyle::Punctuation => Self::plain(Color::rgb(255, 0, 200)),
            SyntaxStyle::Tag => Self::plain(Color::rgb(90, 90, 90)),
            SyntaxStyle::Error => Self {
                foreground: Color::rgb(200, 0, 0),
                background: Some(Color::rgb(255, 200, 200)),
                bold: false,
            },
            SyntaxStyle::Parameter => Self::plain(Color::rgb(40, 90, 40)),
            SyntaxStyle::LineBreak => Self::plain(Color::rgb(160, 160, 160)),
            SyntaxStyle::KaraokeTemplate => Self::plain(Color::rgb(128, 0, 192)),
            SyntaxStyle::KaraokeVariable => Self::plain(Color::rgb(128, 0, 192)),
        }
    }
}

/// Everything the surface needs to paint one style id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDef {
    pub style: SyntaxStyle,
    /// Empty means the system GUI font
    pub font_face: String,
    pub font_size: u32,
    pub colour: SyntaxColour,
}

/// Appearance of an indicator channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorDef {
    pub indicator: Indicator,
    pub squiggle: bool,
    pub color: Color,
}

/// Full style configuration for the styling surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    pub styles: Vec<StyleDef>,
    pub misspelling: IndicatorDef,
}

impl StyleSheet {
    pub fn from_config(config: &EditBoxConfig) -> Self {
        let styles = SyntaxStyle::ALL
            .iter()
            .map(|&style| StyleDef {
                style,
                font_face: config.font_face.clone(),
                font_size: config.font_size,
                colour: config.syntax_colour(style),
            })
            .collect();

        Self {
            styles,
            misspelling: IndicatorDef {
                indicator: Indicator::Misspelled,
                squiggle: true,
                color: Color::rgb(255, 0, 0),
            },
        }
    }

    pub fn get(&self, style: SyntaxStyle) -> Option<&StyleDef> {
        self.styles.iter().find(|def| def.style == style)
    }
}
