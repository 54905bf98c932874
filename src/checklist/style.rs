//! # Paragraph Styles
//!
//! Lookup table from line kind to paragraph style. The table is plain data:
//! one preset per output mode, partially overridable from configuration.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{LineKind, OutputMode};
use crate::error::ConvertError;

/// Horizontal placement of a paragraph's lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Self = Self(0, 0, 0);

    /// Components scaled to the 0..=1 range PDF colour operators expect.
    pub fn unit(self) -> [f32; 3] {
        [self.0, self.1, self.2].map(|c| f32::from(c) / 255.0)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid colour '{s}' (expected #rrggbb)"));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Rendering attributes of one paragraph class. Sizes are in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub font_size: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub color: Rgb,
    pub alignment: Alignment,
    pub left_indent: f32,
    pub bold: bool,
}

impl ParagraphStyle {
    const fn body(font_size: f32, space: f32) -> Self {
        Self {
            font_size,
            space_before: space,
            space_after: space,
            color: Rgb::BLACK,
            alignment: Alignment::Left,
            left_indent: 0.0,
            bold: false,
        }
    }

    const fn heading(font_size: f32, before: f32, after: f32, color: Rgb) -> Self {
        Self {
            font_size,
            space_before: before,
            space_after: after,
            color,
            alignment: Alignment::Left,
            left_indent: 0.0,
            bold: true,
        }
    }

    const fn indented(self, left_indent: f32) -> Self {
        Self {
            left_indent,
            ..self
        }
    }

    const fn centered(self) -> Self {
        Self {
            alignment: Alignment::Center,
            ..self
        }
    }

    const fn spacer(height: f32) -> Self {
        Self {
            space_before: 0.0,
            space_after: height,
            ..Self::body(0.0, 0.0)
        }
    }

    /// Vertical space a rule occupies.
    pub fn spacer_height(&self) -> f32 {
        self.space_before + self.space_after
    }
}

/// Partial style from configuration. Unset fields keep the preset value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_before: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_after: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_indent: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
}

/// Style lookup table keyed by line kind.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    styles: BTreeMap<LineKind, ParagraphStyle>,
}

const INK_DARK: Rgb = Rgb(0x2c, 0x3e, 0x50);
const INK_SLATE: Rgb = Rgb(0x34, 0x49, 0x5e);

impl StyleTable {
    /// Built-in table for an output mode.
    pub fn preset(mode: OutputMode) -> Self {
        let entries = match mode {
            OutputMode::Plain => [
                (LineKind::Title, ParagraphStyle::heading(14.0, 0.0, 32.0, INK_DARK).centered()),
                (LineKind::Heading, ParagraphStyle::heading(11.0, 15.0, 8.0, INK_SLATE)),
                (LineKind::Subheading, ParagraphStyle::heading(10.0, 8.0, 5.0, INK_DARK)),
                (LineKind::Checkbox, ParagraphStyle::body(9.0, 2.0).indented(15.0)),
                (LineKind::ResultOrNotes, ParagraphStyle::body(9.0, 3.0)),
                (LineKind::Paragraph, ParagraphStyle::body(9.0, 3.0)),
                (LineKind::Rule, ParagraphStyle::spacer(8.0)),
            ],
            OutputMode::Styled => [
                (LineKind::Title, ParagraphStyle::heading(16.0, 0.0, 32.0, INK_DARK).centered()),
                (LineKind::Heading, ParagraphStyle::heading(12.0, 15.0, 10.0, INK_SLATE)),
                (LineKind::Subheading, ParagraphStyle::heading(10.0, 10.0, 5.0, INK_DARK)),
                (LineKind::Checkbox, ParagraphStyle::body(9.0, 2.0).indented(20.0)),
                (LineKind::ResultOrNotes, ParagraphStyle::body(9.0, 3.0)),
                (LineKind::Paragraph, ParagraphStyle::body(9.0, 3.0)),
                (LineKind::Rule, ParagraphStyle::spacer(10.0)),
            ],
        };

        Self {
            styles: entries.into_iter().collect(),
        }
    }

    /// Style for a kind. Blank lines have none.
    pub fn get(&self, kind: LineKind) -> Option<&ParagraphStyle> {
        self.styles.get(&kind)
    }

    /// Style for a kind, falling back to the paragraph style.
    pub fn resolve(&self, kind: LineKind) -> ParagraphStyle {
        self.get(kind)
            .or_else(|| self.get(LineKind::Paragraph))
            .copied()
            .unwrap_or_else(|| ParagraphStyle::body(9.0, 3.0))
    }

    /// Replaces the style of a kind.
    pub fn set(&mut self, kind: LineKind, style: ParagraphStyle) {
        self.styles.insert(kind, style);
    }

    /// Applies configuration overrides and validates the result.
    pub fn apply_overrides(
        &mut self,
        overrides: &BTreeMap<LineKind, StyleOverride>,
    ) -> Result<(), ConvertError> {
        for (kind, patch) in overrides {
            if *kind == LineKind::Blank {
                return Err(ConvertError::rendering("blank lines cannot be styled"));
            }
            let mut style = self.resolve(*kind);

            if let Some(size) = patch.font_size {
                style.font_size = size;
            }
            if let Some(before) = patch.space_before {
                style.space_before = before;
            }
            if let Some(after) = patch.space_after {
                style.space_after = after;
            }
            if let Some(color) = &patch.color {
                style.color = color
                    .parse()
                    .map_err(|e: String| ConvertError::rendering(format!("{kind}: {e}")))?;
            }
            if let Some(alignment) = patch.alignment {
                style.alignment = alignment;
            }
            if let Some(indent) = patch.left_indent {
                style.left_indent = indent;
            }
            if let Some(bold) = patch.bold {
                style.bold = bold;
            }

            self.styles.insert(*kind, style);
        }
        self.validate()
    }

    /// Rejects values the layout cannot honour.
    pub fn validate(&self) -> Result<(), ConvertError> {
        for (kind, style) in &self.styles {
            let sizes = [style.space_before, style.space_after, style.left_indent];
            if sizes.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(ConvertError::rendering(format!(
                    "{kind}: spacing and indent must be non-negative numbers"
                )));
            }
            let needs_font = *kind != LineKind::Rule;
            if needs_font && !(style.font_size.is_finite() && style.font_size > 0.0) {
                return Err(ConvertError::rendering(format!(
                    "{kind}: font size must be positive (got {})",
                    style.font_size
                )));
            }
        }
        Ok(())
    }
}
