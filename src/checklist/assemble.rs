//! # Document Assembly
//!
//! Turns classified lines into styled blocks and lays them out as a flat
//! element sequence: the blocks in input order, a forced page break, then
//! the fixed trailer.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use serde::{Deserialize, Serialize};

use super::{
    markup::{plain_text, Inline},
    ClassifiedLine, LineKind, OutputMode, ParagraphStyle, StyleTable,
};
use crate::constants::TRAILER_BLANK_SPACING;

/// Space between the trailer heading and its first line.
const TRAILER_HEADING_GAP: f32 = 12.0;

/// A classified, markup-processed line ready for layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledBlock {
    /// Style name of the block.
    pub kind: LineKind,
    /// Text with inline markup removed.
    pub text: String,
    /// The same text split into emphasis runs.
    pub inlines: Vec<Inline>,
}

impl StyledBlock {
    /// Styles one classified line. Blank lines produce no block.
    pub fn from_line(line: &ClassifiedLine<'_>, mode: OutputMode) -> Option<Self> {
        match line.kind {
            LineKind::Blank => None,
            LineKind::Rule => Some(Self {
                kind: LineKind::Rule,
                text: String::new(),
                inlines: Vec::new(),
            }),
            kind => {
                let inlines = mode.inlines(&line.body);
                Some(Self {
                    kind,
                    text: plain_text(&inlines),
                    inlines,
                })
            }
        }
    }
}

/// Lazily styles a classified line sequence, skipping blanks.
pub fn styled_blocks<'a, I>(lines: I, mode: OutputMode) -> impl Iterator<Item = StyledBlock> + 'a
where
    I: IntoIterator<Item = ClassifiedLine<'a>>,
    I::IntoIter: 'a,
{
    lines
        .into_iter()
        .filter_map(move |line| StyledBlock::from_line(&line, mode))
}

/// A unit handed to the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Paragraph {
        kind: LineKind,
        style: ParagraphStyle,
        inlines: Vec<Inline>,
    },
    /// Vertical gap in points.
    Spacer(f32),
    /// Continue on a fresh page.
    PageBreak,
}

/// Closing section appended after the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    /// Heading of the section.
    #[serde(default = "default_trailer_heading")]
    pub heading: String,

    /// Lines below the heading. Empty strings become small gaps.
    #[serde(default = "default_trailer_lines")]
    pub lines: Vec<String>,
}

impl Default for Trailer {
    fn default() -> Self {
        Self {
            heading: default_trailer_heading(),
            lines: default_trailer_lines(),
        }
    }
}

fn default_trailer_heading() -> String {
    "Test Completion Summary".to_string()
}

fn default_trailer_lines() -> Vec<String> {
    [
        "Tester Signature: ________________________________ Date: __________",
        "",
        "This document records that every step of the checklist above was executed",
        "and that each result was reviewed by the signing tester.",
        "",
        "For questions or support, contact the review team.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// A complete document ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Title for the document information dictionary.
    pub title: String,
    /// Footer template with an optional `{page}` placeholder.
    pub footer: Option<String>,
    pub elements: Vec<Element>,
}

/// Maps styled blocks onto elements using a style table.
pub struct Assembler<'a> {
    styles: &'a StyleTable,
    mode: OutputMode,
}

impl<'a> Assembler<'a> {
    pub const fn new(styles: &'a StyleTable, mode: OutputMode) -> Self {
        Self { styles, mode }
    }

    /// Element for a single block.
    pub fn element(&self, block: StyledBlock) -> Element {
        let style = self.styles.resolve(block.kind);
        if block.kind == LineKind::Rule {
            return Element::Spacer(style.spacer_height());
        }
        Element::Paragraph {
            kind: block.kind,
            style,
            inlines: block.inlines,
        }
    }

    /// Elements for the blocks followed by a page break and the trailer.
    pub fn assemble<I>(&self, blocks: I, trailer: &Trailer) -> Vec<Element>
    where
        I: IntoIterator<Item = StyledBlock>,
    {
        let mut elements: Vec<Element> = blocks.into_iter().map(|b| self.element(b)).collect();
        elements.push(Element::PageBreak);
        elements.extend(self.trailer(trailer));
        elements
    }

    fn trailer(&self, trailer: &Trailer) -> Vec<Element> {
        let mut elements = vec![
            Element::Paragraph {
                kind: LineKind::Heading,
                style: self.styles.resolve(LineKind::Heading),
                inlines: self.mode.inlines(&trailer.heading),
            },
            Element::Spacer(TRAILER_HEADING_GAP),
        ];

        let body = self.styles.resolve(LineKind::Paragraph);
        for line in &trailer.lines {
            if line.trim().is_empty() {
                elements.push(Element::Spacer(TRAILER_BLANK_SPACING));
            } else {
                elements.push(Element::Paragraph {
                    kind: LineKind::Paragraph,
                    style: body,
                    inlines: self.mode.inlines(line),
                });
            }
        }
        elements
    }
}
