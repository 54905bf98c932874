//! # Inline Markup
//!
//! Strips or interprets the three inline constructs checklists use:
//! `**bold**`, `` `code` `` and `*italic*`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fmt, ops::Range};

use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid regex"));

static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid regex"));

// Markers must hug non-space text on both sides, so `5 * 3 * 2` is not italic.
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*\s](?:[^*]*[^*\s])?)\*").expect("valid regex"));

static ANY_INLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(?P<bold>[^*]+)\*\*|`(?P<code>[^`]+)`|\*(?P<italic>[^*\s](?:[^*]*[^*\s])?)\*")
        .expect("valid regex")
});

/// How inline markup reaches the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Markup removed, text set in the paragraph's own face.
    #[default]
    Plain,
    /// Markup rendered as bold, italic and monospace runs.
    Styled,
}

impl OutputMode {
    /// Splits `text` into inline runs according to the mode.
    pub fn inlines(self, text: &str) -> Vec<Inline> {
        match self {
            Self::Plain => vec![Inline::regular(strip(text))],
            Self::Styled => parse(text),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Styled => write!(f, "styled"),
        }
    }
}

/// Emphasis of an inline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emphasis {
    #[default]
    Regular,
    Bold,
    Italic,
    Code,
}

/// A run of text sharing one emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inline {
    pub text: String,
    pub emphasis: Emphasis,
}

impl Inline {
    pub fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }

    pub fn regular(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::Regular)
    }
}

/// Removes inline markup: bold, then code spans, then paired italics,
/// repeated until the text no longer changes.
///
/// Removing an inner pair can expose an outer one (`**a *b* c**`), so a
/// single pass is not enough. Every productive pass drops at least two
/// markers, which bounds the loop.
pub fn strip(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    let text = BOLD.replace_all(text, "$1");
    let text = CODE.replace_all(&text, "$1");
    ITALIC.replace_all(&text, "$1").into_owned()
}

/// Stands in for code-span characters while searching for further markup,
/// so code content is never reinterpreted.
const CODE_PLACEHOLDER: char = '\u{FFFC}';

/// One character of the text being parsed and the emphasis assigned so far.
#[derive(Debug, Clone, Copy)]
struct Cell {
    c: char,
    emphasis: Emphasis,
}

/// Parses inline markup into emphasis runs.
///
/// The leftmost construct is resolved first and its markers removed, then
/// the search restarts, so nested pairs resolve inside-out or outside-in as
/// they appear. Inner bold or italic keeps its emphasis inside an outer pair;
/// code spans always win.
pub fn parse(text: &str) -> Vec<Inline> {
    let mut cells: Vec<Cell> = text
        .chars()
        .map(|c| Cell {
            c,
            emphasis: Emphasis::Regular,
        })
        .collect();

    while let Some(span) = next_span(&cells) {
        for cell in &mut cells[span.inner.clone()] {
            if span.emphasis == Emphasis::Code || cell.emphasis == Emphasis::Regular {
                cell.emphasis = span.emphasis;
            }
        }
        cells.drain(span.inner.end..span.outer.end);
        cells.drain(span.outer.start..span.inner.start);
    }

    let mut runs: Vec<Inline> = Vec::new();
    for cell in cells {
        match runs.last_mut() {
            Some(run) if run.emphasis == cell.emphasis => run.text.push(cell.c),
            _ => runs.push(Inline::new(cell.c.to_string(), cell.emphasis)),
        }
    }
    runs
}

/// A matched construct, as character ranges into the cell list.
struct Span {
    outer: Range<usize>,
    inner: Range<usize>,
    emphasis: Emphasis,
}

fn next_span(cells: &[Cell]) -> Option<Span> {
    let view: String = cells
        .iter()
        .map(|cell| {
            if cell.emphasis == Emphasis::Code {
                CODE_PLACEHOLDER
            } else {
                cell.c
            }
        })
        .collect();

    let caps = ANY_INLINE.captures(&view)?;
    let whole = caps.get(0)?;
    let (inner, emphasis) = if let Some(m) = caps.name("bold") {
        (m, Emphasis::Bold)
    } else if let Some(m) = caps.name("code") {
        (m, Emphasis::Code)
    } else {
        (caps.name("italic")?, Emphasis::Italic)
    };

    let char_index = |byte: usize| view[..byte].chars().count();
    Some(Span {
        outer: char_index(whole.start())..char_index(whole.end()),
        inner: char_index(inner.start())..char_index(inner.end()),
        emphasis,
    })
}

/// Concatenated text of a run sequence.
pub fn plain_text(runs: &[Inline]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}
