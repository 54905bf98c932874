//! # Line Classifier
//!
//! Single forward pass over checklist text. Each line is classified from its
//! own leading characters only; earlier lines never influence later ones.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{borrow::Cow, fmt, str::Lines};

use serde::{Deserialize, Serialize};

use crate::constants::{
    CHECKBOX_GLYPH, CHECKBOX_RENDERED_GLYPH, CODE_FENCE, DEFAULT_HEADING_SYMBOLS, HEADING_PREFIX,
    RESULT_MARKERS, RULE_PREFIX, SUBHEADING_PREFIX, TABLE_ROW, TITLE_PREFIX,
};

/// Class of a checklist line. Doubles as the paragraph style name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Title,
    Heading,
    Subheading,
    Checkbox,
    ResultOrNotes,
    Rule,
    Paragraph,
    Blank,
}

impl LineKind {
    /// Every kind, in rule precedence order.
    pub const ALL: [Self; 8] = [
        Self::Title,
        Self::Heading,
        Self::Subheading,
        Self::Checkbox,
        Self::ResultOrNotes,
        Self::Rule,
        Self::Paragraph,
        Self::Blank,
    ];

    /// Style name as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Heading => "heading",
            Self::Subheading => "subheading",
            Self::Checkbox => "checkbox",
            Self::ResultOrNotes => "result_or_notes",
            Self::Rule => "rule",
            Self::Paragraph => "paragraph",
            Self::Blank => "blank",
        }
    }

    /// Whether lines of this kind render text (rules and blanks do not).
    pub const fn carries_text(self) -> bool {
        !matches!(self, Self::Rule | Self::Blank)
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub kind: LineKind,
    /// The trimmed source line.
    pub raw_text: &'a str,
    /// Content after the kind's prefix rule, inline markup still present.
    pub body: Cow<'a, str>,
}

/// Classifies a single line. Returns `None` for code-fence and table rows,
/// which are not rendered at all.
pub fn classify_line<'a>(line: &'a str, heading_symbols: &[char]) -> Option<ClassifiedLine<'a>> {
    let line = line.trim();

    let (kind, body) = if line.is_empty() {
        (LineKind::Blank, Cow::Borrowed(""))
    } else if let Some(rest) = line.strip_prefix(TITLE_PREFIX) {
        (LineKind::Title, Cow::Borrowed(rest.trim()))
    } else if let Some(rest) = line.strip_prefix(HEADING_PREFIX) {
        let cleaned: String = rest
            .chars()
            .filter(|c| !heading_symbols.contains(c))
            .collect();
        (LineKind::Heading, Cow::Owned(cleaned.trim().to_string()))
    } else if let Some(rest) = line.strip_prefix(SUBHEADING_PREFIX) {
        (LineKind::Subheading, Cow::Borrowed(rest.trim()))
    } else if line.starts_with(CHECKBOX_GLYPH) {
        let replaced = line.replace(CHECKBOX_GLYPH, &CHECKBOX_RENDERED_GLYPH.to_string());
        (LineKind::Checkbox, Cow::Owned(replaced))
    } else if RESULT_MARKERS.iter().any(|marker| line.contains(marker)) {
        (LineKind::ResultOrNotes, Cow::Borrowed(line))
    } else if line.starts_with(RULE_PREFIX) {
        (LineKind::Rule, Cow::Borrowed(""))
    } else if !line.starts_with(CODE_FENCE) && !line.starts_with(TABLE_ROW) {
        (LineKind::Paragraph, Cow::Borrowed(line))
    } else {
        return None;
    };

    Some(ClassifiedLine {
        kind,
        raw_text: line,
        body,
    })
}

/// Lazy classifier over the lines of a text. Not restartable.
pub struct Classifier<'a> {
    lines: Lines<'a>,
    heading_symbols: Vec<char>,
}

impl<'a> Classifier<'a> {
    /// Creates a classifier using the default heading symbol set.
    pub fn new(text: &'a str) -> Self {
        Self::with_symbols(text, DEFAULT_HEADING_SYMBOLS.iter().copied())
    }

    /// Creates a classifier removing the given symbols from headings.
    pub fn with_symbols(text: &'a str, symbols: impl IntoIterator<Item = char>) -> Self {
        Self {
            lines: text.lines(),
            heading_symbols: symbols.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for Classifier<'a> {
    type Item = ClassifiedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            if let Some(classified) = classify_line(line, &self.heading_symbols) {
                return Some(classified);
            }
            tracing::trace!(line, "dropping code fence or table row");
        }
    }
}

/// Classifies every line of `text` with the default heading symbols.
pub fn classify(text: &str) -> Classifier<'_> {
    Classifier::new(text)
}
