//! # Page Layout
//!
//! Greedy line wrapping and pagination of assembled elements into
//! positioned text runs. Coordinates are PDF points with the origin at the
//! bottom-left corner of the page.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::mem;

use tracing::debug;

use super::fonts::{self, Face};
use crate::{
    checklist::{Alignment, Document, Element, Inline, ParagraphStyle, Rgb},
    constants::{
        FOOTER_FONT_SIZE, FOOTER_PAGE_PLACEHOLDER, LEADING_FACTOR, MARGIN_SIDE, MARGIN_VERTICAL,
        PAGE_HEIGHT, PAGE_WIDTH,
    },
    error::ConvertError,
};

/// Grey used for the page footer.
const FOOTER_COLOR: Rgb = Rgb(0x66, 0x66, 0x66);

/// Page size and margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageGeometry {
    /// A4 with 0.75 in side margins and 1 in top/bottom margins.
    pub const fn a4() -> Self {
        Self {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            margin_left: MARGIN_SIDE,
            margin_right: MARGIN_SIDE,
            margin_top: MARGIN_VERTICAL,
            margin_bottom: MARGIN_VERTICAL,
        }
    }

    /// Width between the side margins.
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    const fn top(&self) -> f32 {
        self.height - self.margin_top
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// A positioned string drawn in one face.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    /// Baseline.
    pub y: f32,
    pub face: Face,
    pub size: f32,
    pub color: Rgb,
    /// Source text (unencodable characters removed).
    pub text: String,
    /// Encoded bytes, one per character of `text`.
    pub bytes: Vec<u8>,
}

/// One laid-out page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub runs: Vec<TextRun>,
}

impl Page {
    /// Text of the runs sharing a baseline, joined left to right.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<(f32, Vec<&TextRun>)> = Vec::new();
        for run in &self.runs {
            match lines.iter_mut().find(|(y, _)| (*y - run.y).abs() < 0.01) {
                Some((_, runs)) => runs.push(run),
                None => lines.push((run.y, vec![run])),
            }
        }
        lines.sort_by(|a, b| b.0.total_cmp(&a.0));
        lines
            .into_iter()
            .map(|(_, mut runs)| {
                runs.sort_by(|a, b| a.x.total_cmp(&b.x));
                runs.iter()
                    .map(|r| r.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

/// Contiguous glyphs of one face within a word.
#[derive(Debug, Clone)]
struct Piece {
    face: Face,
    text: String,
    bytes: Vec<u8>,
    width: f32,
}

/// Glyphs between two whitespace boundaries.
#[derive(Debug, Clone, Default)]
struct Word {
    pieces: Vec<Piece>,
    width: f32,
}

impl Word {
    fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    fn push(&mut self, face: Face, c: char, byte: u8, size: f32) {
        let advance = face.width(&[byte], size);
        match self.pieces.last_mut() {
            Some(piece) if piece.face == face => {
                piece.text.push(c);
                piece.bytes.push(byte);
                piece.width += advance;
            }
            _ => self.pieces.push(Piece {
                face,
                text: c.to_string(),
                bytes: vec![byte],
                width: advance,
            }),
        }
        self.width += advance;
    }

    /// Width of the space that follows this word, set in its last face.
    fn space_width(&self, size: f32) -> f32 {
        self.pieces
            .last()
            .map_or(0.0, |piece| piece.face.width(b" ", size))
    }

    /// Breaks a word wider than `max` into chunks that fit.
    fn split_to_fit(self, max: f32, size: f32) -> Vec<Self> {
        let mut chunks = Vec::new();
        let mut chunk = Self::default();
        for piece in self.pieces {
            for (c, byte) in piece.text.chars().zip(piece.bytes) {
                let advance = piece.face.width(&[byte], size);
                if !chunk.is_empty() && chunk.width + advance > max {
                    chunks.push(mem::take(&mut chunk));
                }
                chunk.push(piece.face, c, byte, size);
            }
        }
        if !chunk.is_empty() {
            chunks.push(chunk);
        }
        chunks
    }
}

fn line_width(words: &[Word], size: f32) -> f32 {
    let glyphs: f32 = words.iter().map(|w| w.width).sum();
    let gaps: f32 = words
        .iter()
        .take(words.len().saturating_sub(1))
        .map(|w| w.space_width(size))
        .sum();
    glyphs + gaps
}

/// Splits inline runs into words, resolving faces and encodings.
fn tokenize(inlines: &[Inline], style: &ParagraphStyle) -> Vec<Word> {
    let mut words = Vec::new();
    let mut word = Word::default();

    for inline in inlines {
        let face = Face::for_emphasis(inline.emphasis, style.bold);
        for c in inline.text.chars() {
            if c.is_whitespace() {
                if !word.is_empty() {
                    words.push(mem::take(&mut word));
                }
                continue;
            }
            match fonts::encode(face, c) {
                Some((face, byte)) => word.push(face, c, byte, style.font_size),
                None => debug!(glyph = %c, "no standard font can show glyph, dropping it"),
            }
        }
    }
    if !word.is_empty() {
        words.push(word);
    }
    words
}

/// Greedy line filling. Words wider than the line are broken.
fn wrap(words: Vec<Word>, max: f32, size: f32) -> Vec<Vec<Word>> {
    let mut lines = Vec::new();
    let mut line: Vec<Word> = Vec::new();
    let mut width = 0.0;

    let words = words.into_iter().flat_map(|w| {
        if w.width > max {
            w.split_to_fit(max, size)
        } else {
            vec![w]
        }
    });

    for word in words {
        let gap = line.last().map_or(0.0, |prev: &Word| prev.space_width(size));
        if !line.is_empty() && width + gap + word.width > max {
            lines.push(mem::take(&mut line));
            width = 0.0;
        } else {
            width += gap;
        }
        width += word.width;
        line.push(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Pagination state.
struct Composer {
    geometry: PageGeometry,
    pages: Vec<Page>,
    page: Page,
    /// Top of the next line box.
    cursor: f32,
}

impl Composer {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            page: Page::default(),
            cursor: geometry.top(),
        }
    }

    fn page_is_empty(&self) -> bool {
        self.page.runs.is_empty()
    }

    fn new_page(&mut self) {
        self.pages.push(mem::take(&mut self.page));
        self.cursor = self.geometry.top();
    }

    fn space(&mut self, height: f32) {
        if !self.page_is_empty() {
            self.cursor -= height;
        }
    }

    fn page_break(&mut self) {
        if !self.page_is_empty() {
            self.new_page();
        }
    }

    fn paragraph(&mut self, style: &ParagraphStyle, inlines: &[Inline]) -> Result<(), ConvertError> {
        let size = style.font_size;
        let available = self.geometry.content_width() - style.left_indent;
        if available < size {
            return Err(ConvertError::rendering(format!(
                "no printable width left for {size}pt text after a {}pt indent",
                style.left_indent
            )));
        }

        let leading = size * LEADING_FACTOR;
        self.space(style.space_before);

        for line in wrap(tokenize(inlines, style), available, size) {
            if self.cursor - leading < self.geometry.margin_bottom && !self.page_is_empty() {
                self.new_page();
            }
            self.line(&line, style, available);
            self.cursor -= leading;
        }

        self.space(style.space_after);
        Ok(())
    }

    fn line(&mut self, words: &[Word], style: &ParagraphStyle, available: f32) {
        let size = style.font_size;
        let mut x = self.geometry.margin_left + style.left_indent;
        if style.alignment == Alignment::Center {
            x += (available - line_width(words, size)).max(0.0) / 2.0;
        }
        let baseline = self.cursor - size;

        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                x += words[i - 1].space_width(size);
            }
            for (j, piece) in word.pieces.iter().enumerate() {
                let continues_run = i > 0 && j == 0;
                match self.page.runs.last_mut() {
                    Some(run) if continues_run && run.face == piece.face => {
                        run.text.push(' ');
                        run.text.push_str(&piece.text);
                        run.bytes.push(b' ');
                        run.bytes.extend_from_slice(&piece.bytes);
                    }
                    _ => self.page.runs.push(TextRun {
                        x,
                        y: baseline,
                        face: piece.face,
                        size,
                        color: style.color,
                        text: piece.text.clone(),
                        bytes: piece.bytes.clone(),
                    }),
                }
                x += piece.width;
            }
        }
    }

    fn finish(mut self, footer: Option<&str>) -> Vec<Page> {
        if !self.page_is_empty() || self.pages.is_empty() {
            self.pages.push(mem::take(&mut self.page));
        }
        if let Some(template) = footer {
            let geometry = self.geometry;
            for (index, page) in self.pages.iter_mut().enumerate() {
                let text = template.replace(FOOTER_PAGE_PLACEHOLDER, &(index + 1).to_string());
                page.runs.extend(footer_run(&text, &geometry));
            }
        }
        self.pages
    }
}

fn footer_run(text: &str, geometry: &PageGeometry) -> Option<TextRun> {
    let (text, bytes): (String, Vec<u8>) = text
        .chars()
        .filter_map(|c| fonts::win_ansi(c).map(|b| (c, b)))
        .unzip();
    if bytes.is_empty() {
        return None;
    }
    let width = Face::Regular.width(&bytes, FOOTER_FONT_SIZE);
    Some(TextRun {
        x: geometry.margin_left + (geometry.content_width() - width).max(0.0) / 2.0,
        y: geometry.margin_bottom / 2.0,
        face: Face::Regular,
        size: FOOTER_FONT_SIZE,
        color: FOOTER_COLOR,
        text,
        bytes,
    })
}

/// Lays out a document into pages. Always returns at least one page.
pub fn layout(document: &Document, geometry: &PageGeometry) -> Result<Vec<Page>, ConvertError> {
    if geometry.content_width() <= 0.0 || geometry.top() <= geometry.margin_bottom {
        return Err(ConvertError::rendering("page margins leave no printable area"));
    }

    let mut composer = Composer::new(*geometry);
    for element in &document.elements {
        match element {
            Element::Paragraph { style, inlines, .. } => composer.paragraph(style, inlines)?,
            Element::Spacer(height) => composer.space(*height),
            Element::PageBreak => composer.page_break(),
        }
    }

    let pages = composer.finish(document.footer.as_deref());
    debug!(pages = pages.len(), "layout finished");
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{Emphasis, LineKind, OutputMode, StyleTable};

    fn doc(elements: Vec<Element>) -> Document {
        Document {
            title: "t".to_string(),
            footer: None,
            elements,
        }
    }

    fn paragraph(text: &str) -> Element {
        let styles = StyleTable::preset(OutputMode::Plain);
        Element::Paragraph {
            kind: LineKind::Paragraph,
            style: styles.resolve(LineKind::Paragraph),
            inlines: vec![Inline::regular(text)],
        }
    }

    #[test]
    fn test_short_paragraph_single_line() {
        let pages = layout(&doc(vec![paragraph("Verify upload works")]), &PageGeometry::a4()).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines(), vec!["Verify upload works"]);
    }

    #[test]
    fn test_long_paragraph_wraps_within_margins() {
        let text = "word ".repeat(200);
        let geometry = PageGeometry::a4();
        let pages = layout(&doc(vec![paragraph(&text)]), &geometry).unwrap();

        assert!(pages[0].lines().len() > 1);
        let right_edge = geometry.width - geometry.margin_right;
        for run in &pages[0].runs {
            let end = run.x + run.face.width(&run.bytes, run.size);
            assert!(end <= right_edge + 0.01, "run overflows: {end} > {right_edge}");
        }
    }

    #[test]
    fn test_dash_heavy_line_wraps_within_margins() {
        let text = "— ".repeat(300);
        let geometry = PageGeometry::a4();
        let pages = layout(&doc(vec![paragraph(&text)]), &geometry).unwrap();

        assert!(pages[0].lines().len() > 1);
        let right_edge = geometry.width - geometry.margin_right;
        for run in &pages[0].runs {
            // An em dash is one full em in Helvetica.
            let dashes = run.bytes.iter().filter(|b| **b == 0x97).count();
            let spaces = run.bytes.len() - dashes;
            let end = run.x + (dashes as f32 * 1000.0 + spaces as f32 * 278.0) * run.size / 1000.0;
            assert!(end <= right_edge + 0.01, "run overflows: {end} > {right_edge}");
        }
    }

    #[test]
    fn test_overlong_word_is_broken() {
        let text = "x".repeat(400);
        let pages = layout(&doc(vec![paragraph(&text)]), &PageGeometry::a4()).unwrap();
        let total: usize = pages[0].runs.iter().map(|r| r.text.len()).sum();
        assert_eq!(total, 400);
        assert!(pages[0].runs.len() > 1);
    }

    #[test]
    fn test_overflow_creates_pages() {
        let elements = (0..200).map(|i| paragraph(&format!("line {i}"))).collect();
        let pages = layout(&doc(elements), &PageGeometry::a4()).unwrap();
        assert!(pages.len() > 1);
        let geometry = PageGeometry::a4();
        for page in &pages {
            for run in &page.runs {
                assert!(run.y >= geometry.margin_bottom - 0.01);
            }
        }
    }

    #[test]
    fn test_page_break_on_empty_page_is_ignored() {
        let pages = layout(
            &doc(vec![Element::PageBreak, paragraph("a"), Element::PageBreak, paragraph("b")]),
            &PageGeometry::a4(),
        )
        .unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].lines(), vec!["b"]);
    }

    #[test]
    fn test_empty_document_has_one_page() {
        let pages = layout(&doc(vec![]), &PageGeometry::a4()).unwrap();
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_centered_title() {
        let styles = StyleTable::preset(OutputMode::Plain);
        let title = Element::Paragraph {
            kind: LineKind::Title,
            style: styles.resolve(LineKind::Title),
            inlines: vec![Inline::regular("Title")],
        };
        let geometry = PageGeometry::a4();
        let pages = layout(&doc(vec![title]), &geometry).unwrap();
        let run = &pages[0].runs[0];
        let width = run.face.width(&run.bytes, run.size);
        let center = run.x + width / 2.0;
        assert!((center - geometry.width / 2.0).abs() < 0.5);
        assert_eq!(run.face, Face::Bold);
    }

    #[test]
    fn test_checkbox_glyph_uses_dingbats() {
        let pages = layout(&doc(vec![paragraph("☐ Verify")]), &PageGeometry::a4()).unwrap();
        let faces: Vec<Face> = pages[0].runs.iter().map(|r| r.face).collect();
        assert_eq!(faces, vec![Face::Dingbats, Face::Regular]);
    }

    #[test]
    fn test_emoji_dropped() {
        let pages = layout(&doc(vec![paragraph("✅ Done")]), &PageGeometry::a4()).unwrap();
        assert_eq!(pages[0].lines(), vec!["Done"]);
    }

    #[test]
    fn test_styled_runs_keep_faces() {
        let styles = StyleTable::preset(OutputMode::Styled);
        let element = Element::Paragraph {
            kind: LineKind::Paragraph,
            style: styles.resolve(LineKind::Paragraph),
            inlines: vec![
                Inline::regular("Run "),
                Inline::new("rdesk", Emphasis::Code),
                Inline::regular(" now"),
            ],
        };
        let pages = layout(&doc(vec![element]), &PageGeometry::a4()).unwrap();
        let faces: Vec<Face> = pages[0].runs.iter().map(|r| r.face).collect();
        assert_eq!(faces, vec![Face::Regular, Face::Mono, Face::Regular]);
    }

    #[test]
    fn test_footer_on_every_page() {
        let mut document = doc(vec![paragraph("a"), Element::PageBreak, paragraph("b")]);
        document.footer = Some("Checklist - Page {page}".to_string());
        let pages = layout(&document, &PageGeometry::a4()).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[1].runs.iter().any(|r| r.text == "Checklist - Page 2"));
    }

    #[test]
    fn test_indent_too_wide_is_rendering_error() {
        let mut style = StyleTable::preset(OutputMode::Plain).resolve(LineKind::Checkbox);
        style.left_indent = 1000.0;
        let element = Element::Paragraph {
            kind: LineKind::Checkbox,
            style,
            inlines: vec![Inline::regular("x")],
        };
        let err = layout(&doc(vec![element]), &PageGeometry::a4()).unwrap_err();
        assert!(matches!(err, ConvertError::Rendering { .. }));
    }
}
