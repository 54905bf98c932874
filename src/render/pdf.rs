//! # PDF Writer
//!
//! Serialises laid-out pages with `lopdf`. Text is drawn in the standard
//! base-14 fonts so the output needs no embedded font files.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::Utc;
use lopdf::{
    content::{Content, Operation},
    dictionary, Dictionary, Object, ObjectId, Stream,
};
use tracing::debug;

use super::{
    fonts::Face,
    layout::{layout, Page, PageGeometry, TextRun},
};
use crate::{checklist::Document, constants::PDF_PRODUCER, error::ConvertError};

/// Turns an assembled document into file bytes.
pub trait Renderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>, ConvertError>;
}

/// Renderer producing PDF 1.5 with standard fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer {
    geometry: PageGeometry,
}

impl PdfRenderer {
    pub const fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    pub const fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }
}

impl Renderer for PdfRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>, ConvertError> {
        let pages = layout(document, &self.geometry)?;
        let mut pdf = lopdf::Document::with_version("1.5");

        let fonts = font_dictionary(&mut pdf);
        let resources_id = pdf.add_object(dictionary! { "Font" => fonts });

        let pages_id = pdf.new_object_id();
        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for page in &pages {
            let content = page_content(page)
                .encode()
                .map_err(ConvertError::rendering)?;
            let content_id = pdf.add_object(Stream::new(dictionary! {}, content));
            let page_id = pdf.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = i64::try_from(kids.len()).map_err(ConvertError::rendering)?;
        let media_box: Vec<Object> = vec![
            Object::Integer(0),
            Object::Integer(0),
            self.geometry.width.into(),
            self.geometry.height.into(),
        ];
        pdf.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => media_box,
            }),
        );

        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = info_dictionary(&mut pdf, &document.title);
        pdf.trailer.set("Root", catalog_id);
        pdf.trailer.set("Info", info_id);

        pdf.compress();
        let mut bytes = Vec::new();
        pdf.save_to(&mut bytes).map_err(ConvertError::rendering)?;

        debug!(pages = pages.len(), bytes = bytes.len(), "pdf serialised");
        Ok(bytes)
    }
}

fn font_dictionary(pdf: &mut lopdf::Document) -> Dictionary {
    let mut fonts = Dictionary::new();
    for face in Face::ALL {
        let mut font = dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => face.base_font(),
        };
        if face.uses_win_ansi() {
            font.set("Encoding", "WinAnsiEncoding");
        }
        let id = pdf.add_object(font);
        fonts.set(face.resource_name(), id);
    }
    fonts
}

fn info_dictionary(pdf: &mut lopdf::Document, title: &str) -> ObjectId {
    let created = Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
    pdf.add_object(dictionary! {
        "Title" => Object::string_literal(title),
        "Producer" => Object::string_literal(PDF_PRODUCER),
        "CreationDate" => Object::string_literal(created),
    })
}

fn page_content(page: &Page) -> Content {
    let mut operations = Vec::with_capacity(page.runs.len() * 6);
    for run in &page.runs {
        operations.extend(text_operations(run));
    }
    Content { operations }
}

fn text_operations(run: &TextRun) -> Vec<Operation> {
    let [r, g, b] = run.color.unit();
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![run.face.resource_name().into(), run.size.into()],
        ),
        Operation::new("rg", vec![r.into(), g.into(), b.into()]),
        Operation::new("Td", vec![run.x.into(), run.y.into()]),
        Operation::new("Tj", vec![Object::string_literal(run.bytes.clone())]),
        Operation::new("ET", vec![]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{Element, Inline, LineKind, OutputMode, StyleTable};

    fn document(paragraphs: &[&str]) -> Document {
        let styles = StyleTable::preset(OutputMode::Plain);
        let mut elements: Vec<Element> = paragraphs
            .iter()
            .map(|text| Element::Paragraph {
                kind: LineKind::Paragraph,
                style: styles.resolve(LineKind::Paragraph),
                inlines: vec![Inline::regular(*text)],
            })
            .collect();
        elements.push(Element::PageBreak);
        elements.push(Element::Paragraph {
            kind: LineKind::Heading,
            style: styles.resolve(LineKind::Heading),
            inlines: vec![Inline::regular("Summary")],
        });
        Document {
            title: "Checklist".to_string(),
            footer: None,
            elements,
        }
    }

    #[test]
    fn test_output_is_pdf() {
        let bytes = PdfRenderer::default().render(&document(&["hello"])).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_page_count_matches_layout() {
        let bytes = PdfRenderer::default().render(&document(&["a", "b"])).unwrap();
        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 2);
    }

    #[test]
    fn test_title_in_info_dictionary() {
        let bytes = PdfRenderer::default().render(&document(&["a"])).unwrap();
        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        let info = parsed
            .trailer
            .get(b"Info")
            .and_then(Object::as_reference)
            .and_then(|id| parsed.get_dictionary(id))
            .unwrap();
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Checklist");
    }

    #[test]
    fn test_text_operations_shape() {
        let pages = layout(&document(&["hi"]), &PageGeometry::a4()).unwrap();
        let ops = text_operations(&pages[0].runs[0]);
        let operators: Vec<&str> = ops.iter().map(|op| op.operator.as_str()).collect();
        assert_eq!(operators, vec!["BT", "Tf", "rg", "Td", "Tj", "ET"]);
    }
}
