//! # Conversion Pipeline
//!
//! Reads a checklist, classifies and styles its lines, assembles the
//! document and writes the rendered PDF.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    checklist::{
        styled_blocks, Assembler, Classifier, Document, OutputMode, StyleTable, StyledBlock,
        Trailer,
    },
    config::Config,
    constants::{DEFAULT_DOCUMENT_TITLE, DEFAULT_HEADING_SYMBOLS},
    error::ConvertError,
    render::Renderer,
};

/// Everything that shapes the output besides the input text.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub mode: OutputMode,
    pub styles: StyleTable,
    pub heading_symbols: Vec<char>,
    pub trailer: Trailer,
    pub title: String,
    pub footer: Option<String>,
}

impl ConvertOptions {
    /// Built-in settings for a mode.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            styles: StyleTable::preset(mode),
            heading_symbols: DEFAULT_HEADING_SYMBOLS.to_vec(),
            trailer: Trailer::default(),
            title: DEFAULT_DOCUMENT_TITLE.to_string(),
            footer: None,
        }
    }

    /// Settings from the project configuration. `mode` overrides the file.
    pub fn from_config(config: &Config, mode: Option<OutputMode>) -> Result<Self, ConvertError> {
        let mode = config.mode(mode);
        Ok(Self {
            mode,
            styles: config.style_table(mode)?,
            heading_symbols: config.heading_symbols(),
            trailer: config.project.trailer.clone(),
            title: config.project.title.clone(),
            footer: config.project.footer.clone(),
        })
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new(OutputMode::default())
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Styled blocks taken from the checklist (trailer excluded).
    pub blocks: usize,
    /// Size of the written PDF.
    pub bytes: usize,
}

/// Classifies and styles checklist text.
pub fn preview(text: &str, options: &ConvertOptions) -> Vec<StyledBlock> {
    let lines = Classifier::with_symbols(text, options.heading_symbols.iter().copied());
    styled_blocks(lines, options.mode).collect()
}

/// Assembles checklist text into a document with the trailer appended.
pub fn build_document(text: &str, options: &ConvertOptions) -> Document {
    assemble(preview(text, options), options)
}

fn assemble(blocks: Vec<StyledBlock>, options: &ConvertOptions) -> Document {
    debug!(blocks = blocks.len(), mode = %options.mode, "styled checklist");
    let assembler = Assembler::new(&options.styles, options.mode);
    Document {
        title: options.title.clone(),
        footer: options.footer.clone(),
        elements: assembler.assemble(blocks, &options.trailer),
    }
}

/// Converts a checklist file into a PDF file.
///
/// Nothing is written when the input cannot be read or rendering fails.
pub fn convert(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
    renderer: &impl Renderer,
) -> Result<ConvertReport, ConvertError> {
    let text = fs::read_to_string(input).map_err(|source| ConvertError::InputNotFound {
        path: input.to_path_buf(),
        source,
    })?;
    info!(input = %input.display(), bytes = text.len(), "read checklist");

    let blocks = preview(&text, options);
    let count = blocks.len();
    let pdf = renderer.render(&assemble(blocks, options))?;

    let write_error = |source| ConvertError::OutputWrite {
        path: output.to_path_buf(),
        source,
    };
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(output, &pdf).map_err(write_error)?;
    info!(output = %output.display(), bytes = pdf.len(), "wrote pdf");

    Ok(ConvertReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        blocks: count,
        bytes: pdf.len(),
    })
}
