//! # Checklist
//!
//! Markdown checklist processing: line classification, inline markup,
//! paragraph styles and document assembly.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod assemble;
pub mod classify;
pub mod markup;
pub mod style;

pub use self::{
    assemble::{styled_blocks, Assembler, Document, Element, StyledBlock, Trailer},
    classify::{classify, classify_line, ClassifiedLine, Classifier, LineKind},
    markup::{Emphasis, Inline, OutputMode},
    style::{Alignment, ParagraphStyle, Rgb, StyleOverride, StyleTable},
};
