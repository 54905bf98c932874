//! # Rendering
//!
//! Layout of assembled documents onto A4 pages and PDF serialisation.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod fonts;
pub mod layout;
pub mod pdf;

pub use self::{
    fonts::Face,
    layout::{layout, Page, PageGeometry, TextRun},
    pdf::{PdfRenderer, Renderer},
};
