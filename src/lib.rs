//! # reviewdesk
//!
//! Tooling for manual document review: a Markdown checklist to PDF converter
//! and an in-memory upload queue driven from a terminal session.
//!
//! ## Features
//!
//! - **Checklist classification**: each line is mapped to one style kind
//! - **Plain and styled output**: inline markup removed or rendered as faces
//! - **PDF rendering**: A4 pages with wrapping, footers and a closing section
//! - **Review session**: upload, inspect and drop documents in a TUI
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod checklist;
pub mod commands;
pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod render;
pub mod session;
pub mod tui;
pub mod ui;

pub use checklist::{LineKind, OutputMode, StyledBlock};
pub use config::Config;
pub use convert::{convert, ConvertOptions, ConvertReport};
pub use error::{ConvertError, SessionError};
pub use render::{PdfRenderer, Renderer};
pub use session::{UploadQueue, UploadRecord};
