//! # Upload Inspection
//!
//! Validates a document on disk and derives its upload record.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

use super::UploadRecord;
use crate::{
    constants::{ACCEPTED_EXTENSIONS, MAX_QUEUED_DOCUMENTS, MAX_UPLOAD_SIZE_MB},
    error::SessionError,
};

/// Size and count limits of the upload page (`[session]` in `.reviewdesk`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UploadLimits {
    /// Largest accepted document in megabytes
    pub max_file_size_mb: u64,
    /// Documents the queue holds at most
    pub max_documents: usize,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_file_size_mb: MAX_UPLOAD_SIZE_MB,
            max_documents: MAX_QUEUED_DOCUMENTS,
        }
    }
}

impl UploadLimits {
    /// Largest accepted document in bytes.
    pub const fn max_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

/// Accepted document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Pdf,
    Docx,
    Doc,
}

impl DocumentType {
    /// Looks up a type by file extension, ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "doc" => Some(Self::Doc),
            _ => None,
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Doc => "application/msword",
        }
    }
}

/// Whether the path names an accepted document type.
pub fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Reads the metadata of a document and builds its upload record.
/// Documents larger than the limit are rejected.
pub fn inspect(path: &Path, limits: &UploadLimits) -> Result<UploadRecord, SessionError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| SessionError::EmptyName {
            path: path.to_path_buf(),
        })?;

    let doc_type = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(DocumentType::from_extension)
        .ok_or_else(|| SessionError::UnsupportedType { name: name.clone() })?;

    let unreadable = |source| SessionError::Unreadable {
        path: path.to_path_buf(),
        source,
    };
    let metadata = fs::metadata(path).map_err(unreadable)?;
    if !metadata.is_file() {
        return Err(unreadable(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }

    if metadata.len() > limits.max_bytes() {
        return Err(SessionError::TooLarge {
            name,
            size: metadata.len(),
            limit_mb: limits.max_file_size_mb,
        });
    }

    tracing::debug!(name = %name, size = metadata.len(), "inspected upload");
    Ok(UploadRecord::new(name, metadata.len(), doc_type.mime_type()))
}
