//! # Errors
//!
//! Typed failure kinds for the conversion pipeline and the review session.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal conversion failures. Every variant aborts the whole run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source checklist is missing or unreadable. Raised before any output exists.
    #[error("Checklist not found or unreadable: {}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The rendering backend rejected the document.
    #[error("Rendering failed: {detail}")]
    Rendering { detail: String },

    /// The finished PDF could not be written.
    #[error("Failed to write PDF: {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Shorthand for a [`ConvertError::Rendering`] from anything printable.
    pub fn rendering(detail: impl ToString) -> Self {
        Self::Rendering {
            detail: detail.to_string(),
        }
    }
}

/// Failures of the interactive review session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Only PDF and Word documents can be queued.
    #[error("Unsupported document type: {name} (expected .pdf, .docx or .doc)")]
    UnsupportedType { name: String },

    /// The path has no file name to queue the document under.
    #[error("Document has no file name: {}", path.display())]
    EmptyName { path: PathBuf },

    /// The document exceeds the configured upload size.
    #[error("{name} is too large ({size} bytes, limit {limit_mb} MB)")]
    TooLarge { name: String, size: u64, limit_mb: u64 },

    /// The queue already holds the configured number of documents.
    #[error("Queue is full ({limit} documents); remove one first")]
    QueueFull { limit: usize },

    /// File metadata could not be read.
    #[error("Cannot read document: {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An action addressed a queue position that does not exist.
    #[error("No document at position {index} (queue holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_mentions_path() {
        let err = ConvertError::InputNotFound {
            path: PathBuf::from("docs/missing.md"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("docs/missing.md"));
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = SessionError::IndexOutOfRange { index: 3, len: 1 };
        assert_eq!(err.to_string(), "No document at position 3 (queue holds 1)");
    }

    #[test]
    fn test_limit_messages() {
        let err = SessionError::TooLarge {
            name: "scan.pdf".to_string(),
            size: 60 * 1024 * 1024,
            limit_mb: 50,
        };
        assert!(err.to_string().starts_with("scan.pdf is too large"));
        assert!(err.to_string().contains("limit 50 MB"));
        assert!(SessionError::QueueFull { limit: 10 }.to_string().contains("10 documents"));
    }
}
