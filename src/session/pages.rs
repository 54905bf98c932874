//! # Session Pages
//!
//! The four pages of the review session and the handlers behind them.
//! Every handler receives the caller's queue explicitly.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{fmt, path::Path};

use super::{upload, UploadLimits, UploadQueue, UploadRecord};
use crate::{constants::PROCESSING_PENDING_MESSAGE, error::SessionError};

/// Application version shown on the home and settings pages.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Session navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Upload,
    Queue,
    Settings,
}

impl Page {
    pub const ALL: [Self; 4] = [Self::Home, Self::Upload, Self::Queue, Self::Settings];

    /// Menu label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Upload => "Upload Documents",
            Self::Queue => "Review Queue",
            Self::Settings => "Settings",
        }
    }

    /// Position in [`Page::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Upload => 1,
            Self::Queue => 2,
            Self::Settings => 3,
        }
    }

    /// Following page, wrapping around.
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding page, wrapping around.
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Figures shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeSummary {
    pub status: &'static str,
    pub documents: usize,
    pub version: &'static str,
}

/// Steps listed under "Quick Start".
pub const QUICK_START: [&str; 3] = [
    "Upload Documents - open the Upload Documents page and enter a file path",
    "Review Queue - check the uploaded files",
    "Execute Testing - run `rdesk convert` and work through the checklist PDF",
];

pub fn home(queue: &UploadQueue) -> HomeSummary {
    HomeSummary {
        status: "Ready",
        documents: queue.len(),
        version: VERSION,
    }
}

/// Inspects a document and appends it to the queue. A full queue rejects
/// the document before the file is looked at.
pub fn upload<'q>(
    queue: &'q mut UploadQueue,
    path: &Path,
    limits: &UploadLimits,
) -> Result<&'q UploadRecord, SessionError> {
    if queue.len() >= limits.max_documents {
        return Err(SessionError::QueueFull {
            limit: limits.max_documents,
        });
    }
    let record = upload::inspect(path, limits)?;
    let index = queue.add(record);
    tracing::info!(index, "document queued");
    queue.get(index)
}

/// Result of the processing action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Review processing does not exist yet; the document stays queued.
    Pending { name: String },
}

impl ProcessOutcome {
    pub fn message(&self) -> String {
        match self {
            Self::Pending { name } => format!("{name}: {PROCESSING_PENDING_MESSAGE}"),
        }
    }
}

/// Placeholder processing of the document at `index`. Leaves the queue unchanged.
pub fn process(queue: &UploadQueue, index: usize) -> Result<ProcessOutcome, SessionError> {
    let record = queue.get(index)?;
    Ok(ProcessOutcome::Pending {
        name: record.name.clone(),
    })
}

/// Removes the document at `index`.
pub fn remove(queue: &mut UploadQueue, index: usize) -> Result<UploadRecord, SessionError> {
    let record = queue.remove(index)?;
    tracing::info!(index, name = %record.name, "document removed");
    Ok(record)
}

/// Label/value rows of the settings page.
pub fn settings(limits: &UploadLimits) -> Vec<(&'static str, String)> {
    vec![
        ("Version", VERSION.to_string()),
        (
            "Uploads",
            format!(
                "{} MB per document, {} documents",
                limits.max_file_size_mb, limits.max_documents
            ),
        ),
        ("Status", "Interactive session shell".to_string()),
        ("Mode", "User Acceptance Testing".to_string()),
        ("Storage", "In-memory (cleared on exit)".to_string()),
    ]
}
