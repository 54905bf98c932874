//! # Upload Queue
//!
//! Insertion-ordered, in-memory list of uploaded documents. The queue is
//! owned by the caller and lives only as long as the session.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::{constants::UPLOAD_TIME_FORMAT, error::SessionError};

/// Metadata of one uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRecord {
    /// File name as uploaded
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type derived from the extension
    pub mime_type: String,
    pub uploaded_at: DateTime<Utc>,
}

impl UploadRecord {
    /// Creates a record stamped with the current time.
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            uploaded_at: Utc::now(),
        }
    }

    /// Upload time in local time.
    pub fn uploaded_at_display(&self) -> String {
        self.uploaded_at
            .with_timezone(&Local)
            .format(UPLOAD_TIME_FORMAT)
            .to_string()
    }
}

/// Ordered upload list. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadQueue {
    records: Vec<UploadRecord>,
}

impl UploadQueue {
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record and returns its position.
    pub fn add(&mut self, record: UploadRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Removes the record at `index`, shifting later records down.
    pub fn remove(&mut self, index: usize) -> Result<UploadRecord, SessionError> {
        self.check(index)?;
        Ok(self.records.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&UploadRecord, SessionError> {
        self.records.get(index).ok_or(SessionError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UploadRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Combined size of all queued documents.
    pub fn total_size(&self) -> u64 {
        self.records.iter().map(|r| r.size).sum()
    }

    fn check(&self, index: usize) -> Result<(), SessionError> {
        self.get(index).map(|_| ())
    }
}

impl<'a> IntoIterator for &'a UploadQueue {
    type Item = &'a UploadRecord;
    type IntoIter = std::slice::Iter<'a, UploadRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> UploadRecord {
        UploadRecord::new(name, 1024, "application/pdf")
    }

    #[test]
    fn test_add_then_remove_restores_queue() {
        let mut queue = UploadQueue::new();
        queue.add(record("a.pdf"));
        queue.add(record("b.docx"));
        let before = queue.clone();

        let index = queue.add(record("c.pdf"));
        assert_eq!(queue.len(), 3);
        let removed = queue.remove(index).unwrap();

        assert_eq!(removed.name, "c.pdf");
        assert_eq!(queue, before);
    }

    #[test]
    fn test_remove_middle_keeps_order() {
        let mut queue = UploadQueue::new();
        for name in ["a.pdf", "b.pdf", "c.pdf"] {
            queue.add(record(name));
        }
        queue.remove(1).unwrap();
        let names: Vec<&str> = queue.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "c.pdf"]);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut queue = UploadQueue::new();
        queue.add(record("same.pdf"));
        queue.add(record("same.pdf"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.total_size(), 2048);
    }

    #[test]
    fn test_out_of_range() {
        let mut queue = UploadQueue::new();
        queue.add(record("a.pdf"));
        let err = queue.remove(5).unwrap_err();
        assert!(matches!(err, SessionError::IndexOutOfRange { index: 5, len: 1 }));
        assert_eq!(queue.len(), 1);
        assert!(queue.get(1).is_err());
    }

    #[test]
    fn test_upload_time_format() {
        let shown = record("a.pdf").uploaded_at_display();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(shown.len(), 19);
        assert_eq!(&shown[4..5], "-");
        assert_eq!(&shown[10..11], " ");
    }
}
