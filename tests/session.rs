//! # Session Tests
//!
//! The review session handlers working on a caller-owned queue.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use std::path::Path;

use common::TestEnv;
use reviewdesk::{
    config::ProjectConfig,
    session::{pages, DocumentType, Page, ProcessOutcome, UploadLimits},
    SessionError, UploadQueue,
};

#[test]
fn test_upload_accepts_documents_case_insensitively() {
    let env = TestEnv::new();
    let pdf = env.write_file("a.PDF", "%PDF");
    let docx = env.write_file("b.docx", "PK");
    let doc = env.write_file("c.Doc", "DOC");

    let mut queue = UploadQueue::new();
    for path in [&pdf, &docx, &doc] {
        pages::upload(&mut queue, path, &UploadLimits::default()).expect("accepted type");
    }

    let mimes: Vec<&str> = queue.iter().map(|r| r.mime_type.as_str()).collect();
    assert_eq!(
        mimes,
        [
            DocumentType::Pdf.mime_type(),
            DocumentType::Docx.mime_type(),
            DocumentType::Doc.mime_type(),
        ]
    );
    assert_eq!(queue.total_size(), 9);
}

#[test]
fn test_upload_rejects_other_types() {
    let env = TestEnv::new();
    let path = env.write_file("image.png", "png");

    let mut queue = UploadQueue::new();
    let err = pages::upload(&mut queue, &path, &UploadLimits::default()).unwrap_err();

    assert!(matches!(err, SessionError::UnsupportedType { ref name } if name == "image.png"));
    assert!(queue.is_empty());
}

#[test]
fn test_upload_missing_file_is_unreadable() {
    let env = TestEnv::new();
    let mut queue = UploadQueue::new();
    let err = pages::upload(&mut queue, &env.path("gone.pdf"), &UploadLimits::default()).unwrap_err();
    assert!(matches!(err, SessionError::Unreadable { .. }));
}

#[test]
fn test_duplicate_uploads_are_kept() {
    let env = TestEnv::new();
    let path = env.write_file("same.pdf", "x");

    let mut queue = UploadQueue::new();
    pages::upload(&mut queue, &path, &UploadLimits::default()).unwrap();
    pages::upload(&mut queue, &path, &UploadLimits::default()).unwrap();

    assert_eq!(queue.len(), 2);
    assert_eq!(pages::home(&queue).documents, 2);
}

#[test]
fn test_remove_restores_previous_state() {
    let env = TestEnv::new();
    let first = env.write_file("first.pdf", "1");
    let second = env.write_file("second.doc", "22");

    let mut queue = UploadQueue::new();
    pages::upload(&mut queue, &first, &UploadLimits::default()).unwrap();
    let before = queue.clone();

    pages::upload(&mut queue, &second, &UploadLimits::default()).unwrap();
    let removed = pages::remove(&mut queue, 1).unwrap();

    assert_eq!(removed.name, "second.doc");
    assert_eq!(queue, before);
}

#[test]
fn test_actions_on_missing_index_fail() {
    let mut queue = UploadQueue::new();
    assert!(matches!(
        pages::process(&queue, 0),
        Err(SessionError::IndexOutOfRange { index: 0, len: 0 })
    ));
    assert!(pages::remove(&mut queue, 3).is_err());
}

#[test]
fn test_process_is_pending_and_non_destructive() {
    let env = TestEnv::new();
    let path = env.write_file("plan.docx", "plan");

    let mut queue = UploadQueue::new();
    pages::upload(&mut queue, &path, &UploadLimits::default()).unwrap();

    let outcome = pages::process(&queue, 0).unwrap();
    assert!(matches!(outcome, ProcessOutcome::Pending { ref name } if name == "plan.docx"));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_configured_limits_are_enforced() {
    let env = TestEnv::new();
    env.write_project_config("[session]\nmax_file_size_mb = 1\nmax_documents = 2\n");
    let limits = ProjectConfig::load(env.project_path()).unwrap().session;
    let small = env.write_file("small.pdf", "x");
    let large = env.write_file("large.pdf", &"x".repeat(1024 * 1024 + 1));

    let mut queue = UploadQueue::new();
    let err = pages::upload(&mut queue, &large, &limits).unwrap_err();
    assert!(matches!(err, SessionError::TooLarge { limit_mb: 1, .. }));
    assert!(queue.is_empty());

    pages::upload(&mut queue, &small, &limits).unwrap();
    pages::upload(&mut queue, &small, &limits).unwrap();
    let err = pages::upload(&mut queue, &small, &limits).unwrap_err();
    assert!(matches!(err, SessionError::QueueFull { limit: 2 }));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_default_limits_accept_ten_documents() {
    let env = TestEnv::new();
    let path = env.write_file("a.pdf", "x");
    let limits = UploadLimits::default();

    let mut queue = UploadQueue::new();
    for _ in 0..10 {
        pages::upload(&mut queue, &path, &limits).unwrap();
    }
    assert!(matches!(
        pages::upload(&mut queue, &path, &limits),
        Err(SessionError::QueueFull { limit: 10 })
    ));
}

#[test]
fn test_upload_without_file_name_is_rejected() {
    let mut queue = UploadQueue::new();
    let err = pages::upload(&mut queue, Path::new(""), &UploadLimits::default()).unwrap_err();
    assert!(matches!(err, SessionError::EmptyName { .. }));
    assert!(queue.is_empty());
}

#[test]
fn test_page_labels() {
    let labels: Vec<&str> = Page::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(labels, ["Home", "Upload Documents", "Review Queue", "Settings"]);
}
