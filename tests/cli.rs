//! # CLI Tests
//!
//! Runs the `rdesk` binary and checks its output and exit codes.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{pdf_page_count, TestEnv, SAMPLE_CHECKLIST};
use predicates::prelude::*;

// =============================================================================
// init
// =============================================================================

#[test]
fn test_init_writes_config_and_checklist_dir() {
    let env = TestEnv::new();

    env.rdesk()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized reviewdesk project"));

    assert!(env.project_config_path().is_file());
    assert!(env.path("docs").is_dir());
}

#[test]
fn test_init_twice_fails() {
    let env = TestEnv::new();
    env.rdesk().arg("init").assert().success();

    env.rdesk()
        .arg("init")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("already initialized"));
}

// =============================================================================
// convert
// =============================================================================

#[test]
fn test_convert_default_paths() {
    let env = TestEnv::new();
    env.write_file("docs/uat_quick_checklist.md", SAMPLE_CHECKLIST);

    env.rdesk()
        .arg("convert")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Converting docs/uat_quick_checklist.md to PDF...",
        ))
        .stdout(predicate::str::contains(
            "PDF created: docs/UAT_Quick_Checklist_v1.0.0.pdf",
        ))
        .stdout(predicate::str::contains(" KB"));

    assert_eq!(pdf_page_count(&env.path("docs/UAT_Quick_Checklist_v1.0.0.pdf")), 2);
}

#[test]
fn test_convert_explicit_paths_and_mode() {
    let env = TestEnv::new();
    env.write_file("in.md", SAMPLE_CHECKLIST);

    env.rdesk()
        .args(["convert", "in.md", "build/out.pdf", "--mode", "styled"])
        .assert()
        .success();

    assert!(env.path("build/out.pdf").is_file());
}

#[test]
fn test_convert_missing_input_fails() {
    let env = TestEnv::new();

    env.rdesk()
        .args(["convert", "nope.md", "out.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Checklist not found or unreadable"));

    assert!(!env.path("out.pdf").exists());
}

#[test]
fn test_convert_rejects_unknown_mode() {
    let env = TestEnv::new();
    env.rdesk()
        .args(["convert", "--mode", "fancy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fancy"));
}

// =============================================================================
// preview
// =============================================================================

#[test]
fn test_preview_is_tab_separated_without_header() {
    let env = TestEnv::new();
    env.write_file("list.md", "# Title\n\n## 🚀 Setup\n□ Install\n| a | b |\n");

    env.rdesk()
        .args(["preview", "list.md"])
        .assert()
        .success()
        .stdout("title\tTitle\nheading\tSetup\ncheckbox\t☐ Install\n");
}

#[test]
fn test_preview_styled_strips_markup_text() {
    let env = TestEnv::new();
    env.write_file("list.md", "Run **now** with `x`\n");

    env.rdesk()
        .args(["preview", "list.md", "--mode", "styled"])
        .assert()
        .success()
        .stdout("paragraph\tRun now with x\n");
}

// =============================================================================
// completions / help
// =============================================================================

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.rdesk()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rdesk"))
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();
    env.rdesk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("session"))
        .stdout(predicate::str::contains(".reviewdesk"))
        .stdout(predicate::str::contains("□ Step"))
        .stdout(predicate::str::contains("- [ ]").not())
        .stdout(predicate::str::contains("page breaks").not());
}

#[test]
fn test_session_add_rejects_unsupported_type() {
    let env = TestEnv::new();
    env.write_file("notes.txt", "x");

    env.rdesk()
        .args(["session", "--add", "notes.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported document type"));
}

#[test]
fn test_session_add_respects_configured_limits() {
    let env = TestEnv::new();
    env.write_project_config("[session]\nmax_file_size_mb = 0\n");
    env.write_file("scan.pdf", "x");

    env.rdesk()
        .args(["session", "--add", "scan.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("scan.pdf is too large"));
}

#[test]
fn test_session_add_stops_at_full_queue() {
    let env = TestEnv::new();
    env.write_project_config("[session]\nmax_documents = 1\n");
    env.write_file("a.pdf", "x");
    env.write_file("b.pdf", "y");

    env.rdesk()
        .args(["session", "--add", "a.pdf", "--add", "b.pdf"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Queued a.pdf"))
        .stderr(predicate::str::contains("Queue is full"));
}
