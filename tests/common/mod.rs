//! # Test Harness
//!
//! Temporary project directories for integration tests. Tests that change
//! the working directory serialize on a process-wide lock.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use assert_cmd::Command;
use tempfile::TempDir;

/// Guards the current directory, which is process-wide state.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// A temporary project directory that is the current directory while alive.
pub struct TestEnv {
    pub project_dir: TempDir,
    original_cwd: PathBuf,
    _guard: MutexGuard<'static, ()>,
}

impl TestEnv {
    pub fn new() -> Self {
        // A panicking test poisons the lock; the directory is restored on drop anyway
        let guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let project_dir = TempDir::new().expect("Failed to create temp project dir");
        let original_cwd = env::current_dir().expect("Failed to get current dir");
        env::set_current_dir(project_dir.path()).expect("Failed to change to project dir");

        Self {
            project_dir,
            original_cwd,
            _guard: guard,
        }
    }

    pub fn project_path(&self) -> &Path {
        self.project_dir.path()
    }

    /// Absolute path of a project-relative file.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_dir.path().join(relative)
    }

    pub fn project_config_path(&self) -> PathBuf {
        self.path(".reviewdesk")
    }

    pub fn write_project_config(&self, content: &str) {
        fs::write(self.project_config_path(), content).expect("Failed to write project config");
    }

    /// Writes a file below the project, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// An `rdesk` invocation running inside the project directory.
    pub fn rdesk(&self) -> Command {
        let mut cmd = Command::cargo_bin("rdesk").expect("rdesk binary");
        cmd.current_dir(self.project_path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original_cwd);
    }
}

/// A checklist touching every line kind.
pub const SAMPLE_CHECKLIST: &str = "\
# 📋 UAT Quick Checklist

## 🚀 Installation
### Prerequisites
□ Download the installer
□ Run **setup** with `--defaults`
**Result:** Pass / Fail
**Notes:**

```bash
```
| Step | Expected |
---
## ✅ Sign-off
Everything above was checked.
";

/// Number of pages in a PDF file.
pub fn pdf_page_count(path: &Path) -> usize {
    let document = lopdf::Document::load(path).expect("Failed to load PDF");
    document.get_pages().len()
}
