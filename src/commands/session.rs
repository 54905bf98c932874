//! # Session Command
//!
//! Opens the interactive review session, optionally pre-loading documents.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    session::{pages, UploadQueue},
    tui::screens::run_session,
    ui,
};

/// Arguments for the session command
#[derive(Debug, Clone, Default)]
pub struct SessionArgs {
    /// Documents queued before the screen opens
    pub add: Vec<PathBuf>,
}

/// Executes the session command.
pub fn execute(args: SessionArgs) -> Result<()> {
    let config = Config::load()?;
    let limits = config.project.session;
    let mut queue = UploadQueue::new();

    for path in &args.add {
        let record = pages::upload(&mut queue, path, &limits)
            .with_context(|| format!("Cannot add {}", path.display()))?;
        println!(
            "{} Queued {} ({})",
            "✓".green(),
            record.name,
            ui::format_bytes(record.size)
        );
    }

    run_session(&mut queue, limits)?;

    println!(
        "Session closed, {} document(s) discarded",
        queue.len()
    );
    Ok(())
}
