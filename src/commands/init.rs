//! # Init Command
//!
//! Writes a documented .reviewdesk file into the current directory.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fs;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::config::{Config, ProjectConfig};

/// Executes the init command.
pub fn execute() -> Result<()> {
    let config = Config::for_init()?;

    let config_path = ProjectConfig::path(&config.project_root);
    if config_path.exists() {
        anyhow::bail!(
            "Project already initialized (found {})",
            config_path.display()
        );
    }

    config.project.save_with_comments(&config.project_root)?;

    let input_path = config.input_path();
    if let Some(parent) = input_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    println!("{} Initialized reviewdesk project", "✓".green());
    println!("  {} {}", "Config:".dimmed(), config_path.display());
    println!(
        "  {} {}",
        "Checklist:".dimmed(),
        config.relative_path(&input_path).display()
    );

    Ok(())
}
