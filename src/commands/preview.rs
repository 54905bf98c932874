//! # Preview Command
//!
//! Prints the classified checklist, one `kind<TAB>text` line per block.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

use crate::{
    checklist::OutputMode,
    config::Config,
    convert::{preview, ConvertOptions},
};

/// Arguments for the preview command
#[derive(Debug, Clone, Default)]
pub struct PreviewArgs {
    pub input: Option<PathBuf>,
    pub mode: Option<OutputMode>,
}

/// Executes the preview command.
pub fn execute(args: PreviewArgs) -> Result<()> {
    let config = Config::load()?;
    let input = args.input.unwrap_or_else(|| config.input_path());
    let options = ConvertOptions::from_config(&config, args.mode)
        .context("Invalid style configuration")?;

    let text = fs::read_to_string(&input)
        .with_context(|| format!("Checklist not found or unreadable: {}", input.display()))?;

    let mut out = io::stdout().lock();
    for block in preview(&text, &options) {
        writeln!(out, "{}\t{}", block.kind, block.text)?;
    }
    out.flush()?;

    Ok(())
}
