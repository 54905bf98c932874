//! # Convert Command
//!
//! Renders the Markdown checklist into a PDF.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{
    checklist::OutputMode,
    config::Config,
    convert::{convert, ConvertOptions},
    render::PdfRenderer,
    ui,
};

/// Arguments for the convert command
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Checklist to read (configured input when absent)
    pub input: Option<PathBuf>,
    /// PDF to write (configured output when absent)
    pub output: Option<PathBuf>,
    pub mode: Option<OutputMode>,
}

/// Executes the convert command.
pub fn execute(args: ConvertArgs) -> Result<()> {
    let config = Config::load()?;
    let input = args.input.unwrap_or_else(|| config.input_path());
    let output = args.output.unwrap_or_else(|| config.output_path());
    let options = ConvertOptions::from_config(&config, args.mode)
        .context("Invalid style configuration")?;

    println!(
        "Converting {} to PDF...",
        config.relative_path(&input).display()
    );

    let report = convert(&input, &output, &options, &PdfRenderer::default())
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    ui::print_success("PDF created", &config, &report.output);
    println!(
        "  {} {}",
        "Size:".dimmed(),
        ui::format_kb(u64::try_from(report.bytes).unwrap_or(u64::MAX))
    );

    Ok(())
}
