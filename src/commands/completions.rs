//! # Completions Command
//!
//! Shell completion scripts for rdesk.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use anyhow::Result;
use clap::Command;
use clap_complete::{generate, Shell};

/// Writes the completion script for `shell` to stdout.
///
/// `cmd` is the full CLI definition (`Cli::command()`).
pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(generate_to_string(shell, cmd).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Renders the completion script for `shell` into a string.
pub fn generate_to_string(shell: Shell, cmd: &mut Command) -> String {
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    generate(shell, cmd, name, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
