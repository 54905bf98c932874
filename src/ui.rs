//! # UI Utilities
//!
//! Shared formatting helpers for command output and the session screens.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::Path;

use owo_colors::OwoColorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::Config;

// =============================================================================
// Success Messages
// =============================================================================

/// Prints a success message with a project-relative path.
///
/// Format: `✓ {message}: {relative_path}`
pub fn print_success(message: &str, config: &Config, path: &Path) {
    println!(
        "{} {}: {}",
        "✓".green(),
        message,
        config.relative_path(path).display()
    );
}

// =============================================================================
// Number Formatting
// =============================================================================

/// Groups digits in thousands: `1234567` becomes `1,234,567`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a byte count as `1,234 bytes`.
pub fn format_bytes(n: u64) -> String {
    format!("{} bytes", group_thousands(n))
}

/// Formats a byte count in kilobytes with one decimal.
pub fn format_kb(n: u64) -> String {
    format!("{:.1} KB", n as f64 / 1024.0)
}

// =============================================================================
// String Utilities
// =============================================================================

/// Truncates a string to at most `max` characters, adding an ellipsis if truncated.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

/// Pads a string with spaces to a display width, counting wide characters twice.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width.saturating_sub(out.width())));
    out
}
