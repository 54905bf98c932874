//! # Project Configuration
//!
//! Handles the project-level configuration stored at `.reviewdesk` in the project root.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    checklist::{LineKind, OutputMode, StyleOverride, Trailer},
    constants::{DEFAULT_DOCUMENT_TITLE, DEFAULT_INPUT, DEFAULT_OUTPUT, PROJECT_CONFIG_FILE},
    session::UploadLimits,
};

/// Project configuration stored at .reviewdesk in project root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Checklist to convert, relative to the project root
    #[serde(default = "default_input")]
    pub input: String,

    /// PDF to write, relative to the project root
    #[serde(default = "default_output")]
    pub output: String,

    /// Inline markup handling
    #[serde(default)]
    pub mode: OutputMode,

    /// Title stored in the PDF document information
    #[serde(default = "default_title")]
    pub title: String,

    /// Footer drawn on every page; `{page}` becomes the page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    /// Replaces the built-in decorative heading symbols
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_symbols: Option<Vec<char>>,

    /// Upload limits of the review session
    #[serde(default)]
    pub session: UploadLimits,

    /// Closing section after the checklist
    #[serde(default)]
    pub trailer: Trailer,

    /// Per-kind style overrides
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<LineKind, StyleOverride>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            mode: OutputMode::default(),
            title: default_title(),
            footer: None,
            heading_symbols: None,
            session: UploadLimits::default(),
            trailer: Trailer::default(),
            styles: BTreeMap::new(),
        }
    }
}

fn default_input() -> String {
    DEFAULT_INPUT.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_title() -> String {
    DEFAULT_DOCUMENT_TITLE.to_string()
}

impl ProjectConfig {
    /// Finds the project root by searching for .reviewdesk file upward
    pub fn find_project_root() -> Option<PathBuf> {
        let mut current = env::current_dir().ok()?;

        loop {
            if current.join(PROJECT_CONFIG_FILE).is_file() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Returns the path to the project config file
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    /// Loads the project config from .reviewdesk in the given directory
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read project config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse project config: {}", path.display()))
    }

    /// Saves the project config to .reviewdesk
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = Self::path(project_root);
        let content = toml::to_string_pretty(self).context("Failed to serialize project config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write project config: {}", path.display()))
    }

    /// Writes a fresh config file documenting every option.
    ///
    /// Keys with a value are written as-is; optional ones appear as
    /// commented examples.
    pub fn save_with_comments(&self, project_root: &Path) -> Result<()> {
        let path = Self::path(project_root);

        let footer_line = self.footer.as_ref().map_or_else(
            || "# footer = \"UAT Quick Checklist - Page {page}\"".to_string(),
            |footer| format!("footer = {}", toml_string(footer)),
        );
        let trailer_lines = self
            .trailer
            .lines
            .iter()
            .map(|line| format!("  {},", toml_string(line)))
            .collect::<Vec<_>>()
            .join("\n");

        let content = format!(
            r###"# reviewdesk Project Configuration
# Paths are relative to the directory holding this file.

# Markdown checklist read by `rdesk convert`.
input = {input}

# PDF written by `rdesk convert`.
output = {output}

# Inline markup handling: "plain" removes **bold**, `code` and *italic*
# markers, "styled" renders them in bold, monospace and oblique faces.
mode = "{mode}"

# Title stored in the PDF document information.
title = {title}

# Footer drawn at the bottom of every page. {{page}} becomes the page number.
{footer_line}

# Symbols removed from "## " headings. Defaults to the built-in emoji set.
# heading_symbols = ["🚀", "✅", "📋"]

# Limits of `rdesk session`.
[session]
max_file_size_mb = {max_file_size_mb}
max_documents = {max_documents}

# Closing section placed on its own page after the checklist.
# Empty strings become small vertical gaps.
[trailer]
heading = {heading}
lines = [
{trailer_lines}
]

# Style overrides per line kind: title, heading, subheading, checkbox,
# result_or_notes, paragraph, rule. Unset fields keep the built-in value.
#
# [styles.heading]
# font_size = 12.0
# space_before = 15.0
# space_after = 10.0
# color = "#34495e"
# alignment = "left"
# left_indent = 0.0
# bold = true
"###,
            input = toml_string(&self.input),
            output = toml_string(&self.output),
            mode = self.mode,
            title = toml_string(&self.title),
            heading = toml_string(&self.trailer.heading),
            max_file_size_mb = self.session.max_file_size_mb,
            max_documents = self.session.max_documents,
        );

        fs::write(&path, content)
            .with_context(|| format!("Failed to write project config: {}", path.display()))
    }

    /// Returns the full path to the checklist
    pub fn input_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.input)
    }

    /// Returns the full path to the PDF
    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output)
    }
}

/// Quotes a value as a TOML basic string.
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert_eq!(config.input, DEFAULT_INPUT);
        assert_eq!(config.output, DEFAULT_OUTPUT);
        assert_eq!(config.mode, OutputMode::Plain);
        assert!(config.footer.is_none());
        assert!(config.styles.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let toml = r##"
input = "checklists/release.md"
mode = "styled"
footer = "Release - Page {page}"
heading_symbols = ["★"]

[trailer]
heading = "Sign-off"

[styles.title]
font_size = 18.0
color = "#112233"
"##;
        let config: ProjectConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.input, "checklists/release.md");
        assert_eq!(config.output, DEFAULT_OUTPUT);
        assert_eq!(config.mode, OutputMode::Styled);
        assert_eq!(config.heading_symbols, Some(vec!['★']));
        assert_eq!(config.trailer.heading, "Sign-off");
        assert_eq!(config.trailer.lines, Trailer::default().lines);
        assert_eq!(config.styles[&LineKind::Title].font_size, Some(18.0));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<ProjectConfig>("stack_dir = \"x\"").is_err());
    }

    #[test]
    fn test_commented_template_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ProjectConfig::default();
        config.save_with_comments(dir.path()).unwrap();

        let loaded = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_commented_template_keeps_custom_values() {
        let dir = tempfile::tempdir().unwrap();
        let config = ProjectConfig {
            input: "checks/release \"final\".md".to_string(),
            mode: OutputMode::Styled,
            title: "Release ## Checks".to_string(),
            footer: Some("Release \"## {page}\"".to_string()),
            session: UploadLimits {
                max_file_size_mb: 5,
                max_documents: 3,
            },
            trailer: Trailer {
                heading: "Sign-off".to_string(),
                lines: vec!["QA: ____".to_string(), String::new()],
            },
            ..ProjectConfig::default()
        };
        config.save_with_comments(dir.path()).unwrap();

        let loaded = ProjectConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_session_limits_from_file() {
        let config: ProjectConfig =
            toml::from_str("[session]\nmax_documents = 4\n").unwrap();
        assert_eq!(config.session.max_documents, 4);
        assert_eq!(config.session.max_file_size_mb, 50);
        assert!(toml::from_str::<ProjectConfig>("[session]\nmax_files = 4\n").is_err());
    }

    #[test]
    fn test_paths() {
        let config = ProjectConfig::default();
        let root = PathBuf::from("/project");

        assert_eq!(
            config.input_path(&root),
            PathBuf::from("/project/docs/uat_quick_checklist.md")
        );
        assert_eq!(
            config.output_path(&root),
            PathBuf::from("/project/docs/UAT_Quick_Checklist_v1.0.0.pdf")
        );
    }
}
