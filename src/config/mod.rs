//! # Configuration
//!
//! Project configuration (.reviewdesk) resolved against its project root.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod project;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use self::project::ProjectConfig;
use crate::{
    checklist::{OutputMode, StyleTable},
    constants::DEFAULT_HEADING_SYMBOLS,
    error::ConvertError,
};

/// Project configuration together with the directory it applies to
#[derive(Debug, Clone)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Directory holding .reviewdesk, or the current directory when there is none
    pub project_root: PathBuf,
}

impl Config {
    /// Loads the nearest project configuration, falling back to defaults
    /// rooted at the current directory.
    pub fn load() -> Result<Self> {
        let Some(project_root) = ProjectConfig::find_project_root() else {
            tracing::debug!("no project config found, using defaults");
            return Self::for_init();
        };

        let project = ProjectConfig::load(&project_root)?;
        tracing::debug!(root = %project_root.display(), "loaded project config");

        Ok(Self {
            project,
            project_root,
        })
    }

    /// Creates a default config rooted at the current directory
    pub fn for_init() -> Result<Self> {
        let project_root = std::env::current_dir().context("Cannot get current directory")?;

        Ok(Self {
            project: ProjectConfig::default(),
            project_root,
        })
    }

    /// Returns the configured checklist path
    pub fn input_path(&self) -> PathBuf {
        self.project.input_path(&self.project_root)
    }

    /// Returns the configured PDF path
    pub fn output_path(&self) -> PathBuf {
        self.project.output_path(&self.project_root)
    }

    /// Returns the effective output mode (command line wins over the file)
    pub fn mode(&self, requested: Option<OutputMode>) -> OutputMode {
        requested.unwrap_or(self.project.mode)
    }

    /// Returns the decorative symbols stripped from headings
    pub fn heading_symbols(&self) -> Vec<char> {
        self.project
            .heading_symbols
            .clone()
            .unwrap_or_else(|| DEFAULT_HEADING_SYMBOLS.to_vec())
    }

    /// Builds the style table for a mode with the configured overrides applied
    pub fn style_table(&self, mode: OutputMode) -> Result<StyleTable, ConvertError> {
        let mut styles = StyleTable::preset(mode);
        styles.apply_overrides(&self.project.styles)?;
        Ok(styles)
    }

    /// Returns path relative to project root
    pub fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.project_root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{LineKind, StyleOverride};

    fn config(project: ProjectConfig) -> Config {
        Config {
            project,
            project_root: PathBuf::from("/project"),
        }
    }

    #[test]
    fn test_mode_flag_overrides_file() {
        let config = config(ProjectConfig {
            mode: OutputMode::Styled,
            ..ProjectConfig::default()
        });
        assert_eq!(config.mode(None), OutputMode::Styled);
        assert_eq!(config.mode(Some(OutputMode::Plain)), OutputMode::Plain);
    }

    #[test]
    fn test_default_heading_symbols() {
        let config = config(ProjectConfig::default());
        assert!(config.heading_symbols().contains(&'🚀'));
        assert!(config.heading_symbols().contains(&'\u{FE0F}'));
    }

    #[test]
    fn test_style_table_applies_overrides() {
        let mut project = ProjectConfig::default();
        project.styles.insert(
            LineKind::Checkbox,
            StyleOverride {
                left_indent: Some(30.0),
                ..StyleOverride::default()
            },
        );
        let table = config(project).style_table(OutputMode::Plain).unwrap();
        let indent = table.get(LineKind::Checkbox).unwrap().left_indent;
        assert!((indent - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_relative_path() {
        let config = config(ProjectConfig::default());
        assert_eq!(
            config.relative_path(Path::new("/project/docs/out.pdf")),
            PathBuf::from("docs/out.pdf")
        );
        assert_eq!(
            config.relative_path(Path::new("/elsewhere/out.pdf")),
            PathBuf::from("/elsewhere/out.pdf")
        );
    }
}
