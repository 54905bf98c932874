//! # Constants
//!
//! Centralized constants for magic values used throughout reviewdesk.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Checklist Syntax
// =============================================================================

/// Line prefix of the document title.
pub const TITLE_PREFIX: &str = "# ";

/// Line prefix of a section heading.
pub const HEADING_PREFIX: &str = "## ";

/// Line prefix of a subheading.
pub const SUBHEADING_PREFIX: &str = "### ";

/// Glyph opening a checklist item in the source.
pub const CHECKBOX_GLYPH: char = '□';

/// Glyph the checklist item is rendered with.
pub const CHECKBOX_RENDERED_GLYPH: char = '☐';

/// Substrings marking a result or notes line.
pub const RESULT_MARKERS: [&str; 2] = ["Result:", "Notes:"];

/// Prefix of a horizontal rule.
pub const RULE_PREFIX: &str = "---";

/// Prefix of a fenced code block delimiter.
pub const CODE_FENCE: &str = "```";

/// First character of a pipe-table row.
pub const TABLE_ROW: char = '|';

/// Decorative symbols removed from section headings.
///
/// U+FE0F is listed on its own: it trails several of the emoji and would
/// otherwise survive their removal.
pub const DEFAULT_HEADING_SYMBOLS: &[char] = &[
    '🚀', '✅', '🎛', '📤', '📋', '📊', '🛡', '🎯', '🧪', '📝', '📞', '\u{FE0F}',
];

// =============================================================================
// Page Geometry (PostScript points)
// =============================================================================

/// A4 page width.
pub const PAGE_WIDTH: f32 = 595.28;

/// A4 page height.
pub const PAGE_HEIGHT: f32 = 841.89;

/// Left and right margin (0.75 in).
pub const MARGIN_SIDE: f32 = 54.0;

/// Top and bottom margin (1 in).
pub const MARGIN_VERTICAL: f32 = 72.0;

/// Line height as a multiple of the font size.
pub const LEADING_FACTOR: f32 = 1.2;

/// Font size of the page footer.
pub const FOOTER_FONT_SIZE: f32 = 8.0;

/// Placeholder in the footer template replaced by the page number.
pub const FOOTER_PAGE_PLACEHOLDER: &str = "{page}";

/// Height of a spacer standing in for an empty trailer line.
pub const TRAILER_BLANK_SPACING: f32 = 6.0;

// =============================================================================
// Conversion Defaults
// =============================================================================

/// Default checklist location (relative to the project root).
pub const DEFAULT_INPUT: &str = "docs/uat_quick_checklist.md";

/// Default PDF location (relative to the project root).
pub const DEFAULT_OUTPUT: &str = "docs/UAT_Quick_Checklist_v1.0.0.pdf";

/// Default PDF document title.
pub const DEFAULT_DOCUMENT_TITLE: &str = "UAT Quick Checklist";

/// Producer string written to the PDF information dictionary.
pub const PDF_PRODUCER: &str = concat!("reviewdesk ", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Review Session
// =============================================================================

/// Document extensions accepted by the upload page.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "doc"];

/// Largest document the upload page accepts, in megabytes.
pub const MAX_UPLOAD_SIZE_MB: u64 = 50;

/// Number of documents the queue holds at most.
pub const MAX_QUEUED_DOCUMENTS: usize = 10;

/// Timestamp format for upload times.
pub const UPLOAD_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Message shown by the placeholder processing action.
pub const PROCESSING_PENDING_MESSAGE: &str =
    "Review processing is not available yet; the document stays queued.";

/// Maximum length for document names in the queue list.
pub const UI_NAME_TRUNCATE_LEN: usize = 40;

// =============================================================================
// File System
// =============================================================================

/// Project configuration file name.
pub const PROJECT_CONFIG_FILE: &str = ".reviewdesk";
