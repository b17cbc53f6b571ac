//! textsift: natural-language text extraction for script and markup sources
//!
//! Scans JavaScript/TypeScript, JSX/TSX components, Vue single-file
//! components and HTML documents for substrings a person would read (UI
//! labels, messages, attribute text) and records exact byte and line/column
//! positions for each. Extracted spans can then be masked in place with
//! [`replace_extracted`].
//!
//! # Supported Dialects
//!
//! - Script: `.js`, `.ts` (string literals)
//! - Component: `.jsx`, `.tsx` (returned markup plus surrounding script)
//! - Template: `.vue` (`<template>` and `<script>` sections)
//! - Markup: `.html` (document text plus inline scripts)
//!
//! # Example
//!
//! ```
//! use textsift::{extract_fragments, replace_extracted, Dialect};
//!
//! let source = r#"<p title="Click here">Welcome</p>"#;
//! let fragments = extract_fragments(source, Dialect::Markup);
//! assert_eq!(fragments.len(), 2);
//!
//! let masked = replace_extracted(source, &fragments);
//! assert_eq!(masked.len(), source.len());
//! ```

pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod commands;
pub mod detectors;
pub mod error;
pub mod extract;
pub mod fs_utils;
pub mod guards;
pub mod lang;
pub mod literals;
pub mod position;
pub mod replace;
pub mod report;
pub mod sanitize;
pub mod schema;
pub mod scope;

// Re-export commonly used types
pub use aggregate::summarize;
pub use classify::is_non_textual;
pub use cli::Cli;
pub use error::{Result, TextsiftError};
pub use extract::{extract_fragments, parse_content, parse_directory, parse_file, parse_path};
pub use fs_utils::ScanOptions;
pub use lang::{Dialect, Lang, SUPPORTED_EXTENSIONS};
pub use position::{resolve, Position};
pub use replace::{apply_edits, replace_extracted, replace_with, ReplacementEdit};
pub use sanitize::sanitize;
pub use schema::{
    ExtractedFragment, FragmentCategory, FragmentKind, ParsedFileResult, Summary, SummaryEntry,
    TextContext,
};
pub use scope::Scope;
