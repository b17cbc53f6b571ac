//! Extraction orchestration
//!
//! Sanitizes a buffer once, dispatches it to the extractor for its dialect
//! and wraps the fragments in a [`ParsedFileResult`]. File and directory
//! entry points log failures and keep going; nothing here returns an error.

use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use rayon::prelude::*;

use crate::detectors::{component, document, script, template};
use crate::fs_utils::{collect_files, ScanOptions};
use crate::lang::{Dialect, Lang};
use crate::sanitize::sanitize;
use crate::schema::{categorize, ExtractedFragment, ParsedFileResult};
use crate::scope::Scope;

/// Sanitize `source` and extract fragments for `dialect`.
///
/// Sanitizing preserves byte length, so every offset refers to `source`.
pub fn extract_fragments(source: &str, dialect: Dialect) -> Vec<ExtractedFragment> {
    let sanitized = sanitize(source);
    extract_sanitized(&sanitized, dialect)
}

/// Extract fragments from an already sanitized buffer
pub fn extract_sanitized(source: &str, dialect: Dialect) -> Vec<ExtractedFragment> {
    let scope = Scope::whole(source);
    match dialect {
        Dialect::Script => script::extract(scope),
        Dialect::Component => component::extract(scope),
        Dialect::Template => template::extract(scope),
        Dialect::Markup => document::extract(scope),
    }
}

/// Parse an in-memory buffer selected by `extension` (`.tsx`, `vue`, ...).
///
/// Returns `None`, with a warning, for unsupported extensions.
pub fn parse_content(
    content: &str,
    extension: &str,
    file_path: Option<&str>,
    file_name: Option<&str>,
) -> Option<ParsedFileResult> {
    let lang = match Lang::from_extension(extension) {
        Ok(lang) => lang,
        Err(e) => {
            tracing::warn!("Skipping {}: {}", file_path.unwrap_or("<buffer>"), e);
            return None;
        }
    };

    let dialect = lang.dialect();
    let fragments = extract_fragments(content, dialect);
    tracing::debug!(
        "Extracted {} fragment(s) from {} ({})",
        fragments.len(),
        file_path.unwrap_or("<buffer>"),
        dialect.name()
    );

    Some(ParsedFileResult {
        file_path: file_path.map(str::to_string),
        file_name: file_name.map(str::to_string),
        extension: format!(".{}", extension.trim_start_matches('.').to_lowercase()),
        dialect,
        extracted_text: categorize(dialect, fragments),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Read and parse a single file. Unsupported or unreadable files yield `None`.
pub fn parse_file(path: &Path) -> Option<ParsedFileResult> {
    let shown = path.display().to_string();

    let extension = match Lang::from_path(path) {
        Ok(_) => path.extension().and_then(|e| e.to_str()).unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Skipping {}: {}", shown, e);
            return None;
        }
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Error processing file {}: {}", shown, e);
            return None;
        }
    };

    let file_name = path.file_name().and_then(|n| n.to_str());
    parse_content(&content, extension, Some(&shown), file_name)
}

/// Parse every supported file under `root`, in path order.
///
/// Files are processed in parallel; results keep the sorted walk order.
pub fn parse_directory(root: &Path, options: &ScanOptions) -> Vec<ParsedFileResult> {
    let files = collect_files(root, options);
    tracing::debug!("Found {} supported file(s) under {}", files.len(), root.display());

    files
        .par_iter()
        .filter_map(|path| parse_file(path))
        .collect()
}

/// Parse a file or a directory
pub fn parse_path(path: &Path, options: &ScanOptions) -> Vec<ParsedFileResult> {
    if path.is_dir() {
        parse_directory(path, options)
    } else {
        parse_file(path).into_iter().collect()
    }
}
