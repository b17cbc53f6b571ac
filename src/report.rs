//! Report rendering and export
//!
//! Three renderings of the same [`Summary`]: the JSON report written with
//! `--output-json`, the plain-text listing written with `--output-text`, and
//! the short console summary printed after every scan.

use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::error::{Result, TextsiftError};
use crate::lang::SUPPORTED_EXTENSIONS;
use crate::schema::{ParsedFileResult, Summary, SummaryEntry};

// ============================================================================
// JSON
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub timestamp: String,
    pub total_files: usize,
    pub supported_extensions: Vec<String>,
}

/// Top-level JSON document
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    pub metadata: ReportMetadata,
    pub summary: &'a Summary,
    pub detailed_results: &'a [ParsedFileResult],
}

impl<'a> JsonReport<'a> {
    pub fn new(results: &'a [ParsedFileResult], summary: &'a Summary) -> Self {
        Self {
            metadata: ReportMetadata {
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                total_files: results.len(),
                supported_extensions: SUPPORTED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            },
            summary,
            detailed_results: results,
        }
    }
}

pub fn render_json(results: &[ParsedFileResult], summary: &Summary) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(results, summary))?)
}

// ============================================================================
// Text
// ============================================================================

/// One numbered listing line for a fragment
pub fn format_entry(index: usize, entry: &SummaryEntry) -> String {
    let fragment = &entry.fragment;
    let mut line = format!(
        "{}. [{}] {} (Line: {}, Pos: {}-{})",
        index + 1,
        fragment.kind.as_str(),
        entry.file.as_deref().unwrap_or("<buffer>"),
        fragment.line_number,
        fragment.column_start,
        fragment.column_end
    );

    if let Some(name) = &fragment.attribute_name {
        line.push_str(&format!(" [{}]", name));
    }

    line.push_str(&format!(": \"{}\"", fragment.text));

    if fragment.original_match != fragment.text {
        line.push_str(&format!(" | Original: {}", fragment.original_match));
    }

    line
}

pub fn render_text(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str("Extracted Text Report\n");
    out.push_str("=====================\n\n");
    out.push_str(&format!("Total Files Processed: {}\n", summary.total_files));
    out.push_str(&format!("Total Texts Found: {}\n\n", summary.total_texts));

    out.push_str("File Types:\n");
    for (ext, count) in &summary.file_types {
        out.push_str(&format!("  {}: {} files\n", ext, count));
    }

    out.push_str("\nText Types:\n");
    for (category, count) in &summary.text_types {
        out.push_str(&format!("  {}: {} items\n", category.as_str(), count));
    }

    out.push_str("\n\nAll Texts with Position Info:\n");
    out.push_str("=============================\n\n");
    for (index, entry) in summary.all_texts.iter().enumerate() {
        out.push_str(&format_entry(index, entry));
        out.push('\n');
    }

    out
}

// ============================================================================
// Console
// ============================================================================

/// Console summary with the first `samples` texts
pub fn render_console(summary: &Summary, samples: usize) -> String {
    let mut out = String::new();
    out.push_str("=== SUMMARY ===\n");
    out.push_str(&format!("Total files processed: {}\n", summary.total_files));
    out.push_str(&format!("Total texts found: {}\n", summary.total_texts));

    out.push_str("\nFile types:\n");
    for (ext, count) in &summary.file_types {
        out.push_str(&format!("  {}: {} files\n", ext, count));
    }

    out.push_str("\nText types found:\n");
    for (category, count) in summary.text_types.iter().filter(|(_, n)| **n > 0) {
        out.push_str(&format!("  {}: {} items\n", category.as_str(), count));
    }

    if samples > 0 && !summary.all_texts.is_empty() {
        out.push_str(&format!("\n=== SAMPLE TEXTS (first {}) ===\n", samples));
        for (index, entry) in summary.all_texts.iter().take(samples).enumerate() {
            out.push_str(&format!(
                "{}. [{}] {}: \"{}\"\n",
                index + 1,
                entry.fragment.kind.as_str(),
                entry.file.as_deref().unwrap_or("<buffer>"),
                entry.fragment.text
            ));
        }
        if summary.all_texts.len() > samples {
            out.push_str(&format!("... and {} more texts\n", summary.all_texts.len() - samples));
        }
    }

    out
}

// ============================================================================
// Export
// ============================================================================

pub fn export_json(path: &Path, results: &[ParsedFileResult], summary: &Summary) -> Result<()> {
    let json = render_json(results, summary)?;
    write_report(path, &json)
}

pub fn export_text(path: &Path, summary: &Summary) -> Result<()> {
    write_report(path, &render_text(summary))
}

/// Write `content` to `path`, creating missing parent directories
fn write_report(path: &Path, content: &str) -> Result<()> {
    let export_err = |e: std::io::Error| TextsiftError::Export {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(export_err)?;
            tracing::info!("Created directory: {}", parent.display());
        }
    }

    fs::write(path, content).map_err(export_err)?;
    tracing::info!("Report written to {}", path.display());
    Ok(())
}
