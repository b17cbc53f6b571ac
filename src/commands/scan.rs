//! Scan command implementation

use crate::aggregate::summarize;
use crate::cli::Cli;
use crate::error::{Result, TextsiftError};
use crate::extract::parse_path;
use crate::fs_utils::ScanOptions;
use crate::report::{export_json, export_text, render_console};

/// Run a scan and return the console summary.
///
/// Report export failures are logged and do not fail the scan.
pub fn run_scan(cli: &Cli) -> Result<String> {
    let path = &cli.path;
    if !path.exists() {
        return Err(TextsiftError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    tracing::info!("Scanning {}", path.display());
    let results = parse_path(path, &ScanOptions::default());
    let summary = summarize(&results);

    if let Some(json_path) = &cli.output_json {
        if let Err(e) = export_json(json_path, &results, &summary) {
            tracing::error!("{}", e);
        }
    }

    if let Some(text_path) = &cli.output_text {
        if let Err(e) = export_text(text_path, &summary) {
            tracing::error!("{}", e);
        }
    }

    Ok(render_console(&summary, cli.samples))
}
