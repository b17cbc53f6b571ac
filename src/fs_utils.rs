//! Directory traversal for scans
//!
//! - `ScanOptions`: which directories are skipped while walking
//! - `collect_files`: every supported source file under a root, sorted

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::lang::Lang;

/// Directory names never descended into
pub const DEFAULT_SKIP_DIRS: &[&str] = &["node_modules", ".git", ".next", "dist", "build", ".vscode"];

/// Options controlling the directory walk
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory names skipped wherever they appear
    pub skip_dirs: Vec<String>,
    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            follow_links: false,
        }
    }
}

impl ScanOptions {
    pub fn is_skipped_dir(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|dir| dir == name)
    }
}

/// Collect every file under `root` with a supported extension.
///
/// No ignore files are consulted and hidden files are visited; only the
/// named directories in `options` are pruned. Entries that cannot be read
/// are logged and skipped, and the rest of the walk carries on.
pub fn collect_files(root: &Path, options: &ScanOptions) -> Vec<PathBuf> {
    let filter_options = options.clone();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .follow_links(options.follow_links)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().map_or(false, |ft| ft.is_dir());
            !(is_dir
                && entry
                    .file_name()
                    .to_str()
                    .map_or(false, |name| filter_options.is_skipped_dir(name)))
        })
        .build();

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                let is_file = entry.file_type().map_or(false, |ft| ft.is_file());
                if is_file && Lang::from_path(entry.path()).is_ok() {
                    files.push(entry.into_path());
                }
            }
            Err(e) => {
                tracing::error!("Error reading directory entry under {}: {}", root.display(), e);
            }
        }
    }

    files
}
