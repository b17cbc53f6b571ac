//! Error types and exit codes for textsift

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for textsift operations
#[derive(Error, Debug)]
pub enum TextsiftError {
    #[error("Path does not exist: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported file type: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("Failed to write report to {path}: {message}")]
    Export { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TextsiftError {
    /// Convert error to a process exit code:
    /// - 0: Success
    /// - 1: Path not found / IO error
    /// - 2: Unsupported file type
    /// - 3: Report serialization or export failure
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::UnsupportedLanguage { .. } => ExitCode::from(2),
            Self::Export { .. } => ExitCode::from(3),
            Self::Json(_) => ExitCode::from(3),
            Self::Io(_) => ExitCode::from(1),
        }
    }
}

/// Result type alias for textsift operations
pub type Result<T> = std::result::Result<T, TextsiftError>;
