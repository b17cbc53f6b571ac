//! File-type detection and dialect mapping

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextsiftError};
use crate::schema::FragmentCategory;

/// Extensions reported in JSON metadata, in the order they are documented.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx", ".vue", ".html"];

/// Supported source file types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    JavaScript,
    TypeScript,
    Jsx,
    Tsx,
    /// Vue Single File Component (.vue)
    Vue,
    Html,
}

impl Lang {
    /// Detect file type from a path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| TextsiftError::UnsupportedLanguage {
                extension: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect file type from an extension string, with or without the leading dot
    pub fn from_extension(ext: &str) -> Result<Self> {
        let normalized = ext.trim_start_matches('.').to_lowercase();
        match normalized.as_str() {
            "js" | "mjs" | "cjs" => Ok(Self::JavaScript),
            "ts" | "mts" | "cts" => Ok(Self::TypeScript),
            "jsx" => Ok(Self::Jsx),
            "tsx" => Ok(Self::Tsx),
            "vue" => Ok(Self::Vue),
            "html" | "htm" => Ok(Self::Html),
            _ => Err(TextsiftError::UnsupportedLanguage {
                extension: ext.to_string(),
            }),
        }
    }

    /// Get the canonical name of the file type
    pub fn name(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Jsx => "jsx",
            Self::Tsx => "tsx",
            Self::Vue => "vue",
            Self::Html => "html",
        }
    }

    /// Get the extraction dialect used for this file type
    pub fn dialect(&self) -> Dialect {
        match self {
            Self::JavaScript | Self::TypeScript => Dialect::Script,
            Self::Jsx | Self::Tsx => Dialect::Component,
            Self::Vue => Dialect::Template,
            Self::Html => Dialect::Markup,
        }
    }
}

/// Source dialects sharing one extraction pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dialect {
    /// Plain script files (.js, .ts)
    Script,
    /// Script with inline markup returned from components (.jsx, .tsx)
    Component,
    /// Separate template/script/style sections (.vue)
    Template,
    /// Plain markup documents (.html)
    Markup,
}

impl Dialect {
    /// Get the canonical name of the dialect
    pub fn name(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Component => "component",
            Self::Template => "template",
            Self::Markup => "markup",
        }
    }

    /// Categories a parsed file of this dialect always reports, possibly empty
    pub fn categories(&self) -> &'static [FragmentCategory] {
        match self {
            Self::Script => &[FragmentCategory::Strings],
            Self::Component | Self::Template | Self::Markup => &[
                FragmentCategory::HtmlText,
                FragmentCategory::NaturalLanguageAttributes,
                FragmentCategory::Strings,
            ],
        }
    }
}
