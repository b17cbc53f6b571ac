//! Data structures for extracted text and per-file results

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::lang::Dialect;
use crate::position::Position;

/// Where an extracted fragment came from syntactically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    /// Text between `>` and `<` in markup
    MarkupText,
    /// A quoted or backtick string literal in script
    QuotedLiteral,
    /// The value of a natural-language attribute such as `title` or `alt`
    AttributeValue,
}

impl FragmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MarkupText => "markup_text",
            Self::QuotedLiteral => "quoted_literal",
            Self::AttributeValue => "attribute_value",
        }
    }

    /// The result category this kind is reported under
    pub fn category(&self) -> FragmentCategory {
        match self {
            Self::MarkupText => FragmentCategory::HtmlText,
            Self::QuotedLiteral => FragmentCategory::Strings,
            Self::AttributeValue => FragmentCategory::NaturalLanguageAttributes,
        }
    }
}

/// Which extractor produced a fragment, independent of the file's dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextContext {
    Script,
    Markup,
    Template,
}

/// Result bucket names used in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FragmentCategory {
    HtmlText,
    NaturalLanguageAttributes,
    Strings,
}

impl FragmentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HtmlText => "htmlText",
            Self::NaturalLanguageAttributes => "naturalLanguageAttributes",
            Self::Strings => "strings",
        }
    }

    pub const ALL: [FragmentCategory; 3] = [
        FragmentCategory::HtmlText,
        FragmentCategory::NaturalLanguageAttributes,
        FragmentCategory::Strings,
    ];
}

/// One span of candidate natural-language text with its position data
///
/// `absolute_*`/`column_*` describe the content span (delimiters stripped),
/// `original_*` the delimited form recorded in `original_match`. Columns are
/// byte columns, and `column_end` is always `column_start` plus the span
/// length even when the span crosses a newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFragment {
    pub text: String,

    #[serde(rename = "type")]
    pub kind: FragmentKind,

    pub context: TextContext,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,

    /// 1-based line of the content start
    pub line_number: usize,
    pub column_start: usize,
    pub column_end: usize,
    pub absolute_start: usize,
    pub absolute_end: usize,

    pub original_column_start: usize,
    pub original_column_end: usize,
    pub original_absolute_start: usize,
    pub original_absolute_end: usize,

    pub original_match: String,
}

impl ExtractedFragment {
    /// Assemble a fragment from resolved content and delimited-form positions
    pub fn new(
        text: String,
        kind: FragmentKind,
        context: TextContext,
        content: Position,
        original: Position,
        original_match: String,
    ) -> Self {
        Self {
            text,
            kind,
            context,
            attribute_name: None,
            line_number: content.line_number,
            column_start: content.column_start,
            column_end: content.column_end,
            absolute_start: content.absolute_start,
            absolute_end: content.absolute_end,
            original_column_start: original.column_start,
            original_column_end: original.column_end,
            original_absolute_start: original.absolute_start,
            original_absolute_end: original.absolute_end,
            original_match,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attribute_name = Some(name.into());
        self
    }

    pub fn category(&self) -> FragmentCategory {
        self.kind.category()
    }

    /// Content span as a byte range
    pub fn span(&self) -> std::ops::Range<usize> {
        self.absolute_start..self.absolute_end
    }
}

/// Fragments grouped by category, in extraction order within each group
pub type CategoryMap = BTreeMap<FragmentCategory, Vec<ExtractedFragment>>;

/// Group fragments by category, seeding every category the dialect reports
pub fn categorize(dialect: Dialect, fragments: Vec<ExtractedFragment>) -> CategoryMap {
    let mut map: CategoryMap = dialect
        .categories()
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();

    for fragment in fragments {
        map.entry(fragment.category()).or_default().push(fragment);
    }

    map
}

/// Extraction result for a single file or buffer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFileResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Dotted, lowercase extension, e.g. `.tsx`
    pub extension: String,

    pub dialect: Dialect,

    pub extracted_text: CategoryMap,

    /// RFC 3339 capture time
    pub timestamp: String,
}

impl ParsedFileResult {
    pub fn fragment_count(&self) -> usize {
        self.extracted_text.values().map(Vec::len).sum()
    }
}

/// A fragment stamped with the file it was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    #[serde(flatten)]
    pub fragment: ExtractedFragment,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// Aggregate view over a set of parsed files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_files: usize,
    /// Extension -> file count
    pub file_types: BTreeMap<String, usize>,
    /// Dialect -> file count
    pub dialects: BTreeMap<Dialect, usize>,
    pub total_texts: usize,
    pub text_types: BTreeMap<FragmentCategory, usize>,
    /// Every fragment, sorted by line then column
    pub all_texts: Vec<SummaryEntry>,
}
