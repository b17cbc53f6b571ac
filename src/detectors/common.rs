//! Helpers shared across the dialect extractors

use std::ops::Range;

use regex::Regex;

use crate::position::resolve;
use crate::schema::{ExtractedFragment, FragmentKind, TextContext};
use crate::scope::Scope;

/// Shortest fragment text, in characters, any extractor will emit
pub const MIN_TEXT_LEN: usize = 3;

// ============================================================================
// Text normalisation
// ============================================================================

/// Collapse runs of whitespace to a single space and trim
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop the first newline only, then trim
pub fn strip_first_newline(s: &str) -> String {
    s.replacen('\n', "", 1).trim().to_string()
}

pub fn meets_min_length(text: &str) -> bool {
    text.chars().count() >= MIN_TEXT_LEN
}

// ============================================================================
// Regions
// ============================================================================

/// Whole-buffer ranges of capture group 1 for every match of `pattern` in `scope`
pub fn element_bodies(pattern: &Regex, scope: Scope<'_>) -> Vec<Range<usize>> {
    let base = scope.start();
    pattern
        .captures_iter(scope.text())
        .filter_map(|caps| caps.get(1))
        .map(|m| base + m.start()..base + m.end())
        .collect()
}

/// `range` with leading and trailing whitespace of `source` removed
pub fn trim_range(source: &str, range: Range<usize>) -> Range<usize> {
    let Some(text) = source.get(range.clone()) else {
        return range;
    };
    let start = range.start + (text.len() - text.trim_start().len());
    let end = range.end - (text.len() - text.trim_end().len());
    start..end.max(start)
}

// ============================================================================
// Fragment assembly
// ============================================================================

/// Resolve both spans against the full buffer and assemble a fragment
pub fn build_fragment(
    scope: Scope<'_>,
    text: String,
    kind: FragmentKind,
    context: TextContext,
    content: Range<usize>,
    original: Range<usize>,
) -> ExtractedFragment {
    let source = scope.source();
    let original_match = source.get(original.clone()).unwrap_or_default().to_string();
    ExtractedFragment::new(
        text,
        kind,
        context,
        resolve(source, content.start, content.end),
        resolve(source, original.start, original.end),
        original_match,
    )
}
