//! Script dialect: natural-language string literals

use std::ops::Range;

use crate::classify::{is_literal_noise, is_non_textual};
use crate::detectors::common::{build_fragment, meets_min_length, strip_first_newline};
use crate::guards;
use crate::literals::{self, Literal};
use crate::schema::{ExtractedFragment, FragmentKind, TextContext};
use crate::scope::Scope;

/// Extra suppression for a script pass embedded in markup-bearing files
#[derive(Debug, Clone, Default)]
pub struct ScriptFilter {
    /// Literals lying entirely inside one of these ranges are skipped
    pub excluded: Vec<Range<usize>>,
    /// Skip literals that read as markup attribute values
    pub skip_attribute_values: bool,
}

impl ScriptFilter {
    fn excludes(&self, literal: &Literal<'_>) -> bool {
        self.excluded
            .iter()
            .any(|range| literal.start >= range.start && literal.end <= range.end)
    }
}

/// Extract string literals from `scope` that read as natural language
pub fn extract(scope: Scope<'_>) -> Vec<ExtractedFragment> {
    extract_filtered(scope, &ScriptFilter::default())
}

pub fn extract_filtered(scope: Scope<'_>, filter: &ScriptFilter) -> Vec<ExtractedFragment> {
    literals::scan(scope)
        .into_iter()
        .filter(|literal| !filter.excludes(literal))
        .filter(|literal| !is_suppressed(scope, literal, filter))
        .filter_map(|literal| accept(scope, &literal))
        .collect()
}

/// Context guards and literal-noise checks
fn is_suppressed(scope: Scope<'_>, literal: &Literal<'_>, filter: &ScriptFilter) -> bool {
    guards::is_ignored_import(scope, literal.start, literal.end)
        || (filter.skip_attribute_values && guards::is_html_attribute_value(scope, literal.start))
        || is_literal_noise(literal.content())
        || guards::is_inside_function_call(scope, literal.start)
        || guards::is_in_diagnostic_call(scope, literal.start)
}

fn accept(scope: Scope<'_>, literal: &Literal<'_>) -> Option<ExtractedFragment> {
    let content = literal.content();
    if content.trim().chars().count() < 3 || is_non_textual(content, false, false) {
        return None;
    }

    let text = strip_first_newline(content);
    if !meets_min_length(&text) {
        return None;
    }

    Some(build_fragment(
        scope,
        text,
        FragmentKind::QuotedLiteral,
        TextContext::Script,
        literal.content_start()..literal.content_end(),
        literal.start..literal.end,
    ))
}
