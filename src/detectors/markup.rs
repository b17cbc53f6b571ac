//! Markup sub-pipeline: inner text and natural-language attributes
//!
//! Shared by every dialect that carries markup. The flavor decides which
//! interpolation syntax disqualifies a span and which context the resulting
//! fragments are tagged with.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classify::{is_non_textual, looks_like_inline_script};
use crate::detectors::common::{
    build_fragment, meets_min_length, normalize_whitespace, strip_first_newline,
};
use crate::guards;
use crate::schema::{ExtractedFragment, FragmentKind, TextContext};
use crate::scope::Scope;

/// Attributes whose values are shown to people
pub const NATURAL_LANGUAGE_ATTRIBUTES: &[&str] = &[
    "placeholder",
    "title",
    "alt",
    "aria-label",
    "label",
    "value",
    "aria-description",
    "aria-labelledby",
    "data-tooltip",
    "data-title",
    "data-description",
    "data-placeholder",
    "data-label",
];

static INNER_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">([^<]*)<").expect("inner text pattern is valid"));

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    let names = NATURAL_LANGUAGE_ATTRIBUTES.join("|");
    Regex::new(&format!(r#"(?i)(:|^|\s)({names})\s*=\s*["']([^"']+)["']"#))
        .expect("attribute pattern is valid")
});

/// Which kind of markup is being scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupFlavor {
    /// Markup returned from a component; `{...}` is an expression
    Component,
    /// A template section; `{{ ... }}` is an interpolation
    Template,
    /// A plain markup document
    Document,
}

impl MarkupFlavor {
    pub fn context(&self) -> TextContext {
        match self {
            Self::Template => TextContext::Template,
            Self::Component | Self::Document => TextContext::Markup,
        }
    }

    /// Text carries expression syntax for this flavor
    fn has_interpolation(&self, text: &str) -> bool {
        let mustache = text.contains("{{") && text.contains("}}");
        match self {
            Self::Component => mustache || text.contains('{') || text.contains('}'),
            Self::Template | Self::Document => mustache,
        }
    }
}

/// Extract inner-text fragments followed by attribute fragments
pub fn extract(scope: Scope<'_>, flavor: MarkupFlavor) -> Vec<ExtractedFragment> {
    let mut fragments = extract_inner_text(scope, flavor);
    fragments.extend(extract_attributes(scope, flavor));
    fragments
}

pub fn extract_inner_text(scope: Scope<'_>, flavor: MarkupFlavor) -> Vec<ExtractedFragment> {
    let base = scope.start();
    let mut fragments = Vec::new();

    for caps in INNER_TEXT.captures_iter(scope.text()) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let text = normalize_whitespace(inner.as_str());
        if text.is_empty() || is_non_textual(&text, false, false) {
            continue;
        }

        // Include the `>` so an opening raw-text tag right before counts.
        let match_start = base + whole.start();
        if guards::is_in_raw_text_element(scope, match_start + 1) {
            continue;
        }

        if flavor.has_interpolation(&text) || looks_like_inline_script(&text) {
            continue;
        }

        let text = strip_first_newline(&text);
        if !meets_min_length(&text) {
            continue;
        }

        let raw = inner.as_str();
        let leading = raw.len() - raw.trim_start().len();
        let content_start = base + inner.start() + leading;
        let content_end = content_start + raw.trim().len();

        fragments.push(build_fragment(
            scope,
            text,
            FragmentKind::MarkupText,
            flavor.context(),
            content_start..content_end,
            match_start..base + whole.end(),
        ));
    }

    fragments
}

pub fn extract_attributes(scope: Scope<'_>, flavor: MarkupFlavor) -> Vec<ExtractedFragment> {
    let base = scope.start();
    let mut fragments = Vec::new();

    for caps in ATTRIBUTE.captures_iter(scope.text()) {
        let (Some(whole), Some(prefix), Some(name), Some(value)) =
            (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };

        // `:title="..."` is a bound expression, not text
        if prefix.as_str() == ":" {
            continue;
        }

        let trimmed = value.as_str().trim();
        if trimmed.is_empty() || flavor.has_interpolation(trimmed) {
            continue;
        }

        if guards::is_in_raw_text_element(scope, base + name.start()) {
            continue;
        }

        if is_non_textual(trimmed, true, false) {
            continue;
        }

        let text = strip_first_newline(trimmed);
        if !meets_min_length(&text) {
            continue;
        }

        fragments.push(
            build_fragment(
                scope,
                text,
                FragmentKind::AttributeValue,
                flavor.context(),
                base + value.start()..base + value.end(),
                base + whole.start()..base + whole.end(),
            )
            .with_attribute(name.as_str()),
        );
    }

    fragments
}
