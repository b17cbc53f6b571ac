//! Component dialect (.jsx / .tsx)
//!
//! Markup returned from `return ( ... )` blocks goes through the markup
//! sub-pipeline. The script pass then runs over the whole buffer, skipping
//! literals that sit inside a returned block or read as attribute values.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::detectors::common::trim_range;
use crate::detectors::markup::{self, MarkupFlavor};
use crate::detectors::script::{self, ScriptFilter};
use crate::guards::matching_paren;
use crate::schema::ExtractedFragment;
use crate::scope::Scope;

static RETURN_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"return\s*\(").expect("return pattern is valid"));

pub fn extract(scope: Scope<'_>) -> Vec<ExtractedFragment> {
    let blocks = find_return_blocks(scope);
    let source = scope.source();

    let mut fragments: Vec<ExtractedFragment> = blocks
        .iter()
        .flat_map(|block| {
            markup::extract(Scope::region(source, block.clone()), MarkupFlavor::Component)
        })
        .collect();

    let filter = ScriptFilter {
        excluded: blocks,
        skip_attribute_values: true,
    };
    fragments.extend(script::extract_filtered(scope, &filter));
    fragments
}

/// Trimmed payload ranges of top-level `return ( ... )` blocks.
///
/// Parentheses are matched by depth, so a returned tree containing calls
/// or nested returns stays one block. An unclosed `return (` is ignored.
pub fn find_return_blocks(scope: Scope<'_>) -> Vec<Range<usize>> {
    let source = scope.source();
    let text = scope.text();
    let base = scope.start();

    let mut blocks = Vec::new();
    let mut cursor = 0;
    while let Some(found) = text.get(cursor..).and_then(|rest| RETURN_OPEN.find(rest)) {
        let open = base + cursor + found.end() - 1;
        match matching_paren(source.as_bytes(), open, scope.end()) {
            Some(close) => {
                let payload = trim_range(source, open + 1..close);
                if !payload.is_empty() {
                    blocks.push(payload);
                }
                cursor = close + 1 - base;
            }
            None => cursor += found.end(),
        }
    }

    blocks
}
