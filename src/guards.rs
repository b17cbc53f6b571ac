//! Local-context predicates that veto candidate fragments
//!
//! Every guard looks at a bounded window of the enclosing [`Scope`] around a
//! whole-buffer offset. None of them parse; they are shape checks and are
//! expected to misfire on adversarial input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scope::Scope;

/// Bytes inspected before a literal for import/require shapes
pub const IMPORT_LOOKBEHIND: usize = 100;
/// Bytes inspected after a literal for import/require shapes
pub const IMPORT_LOOKAHEAD: usize = 50;
/// Bytes inspected before a literal for a diagnostic call
pub const DIAGNOSTIC_LOOKBEHIND: usize = 200;
/// Bytes searched backwards for call-shaped open parentheses
pub const CALL_LOOKBEHIND: usize = 300;
/// Half-width of the window used by the attribute-value guard
pub const ATTRIBUTE_WINDOW: usize = 200;

static IMPORT_SHAPES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"require\s*\(",
        r"import\s+.*\s+from\s+",
        r"export\s+.*\s+from\s+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("import shape patterns are valid"))
    .collect()
});

static DIAGNOSTIC_CALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"console\.(log|error|warn|info|debug|trace)\s*\(\s*['"`]*$"#)
        .expect("diagnostic call pattern is valid")
});

static SCRIPT_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<script\b[^>]*>").expect("script tag pattern is valid"));
static SCRIPT_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</script>").expect("script tag pattern is valid"));
static STYLE_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<style\b[^>]*>").expect("style tag pattern is valid"));
static STYLE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</style>").expect("style tag pattern is valid"));

static TRAILING_ATTRIBUTE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\w-]+)\s*$").expect("attribute name pattern is valid"));
static ANY_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
static MARKUP_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(class|classname|id|style|src|href|type|name|role|aria-\w+|data-\w+|key|ref|onclick|onchange|value|checked|disabled|readonly|placeholder|title|alt)$",
    )
    .expect("attribute list pattern is valid")
});
static EVENT_HANDLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^on[A-Z]").expect("event handler pattern is valid"));

/// True when the literal at `start..end` sits in an import, require or
/// re-export statement.
pub fn is_ignored_import(scope: Scope<'_>, start: usize, end: usize) -> bool {
    let window = scope.window(start, end, IMPORT_LOOKBEHIND, IMPORT_LOOKAHEAD);
    IMPORT_SHAPES.iter().any(|re| re.is_match(window))
}

/// True when the text before `offset` ends in an open `console.*(` call.
pub fn is_in_diagnostic_call(scope: Scope<'_>, offset: usize) -> bool {
    DIAGNOSTIC_CALL.is_match(scope.before(offset, DIAGNOSTIC_LOOKBEHIND))
}

/// True when `offset` lies strictly inside the argument list of a call.
///
/// Candidate open parentheses are those within [`CALL_LOOKBEHIND`] bytes
/// whose last preceding non-whitespace character is a word character or
/// `]` (`f(`, `obj.method(`, `handlers[i](`). Each candidate is matched to
/// its closing parenthesis by depth counting over the rest of the scope; an
/// unclosed candidate never suppresses anything.
pub fn is_inside_function_call(scope: Scope<'_>, offset: usize) -> bool {
    let source = scope.source().as_bytes();
    let lookbehind = scope.before(offset, CALL_LOOKBEHIND);
    let search_start = offset - lookbehind.len();
    let bytes = lookbehind.as_bytes();

    (0..bytes.len())
        .rev()
        .filter(|&i| bytes[i] == b'(' && is_call_shaped(&bytes[..i]))
        .map(|i| search_start + i)
        .any(|open| {
            matching_paren(source, open, scope.end())
                .map_or(false, |close| offset > open && offset < close)
        })
}

/// The preceding text, trimmed, ends in an identifier or an index access
fn is_call_shaped(before: &[u8]) -> bool {
    before
        .iter()
        .rev()
        .find(|b| !b.is_ascii_whitespace())
        .map_or(false, |&b| b.is_ascii_alphanumeric() || b == b'_' || b == b']')
}

/// Offset of the `)` closing the `(` at `open`, searching no further than `limit`
pub fn matching_paren(source: &[u8], open: usize, limit: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (i, &b) in source.iter().enumerate().take(limit).skip(open + 1) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// True when `offset` falls inside an unclosed `<script>` or `<style>` element.
///
/// Counts opening and closing tags in the scope text before `offset`.
pub fn is_in_raw_text_element(scope: Scope<'_>, offset: usize) -> bool {
    let prefix = scope.prefix(offset);
    let unclosed = |open: &Regex, close: &Regex| {
        open.find_iter(prefix).count() > close.find_iter(prefix).count()
    };
    unclosed(&SCRIPT_OPEN, &SCRIPT_CLOSE) || unclosed(&STYLE_OPEN, &STYLE_CLOSE)
}

/// True when the literal opening at `offset` is the value of a markup
/// attribute such as `className="..."` or `onClick='...'`.
///
/// Requires an `=` before the literal that sits inside an unclosed `<tag`,
/// an attribute-shaped name in front of it, a matching closing quote within
/// the window, and at least one tag somewhere in the surrounding window.
pub fn is_html_attribute_value(scope: Scope<'_>, offset: usize) -> bool {
    let before = scope.before(offset, ATTRIBUTE_WINDOW);
    let after = scope.after(offset, ATTRIBUTE_WINDOW);

    let Some(quote) = after.chars().next() else {
        return false;
    };

    let Some(equals) = before.rfind('=') else {
        return false;
    };

    let head = &before[..equals];
    if !is_inside_open_tag(head) {
        return false;
    }

    let Some(name) = TRAILING_ATTRIBUTE_NAME
        .captures(head.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return false;
    };

    if !after[quote.len_utf8()..].contains(quote) {
        return false;
    }

    let window = scope.window(offset, offset, ATTRIBUTE_WINDOW, ATTRIBUTE_WINDOW);
    if !ANY_TAG.is_match(window) {
        return false;
    }

    let lower = name.to_lowercase();
    MARKUP_ATTRIBUTE.is_match(&lower)
        || EVENT_HANDLER.is_match(name)
        || lower.starts_with("v-")
        || lower.starts_with(':')
        || lower.contains('-')
        || lower.starts_with("data")
}

/// The last `<` in `text` opens a tag that has not been closed yet.
fn is_inside_open_tag(text: &str) -> bool {
    match text.rfind('<') {
        Some(open) => !text[open..].contains('>'),
        None => false,
    }
}
