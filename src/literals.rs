//! String literal scanning for script regions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scope::Scope;

static DOUBLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""(?:[^"\\]|\\.)*""#).expect("valid literal pattern"));
static SINGLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'(?:[^'\\]|\\.)*'").expect("valid literal pattern"));
static BACKTICK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`(?:[^`\\]|\\.|[\r\n])*`").expect("valid literal pattern"));

static OPEN_CHAR_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]*$").expect("valid char class pattern"));
static CLOSE_CHAR_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\]]*\]").expect("valid char class pattern"));

/// Delimiter of a scanned literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Double,
    Single,
    Backtick,
}

/// A delimited literal with whole-buffer offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a> {
    /// Offset of the opening delimiter
    pub start: usize,
    /// Offset just past the closing delimiter
    pub end: usize,
    pub quote: Quote,
    /// Literal text including delimiters
    pub raw: &'a str,
}

impl<'a> Literal<'a> {
    /// Literal text without delimiters
    pub fn content(&self) -> &'a str {
        &self.raw[1..self.raw.len() - 1]
    }

    pub fn content_start(&self) -> usize {
        self.start + 1
    }

    pub fn content_end(&self) -> usize {
        self.end - 1
    }
}

/// Find every quoted and backtick literal in `scope`.
///
/// Each delimiter type is scanned independently over the whole region, so a
/// quote of one type inside a literal of another type can start a second,
/// overlapping literal. Results are grouped by delimiter: double, single,
/// then backtick, each in source order.
pub fn scan(scope: Scope<'_>) -> Vec<Literal<'_>> {
    let text = scope.text();
    let base = scope.start();
    let mut literals = Vec::new();

    for (pattern, quote) in [
        (&*DOUBLE_QUOTED, Quote::Double),
        (&*SINGLE_QUOTED, Quote::Single),
    ] {
        literals.extend(pattern.find_iter(text).map(|m| Literal {
            start: base + m.start(),
            end: base + m.end(),
            quote,
            raw: m.as_str(),
        }));
    }

    for m in BACKTICK.find_iter(text) {
        let start = base + m.start();
        let end = base + m.end();
        if is_inside_regex_char_class(scope, start, end) {
            continue;
        }
        literals.push(Literal {
            start,
            end,
            quote: Quote::Backtick,
            raw: m.as_str(),
        });
    }

    literals
}

/// A backtick written as part of a character class such as `` [^"'`] `` is
/// regex source, not a template literal.
fn is_inside_regex_char_class(scope: Scope<'_>, start: usize, end: usize) -> bool {
    OPEN_CHAR_CLASS.is_match(scope.before(start, 100))
        && CLOSE_CHAR_CLASS.is_match(scope.after(end, 20))
}
