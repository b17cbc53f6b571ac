//! Length-preserving pre-pass that neutralises regex literals
//!
//! Work happens on a scratch copy: line-start URL schemes, tags and comments
//! are blanked so they cannot be mistaken for regex literals, then every
//! slash-delimited span that compiles as a pattern is masked as a quoted run
//! of `*`. Only the stretch of scratch between the first and last masked span
//! is copied back over the source; everything outside it keeps its original
//! text. Byte length never changes, so offsets found in the sanitized buffer
//! are valid in the original.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

static LINE_START_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^https?://").expect("url pattern is valid"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
static COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/\*[\s\S]*?\*/|[^\\](//.+)").expect("comment pattern is valid")
});
static REGEX_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/(.*)/+([gimuy]*)").expect("regex literal pattern is valid"));
static REGEX_PARTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(.*)/([gimuy]*)$").expect("regex parts pattern is valid"));

/// Return `source` with regex literals masked, byte length unchanged.
pub fn sanitize(source: &str) -> String {
    let mut scratch = source.to_string();

    for pattern in [&*LINE_START_URL, &*TAG] {
        let spans: Vec<_> = pattern.find_iter(&scratch).map(|m| m.range()).collect();
        for span in spans {
            blank(&mut scratch, span);
        }
    }

    let comments: Vec<_> = COMMENT
        .captures_iter(&scratch)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(0)))
        .map(|m| m.range())
        .collect();
    for span in comments {
        blank(&mut scratch, span);
    }

    let candidates: Vec<_> = REGEX_LITERAL
        .find_iter(&scratch)
        .map(|m| (m.range(), m.as_str().to_string()))
        .collect();

    let mut masked = 0usize;
    let mut bracket: Option<(usize, usize)> = None;
    for (span, literal) in candidates {
        if !is_valid_regex_literal(&literal) {
            continue;
        }
        let mask = format!("\"{}\"", "*".repeat(span.len() - 2));
        scratch.replace_range(span.clone(), &mask);
        masked += 1;
        bracket = Some(match bracket {
            Some((first, _)) => (first, span.end),
            None => (span.start, span.end),
        });
    }

    let Some((first, last)) = bracket else {
        return source.to_string();
    };

    tracing::debug!("[SANITIZE] Masked {} regex literal(s) in {}..{}", masked, first, last);

    match (source.get(..first), scratch.get(first..last), source.get(last..)) {
        (Some(head), Some(middle), Some(tail)) => {
            let mut out = String::with_capacity(source.len());
            out.push_str(head);
            out.push_str(middle);
            out.push_str(tail);
            out
        }
        _ => source.to_string(),
    }
}

/// Replace every byte of `span` except newlines with a space
fn blank(scratch: &mut String, span: std::ops::Range<usize>) {
    let Some(text) = scratch.get(span.clone()) else {
        return;
    };
    let spaces: String = text
        .bytes()
        .map(|b| if b == b'\n' { '\n' } else { ' ' })
        .collect();
    scratch.replace_range(span, &spaces);
}

/// `/body/flags` compiles as a pattern with flags drawn once each from `gimuy`
fn is_valid_regex_literal(literal: &str) -> bool {
    let Some(caps) = REGEX_PARTS.captures(literal) else {
        return false;
    };
    let body = caps.get(1).map_or("", |m| m.as_str());
    let flags = caps.get(2).map_or("", |m| m.as_str());

    let mut seen = String::new();
    for flag in flags.chars() {
        if seen.contains(flag) {
            return false;
        }
        seen.push(flag);
    }

    RegexBuilder::new(body)
        .case_insensitive(flags.contains('i'))
        .multi_line(flags.contains('m'))
        .build()
        .is_ok()
}
