//! Offset-stable batch replacement of extracted spans

use crate::schema::ExtractedFragment;

const FILLER_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum",
];

/// A pending splice of `substitute` over `start..end`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementEdit {
    pub start: usize,
    pub end: usize,
    pub substitute: String,
}

impl ReplacementEdit {
    /// Edit over the fragment's content span; without a substitute, a filler
    /// of the same byte length is generated
    pub fn from_fragment(fragment: &ExtractedFragment, substitute: Option<String>) -> Self {
        let start = fragment.absolute_start;
        let end = fragment.absolute_end;
        let substitute =
            substitute.unwrap_or_else(|| generate_filler(end.saturating_sub(start), start));
        Self {
            start,
            end,
            substitute,
        }
    }
}

/// Apply `edits` from the highest start offset to the lowest.
///
/// Edits must not overlap; overlaps are not detected. Empty spans, spans past
/// the end of the buffer and spans that split a character are skipped.
pub fn apply_edits(source: &str, mut edits: Vec<ReplacementEdit>) -> String {
    edits.sort_by(|a, b| b.start.cmp(&a.start));

    let mut result = source.to_string();
    for edit in edits {
        let valid = edit.start < edit.end
            && edit.end <= result.len()
            && result.is_char_boundary(edit.start)
            && result.is_char_boundary(edit.end);
        if !valid {
            tracing::debug!(
                "Skipping replacement {}..{} in buffer of {} bytes",
                edit.start,
                edit.end,
                result.len()
            );
            continue;
        }
        result.replace_range(edit.start..edit.end, &edit.substitute);
    }

    result
}

/// Replace every fragment's content with same-length filler text
pub fn replace_extracted(source: &str, fragments: &[ExtractedFragment]) -> String {
    replace_with(source, fragments, |_| None)
}

/// Replace every fragment's content with `substitute(fragment)`, falling back
/// to filler text when it returns `None`.
///
/// Fragments overlapping an earlier-starting fragment are dropped first, so
/// the output is well defined for any list the extractors produce.
pub fn replace_with<F>(source: &str, fragments: &[ExtractedFragment], substitute: F) -> String
where
    F: Fn(&ExtractedFragment) -> Option<String>,
{
    let edits = non_overlapping(fragments)
        .into_iter()
        .map(|fragment| ReplacementEdit::from_fragment(fragment, substitute(fragment)))
        .collect();
    apply_edits(source, edits)
}

/// Fragments sorted by start, keeping the first of any overlapping run
pub fn non_overlapping(fragments: &[ExtractedFragment]) -> Vec<&ExtractedFragment> {
    let mut sorted: Vec<&ExtractedFragment> = fragments.iter().collect();
    sorted.sort_by_key(|f| (f.absolute_start, f.absolute_end));

    let mut kept: Vec<&ExtractedFragment> = Vec::with_capacity(sorted.len());
    for fragment in sorted {
        match kept.last() {
            Some(last) if fragment.absolute_start < last.absolute_end => {
                tracing::debug!(
                    "Dropping overlapping fragment at {}..{}",
                    fragment.absolute_start,
                    fragment.absolute_end
                );
            }
            _ => kept.push(fragment),
        }
    }
    kept
}

/// Lorem-ipsum filler of exactly `len` bytes.
///
/// `seed` picks the starting word so neighbouring spans differ. The first word
/// is capitalised; an overshooting last word is cut and closed with `.`.
pub fn generate_filler(len: usize, seed: usize) -> String {
    let mut result = String::with_capacity(len);
    let mut index = seed;

    while result.len() < len {
        let word = FILLER_WORDS[index % FILLER_WORDS.len()];
        index += 1;

        if result.is_empty() {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                result.push(first.to_ascii_uppercase());
                result.push_str(chars.as_str());
            }
        } else {
            result.push(' ');
            result.push_str(word);
        }

        if result.len() > len {
            result.truncate(len - 1);
            result.push('.');
        }
    }

    result
}
