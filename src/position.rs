//! Offset to line/column resolution

/// Line and column data for a byte range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based line of `absolute_start`
    pub line_number: usize,
    /// 0-based byte column of `absolute_start`
    pub column_start: usize,
    /// `column_start` plus the range length, as if the range sat on one line
    pub column_end: usize,
    pub absolute_start: usize,
    pub absolute_end: usize,
}

/// Resolve `start..end` within `content` to line/column data.
///
/// Offsets are bytes; `start` past the end of `content` is clamped for the
/// line/column computation only.
pub fn resolve(content: &str, start: usize, end: usize) -> Position {
    let prefix = &content.as_bytes()[..start.min(content.len())];
    let line_number = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = prefix
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |idx| idx + 1);
    let column_start = prefix.len() - line_start;

    Position {
        line_number,
        column_start,
        column_end: column_start + end.saturating_sub(start),
        absolute_start: start,
        absolute_end: end,
    }
}
