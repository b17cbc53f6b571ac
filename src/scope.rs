//! Sub-region views over a source buffer
//!
//! Extractors re-enter embedded regions (a `<script>` body, a component's
//! returned markup) through a [`Scope`]. Matching runs on the region text,
//! but every offset a scope hands out or accepts is in whole-buffer
//! coordinates, so fragments never need re-homing afterwards.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope<'a> {
    source: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Scope<'a> {
    /// Scope covering the entire buffer
    pub fn whole(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            end: source.len(),
        }
    }

    /// Scope over `range` of `source`, clamped to the buffer and to char boundaries
    pub fn region(source: &'a str, range: Range<usize>) -> Self {
        let start = floor_char_boundary(source, range.start);
        let end = ceil_char_boundary(source, range.end.max(start));
        Self { source, start, end }
    }

    /// The full buffer this scope points into
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Offset of the region start in the full buffer (the bias)
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The region's own text
    pub fn text(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    /// Text from `max(region start, offset - before)` up to `offset`
    pub fn before(&self, offset: usize, before: usize) -> &'a str {
        let offset = self.clamp(offset);
        let from = self.clamp(offset.saturating_sub(before));
        &self.source[from..offset]
    }

    /// Text from `offset` up to `min(region end, offset + after)`
    pub fn after(&self, offset: usize, after: usize) -> &'a str {
        let offset = self.clamp(offset);
        let to = self.clamp(offset.saturating_add(after));
        &self.source[offset..to]
    }

    /// Text from `offset - before` to `end + after`, clamped to the region
    pub fn window(&self, offset: usize, end: usize, before: usize, after: usize) -> &'a str {
        let from = self.clamp(offset.saturating_sub(before));
        let to = self.clamp(end.saturating_add(after)).max(from);
        &self.source[from..to]
    }

    /// Region text preceding `offset`
    pub fn prefix(&self, offset: usize) -> &'a str {
        &self.source[self.start..self.clamp(offset)]
    }

    fn clamp(&self, offset: usize) -> usize {
        let offset = offset.clamp(self.start, self.end);
        floor_char_boundary(self.source, offset).max(self.start)
    }
}

/// Largest char boundary at or below `index`
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut idx = index;
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Smallest char boundary at or above `index`
pub fn ceil_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut idx = index;
    while !s.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}
