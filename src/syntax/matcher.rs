//! Rule matching
//!
//! Applies every rule of a grammar to the same unmodified snapshot and
//! collects one [`Span`] per occurrence. Rules never see each other's
//! results, so spans from different rules may overlap.

use super::classification::Classification;
use super::grammar::Grammar;

/// A classified character range, half-open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Char offset where this span starts (inclusive)
    pub start: usize,
    /// Char offset where this span ends (exclusive)
    pub end: usize,
    /// Classification of the range
    pub classification: Classification,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, classification: Classification) -> Self {
        Self {
            start,
            end,
            classification,
        }
    }

    /// Check if this span contains a char position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this span in chars
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Byte offset to char offset conversion for one snapshot
pub(crate) struct CharIndex {
    /// Byte offset of every char; `None` when the text is ASCII
    starts: Option<Vec<usize>>,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        let starts = if text.is_ascii() {
            None
        } else {
            Some(text.char_indices().map(|(i, _)| i).collect())
        };
        Self { starts }
    }

    /// Char offset of a byte offset on a char boundary
    pub(crate) fn char_at(&self, byte: usize) -> usize {
        match &self.starts {
            None => byte,
            Some(starts) => starts.partition_point(|&b| b < byte),
        }
    }
}

/// Match a grammar against a text snapshot
///
/// Spans come out in rule order, then left-to-right within each rule.
pub fn match_spans(text: &str, grammar: &Grammar) -> Vec<Span> {
    if grammar.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let index = CharIndex::new(text);
    let mut spans = Vec::new();
    for rule in &grammar.rules {
        for (start, end) in rule.find_all(text) {
            let span = Span::new(index.char_at(start), index.char_at(end), rule.classification);
            if !span.is_empty() {
                spans.push(span);
            }
        }
    }
    spans
}
