//! Span rendering
//!
//! Resolves overlapping spans into a flat attribution over the text and
//! restores the editor selection against the rendered text.

use super::classification::Classification;
use super::matcher::Span;
use crate::error::{HighlightError, Result};

/// A caret or selection, in char offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Empty selection at a position
    pub fn caret(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    /// Clamp both ends to `[0, len]`
    ///
    /// A selection still inverted after clamping collapses to a caret at
    /// `len`.
    pub fn clamp_to(self, len: usize) -> Self {
        let start = self.start.min(len);
        let end = self.end.min(len);
        if start > end {
            Self::caret(len)
        } else {
            Self::new(start, end)
        }
    }
}

/// A maximal run of characters sharing one classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub end: usize,
    pub classification: Classification,
}

/// Text plus its resolved, non-overlapping classification runs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributedText {
    text: String,
    char_len: usize,
    /// Sorted, disjoint, coalesced; unclassified chars are not covered
    runs: Vec<Run>,
}

impl AttributedText {
    /// Text with no classification
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_len = text.chars().count();
        Self {
            text,
            char_len,
            runs: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn is_plain(&self) -> bool {
        self.runs.is_empty()
    }

    /// Classification of the char at `pos`, if any
    pub fn classification_at(&self, pos: usize) -> Option<Classification> {
        let idx = self.runs.partition_point(|r| r.end <= pos);
        self.runs
            .get(idx)
            .filter(|r| r.start <= pos)
            .map(|r| r.classification)
    }

    /// Consecutive pieces of the text with their classification
    ///
    /// The pieces concatenate back to exactly the original text.
    pub fn segments(&self) -> Vec<(&str, Option<Classification>)> {
        let byte_of: Vec<usize> = self
            .text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(self.text.len()))
            .collect();

        let mut segments = Vec::new();
        let mut pos = 0;
        for run in &self.runs {
            if run.start > pos {
                segments.push((&self.text[byte_of[pos]..byte_of[run.start]], None));
            }
            segments.push((
                &self.text[byte_of[run.start]..byte_of[run.end]],
                Some(run.classification),
            ));
            pos = run.end;
        }
        if pos < self.char_len {
            segments.push((&self.text[byte_of[pos]..], None));
        }
        segments
    }
}

/// Render spans over a text and restore the selection
///
/// Spans are applied in the order given; a later span overwrites earlier
/// ones on overlapping characters.
pub fn render(
    text: &str,
    spans: &[Span],
    previous: Selection,
) -> Result<(AttributedText, Selection)> {
    let char_len = text.chars().count();
    let mut cells: Vec<Option<Classification>> = vec![None; char_len];

    for span in spans {
        if span.start > span.end || span.end > char_len {
            return Err(HighlightError::SpanOutOfBounds {
                start: span.start,
                end: span.end,
                len: char_len,
            });
        }
        cells[span.start..span.end].fill(Some(span.classification));
    }

    let mut runs: Vec<Run> = Vec::new();
    for (pos, cell) in cells.into_iter().enumerate() {
        let Some(classification) = cell else {
            continue;
        };
        match runs.last_mut() {
            Some(last) if last.end == pos && last.classification == classification => {
                last.end = pos + 1;
            }
            _ => runs.push(Run {
                start: pos,
                end: pos + 1,
                classification,
            }),
        }
    }

    let attributed = AttributedText {
        text: text.to_string(),
        char_len,
        runs,
    };
    Ok((attributed, previous.clamp_to(char_len)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageId;
    use crate::syntax::{match_spans, GrammarRegistry};

    #[test]
    fn test_later_span_wins() {
        let spans = [
            Span::new(0, 6, Classification::Tag),
            Span::new(2, 4, Classification::String),
        ];
        let (attributed, _) = render("abcdefgh", &spans, Selection::default()).unwrap();
        assert_eq!(
            attributed.runs(),
            &[
                Run { start: 0, end: 2, classification: Classification::Tag },
                Run { start: 2, end: 4, classification: Classification::String },
                Run { start: 4, end: 6, classification: Classification::Tag },
            ]
        );
        assert_eq!(attributed.classification_at(6), None);
    }

    #[test]
    fn test_later_rule_recolors_css_block() {
        let registry = GrammarRegistry::with_builtins().unwrap();
        let text = "p { color: red; }";
        let spans = match_spans(text, registry.lookup(LanguageId::Css));
        let (attributed, _) = render(text, &spans, Selection::default()).unwrap();

        assert_eq!(attributed.classification_at(0), None);
        assert_eq!(attributed.classification_at(2), Some(Classification::PlainValue));
        assert_eq!(attributed.classification_at(4), Some(Classification::Keyword));
        assert_eq!(attributed.classification_at(11), Some(Classification::Attribute));
        assert_eq!(attributed.classification_at(16), Some(Classification::PlainValue));
    }

    #[test]
    fn test_adjacent_runs_coalesce() {
        let spans = [
            Span::new(0, 2, Classification::Comment),
            Span::new(2, 5, Classification::Comment),
        ];
        let (attributed, _) = render("hello", &spans, Selection::default()).unwrap();
        assert_eq!(attributed.runs().len(), 1);
        assert_eq!(attributed.runs()[0].end, 5);
    }

    #[test]
    fn test_text_is_preserved() {
        let text = "<p class=\"a\">é</p>";
        let registry = GrammarRegistry::with_builtins().unwrap();
        let spans = match_spans(text, registry.lookup(LanguageId::Html));
        let (attributed, _) = render(text, &spans, Selection::default()).unwrap();
        assert_eq!(attributed.as_str(), text);
        let rebuilt: String = attributed.segments().iter().map(|(s, _)| *s).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_every_grammar_preserves_text_and_is_stable() {
        let registry = GrammarRegistry::with_builtins().unwrap();
        let corpus = [
            "",
            "x",
            "é",
            "naïve → “quoted” 日本語 f(1)",
            "/* never closed",
            "\"unterminated",
            "'half",
            "<!-- open comment <b>",
            "a(b(c(d())))",
            "<div id=\"x\"><!-- c --></div>",
            ".a { color: red; } /* ok */",
            "def f(x):\n    return len(x) # é",
            "<?php $v = foo(\"s\"); // c",
            "class A { int n = 0; /* x */ }",
            "let s = `t ${a}`; // end\n",
        ];

        for lang in LanguageId::SUPPORTED {
            let grammar = registry.lookup(lang);
            for text in corpus {
                let spans = match_spans(text, grammar);
                let (first, _) = render(text, &spans, Selection::default()).unwrap();

                assert_eq!(first.as_str(), text, "{}: {:?}", lang, text);
                let rebuilt: String = first.segments().iter().map(|(s, _)| *s).collect();
                assert_eq!(rebuilt, text, "{}: {:?}", lang, text);

                let mut prev_end = 0;
                for run in first.runs() {
                    assert!(run.start >= prev_end && run.start < run.end, "{}: {:?}", lang, text);
                    assert!(run.end <= first.char_len(), "{}: {:?}", lang, text);
                    prev_end = run.end;
                }

                let again = first.as_str();
                let (second, _) = render(again, &match_spans(again, grammar), Selection::default()).unwrap();
                assert_eq!(first, second, "{}: {:?}", lang, text);
            }
        }
    }

    #[test]
    fn test_segments() {
        let spans = [Span::new(1, 3, Classification::Number)];
        let (attributed, _) = render("a→bc", &spans, Selection::default()).unwrap();
        assert_eq!(
            attributed.segments(),
            vec![
                ("a", None),
                ("→b", Some(Classification::Number)),
                ("c", None),
            ]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let registry = GrammarRegistry::with_builtins().unwrap();
        let grammar = registry.lookup(LanguageId::JavaScript);
        let text = "function go() { return \"x\" + 42; } // end";

        let (first, sel) = render(text, &match_spans(text, grammar), Selection::caret(3)).unwrap();
        let again = first.as_str();
        let (second, sel2) = render(again, &match_spans(again, grammar), sel).unwrap();
        assert_eq!(first, second);
        assert_eq!(sel, sel2);
    }

    #[test]
    fn test_selection_clamped_after_shrink() {
        let (_, sel) = render("abc", &[], Selection::new(2, 10)).unwrap();
        assert_eq!(sel, Selection::new(2, 3));

        let (_, sel) = render("abc", &[], Selection::new(7, 9)).unwrap();
        assert_eq!(sel, Selection::caret(3));
    }

    #[test]
    fn test_selection_clamp_invariant() {
        for len in 0..6 {
            for start in 0..10 {
                for end in 0..10 {
                    let sel = Selection::new(start, end).clamp_to(len);
                    assert!(sel.start <= sel.end && sel.end <= len, "{:?} len {}", sel, len);
                }
            }
        }
    }

    #[test]
    fn test_out_of_bounds_span_is_error() {
        let spans = [Span::new(2, 9, Classification::Keyword)];
        let err = render("abc", &spans, Selection::default()).unwrap_err();
        assert!(matches!(err, HighlightError::SpanOutOfBounds { len: 3, .. }));
    }

    #[test]
    fn test_plain() {
        let attributed = AttributedText::plain("héllo");
        assert!(attributed.is_plain());
        assert_eq!(attributed.char_len(), 5);
        assert_eq!(attributed.segments(), vec![("héllo", None)]);
    }
}
