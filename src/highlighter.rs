//! Per-document highlighter
//!
//! Ties the controller to the grammar registry. The host feeds buffer
//! change notifications in, polls when the deadline passes, and applies the
//! returned [`HighlightUpdate`] to its view. Applying an update must be
//! reported back with [`ChangeOrigin::Highlighter`] so it is not
//! highlighted again.

use std::sync::Arc;
use std::time::Instant;

use crate::controller::{ChangeOrigin, Controller, ControllerState, Debounce, Notice, PassId, Snapshot};
use crate::error::Result;
use crate::language::LanguageId;
use crate::syntax::{match_spans, render, AttributedText, GrammarRegistry, Selection};

/// The editor view a highlight result is written to
pub trait EditorView {
    /// Text currently shown by the view
    fn text(&self) -> String;

    /// Replace the displayed text and its attribution
    fn set_attributed(&mut self, text: &AttributedText);

    /// Move the selection; may fail if the view's text changed meanwhile
    fn set_selection(&mut self, selection: Selection) -> Result<()>;
}

/// Result of one highlight pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightUpdate {
    pub pass: PassId,
    pub attributed: AttributedText,
    pub selection: Selection,
}

impl HighlightUpdate {
    /// Write this update to a view
    ///
    /// An update whose text no longer matches the view is dropped; the
    /// change that moved the view on has already scheduled a newer pass.
    /// A rejected selection falls back to a caret at the end of the text.
    /// Failures are logged, never returned. Returns whether the update was
    /// written.
    pub fn apply_to<V: EditorView + ?Sized>(&self, view: &mut V) -> bool {
        if view.text() != self.attributed.as_str() {
            tracing::debug!(pass = self.pass.0, "dropping stale highlight update");
            return false;
        }

        view.set_attributed(&self.attributed);
        if let Err(e) = view.set_selection(self.selection) {
            tracing::warn!(pass = self.pass.0, "restoring selection failed: {}", e);
            let end = Selection::caret(self.attributed.char_len());
            if let Err(e) = view.set_selection(end) {
                tracing::debug!(pass = self.pass.0, "caret fallback failed: {}", e);
            }
        }
        true
    }
}

/// Highlighting state for one open document
#[derive(Debug)]
pub struct DocumentHighlighter {
    registry: Arc<GrammarRegistry>,
    controller: Controller,
    enabled: bool,
}

impl DocumentHighlighter {
    pub fn new(registry: Arc<GrammarRegistry>, language: LanguageId, debounce: Debounce) -> Self {
        Self {
            registry,
            controller: Controller::new(language, debounce),
            enabled: true,
        }
    }

    /// When disabled, passes still run but produce plain text
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn state(&self) -> ControllerState {
        self.controller.state()
    }

    pub fn language(&self) -> LanguageId {
        self.controller.language()
    }

    /// Switch the active grammar for subsequent passes
    pub fn set_language(&mut self, language: LanguageId) {
        tracing::debug!(language = %language, "language declared");
        self.controller.set_language(language);
    }

    /// Host notification that the buffer changed
    pub fn on_buffer_changed(
        &mut self,
        text: impl Into<String>,
        language: LanguageId,
        selection: Selection,
        origin: ChangeOrigin,
        now: Instant,
    ) -> Notice {
        let snapshot = Snapshot {
            text: text.into(),
            selection,
        };
        let notice = self.controller.notify(snapshot, language, origin, now);
        if let Notice::Scheduled { deadline } = notice {
            tracing::debug!(
                ?origin,
                delay_ms = deadline.saturating_duration_since(now).as_millis() as u64,
                "highlight pass scheduled"
            );
        }
        notice
    }

    /// When the next pass is due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.controller.deadline()
    }

    /// Run the scheduled pass if it is due
    ///
    /// Returns `None` when nothing is due or the pass failed; a failed pass
    /// leaves the previously displayed attribution in place.
    pub fn poll(&mut self, now: Instant) -> Option<HighlightUpdate> {
        let pass = self.controller.poll(now)?;
        let grammar = if self.enabled {
            self.registry.lookup(pass.language)
        } else {
            self.registry.lookup(LanguageId::Unknown)
        };

        let text = &pass.snapshot.text;
        let spans = match_spans(text, grammar);
        let result = render(text, &spans, pass.snapshot.selection);
        self.controller.finish(pass.id, now);

        match result {
            Ok((attributed, selection)) => {
                tracing::debug!(
                    pass = pass.id.0,
                    language = %pass.language,
                    spans = spans.len(),
                    runs = attributed.runs().len(),
                    "highlight pass complete"
                );
                Some(HighlightUpdate {
                    pass: pass.id,
                    attributed,
                    selection,
                })
            }
            Err(e) => {
                tracing::warn!(pass = pass.id.0, "highlight pass failed: {}", e);
                None
            }
        }
    }
}
