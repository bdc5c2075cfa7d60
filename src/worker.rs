//! Background highlight worker
//!
//! Runs a [`DocumentHighlighter`] on its own thread. Change notifications
//! arrive over a channel; the thread sleeps until the controller's deadline
//! (or the next message) and sends finished updates to the host.
//!
//! ```text
//! host ──Changed──▶ worker ──(debounce)──▶ pass ──HighlightUpdate──▶ host
//! ```

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::controller::{ChangeOrigin, Debounce};
use crate::error::{HighlightError, Result};
use crate::highlighter::{DocumentHighlighter, HighlightUpdate};
use crate::language::LanguageId;
use crate::syntax::{GrammarRegistry, Selection};

enum WorkerMsg {
    Changed {
        text: String,
        language: LanguageId,
        selection: Selection,
        origin: ChangeOrigin,
    },
    SetLanguage(LanguageId),
    SetEnabled(bool),
    Shutdown,
}

/// Handle to a highlight thread for one document
///
/// Dropping the handle stops the thread.
pub struct HighlightWorker {
    tx: Sender<WorkerMsg>,
    handle: Option<JoinHandle<()>>,
}

impl HighlightWorker {
    /// Spawn a worker delivering updates to `updates`
    pub fn spawn(
        registry: Arc<GrammarRegistry>,
        language: LanguageId,
        debounce: Debounce,
        updates: Sender<HighlightUpdate>,
    ) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let highlighter = DocumentHighlighter::new(registry, language, debounce);
        let handle = thread::Builder::new()
            .name("highlight".to_string())
            .spawn(move || run(highlighter, rx, updates))?;
        Ok(Self {
            tx,
            handle: Some(handle),
        })
    }

    /// Forward a buffer change notification
    pub fn changed(
        &self,
        text: impl Into<String>,
        language: LanguageId,
        selection: Selection,
        origin: ChangeOrigin,
    ) -> Result<()> {
        self.send(WorkerMsg::Changed {
            text: text.into(),
            language,
            selection,
            origin,
        })
    }

    pub fn set_language(&self, language: LanguageId) -> Result<()> {
        self.send(WorkerMsg::SetLanguage(language))
    }

    pub fn set_enabled(&self, enabled: bool) -> Result<()> {
        self.send(WorkerMsg::SetEnabled(enabled))
    }

    fn send(&self, msg: WorkerMsg) -> Result<()> {
        self.tx
            .send(msg)
            .map_err(|_| HighlightError::Message("highlight worker has stopped".to_string()))
    }
}

impl Drop for HighlightWorker {
    fn drop(&mut self) {
        let _ = self.tx.send(WorkerMsg::Shutdown);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("highlight worker panicked");
            }
        }
    }
}

fn run(mut highlighter: DocumentHighlighter, rx: Receiver<WorkerMsg>, updates: Sender<HighlightUpdate>) {
    tracing::debug!("highlight worker started");
    loop {
        let msg = match highlighter.next_deadline() {
            Some(deadline) => {
                let wait = deadline.saturating_duration_since(Instant::now());
                match rx.recv_timeout(wait) {
                    Ok(msg) => Some(msg),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match rx.recv() {
                Ok(msg) => Some(msg),
                Err(_) => break,
            },
        };

        match msg {
            Some(WorkerMsg::Changed {
                text,
                language,
                selection,
                origin,
            }) => {
                highlighter.on_buffer_changed(text, language, selection, origin, Instant::now());
            }
            Some(WorkerMsg::SetLanguage(language)) => highlighter.set_language(language),
            Some(WorkerMsg::SetEnabled(enabled)) => highlighter.set_enabled(enabled),
            Some(WorkerMsg::Shutdown) => break,
            None => {}
        }

        if let Some(update) = highlighter.poll(Instant::now()) {
            if updates.send(update).is_err() {
                tracing::debug!("update receiver dropped");
                break;
            }
        }
    }
    tracing::debug!("highlight worker stopped");
}
