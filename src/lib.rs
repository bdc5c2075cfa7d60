//! sage-highlight - pattern-driven syntax highlighting for a code editor
//!
//! Given a text buffer and a language id, classifies substrings (keywords,
//! strings, comments, numbers, tags, attributes, call targets) and hands the
//! editor an attributed copy of the text together with its restored
//! selection. A debounce controller decides when a pass may run and drops
//! the change notifications caused by applying a pass's own result.

pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod highlighter;
pub mod language;
pub mod logging;
pub mod syntax;
pub mod worker;

pub use controller::{ChangeOrigin, ControllerState, Debounce, Notice, PassId};
pub use error::{HighlightError, Result};
pub use highlighter::{DocumentHighlighter, EditorView, HighlightUpdate};
pub use language::LanguageId;
pub use worker::HighlightWorker;
