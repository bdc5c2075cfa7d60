//! Syntax highlighting core
//!
//! Pipeline for one highlight pass:
//!
//! ```text
//! GrammarRegistry::lookup → match_spans → render → (AttributedText, Selection)
//! ```
//!
//! Colours are not part of the core; a [`Theme`] maps classifications to
//! styles at presentation time.

mod builtin;
mod classification;
mod grammar;
mod matcher;
mod render;
mod rules;
mod style;

pub use classification::Classification;
pub use grammar::{Grammar, GrammarRegistry};
pub use matcher::{match_spans, Span};
pub use render::{render, AttributedText, Run, Selection};
pub use rules::Rule;
pub use style::{Color, Style, Theme};
