//! Built-in grammars
//!
//! Hand-authored rule tables for the languages the editor highlights.
//! Rule order matters: later rules recolor characters matched earlier.

mod css;
mod html;
mod java;
mod javascript;
mod php;
mod python;

use super::grammar::Grammar;
use crate::error::Result;

/// Decimal integer or fraction
pub(crate) const NUMBER: &str = r"\b\d+(\.\d+)?\b";

/// Identifier immediately followed by an opening parenthesis (group 1)
pub(crate) const CALL_TARGET: &str = r"\b(\w+)\(";

/// `/* ... */`, possibly spanning lines
pub(crate) const BLOCK_COMMENT: &str = r"/\*[\s\S]*?\*/";

/// Get all built-in grammars
pub fn all_grammars() -> Result<Vec<Grammar>> {
    Ok(vec![
        html::html_grammar()?,
        css::css_grammar()?,
        javascript::javascript_grammar()?,
        python::python_grammar()?,
        php::php_grammar()?,
        java::java_grammar()?,
    ])
}
