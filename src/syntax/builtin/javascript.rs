//! JavaScript grammar

use crate::error::Result;
use crate::language::LanguageId;
use crate::syntax::classification::Classification;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::Rule;

use super::{BLOCK_COMMENT, CALL_TARGET, NUMBER};

/// Create JavaScript grammar
pub fn javascript_grammar() -> Result<Grammar> {
    let mut grammar = Grammar::new(LanguageId::JavaScript);

    let keywords = r"\b(var|let|const|function|return|if|else|for|while|do|switch|case|break|continue|new|this|typeof|instanceof)\b";
    grammar.push(Rule::new("keyword", keywords, Classification::Keyword)?);

    // Built-in objects
    let builtins = r"\b(document|window|console|Math|Array|Object|String|Number|Boolean)\b";
    grammar.push(Rule::new("builtin", builtins, Classification::BuiltinName)?);

    grammar.push(Rule::new("number", NUMBER, Classification::Number)?);

    // Double, single and template strings
    grammar.push(Rule::new(
        "string",
        r#""[^"]*"|'[^']*'|`[^`]*`"#,
        Classification::String,
    )?);

    grammar.push(Rule::new("line_comment", r"//[^\n]*", Classification::Comment)?);
    grammar.push(Rule::new("block_comment", BLOCK_COMMENT, Classification::Comment)?);

    grammar.push(Rule::with_group("call", CALL_TARGET, Classification::CallTarget, 1)?);

    Ok(grammar)
}
