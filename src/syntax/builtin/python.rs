//! Python grammar

use crate::error::Result;
use crate::language::LanguageId;
use crate::syntax::classification::Classification;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::Rule;

use super::{CALL_TARGET, NUMBER};

/// Create Python grammar
pub fn python_grammar() -> Result<Grammar> {
    let mut grammar = Grammar::new(LanguageId::Python);

    let keywords = r"\b(def|class|import|from|as|if|elif|else|for|while|try|except|finally|with|return|yield|break|continue|pass|raise|True|False|None)\b";
    grammar.push(Rule::new("keyword", keywords, Classification::Keyword)?);

    // Built-in functions
    let builtins = r"\b(print|len|range|int|str|list|dict|set|tuple)\b";
    grammar.push(Rule::new("builtin", builtins, Classification::BuiltinName)?);

    grammar.push(Rule::new("number", NUMBER, Classification::Number)?);

    grammar.push(Rule::new("string", r#""[^"]*"|'[^']*'"#, Classification::String)?);

    grammar.push(Rule::new("comment", r"#[^\n]*", Classification::Comment)?);

    grammar.push(Rule::with_group("call", CALL_TARGET, Classification::CallTarget, 1)?);

    Ok(grammar)
}
