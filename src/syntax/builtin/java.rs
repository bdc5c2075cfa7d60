//! Java grammar

use crate::error::Result;
use crate::language::LanguageId;
use crate::syntax::classification::Classification;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::Rule;

use super::{BLOCK_COMMENT, CALL_TARGET, NUMBER};

/// Create Java grammar
pub fn java_grammar() -> Result<Grammar> {
    let mut grammar = Grammar::new(LanguageId::Java);

    let keywords = r"\b(abstract|assert|boolean|break|byte|case|catch|char|class|const|continue|default|do|double|else|enum|extends|final|finally|float|for|if|implements|import|instanceof|int|interface|long|new|package|private|protected|public|return|static|switch|this|throw|try|void|while)\b";
    grammar.push(Rule::new("keyword", keywords, Classification::Keyword)?);

    // Literals
    grammar.push(Rule::new("literal", r"\b(true|false|null)\b", Classification::Keyword)?);

    grammar.push(Rule::new("number", NUMBER, Classification::Number)?);

    grammar.push(Rule::new("string", r#""[^"]*""#, Classification::String)?);

    grammar.push(Rule::new("line_comment", r"//[^\n]*", Classification::Comment)?);
    grammar.push(Rule::new("block_comment", BLOCK_COMMENT, Classification::Comment)?);

    grammar.push(Rule::with_group("call", CALL_TARGET, Classification::CallTarget, 1)?);

    Ok(grammar)
}
