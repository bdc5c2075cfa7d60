//! HTML grammar

use crate::error::Result;
use crate::language::LanguageId;
use crate::syntax::classification::Classification;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::Rule;

/// Create HTML grammar
pub fn html_grammar() -> Result<Grammar> {
    let mut grammar = Grammar::new(LanguageId::Html);

    // Opening and closing tags, attributes included
    grammar.push(Rule::new("tag", r"</?\w+[^>]*>", Classification::Tag)?);

    // Attribute names
    grammar.push(Rule::with_group(
        "attribute",
        r"\s(\w+)=",
        Classification::Attribute,
        1,
    )?);

    grammar.push(Rule::new("string", r#""[^"]*""#, Classification::String)?);

    grammar.push(Rule::new("comment", r"<!--[\s\S]*?-->", Classification::Comment)?);

    Ok(grammar)
}
