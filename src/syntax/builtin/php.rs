//! PHP grammar

use crate::error::Result;
use crate::language::LanguageId;
use crate::syntax::classification::Classification;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::Rule;

use super::{BLOCK_COMMENT, CALL_TARGET, NUMBER};

/// Create PHP grammar
pub fn php_grammar() -> Result<Grammar> {
    let mut grammar = Grammar::new(LanguageId::Php);

    let keywords = r"\b(if|else|elseif|while|do|for|foreach|as|switch|case|break|continue|return|function|class|new|echo|print|include|require)\b";
    grammar.push(Rule::new("keyword", keywords, Classification::Keyword)?);

    // Variables
    grammar.push(Rule::new("variable", r"\$\w+", Classification::Attribute)?);

    grammar.push(Rule::new("number", NUMBER, Classification::Number)?);

    grammar.push(Rule::new("string", r#""[^"]*"|'[^']*'"#, Classification::String)?);

    // Both `//` and `#` start a line comment
    grammar.push(Rule::new("line_comment", r"//[^\n]*|#[^\n]*", Classification::Comment)?);
    grammar.push(Rule::new("block_comment", BLOCK_COMMENT, Classification::Comment)?);

    grammar.push(Rule::with_group("call", CALL_TARGET, Classification::CallTarget, 1)?);

    Ok(grammar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables() {
        let grammar = php_grammar().unwrap();
        assert_eq!(grammar.rules[1].find_all("$a = $b1;"), vec![(0, 2), (5, 8)]);
    }
}
