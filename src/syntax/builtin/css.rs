//! CSS grammar

use crate::error::Result;
use crate::language::LanguageId;
use crate::syntax::classification::Classification;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::Rule;

use super::BLOCK_COMMENT;

/// Create CSS grammar
pub fn css_grammar() -> Result<Grammar> {
    let mut grammar = Grammar::new(LanguageId::Css);

    // Declaration blocks
    grammar.push(Rule::new("block", r"\{[^}]*\}", Classification::PlainValue)?);

    // Class and id selectors, up to the opening brace
    grammar.push(Rule::new("selector", r"[.#]\w+[^{]*\{", Classification::Tag)?);

    // Common properties
    let properties = r"\b(margin|padding|font|color|background|display|width|height|border|position|top|left|right|bottom|float|clear|text-align|line-height)\b";
    grammar.push(Rule::new("property", properties, Classification::Keyword)?);

    // Values after the colon
    grammar.push(Rule::new("value", r":\s*[^;]*", Classification::Attribute)?);

    grammar.push(Rule::new("comment", BLOCK_COMMENT, Classification::Comment)?);

    Ok(grammar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_keyword() {
        let grammar = css_grammar().unwrap();
        let property = &grammar.rules[2];
        assert_eq!(property.find_all("text-align: left;"), vec![(0, 10), (12, 16)]);
        assert!(property.find_all("margins").is_empty());
    }

    #[test]
    fn test_selector_stops_at_brace() {
        let grammar = css_grammar().unwrap();
        assert_eq!(grammar.rules[1].find_all(".card { x }"), vec![(0, 7)]);
    }
}
