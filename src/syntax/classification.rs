//! Lexical classifications
//!
//! This module defines the categories a grammar rule can assign to a
//! range of text, and their default visual styles.

use super::style::{Color, Style};

/// Lexical category of a highlighted range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Language keywords (def, return, function, class)
    Keyword,
    /// Built-in objects and functions (console, print, len)
    BuiltinName,
    /// String literals
    String,
    /// Line and block comments
    Comment,
    /// Decimal numeric literals
    Number,
    /// Markup tags and CSS selectors
    Tag,
    /// Markup attributes, CSS values, PHP variables
    Attribute,
    /// Identifier immediately followed by `(`
    CallTarget,
    /// Plain value block (CSS declaration body)
    PlainValue,
}

impl Classification {
    pub const ALL: [Classification; 9] = [
        Classification::Keyword,
        Classification::BuiltinName,
        Classification::String,
        Classification::Comment,
        Classification::Number,
        Classification::Tag,
        Classification::Attribute,
        Classification::CallTarget,
        Classification::PlainValue,
    ];

    /// Get the default style for this classification
    pub fn default_style(&self) -> Style {
        match self {
            Classification::Keyword => Style::fg(Color::Rgb(86, 156, 214)),
            Classification::BuiltinName => Style::fg(Color::Rgb(197, 134, 192)),
            Classification::String => Style::fg(Color::Rgb(206, 145, 120)),
            Classification::Comment => Style::fg(Color::Rgb(87, 166, 74)).with_italic(),
            Classification::Number => Style::fg(Color::Rgb(181, 206, 168)),
            Classification::Tag => Style::fg(Color::Rgb(197, 134, 192)),
            Classification::Attribute => Style::fg(Color::Rgb(156, 220, 254)),
            Classification::CallTarget => Style::fg(Color::Rgb(220, 220, 170)),
            Classification::PlainValue => Style::fg(Color::BrightWhite),
        }
    }

    /// Get a human-readable name for this classification
    pub fn name(&self) -> &'static str {
        match self {
            Classification::Keyword => "Keyword",
            Classification::BuiltinName => "BuiltinName",
            Classification::String => "String",
            Classification::Comment => "Comment",
            Classification::Number => "Number",
            Classification::Tag => "Tag",
            Classification::Attribute => "Attribute",
            Classification::CallTarget => "CallTarget",
            Classification::PlainValue => "PlainValue",
        }
    }

    /// Parse a classification from its name (for config loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_not_empty() {
        for classification in Classification::ALL {
            assert!(!classification.default_style().is_default());
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Classification::from_name("CallTarget"), Some(Classification::CallTarget));
        assert_eq!(Classification::from_name("Comment"), Some(Classification::Comment));
        assert_eq!(Classification::from_name("comment"), None);
        assert_eq!(Classification::from_name(""), None);
    }
}
