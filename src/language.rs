//! Language identifiers
//!
//! A document's language is declared once, as a short lower-cased id
//! derived from its file extension. Unrecognized ids resolve to
//! [`LanguageId::Unknown`], which highlights as plain text.

use std::fmt;
use std::path::Path;

/// Normalized language identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    Html,
    Css,
    JavaScript,
    Python,
    Php,
    Java,
    #[default]
    Unknown,
}

impl LanguageId {
    /// All languages with a built-in grammar
    pub const SUPPORTED: [LanguageId; 6] = [
        LanguageId::Html,
        LanguageId::Css,
        LanguageId::JavaScript,
        LanguageId::Python,
        LanguageId::Php,
        LanguageId::Java,
    ];

    /// Parse a language id or file extension, case-insensitively
    pub fn parse(id: &str) -> Self {
        match id.trim().to_lowercase().as_str() {
            "html" | "htm" => LanguageId::Html,
            "css" => LanguageId::Css,
            "js" | "javascript" => LanguageId::JavaScript,
            "py" | "python" => LanguageId::Python,
            "php" => LanguageId::Php,
            "java" => LanguageId::Java,
            _ => LanguageId::Unknown,
        }
    }

    /// Derive the language from a file name's extension
    pub fn from_file_name(name: impl AsRef<Path>) -> Self {
        name.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(LanguageId::Unknown, Self::parse)
    }

    /// Short normalized id
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::Html => "html",
            LanguageId::Css => "css",
            LanguageId::JavaScript => "js",
            LanguageId::Python => "py",
            LanguageId::Php => "php",
            LanguageId::Java => "java",
            LanguageId::Unknown => "unknown",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::Html => "HTML",
            LanguageId::Css => "CSS",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::Python => "Python",
            LanguageId::Php => "PHP",
            LanguageId::Java => "Java",
            LanguageId::Unknown => "Plain Text",
        }
    }

    /// Human-readable file kind for an extension
    ///
    /// Covers a few formats shown in listings that have no grammar.
    pub fn kind_name(extension: &str) -> &'static str {
        match extension.to_lowercase().as_str() {
            "json" => "JSON",
            ext => Self::parse(ext).display_name(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        *self == LanguageId::Unknown
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(LanguageId::parse("HTML"), LanguageId::Html);
        assert_eq!(LanguageId::parse("htm"), LanguageId::Html);
        assert_eq!(LanguageId::parse("JavaScript"), LanguageId::JavaScript);
        assert_eq!(LanguageId::parse("js"), LanguageId::JavaScript);
        assert_eq!(LanguageId::parse("Py"), LanguageId::Python);
        assert_eq!(LanguageId::parse("php"), LanguageId::Php);
        assert_eq!(LanguageId::parse("java"), LanguageId::Java);
        assert_eq!(LanguageId::parse("css"), LanguageId::Css);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(LanguageId::parse("txt"), LanguageId::Unknown);
        assert_eq!(LanguageId::parse("json"), LanguageId::Unknown);
        assert_eq!(LanguageId::parse(""), LanguageId::Unknown);
        assert!(LanguageId::parse("rs").is_unknown());
    }

    #[test]
    fn test_from_file_name() {
        assert_eq!(LanguageId::from_file_name("index.HTML"), LanguageId::Html);
        assert_eq!(LanguageId::from_file_name("app.min.js"), LanguageId::JavaScript);
        assert_eq!(LanguageId::from_file_name("Main.java"), LanguageId::Java);
        assert_eq!(LanguageId::from_file_name("notes.txt"), LanguageId::Unknown);
        assert_eq!(LanguageId::from_file_name("Makefile"), LanguageId::Unknown);
    }

    #[test]
    fn test_as_str_roundtrips_through_parse() {
        for lang in LanguageId::SUPPORTED {
            assert_eq!(LanguageId::parse(lang.as_str()), lang);
        }
        assert_eq!(LanguageId::Unknown.display_name(), "Plain Text");
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(LanguageId::kind_name("JSON"), "JSON");
        assert_eq!(LanguageId::parse("json"), LanguageId::Unknown);
        assert_eq!(LanguageId::kind_name("py"), "Python");
        assert_eq!(LanguageId::kind_name("txt"), "Plain Text");
    }
}
