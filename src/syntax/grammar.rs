//! Grammars and the grammar registry
//!
//! A [`Grammar`] is the ordered rule table for one language. The
//! [`GrammarRegistry`] is built once at startup and shared read-only by
//! every open document.

use std::collections::HashMap;

use super::builtin;
use super::rules::Rule;
use crate::error::Result;
use crate::language::LanguageId;

/// Ordered classification rules for one language
#[derive(Debug, Clone)]
pub struct Grammar {
    /// Language this grammar highlights
    pub language: LanguageId,
    /// Rules in application order; later rules win on overlap
    pub rules: Vec<Rule>,
}

impl Grammar {
    /// Create a new grammar with no rules
    pub fn new(language: LanguageId) -> Self {
        Self {
            language,
            rules: Vec::new(),
        }
    }

    /// The grammar used for plain text and unsupported languages
    pub fn empty() -> Self {
        Self::new(LanguageId::Unknown)
    }

    /// Append a rule
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Language id to grammar lookup
#[derive(Debug)]
pub struct GrammarRegistry {
    grammars: HashMap<LanguageId, Grammar>,
    empty: Grammar,
}

impl GrammarRegistry {
    /// Create a registry with no grammars
    pub fn new() -> Self {
        Self {
            grammars: HashMap::new(),
            empty: Grammar::empty(),
        }
    }

    /// Create a registry holding every built-in grammar
    ///
    /// Fails if any built-in pattern does not compile.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for grammar in builtin::all_grammars()? {
            registry.register(grammar);
        }
        tracing::debug!(count = registry.grammars.len(), "grammar registry ready");
        Ok(registry)
    }

    /// Add or replace the grammar for its language
    pub fn register(&mut self, grammar: Grammar) {
        if grammar.language.is_unknown() {
            return;
        }
        self.grammars.insert(grammar.language, grammar);
    }

    /// Grammar for a language; the empty grammar when none is registered
    pub fn lookup(&self, language: LanguageId) -> &Grammar {
        self.grammars.get(&language).unwrap_or(&self.empty)
    }

    /// List languages that have a grammar
    pub fn languages(&self) -> Vec<LanguageId> {
        let mut languages: Vec<_> = self.grammars.keys().copied().collect();
        languages.sort_by_key(|l| l.as_str());
        languages
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::new()
    }
}
