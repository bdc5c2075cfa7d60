//! Pattern rules for syntax highlighting
//!
//! A rule pairs a compiled regex with the classification it assigns.
//! Rules scan the whole buffer, so block constructs such as `/* ... */`
//! are written as ordinary multi-line patterns.

use regex::Regex;

use super::classification::Classification;
use crate::error::{HighlightError, Result};

/// A single classification rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name for debugging and error reports
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Classification to assign to matches
    pub classification: Classification,
    /// Capture group that delimits the span, if not the whole match
    pub group: Option<usize>,
}

impl Rule {
    /// Compile a rule whose span is the whole match
    pub fn new(name: &str, pattern: &str, classification: Classification) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| HighlightError::InvalidPattern {
            rule: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            classification,
            group: None,
        })
    }

    /// Compile a rule whose span is one capture group of each match
    pub fn with_group(
        name: &str,
        pattern: &str,
        classification: Classification,
        group: usize,
    ) -> Result<Self> {
        let mut rule = Self::new(name, pattern, classification)?;
        if group >= rule.pattern.captures_len() {
            return Err(HighlightError::Message(format!(
                "rule '{}' has no capture group {}",
                name, group
            )));
        }
        rule.group = Some(group);
        Ok(rule)
    }

    /// All non-overlapping occurrences, left to right, as byte ranges
    pub fn find_all(&self, text: &str) -> Vec<(usize, usize)> {
        match self.group {
            None => self
                .pattern
                .find_iter(text)
                .map(|m| (m.start(), m.end()))
                .collect(),
            Some(group) => self
                .pattern
                .captures_iter(text)
                .filter_map(|caps| caps.get(group))
                .map(|m| (m.start(), m.end()))
                .collect(),
        }
    }
}
