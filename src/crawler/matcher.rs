//! Term matching and excerpt construction
//!
//! The matcher flattens a page's body text, looks for the first
//! case-insensitive occurrence of the target term, and reconstructs a short
//! excerpt around it. It holds no per-page state: searching the same text
//! twice yields the same excerpt.

use crate::ConfigError;
use regex::{Regex, RegexBuilder};

/// Case-insensitive term search over flattened page text
#[derive(Debug, Clone)]
pub struct TermMatcher {
    /// The term as configured; spliced verbatim into excerpts
    term: String,

    /// Escaped, case-insensitive pattern for the term
    pattern: Regex,

    /// Runs of carriage returns / line feeds, removed outright
    line_breaks: Regex,

    /// Runs of two or more whitespace characters, collapsed to one space
    extra_whitespace: Regex,

    /// Characters of context kept on each side of a match
    context_window: usize,
}

impl TermMatcher {
    /// Creates a matcher for the given term
    ///
    /// # Arguments
    ///
    /// * `term` - The term to search for; must be non-empty
    /// * `context_window` - Characters of context on each side of a match
    ///
    /// # Returns
    ///
    /// * `Ok(TermMatcher)` - Ready-to-use matcher
    /// * `Err(ConfigError)` - The term is empty or cannot form a pattern
    pub fn new(term: &str, context_window: usize) -> Result<Self, ConfigError> {
        if term.trim().is_empty() {
            return Err(ConfigError::Validation("term cannot be empty".to_string()));
        }

        let pattern = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
            .map_err(|e| ConfigError::Validation(format!("term is not searchable: {}", e)))?;

        let line_breaks = Regex::new(r"[\r\n]+")
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        let extra_whitespace = Regex::new(r"\s{2,}")
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        Ok(Self {
            term: term.to_string(),
            pattern,
            line_breaks,
            extra_whitespace,
            context_window,
        })
    }

    /// Searches flattened text for the term and builds an excerpt
    ///
    /// # Arguments
    ///
    /// * `body_text` - The raw visible text of a page body
    ///
    /// # Returns
    ///
    /// * `Some(excerpt)` - The term occurs; excerpt around the first match
    /// * `None` - The term does not occur in the text
    pub fn search(&self, body_text: &str) -> Option<String> {
        let text = self.flatten(body_text);
        let found = self.pattern.find(&text)?;
        Some(self.excerpt(&text, found.start(), found.end()))
    }

    /// Flattens raw body text for searching
    ///
    /// Line-break runs are removed outright (joining the surrounding
    /// characters), then runs of two or more whitespace characters collapse
    /// to a single space. Single spaces and tabs survive untouched.
    fn flatten(&self, raw: &str) -> String {
        let without_breaks = self.line_breaks.replace_all(raw, "");
        self.extra_whitespace
            .replace_all(&without_breaks, " ")
            .into_owned()
    }

    /// Builds the `...<before><term><after>...` excerpt around a match
    ///
    /// Both context slices clamp at the text boundaries: a match near the
    /// start yields a short (possibly empty) before-slice rather than
    /// wrapping around. The matched region is replaced by the term as
    /// configured, between original-case context from the page.
    fn excerpt(&self, text: &str, start: usize, end: usize) -> String {
        let prefix = &text[..start];
        let skip = prefix.chars().count().saturating_sub(self.context_window);
        let before: String = prefix.chars().skip(skip).collect();

        let after: String = text[end..].chars().take(self.context_window).collect();

        format!("...{}{}{}...", before, self.term, after)
    }
}
