//! Unescaper - the reusable entry point for reversing substitutions.

use crate::rules::{Rule, Ruleset};
use crate::{quotes, scanner, Result};

/// Reverses renderer substitutions in text fragments.
///
/// An `Unescaper` owns an immutable rule table and no per-call state, so
/// one instance can serve any number of fragments — and threads — without
/// interference. Every call scans with fresh per-rule matchers and then
/// settles curly close quotes against the marks recorded during the scan.
///
/// # Example
///
/// ```rust
/// use turnadoc::Unescaper;
///
/// let mut unescaper = Unescaper::new();
/// unescaper.add_rule("nbsp", "&#160;", "{nbsp}");
///
/// let text = unescaper.unescape("a&#160;b").unwrap();
/// assert_eq!(text, "a{nbsp}b");
/// ```
pub struct Unescaper {
    rules: Ruleset,
}

impl Unescaper {
    /// Create an `Unescaper` with the standard rule table.
    pub fn new() -> Self {
        Self {
            rules: Ruleset::standard(),
        }
    }

    /// Create an `Unescaper` over a custom rule table.
    pub fn with_rules(rules: Ruleset) -> Self {
        Self { rules }
    }

    /// Register a custom literal rule.
    ///
    /// Custom rules beat built-ins of equal match length and are always
    /// consulted before the bare-markup run rule.
    pub fn add_rule(&mut self, key: &str, source: &str, replacement: &str) -> &mut Self {
        self.rules.add(key, Rule::literal(source, replacement));
        self
    }

    /// The active rule table.
    pub fn rules(&self) -> &Ruleset {
        &self.rules
    }

    /// Reverse renderer substitutions in `text`.
    pub fn unescape(&self, text: &str) -> Result<String> {
        let (out, marks) = scanner::run(&self.rules, text)?;
        quotes::resolve_apostrophes(&out, &marks)
    }
}

impl Default for Unescaper {
    fn default() -> Self {
        Self::new()
    }
}
