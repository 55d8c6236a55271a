//! Substitution rule registry.

mod builtin;
mod rule;

pub use rule::Rule;
pub(crate) use rule::{Feed, Matcher};

use indexmap::IndexMap;
use turnadoc_core::ActiveList;

use builtin::standard_rules;

/// Ordered collection of substitution rules.
///
/// Registration order doubles as priority: when two rules complete a match
/// of equal length at the same scan position, the later one wins. The
/// special-run rule always sits at the end of the table, so custom rules
/// — inserted just ahead of it — outrank every built-in on a tie.
pub struct Ruleset {
    rules: IndexMap<String, Rule>,
}

impl Ruleset {
    /// The standard AsciiDoc substitution table.
    pub fn standard() -> Self {
        let mut rules = IndexMap::new();
        for (key, rule) in standard_rules() {
            rules.insert(key.to_string(), rule);
        }
        Self { rules }
    }

    /// Register a custom rule under `key`, replacing any rule already
    /// registered under the same key.
    pub fn add(&mut self, key: &str, rule: Rule) {
        self.rules.shift_remove(key);
        // Keep the special-run rule last.
        let at = self
            .rules
            .values()
            .position(|r| matches!(r, Rule::SpecialRun))
            .unwrap_or(self.rules.len());
        self.rules.shift_insert(at, key.to_string(), rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Fresh matcher instances for every rule, in registration order.
    pub(crate) fn matchers(&self) -> ActiveList<Matcher<'_>> {
        self.rules
            .iter()
            .map(|(key, rule)| Matcher::new(key, rule))
            .collect()
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_order() {
        let rules = Ruleset::standard();
        let keys: Vec<&String> = rules.rules.keys().collect();
        assert_eq!(keys.first().map(|k| k.as_str()), Some("lt"));
        assert_eq!(keys.last().map(|k| k.as_str()), Some("specials"));
        assert_eq!(rules.len(), 18);
    }

    #[test]
    fn test_add_keeps_special_run_last() {
        let mut rules = Ruleset::standard();
        rules.add("nbsp", Rule::literal("&#160;", "{nbsp}"));

        let keys: Vec<&String> = rules.rules.keys().collect();
        assert_eq!(keys.last().map(|k| k.as_str()), Some("specials"));
        assert_eq!(keys[keys.len() - 2].as_str(), "nbsp");
        assert_eq!(rules.len(), 19);
    }

    #[test]
    fn test_add_replaces_same_key() {
        let mut rules = Ruleset::standard();
        rules.add("nbsp", Rule::literal("&#160;", " "));
        rules.add("nbsp", Rule::literal("&#160;", "{nbsp}"));

        assert_eq!(rules.len(), 19);
        let keys: Vec<&String> = rules.rules.keys().collect();
        assert_eq!(keys.last().map(|k| k.as_str()), Some("specials"));
        assert_eq!(
            rules.rules.get("nbsp"),
            Some(&Rule::literal("&#160;", "{nbsp}"))
        );
    }

    #[test]
    fn test_matchers_mirror_registration_order() {
        let rules = Ruleset::standard();
        let matchers = rules.matchers();
        assert_eq!(matchers.len(), rules.len());
        let names: Vec<&str> = matchers.iter().map(|m| m.name()).collect();
        assert_eq!(names.first().copied(), Some("lt"));
        assert_eq!(names.last().copied(), Some("specials"));
    }
}
