//! Sibling ordering policy.

use std::collections::HashMap;

use serde::Deserialize;

/// Explicit sibling ordering for navigation levels.
///
/// Maps a section path (segments joined by `/`, empty string for the top
/// level) to an ordered list of segment names. Segments named by a rule are
/// emitted first, in rule order; segments absent from the rule keep their
/// first-seen order and are appended after. Levels without a rule are
/// emitted purely in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct OrderingPolicy {
    rules: HashMap<String, Vec<String>>,
}

impl OrderingPolicy {
    /// Create an empty policy (pure first-seen ordering everywhere).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a policy from `(section path, ordered segment names)` pairs.
    ///
    /// Use `""` as the section path for the top level.
    pub fn from_rules<K, S, I>(rules: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<S>)>,
        K: Into<String>,
        S: Into<String>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(key, order)| (key.into(), order.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// Add or replace the rule for a section path.
    pub fn set_rule(&mut self, section: impl Into<String>, order: Vec<String>) {
        self.rules.insert(section.into(), order);
    }

    /// Ordering rule for a section path, if one is configured.
    #[must_use]
    pub fn rule(&self, section: &str) -> Option<&[String]> {
        self.rules.get(section).map(Vec::as_slice)
    }

    /// True if no section has an explicit rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
