//! crates/conlog/src/rules.rs
//! Activation rules keyed by namespace or namespace.method.

use std::collections::HashMap;

/// String-keyed activation rules.
///
/// Keys are either a bare namespace (`"request"`) or a namespace/method pair
/// (`"request.error"`). Merging overlays entries with new values winning on
/// key collision; resolution (most-specific key wins, absence means enabled)
/// is performed by the [`Registry`](crate::Registry), which layers an
/// environment-supplied override map on top of the programmatic one.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleMap {
    entries: HashMap<String, bool>,
}

impl RuleMap {
    /// Creates an empty rule map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rule for `key`, if configured.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<bool> {
        self.entries.get(key).copied()
    }

    /// Sets the rule for `key`.
    pub fn set(&mut self, key: impl Into<String>, enabled: bool) -> &mut Self {
        self.entries.insert(key.into(), enabled);
        self
    }

    /// Overlays `patch` onto this map; entries from `patch` win on collision.
    pub fn merge(&mut self, patch: Self) {
        self.entries.extend(patch.entries);
    }

    /// Removes every rule.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of configured rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether no rules are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses a comma-separated rule token list.
    ///
    /// Each token names a key, optionally prefixed with `+` (enable, the
    /// default) or `-` (disable). Empty or prefix-only tokens are skipped;
    /// malformed input never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use conlog::RuleMap;
    ///
    /// let rules = RuleMap::parse_spec("request, -request.error, +worker.log");
    /// assert_eq!(rules.get("request"), Some(true));
    /// assert_eq!(rules.get("request.error"), Some(false));
    /// assert_eq!(rules.get("worker.log"), Some(true));
    /// assert_eq!(rules.get("absent"), None);
    /// ```
    #[must_use]
    pub fn parse_spec(spec: &str) -> Self {
        let mut rules = Self::new();
        for token in spec.split(',') {
            let token = token.trim();
            let (key, enabled) = if let Some(rest) = token.strip_prefix('-') {
                (rest, false)
            } else if let Some(rest) = token.strip_prefix('+') {
                (rest, true)
            } else {
                (token, true)
            };
            if key.is_empty() {
                continue;
            }
            rules.set(key, enabled);
        }
        rules
    }
}

impl<K: Into<String>, const N: usize> From<[(K, bool); N]> for RuleMap {
    fn from(entries: [(K, bool); N]) -> Self {
        let mut rules = Self::new();
        for (key, enabled) in entries {
            rules.set(key, enabled);
        }
        rules
    }
}
