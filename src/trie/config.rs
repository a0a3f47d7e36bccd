//! Configuration for the sequence trie.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Configuration options for a [`SequenceTrie`](super::SequenceTrie).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Name attached to every log event the trie emits
    pub name: String,

    /// Whether to walk the whole tree and check its structural invariants
    /// after every mutating operation
    pub verify_invariants: bool,
}

impl TrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - name: "trie"
    /// - verify_invariants: false
    pub fn new() -> Self {
        Self {
            name: "trie".to_string(),
            verify_invariants: false,
        }
    }

    /// Set the name used in log events.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Enable or disable the post-mutation invariant check.
    ///
    /// The check is O(n) in the number of nodes, which makes bulk inserts
    /// quadratic while it is on.
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.verify_invariants = enabled;
        self
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "trie name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = TrieConfig::new()
            .with_name("tokens")
            .with_invariant_checks(true);

        assert_eq!(config.name, "tokens");
        assert!(config.verify_invariants);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invariant_checks_off_by_default() {
        let config = TrieConfig::default();
        assert_eq!(config.name, "trie");
        assert!(!config.verify_invariants);
    }

    #[test]
    fn test_blank_name_rejected() {
        let config = TrieConfig::new().with_name("  ");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
