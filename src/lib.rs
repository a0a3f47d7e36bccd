//! seqtrie
//!
//! A prefix tree (trie) over sequences of arbitrary hashable tokens: words,
//! integers, owned strings, anything `Eq + Hash + Clone`. The container is an
//! exact-sequence set with insert, remove and export operations, and handles
//! one stored sequence being a strict prefix of another.
//!
//! # Modules
//!
//! - [`trie`]: the [`SequenceTrie`] container and its node types
//! - [`config`]: settings loading and validation
//! - [`error`]: error types
//! - [`logging`]: `tracing` subscriber setup for embedding applications
//!
//! # Example
//!
//! ```
//! use seqtrie::{SequenceTrie, TrieError};
//!
//! let mut trie: SequenceTrie<&str> = SequenceTrie::new();
//! trie.insert_many([vec!["root", "cherry1"], vec!["root", "cherry2"]]);
//!
//! trie.remove(["root", "cherry1"])?;
//! let root = trie.export().get(&"root").and_then(|slot| slot.as_node()).unwrap();
//! assert_eq!(root.len(), 1);
//!
//! let err = trie.remove(["root"]).unwrap_err();
//! assert_eq!(err, TrieError::NotFound(vec!["root"]));
//! # Ok::<(), TrieError<&str>>(())
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use trie::{
    InvariantViolation, Node, SequenceTrie, Slot, TrieConfig, TrieError, TrieResult,
    ViolationKind,
};

/// Version information for seqtrie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
