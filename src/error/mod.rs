//! Error module for seqtrie.
//!
//! Errors are split by concern: trie operations report [`TrieError`] (and
//! [`InvariantViolation`] from explicit validation), while loading settings
//! and setting up logging report [`ConfigError`]. All of them are `thiserror`
//! enums returned through `Result`.

pub mod config;

pub use self::config::ConfigError;
pub use crate::trie::{InvariantViolation, TrieError, TrieResult, ViolationKind};
