//! Test modules for seqtrie's ambient layers.
//!
//! Trie behavior is tested next to the trie in `trie::tests`. This module
//! covers configuration loading, error types and logging setup, plus the
//! shared fixtures those tests use.

pub mod config_tests;

pub use test_utils::TestFixture;
