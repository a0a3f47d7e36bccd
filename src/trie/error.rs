//! Error types for the sequence trie.
//!
//! This module defines the error types that can occur during trie operations.

use std::fmt;

/// Errors that can occur in sequence trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError<T> {
    /// The requested sequence is not stored in the trie. Carries the
    /// sequence exactly as it was passed to `remove`.
    #[error("Sequence not found: {0:?}")]
    NotFound(Vec<T>),
}

impl<T> TrieError<T> {
    /// The sequence the failed operation was asked about.
    pub fn sequence(&self) -> &[T] {
        match self {
            TrieError::NotFound(sequence) => sequence,
        }
    }

    /// Consumes the error and returns the requested sequence.
    pub fn into_sequence(self) -> Vec<T> {
        match self {
            TrieError::NotFound(sequence) => sequence,
        }
    }
}

/// Result type for sequence trie operations
pub type TrieResult<R, T> = Result<R, TrieError<T>>;

/// Which structural rule a node broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// The root node is marked terminal, i.e. the empty sequence is stored.
    TerminalRoot,

    /// A branch node has no entries at all.
    EmptyBranch,

    /// A branch node is terminal with no children and should have been
    /// collapsed to a bare terminator.
    UncollapsedTerminal,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ViolationKind::TerminalRoot => "root node is terminal",
            ViolationKind::EmptyBranch => "branch node is empty",
            ViolationKind::UncollapsedTerminal => "terminal branch has no children",
        };
        f.write_str(text)
    }
}

/// A structural invariant found broken by
/// [`SequenceTrie::validate`](super::SequenceTrie::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Trie invariant violated at {path:?}: {kind}")]
pub struct InvariantViolation<T> {
    /// Token path from the root to the offending node.
    pub path: Vec<T>,

    /// The rule that was broken.
    pub kind: ViolationKind,
}
