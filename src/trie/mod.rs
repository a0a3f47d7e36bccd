//! Sequence Trie Implementation
//!
//! A prefix tree over sequences of arbitrary hashable tokens. The trie is an
//! exact-sequence set: sequences can be inserted, removed and the resulting
//! tree exported for inspection.
//!
//! The interesting case is a stored sequence that is a strict prefix of
//! another stored sequence, e.g. both `["a"]` and `["a", "b"]`. The node under
//! `"a"` then carries a terminal flag next to its `"b"` child. A node that is
//! terminal but has no children never survives an operation: it is collapsed
//! back to a bare [`Slot::Terminator`] at its parent.
//!
//! # Example
//!
//! ```
//! use seqtrie::{SequenceTrie, Slot};
//!
//! let mut trie: SequenceTrie<&str> = SequenceTrie::new();
//! trie.insert(["grandfather"]).insert(["grandfather", "father"]);
//!
//! let node = trie.export().get(&"grandfather").and_then(Slot::as_node).unwrap();
//! assert!(node.is_terminal());
//! assert!(node.get(&"father").unwrap().is_terminator());
//!
//! trie.remove(["grandfather", "father"]).unwrap();
//! assert!(trie.export().get(&"grandfather").unwrap().is_terminator());
//!
//! assert!(trie.remove(["grandfather", "father"]).is_err());
//! ```
//!
//! # Exported view
//!
//! [`SequenceTrie::export`] hands out a shared borrow of the live root, so the
//! trie cannot be modified while the view is held:
//!
//! ```compile_fail
//! use seqtrie::SequenceTrie;
//!
//! let mut trie: SequenceTrie<&str> = SequenceTrie::new();
//! trie.insert(["a"]);
//! let view = trie.export();
//! trie.insert(["b"]);
//! assert_eq!(view.len(), 1);
//! ```

mod config;
mod error;
mod node;

#[cfg(test)]
mod tests;

use std::hash::Hash;

use tracing::{debug, error, trace};

pub use self::config::TrieConfig;
pub use error::{InvariantViolation, TrieError, TrieResult, ViolationKind};
pub use node::{Node, Slot};

/// One step of the descent recorded while validating a removal.
#[derive(Debug, Clone, Copy)]
struct PathStep {
    /// Depth of the node, the root being 0
    depth: usize,

    /// Entries the node held before the removal
    entries: usize,
}

/// What a validated removal has to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RemovalPlan {
    /// The sequence ends on a terminal branch; only the flag is cleared.
    ClearFlag,

    /// The sequence ends on a bare terminator. The entry for the token at
    /// `cut` is deleted from the node at depth `cut`, dropping the chain below.
    Prune { cut: usize },
}

/// A prefix tree storing sequences of tokens.
///
/// Key features:
/// * Any `Eq + Hash + Clone` token type, no reserved token values
/// * A sequence and its extensions can be stored side by side
/// * Failed removals leave the trie untouched
/// * Chainable `insert`/`remove` calls
#[derive(Debug, Clone)]
pub struct SequenceTrie<T> {
    /// The root node of the trie, never terminal
    root: Node<T>,

    /// Configuration options
    config: TrieConfig,
}

impl<T> SequenceTrie<T> {
    /// Creates a new empty `SequenceTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `SequenceTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: Node::new(),
            config,
        }
    }

    /// Returns a read-only view of the tree.
    ///
    /// The view borrows the trie, so it always reflects the live structure and
    /// cannot outlive a later mutation. Clone it for a detached deep copy.
    pub fn export(&self) -> &Node<T> {
        &self.root
    }

    /// Returns `true` if no sequence is stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }
}

impl<T: Eq + Hash + Clone> SequenceTrie<T> {
    /// Inserts a sequence of tokens.
    ///
    /// Inserting an empty sequence or a sequence that is already stored does
    /// nothing.
    ///
    /// # Arguments
    ///
    /// * `sequence` - The tokens to store, in order.
    ///
    /// # Returns
    ///
    /// The trie itself, so calls can be chained.
    pub fn insert<S>(&mut self, sequence: S) -> &mut Self
    where
        S: AsRef<[T]>,
    {
        let sequence = sequence.as_ref();
        let Some((last, prefix)) = sequence.split_last() else {
            trace!(trie = %self.config.name, "ignoring empty sequence on insert");
            return self;
        };

        // Walk the prefix, creating branches and turning terminators into
        // terminal branches where the new sequence runs past them
        let mut node = &mut self.root;
        for token in prefix {
            node = node
                .children
                .entry(token.clone())
                .or_insert_with(|| Slot::Branch(Node::new()))
                .extend_branch();
        }

        let is_new = match node.children.get_mut(last) {
            Some(Slot::Branch(child)) => !std::mem::replace(&mut child.terminal, true),
            Some(Slot::Terminator) => false,
            None => {
                node.children.insert(last.clone(), Slot::Terminator);
                true
            }
        };

        if is_new {
            debug!(trie = %self.config.name, len = sequence.len(), "inserted sequence");
        } else {
            trace!(trie = %self.config.name, len = sequence.len(), "sequence already stored");
        }

        self.verify();
        self
    }

    /// Inserts every sequence yielded by `sequences`, in order.
    ///
    /// Equivalent to calling [`insert`](Self::insert) for each element.
    pub fn insert_many<I>(&mut self, sequences: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<[T]>,
    {
        for sequence in sequences {
            self.insert(sequence);
        }
        self
    }

    /// Removes a stored sequence.
    ///
    /// The whole path is validated before anything is modified, so a failed
    /// call leaves the trie unchanged. Removing an empty sequence does nothing.
    ///
    /// # Arguments
    ///
    /// * `sequence` - The tokens to remove, in order.
    ///
    /// # Returns
    ///
    /// * `Ok(&mut Self)` - The sequence was removed.
    /// * `Err(TrieError::NotFound)` - The sequence is not stored. This includes
    ///   sequences that only exist as a prefix of a longer stored sequence and
    ///   sequences that run past the end of a stored one.
    pub fn remove<S>(&mut self, sequence: S) -> TrieResult<&mut Self, T>
    where
        S: AsRef<[T]>,
    {
        let sequence = sequence.as_ref();
        if sequence.is_empty() {
            trace!(trie = %self.config.name, "ignoring empty sequence on remove");
            return Ok(self);
        }

        let Some(plan) = self.plan_removal(sequence) else {
            debug!(trie = %self.config.name, len = sequence.len(), "sequence not found");
            return Err(TrieError::NotFound(sequence.to_vec()));
        };

        if self.apply_removal(sequence, plan).is_none() {
            error!(
                trie = %self.config.name,
                len = sequence.len(),
                ?plan,
                "removal plan does not match the tree"
            );
            unreachable!("validated removal path vanished before it was applied");
        }

        debug!(trie = %self.config.name, len = sequence.len(), "removed sequence");

        self.verify();
        Ok(self)
    }

    /// Removes every sequence yielded by `sequences`, in order.
    ///
    /// Stops at the first sequence that is not stored and returns its error.
    /// Sequences removed before that point stay removed.
    pub fn remove_many<I>(&mut self, sequences: I) -> TrieResult<&mut Self, T>
    where
        I: IntoIterator,
        I::Item: AsRef<[T]>,
    {
        for sequence in sequences {
            self.remove(sequence)?;
        }
        Ok(self)
    }

    /// Checks the structural invariants of the whole tree.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Every branch is non-empty and no terminal branch is
    ///   childless.
    /// * `Err(InvariantViolation)` - The first broken rule found, with the
    ///   token path leading to it.
    pub fn validate(&self) -> Result<(), InvariantViolation<T>> {
        if self.root.terminal {
            return Err(InvariantViolation {
                path: Vec::new(),
                kind: ViolationKind::TerminalRoot,
            });
        }

        // Depth-first over an explicit stack; `path` holds the tokens leading
        // to the entry being checked.
        let mut path: Vec<T> = Vec::new();
        let mut pending = Vec::new();
        Self::push_branches(&mut pending, &self.root, 0);

        while let Some((depth, token, child)) = pending.pop() {
            path.truncate(depth);
            path.push(token.clone());

            let kind = if child.entries() == 0 {
                Some(ViolationKind::EmptyBranch)
            } else if child.is_collapsible() {
                Some(ViolationKind::UncollapsedTerminal)
            } else {
                None
            };
            if let Some(kind) = kind {
                return Err(InvariantViolation { path, kind });
            }

            Self::push_branches(&mut pending, child, depth + 1);
        }

        Ok(())
    }

    fn push_branches<'a>(
        pending: &mut Vec<(usize, &'a T, &'a Node<T>)>,
        node: &'a Node<T>,
        depth: usize,
    ) {
        pending.extend(
            node.iter()
                .filter_map(|(token, slot)| slot.as_node().map(|child| (depth, token, child))),
        );
    }

    /// Read-only walk deciding whether `sequence` is stored and, if so, what
    /// removing it has to change. `sequence` must not be empty.
    fn plan_removal(&self, sequence: &[T]) -> Option<RemovalPlan> {
        let mut path = Vec::with_capacity(sequence.len());
        let mut node = &self.root;

        for (depth, token) in sequence.iter().enumerate() {
            path.push(PathStep {
                depth,
                entries: node.entries(),
            });

            let is_last = depth + 1 == sequence.len();
            match node.get(token)? {
                Slot::Terminator if is_last => {
                    return Some(RemovalPlan::Prune {
                        cut: Self::cut_depth(&path),
                    })
                }
                // a shorter sequence is stored, nothing continues from it
                Slot::Terminator => return None,
                Slot::Branch(child) if is_last => {
                    return child.terminal.then_some(RemovalPlan::ClearFlag)
                }
                Slot::Branch(child) => node = child,
            }
        }

        None
    }

    /// Walks the recorded path from the leaf back towards the root and returns
    /// the depth of the deepest node that still holds other entries once the
    /// path's entry is gone. Nodes below it would be left empty. The root is
    /// never pruned.
    fn cut_depth(path: &[PathStep]) -> usize {
        path.iter()
            .rev()
            .find(|step| step.depth == 0 || step.entries > 1)
            .map_or(0, |step| step.depth)
    }

    fn apply_removal(&mut self, sequence: &[T], plan: RemovalPlan) -> Option<()> {
        match plan {
            RemovalPlan::ClearFlag => match self.slot_mut(sequence)? {
                Slot::Branch(node) => node.terminal = false,
                Slot::Terminator => return None,
            },
            RemovalPlan::Prune { cut: 0 } => {
                self.root.children.remove(sequence.first()?)?;
            }
            RemovalPlan::Prune { cut } => {
                let slot = self.slot_mut(&sequence[..cut])?;
                let Slot::Branch(node) = slot else {
                    return None;
                };
                node.children.remove(sequence.get(cut)?)?;
                if node.is_collapsible() {
                    *slot = Slot::Terminator;
                }
            }
        }
        Some(())
    }

    /// Mutable access to the slot at the end of `path`.
    fn slot_mut(&mut self, path: &[T]) -> Option<&mut Slot<T>> {
        let (first, rest) = path.split_first()?;
        let mut slot = self.root.children.get_mut(first)?;
        for token in rest {
            slot = match slot {
                Slot::Branch(node) => node.children.get_mut(token)?,
                Slot::Terminator => return None,
            };
        }
        Some(slot)
    }

    fn verify(&self) {
        if !self.config.verify_invariants {
            return;
        }

        if let Err(violation) = self.validate() {
            error!(
                trie = %self.config.name,
                depth = violation.path.len(),
                kind = %violation.kind,
                "trie invariant violated"
            );
            panic!(
                "trie '{}' invariant violated at depth {}: {}",
                self.config.name,
                violation.path.len(),
                violation.kind
            );
        }
    }
}

impl<T> Default for SequenceTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S> Extend<S> for SequenceTrie<T>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.insert_many(iter);
    }
}

impl<T, S> FromIterator<S> for SequenceTrie<T>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.insert_many(iter);
        trie
    }
}
