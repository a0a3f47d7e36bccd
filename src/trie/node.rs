//! Node implementation for the sequence trie.
//!
//! This module provides the [`Node`] and [`Slot`] types the trie is built from.
//! A node maps tokens to slots; a slot is either a bare [`Slot::Terminator`]
//! (a stored sequence ends here and nothing continues through it) or a
//! [`Slot::Branch`] holding a child node.

use std::hash::Hash;
use std::mem;

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Child map used by every node.
pub(crate) type Children<T> = HashMap<T, Slot<T>, FnvBuildHasher>;

/// What a token maps to inside a [`Node`].
#[derive(Debug, Clone)]
pub enum Slot<T> {
    /// A stored sequence ends at this token and has no recorded continuation.
    Terminator,

    /// Longer sequences continue through this token.
    Branch(Node<T>),
}

impl<T> Slot<T> {
    /// Returns `true` if this slot is a bare terminator.
    pub fn is_terminator(&self) -> bool {
        matches!(self, Slot::Terminator)
    }

    /// Returns the child node if this slot is a branch.
    pub fn as_node(&self) -> Option<&Node<T>> {
        match self {
            Slot::Branch(node) => Some(node),
            Slot::Terminator => None,
        }
    }

    /// Turns a terminator into a terminal branch with no children so that a
    /// longer sequence can be threaded through it, then returns the branch.
    pub(crate) fn extend_branch(&mut self) -> &mut Node<T> {
        if let Slot::Terminator = self {
            *self = Slot::Branch(Node::terminal_only());
        }
        match self {
            Slot::Branch(node) => node,
            Slot::Terminator => unreachable!("terminator was converted into a branch above"),
        }
    }
}

impl<T: Eq + Hash> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Slot::Terminator, Slot::Terminator) => true,
            (Slot::Branch(a), Slot::Branch(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq + Hash> Eq for Slot<T> {}

/// A node in the sequence trie.
///
/// The `terminal` flag records that a stored sequence ends at this node while
/// longer sequences continue through its children. Nodes handed out by
/// [`SequenceTrie::export`](super::SequenceTrie::export) are read-only.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Whether a stored sequence ends here
    pub(crate) terminal: bool,

    /// Map of tokens to child slots
    pub(crate) children: Children<T>,
}

impl<T> Node<T> {
    /// Creates a new empty node.
    pub(crate) fn new() -> Self {
        Self {
            terminal: false,
            children: Children::default(),
        }
    }

    /// A node that only marks the end of a sequence. Only ever exists
    /// transiently, until a child is added or it is collapsed.
    fn terminal_only() -> Self {
        Self {
            terminal: true,
            children: Children::default(),
        }
    }

    /// Returns `true` if a stored sequence ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Number of child tokens.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the node has no child tokens.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates over the child tokens and their slots, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &Slot<T>)> {
        self.children.iter()
    }

    /// Entries held by this node, counting the terminal flag as one.
    pub(crate) fn entries(&self) -> usize {
        self.children.len() + usize::from(self.terminal)
    }

    /// Returns `true` for a terminal node with no children, which must be
    /// collapsed to a bare terminator at its parent.
    pub(crate) fn is_collapsible(&self) -> bool {
        self.terminal && self.children.is_empty()
    }
}

impl<T: Eq + Hash> Node<T> {
    /// Returns the slot stored under `token`, if any.
    pub fn get(&self, token: &T) -> Option<&Slot<T>> {
        self.children.get(token)
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Each token of a sequence nests one node, so the default drop glue would
// recurse once per token. Child maps are unlinked onto a heap stack instead.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }

        let mut pending = vec![mem::take(&mut self.children)];
        while let Some(mut children) = pending.pop() {
            for (_, slot) in children.drain() {
                if let Slot::Branch(mut child) = slot {
                    if !child.children.is_empty() {
                        pending.push(mem::take(&mut child.children));
                    }
                }
            }
        }
    }
}

impl<T: Eq + Hash> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.terminal == other.terminal && self.children == other.children
    }
}

impl<T: Eq + Hash> Eq for Node<T> {}
