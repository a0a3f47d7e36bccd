//! Structural, removal and property-based tests for the sequence trie.


use std::collections::HashSet;
use std::hash::Hash;

use super::{Node, SequenceTrie, Slot, TrieConfig};

/// Token type used by the hand-written tests.
type Tok = &'static str;

/// A trie that checks its invariants after every mutation, in any build.
fn checked_trie<T>() -> SequenceTrie<T> {
    SequenceTrie::with_config(
        TrieConfig::new()
            .with_name("test")
            .with_invariant_checks(true),
    )
}

/// Builds an expected node from its terminal flag and child entries.
fn node<const N: usize>(terminal: bool, entries: [(Tok, Slot<Tok>); N]) -> Node<Tok> {
    Node {
        terminal,
        children: entries.into_iter().collect(),
    }
}

/// Builds the expected root node from its child entries.
fn root<const N: usize>(entries: [(Tok, Slot<Tok>); N]) -> Node<Tok> {
    node(false, entries)
}

/// A `Branch` slot around the given node.
fn branch<const N: usize>(terminal: bool, entries: [(Tok, Slot<Tok>); N]) -> Slot<Tok> {
    Slot::Branch(node(terminal, entries))
}

const END: Slot<Tok> = Slot::Terminator;

/// Every sequence stored below `node`, reconstructed from the exported tree.
fn stored<T: Eq + Hash + Clone>(node: &Node<T>) -> HashSet<Vec<T>> {
    fn walk<T: Eq + Hash + Clone>(node: &Node<T>, prefix: &mut Vec<T>, out: &mut HashSet<Vec<T>>) {
        if node.is_terminal() {
            out.insert(prefix.clone());
        }
        for (token, slot) in node.iter() {
            prefix.push(token.clone());
            match slot {
                Slot::Terminator => {
                    out.insert(prefix.clone());
                }
                Slot::Branch(child) => walk(child, prefix, out),
            }
            prefix.pop();
        }
    }

    let mut out = HashSet::new();
    walk(node, &mut Vec::new(), &mut out);
    out
}
