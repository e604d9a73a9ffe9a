use std::mem;

use derive_new::new;
use serde::Serialize;

use crate::alphabet::{Key, BRANCHES};
use crate::sequences::sequence::Sequence;

/// A slot in the trie.
///
/// `Empty` is a zero-sized marker standing in for every absent child; it
/// carries no depth of its own and is never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    #[default]
    Empty,
    Leaf(Leaf),
    Internal(Box<Internal>),
}

/// A stored sequence together with the number of branching decisions taken
/// to reach it. The depth is unrelated to the sequence length.
#[derive(new, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Leaf {
    pub(crate) sequence: Sequence,
    pub(crate) depth: usize,
}

/// A branch point at `depth`, keyed on the symbol at that position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Internal {
    pub(crate) depth: usize,
    pub(crate) children: [Node; BRANCHES],
}

impl Leaf {
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Internal {
    pub fn new(depth: usize) -> Internal {
        Internal { depth, children: Default::default() }
    }

    /// Wraps `leaf` in a fresh internal node at the leaf's current depth,
    /// re-keying it one level further down.
    pub(crate) fn split(mut leaf: Leaf) -> Internal {
        let mut internal = Internal::new(leaf.depth);
        let key = leaf.sequence.key_at(leaf.depth);
        tracing::debug!(sequence = %leaf.sequence, depth = leaf.depth, key = %key.as_char(), "splitting leaf");
        leaf.depth += 1;
        internal.children[key.idx()] = Node::Leaf(leaf);
        internal
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn child(&self, key: Key) -> &Node {
        &self.children[key.idx()]
    }

    pub(crate) fn child_mut(&mut self, key: Key) -> &mut Node {
        &mut self.children[key.idx()]
    }

    /// Number of slots holding something other than `Empty`.
    pub fn occupied(&self) -> usize {
        self.children.iter().filter(|c| !c.is_empty()).count()
    }

    fn take_sole_leaf(&mut self) -> Option<Leaf> {
        if self.occupied() != 1 {
            return None;
        }
        let slot = self.children.iter_mut().find(|c| matches!(c, Node::Leaf(_)))?;
        match mem::take(slot) {
            Node::Leaf(leaf) => Some(leaf),
            other => {
                *slot = other;
                None
            }
        }
    }
}

impl Node {
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Stored depth; `Empty` has none and inherits its parent's depth + 1.
    pub fn depth(&self) -> Option<usize> {
        match self {
            Node::Empty => None,
            Node::Leaf(leaf) => Some(leaf.depth),
            Node::Internal(internal) => Some(internal.depth),
        }
    }

    /// Replaces a leaf with an internal node holding it. Other variants are
    /// left untouched.
    pub(crate) fn split(&mut self) {
        if let Node::Leaf(leaf) = mem::take(self) {
            *self = Node::Internal(Box::new(Internal::split(leaf)));
        }
    }

    /// Replaces an internal node whose only remaining child is a leaf by that
    /// leaf, one level up. An internal node whose sole child is itself
    /// internal stays in place.
    pub(crate) fn collapse(&mut self) {
        if let Node::Internal(internal) = self {
            match internal.occupied() {
                0 => *self = Node::Empty,
                1 => {
                    if let Some(mut leaf) = internal.take_sole_leaf() {
                        leaf.depth -= 1;
                        tracing::debug!(sequence = %leaf.sequence, depth = leaf.depth, "collapsing internal node");
                        *self = Node::Leaf(leaf);
                    }
                }
                _ => {}
            }
        }
    }

    /// Total number of nodes in this subtree, empty slots included.
    pub fn size(&self) -> usize {
        match self {
            Node::Empty | Node::Leaf(_) => 1,
            Node::Internal(internal) => 1 + internal.children.iter().map(Node::size).sum::<usize>(),
        }
    }
}
