use crate::alphabet::{Key, BRANCHES};
use crate::sequences::sequence::Sequence;
use crate::sequences::trie::node::{Internal, Node};

/// Walks the slots of an internal node in key order, empty ones included.
#[derive(Debug)]
pub struct ChildCursor<'a> {
    idx: usize,
    node: &'a Internal,
}

impl<'a> Iterator for ChildCursor<'a> {
    type Item = (Key, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= BRANCHES {
            return None;
        }
        let key = Key::ORDER[self.idx];
        self.idx += 1;
        Some((key, &self.node.children[key.idx()]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = BRANCHES.saturating_sub(self.idx);
        (left, Some(left))
    }
}

impl ExactSizeIterator for ChildCursor<'_> {}

impl<'a> IntoIterator for &'a Internal {
    type Item = (Key, &'a Node);
    type IntoIter = ChildCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        ChildCursor { idx: 0, node: self }
    }
}

/// Depth-first walk over every stored sequence, visiting children in key
/// order A, C, G, T, terminator.
#[derive(Debug)]
pub struct Sequences<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Sequences<'a> {
    pub(crate) fn new(root: &'a Node) -> Sequences<'a> {
        Sequences { stack: vec![root] }
    }
}

impl<'a> Iterator for Sequences<'a> {
    type Item = &'a Sequence;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Empty => {}
                Node::Leaf(leaf) => return Some(leaf.sequence()),
                Node::Internal(internal) => {
                    self.stack.extend(internal.children.iter().rev());
                }
            }
        }
        None
    }
}
