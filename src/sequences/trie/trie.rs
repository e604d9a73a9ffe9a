use serde::Serialize;

use crate::sequences::sequence::Sequence;
use crate::sequences::trie::iterators::Sequences;
use crate::sequences::trie::node::{Leaf, Node};

/// Result of inserting a sequence.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Insertion {
    /// Stored; `level` is the depth of the new leaf.
    Inserted { level: usize },
    /// Already present, nothing changed.
    Duplicate,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceTrie {
    pub(crate) root: Node,
    len: usize,
}

impl SequenceTrie {
    pub fn new() -> SequenceTrie {
        SequenceTrie { root: Node::Empty, len: 0 }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of stored sequences.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn sequences(&self) -> Sequences<'_> {
        Sequences::new(&self.root)
    }

    pub fn contains(&self, sequence: &Sequence) -> bool {
        let mut current = &self.root;
        loop {
            match current {
                Node::Empty => return false,
                Node::Leaf(leaf) => return leaf.sequence == *sequence,
                Node::Internal(internal) => current = internal.child(sequence.key_at(internal.depth)),
            }
        }
    }

    pub fn insert(&mut self, sequence: Sequence) -> Insertion {
        tracing::trace!(%sequence, "insert");
        let result = self.root.insert(sequence, 0);
        if let Insertion::Inserted { .. } = result {
            self.len += 1;
        }
        result
    }

    /// Removes `sequence` if present, collapsing any internal node left
    /// holding a single leaf on the way back up.
    pub fn remove(&mut self, sequence: &Sequence) -> bool {
        tracing::trace!(%sequence, "remove");
        let removed = self.root.remove(sequence);
        if removed {
            self.len -= 1;
        }
        removed
    }
}

impl Node {
    /// `depth` is the depth a leaf placed in this slot would have.
    fn insert(&mut self, sequence: Sequence, depth: usize) -> Insertion {
        match self {
            Node::Empty => {
                *self = Node::Leaf(Leaf::new(sequence, depth));
                Insertion::Inserted { level: depth }
            }
            Node::Leaf(leaf) if leaf.sequence == sequence => Insertion::Duplicate,
            Node::Leaf(_) => {
                self.split();
                self.insert(sequence, depth)
            }
            Node::Internal(internal) => {
                let depth = internal.depth;
                internal.child_mut(sequence.key_at(depth)).insert(sequence, depth + 1)
            }
        }
    }

    fn remove(&mut self, sequence: &Sequence) -> bool {
        match self {
            Node::Empty => false,
            Node::Leaf(leaf) => {
                let found = leaf.sequence == *sequence;
                if found {
                    *self = Node::Empty;
                }
                found
            }
            Node::Internal(internal) => {
                let key = sequence.key_at(internal.depth);
                let removed = internal.child_mut(key).remove(sequence);
                if removed {
                    self.collapse();
                }
                removed
            }
        }
    }
}

impl Extend<Sequence> for SequenceTrie {
    fn extend<I: IntoIterator<Item=Sequence>>(&mut self, iter: I) {
        iter.into_iter().for_each(|s| { let _ = self.insert(s); });
    }
}

impl FromIterator<Sequence> for SequenceTrie {
    fn from_iter<I: IntoIterator<Item=Sequence>>(iter: I) -> Self {
        let mut trie = SequenceTrie::new();
        trie.extend(iter);
        trie
    }
}


#[cfg(test)]
mod tests {
    use crate::alphabet::{Key, Symbol};
    use crate::sequences::sequence::Sequence;
    use crate::sequences::trie::node::{Leaf, Node};
    use crate::sequences::trie::trie::{Insertion, SequenceTrie};

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    fn trie_of(words: &[&str]) -> SequenceTrie {
        words.iter().map(|w| seq(w)).collect()
    }

    #[test]
    fn first_insert_lands_at_root() {
        let mut trie = SequenceTrie::new();
        assert_eq!(trie.insert(seq("ACGT")), Insertion::Inserted { level: 0 });
        assert_eq!(trie.root(), &Node::Leaf(Leaf::new(seq("ACGT"), 0)));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn inserts_report_leaf_depth() {
        let mut trie = SequenceTrie::new();
        assert_eq!(trie.insert(seq("AC")), Insertion::Inserted { level: 0 });
        assert_eq!(trie.insert(seq("GT")), Insertion::Inserted { level: 1 });
        assert_eq!(trie.insert(seq("ACG")), Insertion::Inserted { level: 3 });
        assert_eq!(trie.insert(seq("ACT")), Insertion::Inserted { level: 3 });
        assert_eq!(trie.insert(seq("T")), Insertion::Inserted { level: 1 });
        assert_eq!(trie.len(), 5);
    }

    #[test]
    fn split_pushes_existing_leaf_down() {
        let trie = trie_of(&["AC", "ACG"]);
        let Node::Internal(root) = trie.root() else { panic!("root should branch") };
        let Node::Internal(a) = root.child(Key::Symbol(Symbol::A)) else { panic!("A should branch") };
        let Node::Internal(c) = a.child(Key::Symbol(Symbol::C)) else { panic!("AC should branch") };
        assert_eq!(c.depth(), 2);
        assert_eq!(c.child(Key::Terminator), &Node::Leaf(Leaf::new(seq("AC"), 3)));
        assert_eq!(c.child(Key::Symbol(Symbol::G)), &Node::Leaf(Leaf::new(seq("ACG"), 3)));
    }

    #[test]
    fn duplicate_insert_changes_nothing() {
        let mut trie = trie_of(&["AC", "ACG", "T"]);
        let before = trie.clone();
        assert_eq!(trie.insert(seq("ACG")), Insertion::Duplicate);
        assert_eq!(trie.insert(seq("T")), Insertion::Duplicate);
        assert_eq!(trie, before);

        let mut single = trie_of(&["GATTACA"]);
        assert_eq!(single.insert(seq("GATTACA")), Insertion::Duplicate);
        assert_eq!(single, trie_of(&["GATTACA"]));
    }

    #[test]
    fn contains_only_stored_sequences() {
        let trie = trie_of(&["AC", "ACG", "ACT", "GT"]);
        for s in ["AC", "ACG", "ACT", "GT"] {
            assert!(trie.contains(&seq(s)), "{} should be present", s);
        }
        for s in ["A", "ACGT", "G", "GTA", "T"] {
            assert!(!trie.contains(&seq(s)), "{} should be absent", s);
        }
    }

    #[test]
    fn removing_sibling_collapses_to_single_leaf() {
        let mut trie = trie_of(&["AC", "GT"]);
        assert!(trie.remove(&seq("GT")));
        assert_eq!(trie, trie_of(&["AC"]));
        assert_eq!(trie.root(), &Node::Leaf(Leaf::new(seq("AC"), 0)));
    }

    #[test]
    fn collapse_cascades_through_leaf_only_chains() {
        let mut trie = trie_of(&["AC", "ACG", "ACT"]);
        assert!(trie.remove(&seq("ACT")));
        assert!(trie.remove(&seq("ACG")));
        assert_eq!(trie.root(), &Node::Leaf(Leaf::new(seq("AC"), 0)));
    }

    #[test]
    fn sole_internal_child_is_not_collapsed() {
        let mut trie = trie_of(&["AA", "AC", "G"]);
        assert!(trie.remove(&seq("G")));
        let Node::Internal(root) = trie.root() else { panic!("root should stay internal") };
        assert_eq!(root.occupied(), 1);
        assert!(matches!(root.child(Key::Symbol(Symbol::A)), Node::Internal(_)));
        assert!(trie.contains(&seq("AA")));
        assert!(trie.contains(&seq("AC")));
    }

    #[test]
    fn remove_missing_leaves_tree_untouched() {
        let mut trie = trie_of(&["AC", "ACG", "GT"]);
        let before = trie.clone();
        assert!(!trie.remove(&seq("ACGT")));
        assert!(!trie.remove(&seq("A")));
        assert!(!trie.remove(&seq("TTT")));
        assert_eq!(trie, before);

        let mut empty = SequenceTrie::new();
        assert!(!empty.remove(&seq("A")));
    }

    #[test]
    fn remove_last_sequence_empties_tree() {
        let mut trie = trie_of(&["CAT"]);
        assert!(trie.remove(&seq("CAT")));
        assert!(trie.is_empty());
        assert_eq!(trie.root(), &Node::Empty);
    }

    #[test]
    fn empty_length_sequence_uses_terminator_slot() {
        let mut trie = trie_of(&["A"]);
        assert_eq!(trie.insert(Sequence::default()), Insertion::Inserted { level: 1 });
        let Node::Internal(root) = trie.root() else { panic!("root should branch") };
        assert_eq!(root.child(Key::Terminator), &Node::Leaf(Leaf::new(Sequence::default(), 1)));
        assert!(trie.remove(&Sequence::default()));
        assert_eq!(trie, trie_of(&["A"]));
    }

    #[test]
    fn sequences_follow_key_order() {
        let trie = trie_of(&["T", "ACT", "AC", "ACG", "GA"]);
        let listed: Vec<String> = trie.sequences().map(|s| s.to_string()).collect();
        assert_eq!(listed, vec!["ACG", "ACT", "AC", "GA", "T"]);
    }
}
