use crate::sequences::sequence::Sequence;
use crate::sequences::trie::{Insertion, SequenceTrie};

/// A set of distinct sequences.
pub trait SequenceIndex {
    fn add(&mut self, sequence: Sequence) -> Insertion;
    fn delete(&mut self, sequence: &Sequence) -> bool;
    fn contains(&self, sequence: &Sequence) -> bool;

    /// Adds every sequence, returning how many were new.
    fn add_all<I>(&mut self, items: I) -> usize
        where I: IntoIterator<Item = Sequence> {
        items.into_iter()
            .map(|x| self.add(x))
            .filter(|x| matches!(x, Insertion::Inserted { .. }))
            .count()
    }
}

impl SequenceIndex for SequenceTrie {
    fn add(&mut self, sequence: Sequence) -> Insertion {
        self.insert(sequence)
    }

    fn delete(&mut self, sequence: &Sequence) -> bool {
        self.remove(sequence)
    }

    fn contains(&self, sequence: &Sequence) -> bool {
        SequenceTrie::contains(self, sequence)
    }
}

#[cfg(test)]
mod tests {
    use crate::sequences::index::SequenceIndex;
    use crate::sequences::sequence::Sequence;
    use crate::sequences::trie::SequenceTrie;

    #[test]
    fn add_all_counts_new_sequences() {
        let words = vec!["ACGT", "AC", "ACGT", "TTT"];
        let mut index = SequenceTrie::new();
        let added = index.add_all(words.iter().map(|w| w.parse::<Sequence>().unwrap()));
        assert_eq!(added, 3);
        words.iter().for_each(|w| assert!(SequenceIndex::contains(&index, &w.parse().unwrap())));
    }

    #[test]
    fn delete_goes_through_the_trie() {
        let mut index = SequenceTrie::new();
        index.add_all(["GG", "GC"].iter().map(|w| w.parse::<Sequence>().unwrap()));
        assert!(index.delete(&"GG".parse().unwrap()));
        assert!(!index.delete(&"GG".parse().unwrap()));
        assert_eq!(index.len(), 1);
    }
}
