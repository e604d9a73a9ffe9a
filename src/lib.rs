//! A five-way branching trie over DNA sequences.
//!
//! Sequences over {A, C, G, T} are stored one per leaf. An internal node at
//! depth `d` branches on the symbol at position `d`, or on a terminator slot
//! when the sequence is exhausted. Leaves only split when a second sequence
//! arrives on the same path, so a leaf sits at the first depth where it
//! differs from every other stored sequence.
//!
//! ```
//! use dna_trie::sequences::trie::{Insertion, SequenceTrie};
//!
//! let mut trie = SequenceTrie::new();
//! assert_eq!(trie.insert("ACGT".parse().unwrap()), Insertion::Inserted { level: 0 });
//! assert_eq!(trie.insert("AT".parse().unwrap()), Insertion::Inserted { level: 2 });
//! assert!(trie.contains(&"AT".parse().unwrap()));
//! ```

pub mod alphabet;
pub mod driver;
pub mod error;
pub mod sequences;
