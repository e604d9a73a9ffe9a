pub mod trie;
pub mod node;
pub mod search;
pub mod print;
pub mod printconfig;
pub mod iterators;

pub use node::{Internal, Leaf, Node};
pub use printconfig::PrintOptions;
pub use search::{SearchOutcome, SearchReport};
pub use trie::{Insertion, SequenceTrie};
