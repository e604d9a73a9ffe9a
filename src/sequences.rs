pub mod sequence;
pub mod index;
pub mod trie;
