use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::alphabet::Key;
use crate::sequences::sequence::{Pattern, Sequence};
use crate::sequences::trie::node::{Internal, Node};
use crate::sequences::trie::trie::SequenceTrie;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchOutcome {
    NotFound,
    Found { sequence: Sequence },
    /// Every stored sequence under the prefix, in key order.
    Matches { sequences: Vec<Sequence> },
}

/// What a search found and how many nodes it touched getting there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub visited: usize,
    pub outcome: SearchOutcome,
}

impl SearchReport {
    fn new(visited: usize, outcome: SearchOutcome) -> SearchReport {
        SearchReport { visited, outcome }
    }

    /// Matched sequences, whichever way they were found.
    pub fn sequences(&self) -> Vec<&Sequence> {
        match &self.outcome {
            SearchOutcome::NotFound => vec![],
            SearchOutcome::Found { sequence } => vec![sequence],
            SearchOutcome::Matches { sequences } => sequences.iter().collect(),
        }
    }

    pub fn is_found(&self) -> bool {
        !self.sequences().is_empty()
    }
}

impl Display for SearchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Number of nodes visited: {}", self.visited)?;
        let found = self.sequences();
        if found.is_empty() {
            write!(f, "\nNo sequence found")
        } else {
            found.iter().try_for_each(|s| write!(f, "\nSequence: {}", s))
        }
    }
}

fn leaf_match(node: &Node, pattern: &Pattern) -> SearchOutcome {
    match node {
        Node::Leaf(leaf) if pattern.matches(&leaf.sequence) => {
            SearchOutcome::Found { sequence: leaf.sequence.clone() }
        }
        _ => SearchOutcome::NotFound,
    }
}

impl SequenceTrie {
    /// Exact lookup for patterns ending in `$`, prefix lookup otherwise.
    pub fn search(&self, pattern: &Pattern) -> SearchReport {
        tracing::trace!(%pattern, "search");
        let mut visited = 1;

        let mut focus = match &self.root {
            Node::Empty => return SearchReport::new(visited, SearchOutcome::NotFound),
            Node::Leaf(_) => return SearchReport::new(visited, leaf_match(&self.root, pattern)),
            Node::Internal(internal) => &**internal,
        };

        // Descend while the next slot along the pattern is another branch.
        let mut consumed = 0;
        for &symbol in pattern.symbols() {
            match focus.child(Key::Symbol(symbol)) {
                Node::Internal(child) => focus = &**child,
                _ => break,
            }
            consumed += 1;
            visited += 1;
        }

        let key = pattern.symbols().get(consumed).map_or(Key::Terminator, |&s| Key::Symbol(s));
        if pattern.is_exact() || key != Key::Terminator {
            visited += 1;
            return SearchReport::new(visited, leaf_match(focus.child(key), pattern));
        }

        let mut sequences = vec![];
        visited += focus.collect_leaves(&mut sequences) - 1;
        SearchReport::new(visited, SearchOutcome::Matches { sequences })
    }
}

impl Internal {
    /// Gathers every leaf below this node in key order, returning the number
    /// of nodes walked including this one and every empty slot.
    fn collect_leaves(&self, out: &mut Vec<Sequence>) -> usize {
        let mut visited = 1;
        for (_, child) in self {
            visited += match child {
                Node::Empty => 1,
                Node::Leaf(leaf) => {
                    out.push(leaf.sequence.clone());
                    1
                }
                Node::Internal(internal) => internal.collect_leaves(out),
            };
        }
        visited
    }
}
