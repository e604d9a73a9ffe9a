use std::fmt::{Display, Formatter};

use crate::alphabet::{Symbol, ALPHABET};
use crate::sequences::sequence::Sequence;
use crate::sequences::trie::node::Node;
use crate::sequences::trie::printconfig::{Annotation, PrintOptions};
use crate::sequences::trie::trie::SequenceTrie;

const INDENT: &str = "  ";

/// Share of each nucleotide in a sequence, as percentages.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SymbolFrequencies([f64; ALPHABET.len()]);

impl SymbolFrequencies {
    pub fn of(sequence: &Sequence) -> SymbolFrequencies {
        let len = sequence.len();
        let mut freqs = [0.0; ALPHABET.len()];
        if len > 0 {
            freqs.iter_mut()
                .zip(sequence.counts())
                .for_each(|(f, count)| *f = 100.0 * count as f64 / len as f64);
        }
        SymbolFrequencies(freqs)
    }

    pub fn get(&self, symbol: Symbol) -> f64 {
        self.0[symbol.idx()]
    }
}

impl Display for SymbolFrequencies {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = Symbol::ALL.iter()
            .map(|&s| format!("{}({:.2})", s, self.get(s)))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl Node {
    /// Preorder walk handing each node its display depth. `depth` is used
    /// for `Empty` nodes, which have none of their own.
    pub(crate) fn traverse_prefix<F>(&self, depth: usize, f: &mut F)
        where F: FnMut(&Node, usize) {
        let depth = self.depth().unwrap_or(depth);
        f(self, depth);
        if let Node::Internal(internal) = self {
            for (_, child) in &**internal {
                child.traverse_prefix(depth + 1, f);
            }
        }
    }
}

fn render(node: &Node, depth: usize, annotation: Annotation) -> String {
    let mut line = INDENT.repeat(depth);
    match node {
        Node::Empty => line.push('E'),
        Node::Internal(_) => line.push('I'),
        Node::Leaf(leaf) => {
            line.push_str(&leaf.sequence.to_string());
            match annotation {
                Annotation::None => {}
                Annotation::Length => line.push_str(&format!(": length {}", leaf.sequence.len())),
                Annotation::Stats => line.push_str(&format!(": {}", SymbolFrequencies::of(&leaf.sequence))),
            }
        }
    }
    line
}

impl SequenceTrie {
    /// One line per node in preorder, indented two spaces per level.
    pub fn print(&self, options: &PrintOptions) -> String {
        let annotation = options.annotation();
        let mut lines = vec![];
        self.root.traverse_prefix(0, &mut |node, depth| lines.push(render(node, depth, annotation)));
        lines.join("\n")
    }
}
