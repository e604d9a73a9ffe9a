use std::fmt::{Display, Formatter};
use std::str::FromStr;

use delegate::delegate;
use serde::{Serialize, Serializer};

use crate::alphabet::{Key, Symbol, EXACT_MARKER};
use crate::error::SequenceError;

/// An ordered run of nucleotide symbols. May be empty when built from
/// symbols directly; parsing from text requires at least one symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence(Vec<Symbol>);

impl Sequence {
    pub fn new(symbols: Vec<Symbol>) -> Sequence {
        Sequence(symbols)
    }

    delegate! {
        to self.0 {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, Symbol>;
            pub fn get(&self, idx: usize) -> Option<&Symbol>;
            pub fn starts_with(&self, needle: &[Symbol]) -> bool;
        }
    }

    /// The branch key for this sequence at `depth`.
    pub fn key_at(&self, depth: usize) -> Key {
        self.get(depth).map_or(Key::Terminator, |&s| Key::Symbol(s))
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Occurrences of each symbol, indexed in alphabet order.
    pub fn counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        self.iter().for_each(|s| counts[s.idx()] += 1);
        counts
    }
}

fn parse_symbols(s: &str) -> Result<Vec<Symbol>, SequenceError> {
    if s.is_empty() {
        return Err(SequenceError::Empty);
    }
    s.chars()
        .enumerate()
        .map(|(position, symbol)| {
            Symbol::from_char(symbol).ok_or(SequenceError::InvalidSymbol { symbol, position })
        })
        .collect()
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_symbols(s).map(Sequence)
    }
}

impl From<Vec<Symbol>> for Sequence {
    fn from(symbols: Vec<Symbol>) -> Self {
        Sequence(symbols)
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.iter().try_for_each(|s| write!(f, "{}", s))
    }
}

impl Serialize for Sequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.collect_str(self)
    }
}

/// A search request: a prefix query, or an exact query when written with a
/// trailing `$`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    symbols: Vec<Symbol>,
    exact: bool,
}

impl Pattern {
    pub fn prefix(symbols: Vec<Symbol>) -> Pattern {
        Pattern { symbols, exact: false }
    }

    pub fn exact(symbols: Vec<Symbol>) -> Pattern {
        Pattern { symbols, exact: true }
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether `sequence` satisfies this pattern on its own.
    pub fn matches(&self, sequence: &Sequence) -> bool {
        if self.exact {
            sequence.symbols() == self.symbols()
        } else {
            sequence.starts_with(self.symbols())
        }
    }
}

impl FromStr for Pattern {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_suffix(EXACT_MARKER) {
            Some(body) => parse_symbols(body).map(Pattern::exact),
            None => parse_symbols(s).map(Pattern::prefix),
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.symbols.iter().try_for_each(|s| write!(f, "{}", s))?;
        if self.exact {
            write!(f, "{}", EXACT_MARKER)?;
        }
        Ok(())
    }
}

impl Serialize for Pattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.collect_str(self)
    }
}
