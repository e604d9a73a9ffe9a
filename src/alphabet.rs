use std::fmt::{Display, Formatter};
use serde::Serialize;

pub const ALPHABET: &[u8] = "ACGT".as_bytes();

/// Number of child slots on an internal node: one per symbol plus the terminator.
pub const BRANCHES: usize = ALPHABET.len() + 1;

/// Marks the end of an exact-match search pattern.
pub const EXACT_MARKER: char = '$';

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Symbol {
    A,
    C,
    G,
    T,
}

impl Symbol {
    pub const ALL: [Symbol; 4] = [Symbol::A, Symbol::C, Symbol::G, Symbol::T];

    pub fn from_char(c: char) -> Option<Symbol> {
        get_idx(c).map(|idx| Symbol::ALL[idx])
    }

    pub fn as_char(self) -> char {
        ALPHABET[self.idx()] as char
    }

    pub fn idx(self) -> usize {
        self as usize
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A branch key: the symbol at some depth of a sequence, or the terminator
/// once the sequence is exhausted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Symbol(Symbol),
    Terminator,
}

impl Key {
    /// Slot order used by every traversal.
    pub const ORDER: [Key; BRANCHES] = [
        Key::Symbol(Symbol::A),
        Key::Symbol(Symbol::C),
        Key::Symbol(Symbol::G),
        Key::Symbol(Symbol::T),
        Key::Terminator,
    ];

    pub fn idx(self) -> usize {
        match self {
            Key::Symbol(s) => s.idx(),
            Key::Terminator => ALPHABET.len(),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Key::Symbol(s) => s.as_char(),
            Key::Terminator => 'E',
        }
    }
}

impl From<Symbol> for Key {
    fn from(s: Symbol) -> Self {
        Key::Symbol(s)
    }
}

pub fn get_idx(a: char) -> Option<usize> {
    ALPHABET.iter().position(|&x| x as char == a)
}

pub fn normalize(s: &str) -> String {
    s.to_ascii_uppercase()
}
