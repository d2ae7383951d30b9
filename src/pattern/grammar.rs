//! The fixed symbol alphabet of a pattern.

use phf::{Map, phf_map};

/// One element of a tokenized pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Literal(char),
    Wildcard, // .
    Star,     // *
    Bar,      // |
    Open,     // (
    Close,    // )
}

const CONTROL_SYMBOLS: Map<char, Symbol> = phf_map! {
    '.' => Symbol::Wildcard,
    '*' => Symbol::Star,
    '|' => Symbol::Bar,
    '(' => Symbol::Open,
    ')' => Symbol::Close,
};

impl Symbol {
    /// Classify a pattern character.
    pub fn from_char(ch: char) -> Self {
        CONTROL_SYMBOLS
            .get(&ch)
            .copied()
            .unwrap_or(Symbol::Literal(ch))
    }

    pub fn is_paren(self) -> bool {
        matches!(self, Symbol::Open | Symbol::Close)
    }
}
