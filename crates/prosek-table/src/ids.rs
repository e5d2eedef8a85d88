//! Newtyped indices into the parsing-table artifact.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Terminal or nonterminal identifier; a column of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(u16);

impl SymbolId {
    /// End-of-input marker. Column 0 of every table.
    pub const EOI: SymbolId = SymbolId(0);

    /// Lexer-failure sentinel. Never a valid column.
    pub const UNKNOWN: SymbolId = SymbolId(u16::MAX);

    #[inline]
    pub const fn new(raw: u16) -> Self {
        SymbolId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Automaton state index; a row of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateId(u16);

impl StateId {
    /// The initial state at the bottom of every parse stack.
    pub const INITIAL: StateId = StateId(0);

    #[inline]
    pub const fn new(raw: u16) -> Self {
        StateId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index into the production list. Reduce actions carry one, and it is
/// the dispatch key for semantic actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductionId(u16);

impl ProductionId {
    #[inline]
    pub const fn new(raw: u16) -> Self {
        ProductionId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ProductionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
