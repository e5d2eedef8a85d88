//! The validated state machine grid.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::grammar::{Production, ProductionTable};
use crate::ids::{ProductionId, StateId, SymbolId};

/// Errors reported while assembling a [`StateMachine`].
///
/// Everything range-shaped is checked here, once; lookups on the built
/// machine are total and never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("cell ({state}, {symbol}) outside a {rows}x{columns} table")]
    CellOutOfRange {
        state: StateId,
        symbol: SymbolId,
        rows: usize,
        columns: usize,
    },

    #[error("cell ({state}, {symbol}) targets state {target}, but the table has {rows} states")]
    TargetOutOfRange {
        state: StateId,
        symbol: SymbolId,
        target: StateId,
        rows: usize,
    },

    #[error("cell ({state}, {symbol}) references production {production}, but only {count} exist")]
    UnknownProduction {
        state: StateId,
        symbol: SymbolId,
        production: ProductionId,
        count: usize,
    },

    #[error("production {production} uses symbol {symbol} outside {columns} columns")]
    SymbolOutOfColumns {
        production: ProductionId,
        symbol: SymbolId,
        columns: usize,
    },
}

/// The parsing-table artifact: a row-major `(state, symbol)` action grid
/// plus the production list reduce actions refer to.
///
/// Immutable once built. Any number of engine runs may share one machine
/// concurrently; each run owns its stacks exclusively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMachine {
    cells: Vec<Action>,
    rows: usize,
    columns: usize,
    productions: ProductionTable,
}

impl StateMachine {
    /// Action at `(state, symbol)`. Total: anything outside the grid is
    /// an [`Action::Error`], which also covers the `UNKNOWN` sentinel.
    #[inline]
    pub fn action(&self, state: StateId, symbol: SymbolId) -> Action {
        let row = state.index();
        let col = symbol.index();
        if row >= self.rows || col >= self.columns {
            return Action::Error;
        }
        self.cells[row * self.columns + col]
    }

    /// Number of states.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of distinct symbol ids (terminals + nonterminals).
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn productions(&self) -> &ProductionTable {
        &self.productions
    }

    pub fn production(&self, id: ProductionId) -> Option<&Production> {
        self.productions.get(id)
    }

    /// Rhs length of a production, i.e. how many entries its reduce pops.
    pub fn production_size(&self, id: ProductionId) -> Option<usize> {
        self.productions.get(id).map(Production::size)
    }
}

/// Assembles a [`StateMachine`], validating every range once.
///
/// All cells start as [`Action::Error`]; only the live ones need to be
/// set. Coordinates are checked at [`build`](Self::build) time so the
/// builder itself never panics.
#[derive(Clone, Debug)]
pub struct StateMachineBuilder {
    rows: usize,
    columns: usize,
    cells: Vec<(StateId, SymbolId, Action)>,
    productions: ProductionTable,
}

impl StateMachineBuilder {
    pub fn new(rows: usize, columns: usize) -> Self {
        StateMachineBuilder {
            rows,
            columns,
            cells: Vec::new(),
            productions: ProductionTable::new(),
        }
    }

    /// Record one grid entry.
    pub fn cell(&mut self, state: StateId, symbol: SymbolId, action: Action) -> &mut Self {
        self.cells.push((state, symbol, action));
        self
    }

    /// Append a production, returning the id reduce cells should carry.
    pub fn production(&mut self, lhs: SymbolId, rhs: Vec<SymbolId>) -> ProductionId {
        self.productions.push(lhs, rhs)
    }

    pub fn build(self) -> Result<StateMachine, TableError> {
        let StateMachineBuilder {
            rows,
            columns,
            cells,
            productions,
        } = self;

        for (id, production) in productions.iter() {
            let lhs = production.lhs();
            for &symbol in production.rhs().iter().chain([&lhs]) {
                if symbol.index() >= columns {
                    return Err(TableError::SymbolOutOfColumns {
                        production: id,
                        symbol,
                        columns,
                    });
                }
            }
        }

        let mut grid = vec![Action::Error; rows * columns];
        for (state, symbol, action) in cells {
            if state.index() >= rows || symbol.index() >= columns {
                return Err(TableError::CellOutOfRange {
                    state,
                    symbol,
                    rows,
                    columns,
                });
            }
            match action {
                Action::Shift(target) | Action::Goto(target) => {
                    if target.index() >= rows {
                        return Err(TableError::TargetOutOfRange {
                            state,
                            symbol,
                            target,
                            rows,
                        });
                    }
                }
                Action::Reduce(production) | Action::Accept(production) => {
                    if production.index() >= productions.len() {
                        return Err(TableError::UnknownProduction {
                            state,
                            symbol,
                            production,
                            count: productions.len(),
                        });
                    }
                }
                Action::Error => {}
            }
            grid[state.index() * columns + symbol.index()] = action;
        }

        Ok(StateMachine {
            cells: grid,
            rows,
            columns,
            productions,
        })
    }
}
