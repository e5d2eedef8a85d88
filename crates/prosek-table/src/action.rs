//! Table cell actions.

use serde::{Deserialize, Serialize};

use crate::ids::{ProductionId, StateId};

/// One cell of the parsing table.
///
/// The table is assumed conflict-free: each `(state, symbol)` cell holds
/// exactly one action, so the engine never backtracks during a plain
/// parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// No legal continuation. The default for every unset cell.
    Error,
    /// Consume the lookahead and push the target state.
    Shift(StateId),
    /// Pop the production's rhs and re-dispatch on its lhs.
    Reduce(ProductionId),
    /// Taken on a nonterminal lookahead right after a reduce.
    Goto(StateId),
    /// Input recognized. Carries the start production, whose rhs length
    /// tells the engine how many stack entries to finally pop.
    Accept(ProductionId),
}

impl Action {
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Action::Error)
    }

    #[inline]
    pub fn is_reduce(self) -> bool {
        matches!(self, Action::Reduce(_))
    }
}
