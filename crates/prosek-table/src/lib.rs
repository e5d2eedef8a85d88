#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Parsing-table artifact model for the prosek runtime.
//!
//! A table is built externally (by a generator, or by hand for small
//! grammars) and consumed read-only by any number of engine instances:
//! a rectangular `(state, symbol)` grid of [`Action`] cells plus the
//! index-stable production list that reduce actions refer to.
//!
//! All indices are newtypes ([`StateId`], [`SymbolId`], [`ProductionId`])
//! so a state cannot be used where a symbol is expected. Ranges are
//! validated once, when [`StateMachineBuilder::build`] assembles the
//! artifact — lookups afterwards are total and unchecked.

mod action;
mod grammar;
mod ids;
mod machine;

pub use action::Action;
pub use grammar::{Production, ProductionTable};
pub use ids::{ProductionId, StateId, SymbolId};
pub use machine::{StateMachine, StateMachineBuilder, TableError};
