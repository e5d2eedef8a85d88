//! The automaton engine and its adapters.
//!
//! [`Parser`] executes the shift/reduce/goto cycle; [`Reductions`]
//! presents one parse as a lazy sequence of semantic-action points;
//! [`search()`] and [`SearchMatches`] locate grammar occurrences inside
//! longer streams.

mod checkpoint;
mod error;
mod iter;
mod parser;
mod search;
mod search_iter;
mod trace;

#[cfg(test)]
pub(crate) mod test_grammars;

#[cfg(test)]
mod parser_tests;

pub use error::{ParseError, UsageError};
pub use iter::{Reduction, Reductions};
pub use parser::Parser;
pub use search::{SearchMatch, search};
pub use search_iter::SearchMatches;
pub use trace::{NoopTracer, PrintTracer, Tracer};
