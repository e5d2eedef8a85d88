#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime engine for prosek parsing tables.
//!
//! Drives the shift/reduce/goto automaton against a classified token
//! stream: whole-input recognition, stepwise execution with
//! production-span tracking for semantic actions, and grammar search —
//! locating occurrences of target productions anywhere inside an
//! unbounded stream.
//!
//! Tables come from `prosek-table`; this crate never builds or mutates
//! one. Every engine run borrows the table read-only and owns its run
//! state exclusively, so independent runs may share a table across
//! threads.

pub mod engine;
mod lexer;
mod rules;
mod source;
mod token;

pub use engine::{
    NoopTracer, ParseError, Parser, PrintTracer, Reduction, Reductions, SearchMatch,
    SearchMatches, Tracer, UsageError, search,
};
pub use lexer::tokenize;
pub use rules::{GrammarReadError, RuleBuilder};
pub use source::{SliceSource, TokenSource};
pub use token::{Token, token_text};
