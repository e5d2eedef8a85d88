//! Errors surfaced by engine runs.

use std::error::Error;
use std::fmt;

use crate::token::Token;

/// Contract violations by the caller: an accessor invoked outside the
/// state it is defined in. Surfaced immediately, never tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("parser is not in a reduce state")]
    NotReducing,

    #[error("rhs index {index} out of range for a production of size {size}")]
    DollarOutOfRange { index: usize, size: usize },
}

/// A run that ended in the error action.
///
/// Carries the token the table had no action for — the `UNKNOWN` id when
/// the lexer itself failed, an ordinary id for a plain syntax error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError<P> {
    pub token: Token<P>,
}

impl<P> fmt::Display for ParseError<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error at symbol {}", self.token.id)
    }
}

impl<P: fmt::Debug> Error for ParseError<P> {}
