//! Longest-match checkpoint for grammar search.

use prosek_table::{Action, StateId};

use crate::source::TokenSource;
use crate::token::Token;

/// The most recent configuration from which a speculative run could
/// still legally reach completion: everything needed to resume with the
/// lookahead pinned to end-of-input.
///
/// Spans, captures, and the hit flag are snapshotted along with the
/// stack so a fallback replay reports only reductions at or before this
/// point — never material the run consumed past it.
pub(crate) struct Checkpoint<S: TokenSource> {
    /// State stack as of the checkpointing shift, target included.
    pub stack: Vec<StateId>,
    /// The shifted-to state's EOI-column entry (known non-error).
    pub entry: Action,
    /// Source positioned at the first unconsumed token.
    pub src: S,
    pub spans: Vec<Token<S::Pos>>,
    pub captures: Vec<Vec<(S::Pos, S::Pos)>>,
    pub hit: bool,
}
