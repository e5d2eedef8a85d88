//! Tokens and production spans.
//!
//! A token never owns text: it carries a symbol id plus a half-open
//! `start..end` span over caller-owned input positions. Positions are
//! opaque to the engine — only cloned and compared — so the caller's
//! input must outlive every span the engine hands back.

use prosek_table::SymbolId;

/// A classified token, or a production span synthesized from one.
///
/// Production spans reuse this shape: the id is the production's lhs and
/// the span is the union of the reduced children's spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<P> {
    pub id: SymbolId,
    pub start: P,
    pub end: P,
}

impl<P> Token<P> {
    pub fn new(id: SymbolId, start: P, end: P) -> Self {
        Token { id, start, end }
    }

    /// The `(start, end)` pair, detached from the id.
    pub fn span(&self) -> (P, P)
    where
        P: Clone,
    {
        (self.start.clone(), self.end.clone())
    }
}

/// Text of a byte-offset token. O(1) slice into the source.
pub fn token_text<'s>(source: &'s str, token: &Token<usize>) -> &'s str {
    &source[token.start..token.end]
}
