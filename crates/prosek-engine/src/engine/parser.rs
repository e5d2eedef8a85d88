//! The shift/reduce automaton.

use prosek_table::{Action, ProductionId, StateId, StateMachine, SymbolId};

use crate::source::TokenSource;
use crate::token::Token;

use super::error::UsageError;
use super::trace::{NoopTracer, Tracer};

/// Executes one parsing table against one token stream.
///
/// The machine is shared and read-only; the parser owns the run state:
/// the state stack (bottom = state 0, never empty while running), the
/// pending lookahead symbol, and the pending table entry. `parse`,
/// `next`, and `next_with_spans` apply identical per-action semantics
/// and differ only in looping and span bookkeeping.
///
/// The pending entry is the action *about to be* executed: accessors
/// like [`dollar`](Self::dollar) and [`reduce_id`](Self::reduce_id) read
/// a reduce's children between observing the entry and stepping it.
pub struct Parser<'sm> {
    sm: &'sm StateMachine,
    stack: Vec<StateId>,
    lookahead: SymbolId,
    entry: Action,
}

impl<'sm> Parser<'sm> {
    pub fn new(sm: &'sm StateMachine) -> Self {
        Parser {
            sm,
            stack: Vec::new(),
            lookahead: SymbolId::UNKNOWN,
            entry: Action::Error,
        }
    }

    /// Prime a fresh run: stack `[0]`, entry for the current token.
    ///
    /// An `UNKNOWN` token (lexer failure) primes the error entry — the
    /// `UNKNOWN` column is outside every table — so the run is over
    /// before it starts, with the sentinel as the reported symbol.
    pub fn init<S: TokenSource>(&mut self, src: &S) {
        self.stack.clear();
        self.stack.push(StateId::INITIAL);
        self.lookahead = src.current().id;
        self.entry = self.sm.action(StateId::INITIAL, self.lookahead);
    }

    /// Reset run state for reuse. [`init`](Self::init) must run before
    /// the next parse.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.lookahead = SymbolId::UNKNOWN;
        self.entry = Action::Error;
    }

    /// The pending table entry.
    #[inline]
    pub fn action(&self) -> Action {
        self.entry
    }

    /// The pending lookahead symbol (`UNKNOWN` after a lexer failure).
    #[inline]
    pub fn lookahead(&self) -> SymbolId {
        self.lookahead
    }

    /// The state stack, bottom first.
    pub fn stack(&self) -> &[StateId] {
        &self.stack
    }

    /// The shared table this parser runs against.
    #[inline]
    pub fn machine(&self) -> &'sm StateMachine {
        self.sm
    }

    /// Rhs length of a production, i.e. how many entries its reduce
    /// pops. `None` for an id the table does not define.
    pub fn production_size(&self, id: ProductionId) -> Option<usize> {
        self.sm.production_size(id)
    }

    /// Run the action loop to completion: accept (true) or error
    /// (false).
    pub fn parse<S: TokenSource>(&mut self, src: &mut S) -> bool {
        self.parse_with(src, &mut NoopTracer)
    }

    /// As [`parse`](Self::parse), reporting every transition to the
    /// tracer.
    pub fn parse_with<S: TokenSource, T: Tracer>(&mut self, src: &mut S, tracer: &mut T) -> bool {
        loop {
            match self.entry {
                Action::Error => {
                    let state = self.stack.last().copied().unwrap_or(StateId::INITIAL);
                    tracer.trace_error(state, self.lookahead);
                    return false;
                }
                Action::Accept(_) => {
                    self.step(src, None, tracer);
                    return matches!(self.entry, Action::Accept(_));
                }
                _ => self.step(src, None, tracer),
            }
        }
    }

    /// Execute exactly one transition, no span bookkeeping.
    pub fn next<S: TokenSource>(&mut self, src: &mut S) {
        self.step(src, None, &mut NoopTracer);
    }

    /// Execute exactly one transition, maintaining the production-span
    /// stack.
    ///
    /// `spans` must accompany the run from `init` onward: a shift pushes
    /// the consumed token, a reduce replaces its children with the
    /// synthesized production span, accept pops the final rhs.
    pub fn next_with_spans<S: TokenSource>(&mut self, src: &mut S, spans: &mut Vec<Token<S::Pos>>) {
        self.step(src, Some(spans), &mut NoopTracer);
    }

    /// Span of the `index`-th rhs symbol (0-based) of the pending
    /// reduce.
    ///
    /// Defined only while the pending entry is a reduce; anywhere else
    /// is a caller bug, reported as [`UsageError::NotReducing`].
    pub fn dollar<'a, P>(
        &self,
        index: usize,
        spans: &'a [Token<P>],
    ) -> Result<&'a Token<P>, UsageError> {
        let Action::Reduce(production) = self.entry else {
            return Err(UsageError::NotReducing);
        };
        let size = self.sm.production_size(production).unwrap_or(0);
        if index >= size {
            return Err(UsageError::DollarOutOfRange { index, size });
        }
        Ok(&spans[spans.len() - size + index])
    }

    /// Production id of the pending reduce.
    pub fn reduce_id(&self) -> Result<ProductionId, UsageError> {
        match self.entry {
            Action::Reduce(production) => Ok(production),
            _ => Err(UsageError::NotReducing),
        }
    }

    fn step<S: TokenSource, T: Tracer>(
        &mut self,
        src: &mut S,
        mut spans: Option<&mut Vec<Token<S::Pos>>>,
        tracer: &mut T,
    ) {
        match self.entry {
            Action::Error => {}

            Action::Shift(target) => {
                tracer.trace_shift(target, self.lookahead);
                self.stack.push(target);
                if let Some(spans) = spans.as_deref_mut() {
                    spans.push(src.current());
                }
                // At end of input the source already yields EOI forever;
                // advancing would read past the caller's range.
                if self.lookahead != SymbolId::EOI {
                    src.advance();
                }
                self.lookahead = src.current().id;
                self.entry = self.sm.action(target, self.lookahead);
            }

            Action::Reduce(production) => {
                let Some(rule) = self.sm.production(production) else {
                    self.entry = Action::Error;
                    return;
                };
                let size = rule.size();
                if size + 1 > self.stack.len() {
                    // Inconsistent table: the reduce would pop the
                    // initial state. Halt instead of corrupting state.
                    self.entry = Action::Error;
                    return;
                }
                tracer.trace_reduce(production, rule.lhs(), size);
                if let Some(spans) = spans.as_deref_mut() {
                    debug_assert!(spans.len() >= size, "span stack out of step with the run");
                    let merged = if size > 0 {
                        let first = &spans[spans.len() - size];
                        let last = &spans[spans.len() - 1];
                        Token::new(rule.lhs(), first.start.clone(), last.end.clone())
                    } else {
                        // Epsilon: zero-width at the current token.
                        let at = src.current().start;
                        Token::new(rule.lhs(), at.clone(), at)
                    };
                    spans.truncate(spans.len() - size);
                    spans.push(merged);
                }
                self.stack.truncate(self.stack.len() - size);
                self.lookahead = rule.lhs();
                self.entry = self.sm.action(self.top(), self.lookahead);
            }

            Action::Goto(target) => {
                tracer.trace_goto(target);
                self.stack.push(target);
                // Back to dispatching on the input, not the lhs.
                self.lookahead = src.current().id;
                self.entry = self.sm.action(target, self.lookahead);
            }

            Action::Accept(production) => {
                let Some(rule) = self.sm.production(production) else {
                    self.entry = Action::Error;
                    return;
                };
                let size = rule.size();
                if size >= self.stack.len() {
                    self.entry = Action::Error;
                    return;
                }
                tracer.trace_accept(production);
                if let Some(spans) = spans.as_deref_mut() {
                    spans.truncate(spans.len().saturating_sub(size));
                }
                self.stack.truncate(self.stack.len() - size);
                // Entry stays Accept: the run is complete.
            }
        }
    }

    #[inline]
    fn top(&self) -> StateId {
        *self
            .stack
            .last()
            .expect("state stack is never empty while running")
    }
}
