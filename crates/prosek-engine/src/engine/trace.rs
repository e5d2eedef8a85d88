//! Execution tracing.
//!
//! Zero-cost by default: [`NoopTracer`]'s hooks are `#[inline(always)]`
//! empty bodies the compiler erases, so nothing trace-shaped survives in
//! a plain `parse`. A tracer owns whatever state it needs; the engine
//! keeps none.

use prosek_table::{ProductionId, StateId, SymbolId};

/// Per-transition hooks, called with data the engine already has in
/// hand. Formatting and name resolution belong to the implementation.
pub trait Tracer {
    /// A shift consumed `symbol` and pushed `target`.
    fn trace_shift(&mut self, target: StateId, symbol: SymbolId);

    /// A reduce popped `size` entries and re-dispatched on `lhs`.
    fn trace_reduce(&mut self, production: ProductionId, lhs: SymbolId, size: usize);

    /// A goto pushed `target`.
    fn trace_goto(&mut self, target: StateId);

    /// The run accepted through the given start production.
    fn trace_accept(&mut self, production: ProductionId);

    /// The run halted: no action at `(state, symbol)`.
    fn trace_error(&mut self, state: StateId, symbol: SymbolId);
}

/// Discards everything.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_shift(&mut self, _target: StateId, _symbol: SymbolId) {}

    #[inline(always)]
    fn trace_reduce(&mut self, _production: ProductionId, _lhs: SymbolId, _size: usize) {}

    #[inline(always)]
    fn trace_goto(&mut self, _target: StateId) {}

    #[inline(always)]
    fn trace_accept(&mut self, _production: ProductionId) {}

    #[inline(always)]
    fn trace_error(&mut self, _state: StateId, _symbol: SymbolId) {}
}

/// Writes one line per transition to stderr.
pub struct PrintTracer;

impl Tracer for PrintTracer {
    fn trace_shift(&mut self, target: StateId, symbol: SymbolId) {
        eprintln!("shift {symbol} -> state {target}");
    }

    fn trace_reduce(&mut self, production: ProductionId, lhs: SymbolId, size: usize) {
        eprintln!("reduce #{production} ({size} symbols) -> {lhs}");
    }

    fn trace_goto(&mut self, target: StateId) {
        eprintln!("goto state {target}");
    }

    fn trace_accept(&mut self, production: ProductionId) {
        eprintln!("accept via #{production}");
    }

    fn trace_error(&mut self, state: StateId, symbol: SymbolId) {
        eprintln!("error in state {state} at symbol {symbol}");
    }
}
