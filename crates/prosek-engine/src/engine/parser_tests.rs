use prosek_table::{Action, ProductionId, StateId, SymbolId};

use crate::source::{SliceSource, TokenSource};
use crate::token::Token;

use super::error::UsageError;
use super::parser::Parser;
use super::test_grammars::{
    AB_RULE, AB_START, LIST_EMPTY, LIST_MORE, ab, eoi, list, st, sym, tok,
};
use super::trace::Tracer;

#[test]
fn accepts_ab_and_unwinds_the_stack() {
    let sm = ab();
    let tokens = [tok(1, 0, 1), tok(2, 1, 2), eoi(2)];
    let mut src = SliceSource::new(&tokens);
    let mut parser = Parser::new(&sm);

    parser.init(&src);
    assert!(parser.parse(&mut src));
    assert_eq!(parser.stack(), &[StateId::INITIAL]);
}

#[test]
fn rejects_truncated_input_at_the_following_token() {
    let sm = ab();
    let tokens = [tok(1, 0, 1), eoi(1)];
    let mut src = SliceSource::new(&tokens);
    let mut parser = Parser::new(&sm);

    parser.init(&src);
    assert!(!parser.parse(&mut src));
    // The failure is at the token after 'a': end of input.
    assert_eq!(src.current(), eoi(1));
    assert!(parser.action().is_error());
    assert_eq!(parser.lookahead(), SymbolId::EOI);
}

#[test]
fn unknown_token_halts_with_the_sentinel() {
    let sm = ab();
    let tokens = [
        tok(1, 0, 1),
        Token::new(SymbolId::UNKNOWN, 1, 2),
        eoi(2),
    ];
    let mut src = SliceSource::new(&tokens);
    let mut parser = Parser::new(&sm);

    parser.init(&src);
    assert!(!parser.parse(&mut src));
    assert_eq!(parser.lookahead(), SymbolId::UNKNOWN);
}

#[test]
fn unknown_token_at_init_is_over_before_it_starts() {
    let sm = ab();
    let tokens = [Token::new(SymbolId::UNKNOWN, 0, 1), eoi(1)];
    let mut src = SliceSource::new(&tokens);
    let mut parser = Parser::new(&sm);

    parser.init(&src);
    assert!(parser.action().is_error());
    assert!(!parser.parse(&mut src));
}

#[test]
fn epsilon_reduce_synthesizes_a_zero_width_span() {
    let sm = list();
    let tokens = [tok(1, 0, 1), eoi(1)];
    let mut src = SliceSource::new(&tokens);
    let mut parser = Parser::new(&sm);
    let mut spans = Vec::new();

    parser.init(&src);
    assert_eq!(parser.action(), Action::Reduce(LIST_EMPTY));
    parser.next_with_spans(&mut src, &mut spans);
    // L out of nothing, zero-width at the current token's start.
    assert_eq!(spans, vec![Token::new(sym(3), 0, 0)]);

    while !matches!(parser.action(), Action::Accept(_) | Action::Error) {
        parser.next_with_spans(&mut src, &mut spans);
    }
    assert!(matches!(parser.action(), Action::Accept(_)));
    parser.next_with_spans(&mut src, &mut spans);
    // Accept popped the start production's rhs.
    assert_eq!(spans, vec![]);
    assert_eq!(parser.stack(), &[StateId::INITIAL]);
}

#[test]
fn reduce_merges_child_spans() {
    let sm = list();
    let tokens = [tok(1, 0, 1), tok(1, 1, 2), eoi(2)];
    let mut src = SliceSource::new(&tokens);
    let mut parser = Parser::new(&sm);
    let mut spans = Vec::new();

    parser.init(&src);
    // Reduce L -> epsilon, goto, shift 'x': next pending is L -> L x.
    for _ in 0..3 {
        parser.next_with_spans(&mut src, &mut spans);
    }
    assert_eq!(parser.action(), Action::Reduce(LIST_MORE));
    assert_eq!(spans, vec![Token::new(sym(3), 0, 0), tok(1, 0, 1)]);

    parser.next_with_spans(&mut src, &mut spans);
    // (L 0..0) + (x 0..1) merged into L spanning 0..1.
    assert_eq!(spans, vec![Token::new(sym(3), 0, 1)]);
}

#[test]
fn dollar_reads_the_pending_reduce_children() {
    let sm = list();
    let tokens = [tok(1, 0, 1), eoi(1)];
    let mut src = SliceSource::new(&tokens);
    let mut parser = Parser::new(&sm);
    let mut spans = Vec::new();

    parser.init(&src);
    for _ in 0..3 {
        parser.next_with_spans(&mut src, &mut spans);
    }
    assert_eq!(parser.reduce_id(), Ok(LIST_MORE));
    assert_eq!(parser.dollar(0, &spans), Ok(&Token::new(sym(3), 0, 0)));
    assert_eq!(parser.dollar(1, &spans), Ok(&tok(1, 0, 1)));
    assert_eq!(
        parser.dollar(2, &spans),
        Err(UsageError::DollarOutOfRange { index: 2, size: 2 })
    );
}

#[test]
fn dollar_outside_a_reduce_is_a_usage_error() {
    let sm = ab();
    let tokens = [tok(1, 0, 1), tok(2, 1, 2), eoi(2)];
    let src = SliceSource::new(&tokens);
    let mut parser = Parser::new(&sm);

    parser.init(&src);
    assert_eq!(parser.action(), Action::Shift(st(2)));
    let spans: Vec<Token<usize>> = Vec::new();
    assert_eq!(parser.dollar(0, &spans), Err(UsageError::NotReducing));
    assert_eq!(parser.reduce_id(), Err(UsageError::NotReducing));
}

#[test]
fn bare_stepping_walks_the_same_transitions() {
    let sm = ab();
    let tokens = [tok(1, 0, 1), tok(2, 1, 2), eoi(2)];
    let mut src = SliceSource::new(&tokens);
    let mut parser = Parser::new(&sm);
    let mut seen = Vec::new();

    parser.init(&src);
    loop {
        match parser.action() {
            Action::Error => break,
            Action::Accept(_) => {
                parser.next(&mut src);
                break;
            }
            pending => {
                seen.push(pending);
                parser.next(&mut src);
            }
        }
    }

    assert_eq!(
        seen,
        vec![
            Action::Shift(st(2)),
            Action::Shift(st(3)),
            Action::Reduce(AB_RULE),
            Action::Goto(st(1)),
        ]
    );
    assert_eq!(parser.stack(), &[StateId::INITIAL]);
}

#[test]
fn production_size_reports_rhs_lengths() {
    let sm = ab();
    let parser = Parser::new(&sm);
    assert_eq!(parser.production_size(AB_START), Some(1));
    assert_eq!(parser.production_size(AB_RULE), Some(2));
    assert_eq!(parser.production_size(ProductionId::new(9)), None);
}

#[test]
fn reruns_are_deterministic() {
    let sm = ab();
    let tokens = [tok(1, 0, 1), tok(2, 1, 2), eoi(2)];

    for _ in 0..2 {
        let mut src = SliceSource::new(&tokens);
        let mut parser = Parser::new(&sm);
        parser.init(&src);
        assert!(parser.parse(&mut src));
        assert_eq!(parser.stack(), &[StateId::INITIAL]);
    }
}

#[test]
fn clear_resets_for_reuse() {
    let sm = ab();
    let tokens = [tok(1, 0, 1), tok(2, 1, 2), eoi(2)];
    let mut parser = Parser::new(&sm);

    let mut src = SliceSource::new(&tokens);
    parser.init(&src);
    assert!(parser.parse(&mut src));

    parser.clear();
    assert!(parser.action().is_error());
    assert_eq!(parser.lookahead(), SymbolId::UNKNOWN);

    let mut src = SliceSource::new(&tokens);
    parser.init(&src);
    assert!(parser.parse(&mut src));
}

#[derive(Default)]
struct RecordingTracer {
    events: Vec<String>,
}

impl Tracer for RecordingTracer {
    fn trace_shift(&mut self, target: StateId, symbol: SymbolId) {
        self.events.push(format!("shift {symbol} -> {target}"));
    }

    fn trace_reduce(&mut self, production: ProductionId, lhs: SymbolId, size: usize) {
        self.events.push(format!("reduce {production} -> {lhs}/{size}"));
    }

    fn trace_goto(&mut self, target: StateId) {
        self.events.push(format!("goto {target}"));
    }

    fn trace_accept(&mut self, production: ProductionId) {
        self.events.push(format!("accept {production}"));
    }

    fn trace_error(&mut self, state: StateId, symbol: SymbolId) {
        self.events.push(format!("error {state} {symbol}"));
    }
}

#[test]
fn tracer_sees_every_transition() {
    let sm = ab();
    let tokens = [tok(1, 0, 1), tok(2, 1, 2), eoi(2)];
    let mut src = SliceSource::new(&tokens);
    let mut parser = Parser::new(&sm);
    let mut tracer = RecordingTracer::default();

    parser.init(&src);
    assert!(parser.parse_with(&mut src, &mut tracer));
    assert_eq!(
        tracer.events,
        vec![
            "shift 1 -> 2",
            "shift 2 -> 3",
            "reduce 1 -> 4/2",
            "goto 1",
            "accept 0",
        ]
    );
}
