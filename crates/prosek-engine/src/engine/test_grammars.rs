//! Hand-derived tables shared by the unit tests.
//!
//! Each machine below is the LALR automaton of a grammar small enough
//! to derive on paper; the cell listings note the item sets they came
//! from.

use prosek_table::{Action, ProductionId, StateId, StateMachine, StateMachineBuilder, SymbolId};

use crate::token::Token;

pub fn st(raw: u16) -> StateId {
    StateId::new(raw)
}

pub fn sym(raw: u16) -> SymbolId {
    SymbolId::new(raw)
}

pub fn tok(id: u16, start: usize, end: usize) -> Token<usize> {
    Token::new(SymbolId::new(id), start, end)
}

pub fn eoi(at: usize) -> Token<usize> {
    Token::new(SymbolId::EOI, at, at)
}

pub const AB_START: ProductionId = ProductionId::new(0);
pub const AB_RULE: ProductionId = ProductionId::new(1);

/// `S -> 'a' 'b'` over symbols `0=$ 1=a 2=b 3=S' 4=S`.
///
/// States: 0 = `{S'->.S, S->.a b}`, 1 = `{S'->S.}`, 2 = `{S->a. b}`,
/// 3 = `{S->a b.}`.
pub fn ab() -> StateMachine {
    let mut b = StateMachineBuilder::new(4, 5);
    let start = b.production(sym(3), vec![sym(4)]);
    let rule = b.production(sym(4), vec![sym(1), sym(2)]);
    assert_eq!((start, rule), (AB_START, AB_RULE));
    b.cell(st(0), sym(1), Action::Shift(st(2)));
    b.cell(st(0), sym(4), Action::Goto(st(1)));
    b.cell(st(1), SymbolId::EOI, Action::Accept(start));
    b.cell(st(2), sym(2), Action::Shift(st(3)));
    b.cell(st(3), SymbolId::EOI, Action::Reduce(rule));
    b.build().unwrap()
}

pub const LIST_START: ProductionId = ProductionId::new(0);
pub const LIST_EMPTY: ProductionId = ProductionId::new(1);
pub const LIST_MORE: ProductionId = ProductionId::new(2);

/// `L -> %empty | L 'x'` over symbols `0=$ 1=x 2=S' 3=L`.
///
/// States: 0 = `{S'->.L, L->., L->.L x}`, 1 = `{S'->L., L->L. x}`,
/// 2 = `{L->L x.}`. Follow(L) = `{$, x}`.
pub fn list() -> StateMachine {
    let mut b = StateMachineBuilder::new(3, 4);
    let start = b.production(sym(2), vec![sym(3)]);
    let empty = b.production(sym(3), vec![]);
    let more = b.production(sym(3), vec![sym(3), sym(1)]);
    assert_eq!((start, empty, more), (LIST_START, LIST_EMPTY, LIST_MORE));
    b.cell(st(0), SymbolId::EOI, Action::Reduce(empty));
    b.cell(st(0), sym(1), Action::Reduce(empty));
    b.cell(st(0), sym(3), Action::Goto(st(1)));
    b.cell(st(1), SymbolId::EOI, Action::Accept(start));
    b.cell(st(1), sym(1), Action::Shift(st(2)));
    b.cell(st(2), SymbolId::EOI, Action::Reduce(more));
    b.cell(st(2), sym(1), Action::Reduce(more));
    b.build().unwrap()
}

pub const ADD_START: ProductionId = ProductionId::new(0);
pub const ADD_RULE: ProductionId = ProductionId::new(1);

pub const NUM: u16 = 1;
pub const PLUS: u16 = 2;
pub const IDENT: u16 = 3;

/// `E -> NUM '+' NUM` over symbols `0=$ 1=NUM 2=+ 3=ID 4=S' 5=E`.
///
/// `ID` is a stray terminal with no action anywhere: streams containing
/// it only match through the search fallback.
pub fn add() -> StateMachine {
    let mut b = StateMachineBuilder::new(5, 6);
    let start = b.production(sym(4), vec![sym(5)]);
    let rule = b.production(sym(5), vec![sym(NUM), sym(PLUS), sym(NUM)]);
    assert_eq!((start, rule), (ADD_START, ADD_RULE));
    b.cell(st(0), sym(NUM), Action::Shift(st(2)));
    b.cell(st(0), sym(5), Action::Goto(st(1)));
    b.cell(st(1), SymbolId::EOI, Action::Accept(start));
    b.cell(st(2), sym(PLUS), Action::Shift(st(3)));
    b.cell(st(3), sym(NUM), Action::Shift(st(4)));
    b.cell(st(4), SymbolId::EOI, Action::Reduce(rule));
    b.build().unwrap()
}
