//! Lazy iteration over a parse's semantic-action points.

use std::iter::FusedIterator;

use prosek_table::{Action, ProductionId, StateMachine, SymbolId};

use crate::source::TokenSource;
use crate::token::Token;

use super::error::ParseError;
use super::parser::Parser;

/// One pending reduce, snapshotted for the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction<P> {
    pub production: ProductionId,
    pub lhs: SymbolId,
    /// Rhs child spans, positionally matching
    /// [`dollar`](super::parser::Parser::dollar). Empty for epsilon.
    pub children: Vec<Token<P>>,
}

/// Forward-only sequence of reductions over one input.
///
/// Each advance steps the automaton to the next pending reduce and
/// yields it. Accept ends the sequence; error yields one final `Err`
/// carrying the failing token, then ends. Single-pass and synchronous:
/// all work happens inside `next`, and an exhausted adapter stays
/// exhausted — build a fresh one per input.
pub struct Reductions<'sm, S: TokenSource> {
    parser: Parser<'sm>,
    src: S,
    spans: Vec<Token<S::Pos>>,
    done: bool,
}

impl<'sm, S: TokenSource> Reductions<'sm, S> {
    pub fn new(sm: &'sm StateMachine, src: S) -> Self {
        let mut parser = Parser::new(sm);
        parser.init(&src);
        Reductions {
            parser,
            src,
            spans: Vec::new(),
            done: false,
        }
    }
}

impl<'sm, S: TokenSource> Iterator for Reductions<'sm, S> {
    type Item = Result<Reduction<S::Pos>, ParseError<S::Pos>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.parser.action() {
                Action::Error => {
                    self.done = true;
                    return Some(Err(ParseError {
                        token: self.src.current(),
                    }));
                }
                Action::Accept(_) => {
                    self.parser.next_with_spans(&mut self.src, &mut self.spans);
                    self.done = true;
                    return None;
                }
                Action::Reduce(production) => {
                    let rule = self.parser.machine().production(production);
                    let Some(rule) = rule.filter(|r| r.size() <= self.spans.len()) else {
                        self.done = true;
                        return Some(Err(ParseError {
                            token: self.src.current(),
                        }));
                    };
                    let children = self.spans[self.spans.len() - rule.size()..].to_vec();
                    let event = Reduction {
                        production,
                        lhs: rule.lhs(),
                        children,
                    };
                    self.parser.next_with_spans(&mut self.src, &mut self.spans);
                    return Some(Ok(event));
                }
                Action::Shift(_) | Action::Goto(_) => {
                    self.parser.next_with_spans(&mut self.src, &mut self.spans);
                }
            }
        }
    }
}

impl<'sm, S: TokenSource> FusedIterator for Reductions<'sm, S> {}
