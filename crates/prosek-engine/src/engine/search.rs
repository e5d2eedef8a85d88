//! Grammar search: leftmost-then-longest occurrences of a grammar
//! inside a longer token stream.
//!
//! A context-free pattern has no fixed width, so the scan runs a
//! speculative parse at each origin and checkpoints the last
//! configuration that could still complete on end-of-input. A run that
//! errors out mid-stream falls back to that checkpoint and probes it by
//! pinning the lookahead to EOI — recovering the longest
//! grammatically-complete prefix instead of requiring the stream to end
//! exactly where the grammar does.

use indexmap::IndexSet;

use prosek_table::{Action, ProductionId, StateId, StateMachine, SymbolId};

use crate::source::TokenSource;
use crate::token::Token;

use super::checkpoint::Checkpoint;

/// A successful grammar search.
///
/// Group 0 holds the whole-match span. Group `k` (for `k >= 1`)
/// collects, in reduction order, every span produced for the `k`-th
/// production of the target set's insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchMatch<P> {
    pub captures: Vec<Vec<(P, P)>>,
}

impl<P> SearchMatch<P> {
    /// The whole-match span.
    pub fn span(&self) -> &(P, P) {
        &self.captures[0][0]
    }

    pub fn group(&self, index: usize) -> &[(P, P)] {
        self.captures.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}

enum Outcome<S: TokenSource> {
    /// Matched; `resume` sits at the match end for non-overlapping
    /// continuation.
    Matched {
        resume: S,
        captures: Vec<Vec<(S::Pos, S::Pos)>>,
    },
    /// The grammar accepted but never reduced a monitored production:
    /// the scan is over, with nothing to report.
    Ended,
    /// No acceptance from this origin.
    Failed,
}

/// Find the leftmost, then longest, occurrence of the grammar at or
/// after the source position.
///
/// `targets` is the set of monitored productions; empty means plain
/// acceptance is the only match. Reducing any monitored production
/// marks the attempt as a hit and records the span in its capture
/// group. On success the source is left at the match end; on failure it
/// is left exhausted.
///
/// Each failed origin advances the scan by one token and retries fresh:
/// no hit, capture, or checkpoint carries across origins.
pub fn search<S>(
    sm: &StateMachine,
    src: &mut S,
    targets: &IndexSet<ProductionId>,
) -> Option<SearchMatch<S::Pos>>
where
    S: TokenSource + Clone,
{
    loop {
        let origin_is_eoi = src.current().id == SymbolId::EOI;
        match attempt(sm, src.clone(), targets) {
            Outcome::Matched { resume, captures } => {
                *src = resume;
                return Some(SearchMatch { captures });
            }
            Outcome::Ended => return None,
            Outcome::Failed => {
                if origin_is_eoi {
                    return None;
                }
                src.advance();
            }
        }
    }
}

/// One speculative, span-tracked run from one origin.
fn attempt<S>(sm: &StateMachine, mut src: S, targets: &IndexSet<ProductionId>) -> Outcome<S>
where
    S: TokenSource + Clone,
{
    let mut stack = vec![StateId::INITIAL];
    let mut lookahead = src.current().id;
    let mut entry = sm.action(StateId::INITIAL, lookahead);
    let mut spans: Vec<Token<S::Pos>> = Vec::new();
    let mut captures: Vec<Vec<(S::Pos, S::Pos)>> = vec![Vec::new(); targets.len() + 1];
    let mut hit = false;
    let mut checkpoint: Option<Checkpoint<S>> = None;

    loop {
        match entry {
            Action::Error => break,

            Action::Shift(target) => {
                stack.push(target);
                spans.push(src.current());
                if lookahead != SymbolId::EOI {
                    src.advance();
                }
                lookahead = src.current().id;
                entry = sm.action(target, lookahead);

                // The shifted-to state can still complete on EOI: this
                // is the newest point worth falling back to.
                let eoi_entry = sm.action(target, SymbolId::EOI);
                if !eoi_entry.is_error() {
                    checkpoint = Some(Checkpoint {
                        stack: stack.clone(),
                        entry: eoi_entry,
                        src: src.clone(),
                        spans: spans.clone(),
                        captures: captures.clone(),
                        hit,
                    });
                }
            }

            Action::Reduce(production) => {
                let Some(rule) = sm.production(production) else {
                    break;
                };
                let size = rule.size();
                if size + 1 > stack.len() || size > spans.len() {
                    break;
                }
                let merged = if size > 0 {
                    let first = &spans[spans.len() - size];
                    let last = &spans[spans.len() - 1];
                    Token::new(rule.lhs(), first.start.clone(), last.end.clone())
                } else {
                    let at = src.current().start;
                    Token::new(rule.lhs(), at.clone(), at)
                };
                if let Some(group) = targets.get_index_of(&production) {
                    hit = true;
                    captures[group + 1].push(merged.span());
                }
                spans.truncate(spans.len() - size);
                spans.push(merged);
                stack.truncate(stack.len() - size);
                lookahead = rule.lhs();
                entry = sm.action(*stack.last().expect("stack keeps its bottom"), lookahead);
            }

            Action::Goto(target) => {
                stack.push(target);
                lookahead = src.current().id;
                entry = sm.action(target, lookahead);
            }

            Action::Accept(production) => {
                let size = sm.production_size(production).unwrap_or(0);
                if targets.is_empty() {
                    hit = true;
                }
                if !hit {
                    return Outcome::Ended;
                }
                let whole = whole_match_span(&spans, size, &src);
                captures[0].push(whole);
                return Outcome::Matched {
                    resume: src,
                    captures,
                };
            }
        }
    }

    // Fallback. A checkpoint whose source already sat at EOI was
    // continued for real by the main loop, so only probe fresh ones.
    if let Some(cp) = checkpoint {
        if cp.src.current().id != SymbolId::EOI {
            return replay_to_eoi(sm, cp, targets);
        }
    }

    Outcome::Failed
}

/// Resume a checkpoint with the lookahead pinned to end-of-input and
/// run the action loop out. Accepting here means the checkpointed
/// position closed a complete match.
fn replay_to_eoi<S>(
    sm: &StateMachine,
    cp: Checkpoint<S>,
    targets: &IndexSet<ProductionId>,
) -> Outcome<S>
where
    S: TokenSource + Clone,
{
    let Checkpoint {
        mut stack,
        mut entry,
        src,
        mut spans,
        mut captures,
        mut hit,
    } = cp;
    // Everything synthesized during the replay is zero-width at the
    // first unmatched token.
    let eoi_at = src.current().start;

    loop {
        match entry {
            Action::Error => return Outcome::Failed,

            Action::Shift(target) => {
                // Shifting the synthetic EOI: the pinned lookahead does
                // not move.
                stack.push(target);
                spans.push(Token::new(SymbolId::EOI, eoi_at.clone(), eoi_at.clone()));
                entry = sm.action(target, SymbolId::EOI);
            }

            Action::Reduce(production) => {
                let Some(rule) = sm.production(production) else {
                    return Outcome::Failed;
                };
                let size = rule.size();
                if size + 1 > stack.len() || size > spans.len() {
                    return Outcome::Failed;
                }
                let merged = if size > 0 {
                    let first = &spans[spans.len() - size];
                    let last = &spans[spans.len() - 1];
                    Token::new(rule.lhs(), first.start.clone(), last.end.clone())
                } else {
                    Token::new(rule.lhs(), eoi_at.clone(), eoi_at.clone())
                };
                if let Some(group) = targets.get_index_of(&production) {
                    hit = true;
                    captures[group + 1].push(merged.span());
                }
                spans.truncate(spans.len() - size);
                spans.push(merged);
                stack.truncate(stack.len() - size);
                entry = sm.action(
                    *stack.last().expect("stack keeps its bottom"),
                    rule.lhs(),
                );
            }

            Action::Goto(target) => {
                stack.push(target);
                entry = sm.action(target, SymbolId::EOI);
            }

            Action::Accept(production) => {
                let size = sm.production_size(production).unwrap_or(0);
                if targets.is_empty() {
                    hit = true;
                }
                if !hit {
                    return Outcome::Ended;
                }
                let whole = if size > 0 && size <= spans.len() {
                    (
                        spans[spans.len() - size].start.clone(),
                        spans[spans.len() - 1].end.clone(),
                    )
                } else {
                    (eoi_at.clone(), eoi_at.clone())
                };
                captures[0].push(whole);
                return Outcome::Matched {
                    resume: src,
                    captures,
                };
            }
        }
    }
}

fn whole_match_span<S: TokenSource>(
    spans: &[Token<S::Pos>],
    popped: usize,
    src: &S,
) -> (S::Pos, S::Pos) {
    if popped > 0 && popped <= spans.len() {
        (
            spans[spans.len() - popped].start.clone(),
            spans[spans.len() - 1].end.clone(),
        )
    } else {
        let at = src.current().start;
        (at.clone(), at)
    }
}
