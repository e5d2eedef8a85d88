//! Global grammar search: a lazy sequence of non-overlapping matches.

use std::iter::FusedIterator;

use indexmap::IndexSet;

use prosek_table::{ProductionId, StateMachine};

use crate::source::TokenSource;

use super::search::{SearchMatch, search};

/// Successive non-overlapping matches over one input range.
///
/// Each advance re-runs the search from the previous match's end, so
/// match starts strictly increase; a match that fails to advance
/// (possible only when the grammar matches zero tokens) ends the
/// sequence, as does a failed search. Single-pass, not restartable.
pub struct SearchMatches<'sm, S: TokenSource + Clone> {
    sm: &'sm StateMachine,
    src: S,
    targets: IndexSet<ProductionId>,
    last_start: Option<S::Pos>,
    done: bool,
}

impl<'sm, S: TokenSource + Clone> SearchMatches<'sm, S> {
    pub fn new(sm: &'sm StateMachine, src: S, targets: IndexSet<ProductionId>) -> Self {
        SearchMatches {
            sm,
            src,
            targets,
            last_start: None,
            done: false,
        }
    }
}

impl<'sm, S: TokenSource + Clone> Iterator for SearchMatches<'sm, S> {
    type Item = SearchMatch<S::Pos>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match search(self.sm, &mut self.src, &self.targets) {
            None => {
                self.done = true;
                None
            }
            Some(found) => {
                let start = found.span().0.clone();
                if self.last_start.as_ref() == Some(&start) {
                    self.done = true;
                    return None;
                }
                self.last_start = Some(start);
                Some(found)
            }
        }
    }
}

impl<'sm, S: TokenSource + Clone> FusedIterator for SearchMatches<'sm, S> {}
