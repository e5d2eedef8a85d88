//! Productions and the index-stable production list.

use serde::{Deserialize, Serialize};

use crate::ids::{ProductionId, SymbolId};

/// One grammar rule, `lhs -> rhs`.
///
/// An empty rhs is an epsilon production: reducing it consumes nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Production {
    lhs: SymbolId,
    rhs: Vec<SymbolId>,
}

impl Production {
    pub fn new(lhs: SymbolId, rhs: Vec<SymbolId>) -> Self {
        Production { lhs, rhs }
    }

    #[inline]
    pub fn lhs(&self) -> SymbolId {
        self.lhs
    }

    #[inline]
    pub fn rhs(&self) -> &[SymbolId] {
        &self.rhs
    }

    /// Number of rhs symbols, i.e. how many stack entries a reduce pops.
    #[inline]
    pub fn size(&self) -> usize {
        self.rhs.len()
    }
}

/// Append-only, index-stable list of productions.
///
/// A [`ProductionId`] is the position at which the rule was pushed;
/// positions never shift afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionTable {
    rules: Vec<Production>,
}

impl ProductionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, returning its id.
    pub fn push(&mut self, lhs: SymbolId, rhs: Vec<SymbolId>) -> ProductionId {
        let id = ProductionId::new(self.rules.len() as u16);
        self.rules.push(Production::new(lhs, rhs));
        id
    }

    pub fn get(&self, id: ProductionId) -> Option<&Production> {
        self.rules.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductionId, &Production)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, p)| (ProductionId::new(i as u16), p))
    }
}
