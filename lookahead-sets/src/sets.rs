//! The representation of FIRST, FOLLOW and PREDICT sets.

use std::collections::{btree_set, BTreeMap, BTreeSet};

use lookahead_symbol::Symbol;

/// A set of terminals, plus a marker.
///
/// In FIRST sets, the marker stands for ε, the empty string. In FOLLOW and
/// PREDICT sets, it stands for `$`, the end of input. The marker is never a
/// terminal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct LookaheadSet {
    /// Terminal symbols in the set.
    pub terminals: BTreeSet<Symbol>,
    /// Whether the marker is in the set.
    pub has_none: bool,
}

/// Mapping from nonterminals to their sets.
pub type PerSymbolSets = BTreeMap<Symbol, LookaheadSet>;

/// Common access to per-symbol sets.
pub trait SymbolSets {
    /// Returns a reference to the underlying map.
    fn per_symbol_sets(&self) -> &PerSymbolSets;

    /// Returns the set of the given nonterminal.
    fn get(&self, sym: Symbol) -> Option<&LookaheadSet> {
        self.per_symbol_sets().get(&sym)
    }

    /// Total number of elements across all sets, markers included.
    fn cardinality(&self) -> usize {
        self.per_symbol_sets().values().map(LookaheadSet::len).sum()
    }
}

impl LookaheadSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set with one terminal.
    pub fn singleton(terminal: Symbol) -> Self {
        LookaheadSet {
            terminals: BTreeSet::from([terminal]),
            has_none: false,
        }
    }

    /// Creates a set holding only the marker.
    pub fn none() -> Self {
        LookaheadSet {
            terminals: BTreeSet::new(),
            has_none: true,
        }
    }

    /// Whether the marker is in the set.
    pub fn has_none(&self) -> bool {
        self.has_none
    }

    /// Whether the terminal is in the set.
    pub fn contains(&self, terminal: Symbol) -> bool {
        self.terminals.contains(&terminal)
    }

    /// Adds a terminal. Returns whether the set grew.
    pub fn insert(&mut self, terminal: Symbol) -> bool {
        self.terminals.insert(terminal)
    }

    /// Adds the marker. Returns whether the set grew.
    pub fn insert_none(&mut self) -> bool {
        !std::mem::replace(&mut self.has_none, true)
    }

    /// Adds all terminals and the marker of `other`. Returns whether the
    /// set grew.
    pub fn union(&mut self, other: &LookaheadSet) -> bool {
        let grew = self.union_terminals(other);
        (other.has_none && self.insert_none()) || grew
    }

    /// Adds the terminals of `other`, leaving out its marker. Returns
    /// whether the set grew.
    pub fn union_terminals(&mut self, other: &LookaheadSet) -> bool {
        let prev_cardinality = self.terminals.len();
        self.terminals.extend(other.terminals.iter().copied());
        prev_cardinality != self.terminals.len()
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.terminals.clear();
        self.has_none = false;
    }

    /// Number of elements, the marker included.
    pub fn len(&self) -> usize {
        self.terminals.len() + self.has_none as usize
    }

    /// Whether the set has neither terminals nor the marker.
    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty() && !self.has_none
    }

    /// Iterates over terminals in ascending order. The marker is not
    /// included.
    pub fn iter(&self) -> btree_set::Iter<Symbol> {
        self.terminals.iter()
    }
}

impl<'a> IntoIterator for &'a LookaheadSet {
    type Item = &'a Symbol;
    type IntoIter = btree_set::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.terminals.iter()
    }
}
