//! Informs whether symbols are terminal or nonterminal.

use std::{iter, ops};

use bit_vec::BitVec;

use crate::local_prelude::*;

/// A set of symbols in the form of a bit vector.
///
/// Symbols past the end of the vector are not in the set.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::new(),
        }
    }

    /// Clears the set and resizes it to the given symbol space.
    pub fn reset(&mut self, symbol_source: &SymbolSource) {
        self.bit_vec = BitVec::from_elem(symbol_source.num_syms(), false);
    }

    /// Extends the set with absent symbols until it covers `num_syms` symbols.
    pub fn grow(&mut self, num_syms: usize) {
        if self.bit_vec.len() < num_syms {
            let additional = num_syms - self.bit_vec.len();
            self.bit_vec.grow(additional, false);
        }
    }

    /// Gathers information about whether symbols are terminal or nonterminal.
    /// Constructs a set of terminal symbols: every symbol that is not
    /// the LHS of a rule.
    ///
    /// Constructs a data structure in O(n) time.
    pub fn terminal(&mut self, grammar: &Grammar) {
        self.bit_vec = BitVec::from_elem(grammar.num_syms(), true);
        for rule in grammar.rules() {
            self.set(rule.lhs, false);
        }
    }

    /// Constructs a set of nonterminal symbols.
    pub fn nonterminal(&mut self, grammar: &Grammar) {
        self.reset(grammar.sym_source());
        for rule in grammar.rules() {
            self.set(rule.lhs, true);
        }
    }

    /// Adds or removes a symbol, growing the set as needed.
    pub fn set(&mut self, index: Symbol, elem: bool) {
        self.grow(index.usize() + 1);
        self.bit_vec.set(index.usize(), elem);
    }

    /// Checks whether the symbol is in the set.
    pub fn contains(&self, index: Symbol) -> bool {
        self.bit_vec.get(index.usize()).unwrap_or(false)
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }

    /// Adds all symbols of `other` to this set.
    pub fn union(&mut self, other: &SymbolBitSet) {
        self.grow(other.bit_vec.len());
        let mut other = other.bit_vec.clone();
        other.grow(self.bit_vec.len() - other.len(), false);
        self.bit_vec.or(&other);
    }

    /// Returns the number of symbols in the set.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Returns the size of the symbol space covered by the set.
    pub fn len(&self) -> usize {
        self.bit_vec.len()
    }

    /// Checks whether the set covers no symbol space.
    pub fn is_empty(&self) -> bool {
        self.bit_vec.is_empty()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}

static TRUE: bool = true;
static FALSE: bool = false;

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.contains(index) {
            &TRUE
        } else {
            &FALSE
        }
    }
}

impl Grammar {
    /// Returns the set of terminal symbols.
    pub fn terminal_symbols(&self) -> SymbolBitSet {
        let mut set = SymbolBitSet::new();
        set.terminal(self);
        set
    }

    /// Returns the set of nonterminal symbols.
    pub fn nonterminal_symbols(&self) -> SymbolBitSet {
        let mut set = SymbolBitSet::new();
        set.nonterminal(self);
        set
    }
}
