//! FIRST sets.

use std::borrow::Cow;

use log::{debug, trace};
use lookahead_grammar::{Grammar, SymbolBitSet};
use lookahead_symbol::Symbol;

use crate::sets::{LookaheadSet, PerSymbolSets, SymbolSets};

/// FIRST sets of all nonterminals. The marker of each set stands for ε.
#[derive(Clone, Debug)]
pub struct FirstSets {
    map: PerSymbolSets,
    terminal_set: SymbolBitSet,
    passes: usize,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// We define a binary relation FIRST(N, S), in which N is related to S
    /// if the grammar has a production of the form `N ⸬= α S β`, where
    /// α is a nullable string of symbols.
    ///
    /// Every set starts empty. Full passes over all rules grow the sets
    /// until a pass changes nothing, which gives the least fixed point
    /// regardless of rule order, and terminates on left recursion.
    pub fn new(grammar: &Grammar) -> Self {
        let mut this = FirstSets {
            map: grammar
                .nonterminals()
                .map(|nonterminal| (nonterminal, LookaheadSet::new()))
                .collect(),
            terminal_set: grammar.terminal_symbols(),
            passes: 0,
        };

        while this.pass(grammar) {}
        debug!(
            "FIRST sets of {} nonterminals converged after {} passes",
            this.map.len(),
            this.passes
        );
        this
    }

    /// Runs one relaxation pass over all rules of the grammar the sets were
    /// computed for. Returns whether any set grew.
    pub fn pass(&mut self, grammar: &Grammar) -> bool {
        self.passes += 1;
        let mut changed = false;
        for rule in grammar.rules() {
            let lookahead = self.first_set_for_string(&rule.rhs[..]);
            let first_set = self.map.entry(rule.lhs).or_default();
            changed |= first_set.union(&lookahead);
        }
        trace!("FIRST pass {}: changed = {}", self.passes, changed);
        changed
    }

    /// Calculates a FIRST set for a string of symbols. The marker is
    /// present if every symbol of the string is nullable, which includes
    /// the empty string.
    pub fn first_set_for_string(&self, string: &[Symbol]) -> LookaheadSet {
        let mut result = LookaheadSet::new();
        for &sym in string {
            if self.terminal_set[sym] {
                result.insert(sym);
                return result;
            }
            match self.map.get(&sym) {
                Some(first_set) => {
                    result.union_terminals(first_set);
                    if !first_set.has_none() {
                        return result;
                    }
                }
                // A symbol outside of the grammar's symbol space derives
                // nothing.
                None => return result,
            }
        }
        result.insert_none();
        result
    }

    /// Returns the FIRST set of any symbol. For a terminal, this is the
    /// terminal itself.
    pub fn first_set_of(&self, sym: Symbol) -> Cow<'_, LookaheadSet> {
        match self.map.get(&sym) {
            Some(first_set) => Cow::Borrowed(first_set),
            None => Cow::Owned(LookaheadSet::singleton(sym)),
        }
    }

    /// Checks whether the symbol derives the empty string.
    pub fn is_nullable(&self, sym: Symbol) -> bool {
        self.map.get(&sym).map_or(false, LookaheadSet::has_none)
    }

    /// Checks whether the symbol is a terminal of the analyzed grammar.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.terminal_set[sym]
    }

    /// Iterates over nonterminals and their FIRST sets, by symbol ID.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &LookaheadSet)> {
        self.map.iter().map(|(&sym, set)| (sym, set))
    }

    /// Returns the number of passes made so far.
    pub fn passes(&self) -> usize {
        self.passes
    }
}

impl SymbolSets for FirstSets {
    fn per_symbol_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
