//! FOLLOW sets.

use log::{debug, trace};
use lookahead_grammar::Grammar;
use lookahead_symbol::Symbol;

use crate::first::FirstSets;
use crate::sets::{LookaheadSet, PerSymbolSets, SymbolSets};

/// FOLLOW sets.
#[derive(Clone, Debug)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets. The marker stands for `$`.
    map: PerSymbolSets,
    passes: usize,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    ///
    /// Every nonterminal gets a set, and the set of `start_sym` holds `$`.
    /// The sets grow until a full pass over all rules changes nothing.
    pub fn new(grammar: &Grammar, start_sym: Symbol, first_sets: &FirstSets) -> Self {
        let mut this = FollowSets {
            map: grammar
                .nonterminals()
                .map(|nonterminal| (nonterminal, LookaheadSet::new()))
                .collect(),
            passes: 0,
        };
        this.map.entry(start_sym).or_default().insert_none();

        while this.pass(grammar, first_sets) {}
        debug!(
            "FOLLOW sets of {} nonterminals converged after {} passes",
            this.map.len(),
            this.passes
        );
        this
    }

    /// Runs one relaxation pass. Returns whether any set grew.
    ///
    /// Each rule is scanned right to left, carrying the set of terminals
    /// that may follow the current position. It begins as FOLLOW of the LHS,
    /// and it is replaced at every symbol that is not nullable.
    pub fn pass(&mut self, grammar: &Grammar, first_sets: &FirstSets) -> bool {
        self.passes += 1;
        let mut changed = false;
        for rule in grammar.rules() {
            let mut follow_set = self.map.get(&rule.lhs).cloned().unwrap_or_default();

            for &sym in rule.rhs.iter().rev() {
                let followed = match self.map.get_mut(&sym) {
                    Some(followed) => followed,
                    None => {
                        // Terminal.
                        follow_set.clear();
                        follow_set.insert(sym);
                        continue;
                    }
                };
                changed |= followed.union(&follow_set);

                let first_set = first_sets.first_set_of(sym);
                if !first_set.has_none() {
                    follow_set.clear();
                }
                follow_set.union_terminals(&first_set);
            }
        }
        trace!("FOLLOW pass {}: changed = {}", self.passes, changed);
        changed
    }

    /// Iterates over nonterminals and their FOLLOW sets, by symbol ID.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &LookaheadSet)> {
        self.map.iter().map(|(&sym, set)| (sym, set))
    }

    /// Returns the number of passes made so far.
    pub fn passes(&self) -> usize {
        self.passes
    }
}

impl SymbolSets for FollowSets {
    fn per_symbol_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
