//! PREDICT sets.

use std::rc::Rc;

use log::debug;
use lookahead_grammar::Grammar;
use lookahead_symbol::Symbol;

use crate::first::FirstSets;
use crate::follow::FollowSets;
use crate::sets::{LookaheadSet, SymbolSets};

/// PREDICT sets, one for every rule of the grammar.
#[derive(Clone, Debug)]
pub struct PredictSets {
    entries: Vec<PredictEntry>,
}

/// The PREDICT set of one rule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PredictEntry {
    /// The rule's left-hand side symbol.
    pub lhs: Symbol,
    /// The rule's right-hand side symbols.
    pub rhs: Rc<[Symbol]>,
    /// Terminals that select this rule. The marker stands for `$`.
    pub set: LookaheadSet,
}

impl PredictSets {
    /// Compute the PREDICT set of every rule.
    ///
    /// PREDICT(A ⸬= α) is FIRST(α) without ε, together with FOLLOW(A) when
    /// α is nullable.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets, follow_sets: &FollowSets) -> Self {
        let entries = grammar
            .rules()
            .map(|rule| {
                let rhs_first_set = first_sets.first_set_for_string(&rule.rhs[..]);
                let mut set = LookaheadSet {
                    terminals: rhs_first_set.terminals,
                    has_none: false,
                };
                if rhs_first_set.has_none {
                    if let Some(lhs_follow_set) = follow_sets.get(rule.lhs) {
                        set.union(lhs_follow_set);
                    }
                }
                PredictEntry {
                    lhs: rule.lhs,
                    rhs: rule.rhs.clone(),
                    set,
                }
            })
            .collect::<Vec<_>>();
        debug!("computed PREDICT sets for {} rules", entries.len());
        PredictSets { entries }
    }

    /// Returns the PREDICT set of the rule `lhs ⸬= rhs`.
    pub fn get(&self, lhs: Symbol, rhs: &[Symbol]) -> Option<&LookaheadSet> {
        self.entries
            .iter()
            .find(|entry| entry.lhs == lhs && &entry.rhs[..] == rhs)
            .map(|entry| &entry.set)
    }

    /// Iterates over rules and their PREDICT sets, in rule order.
    pub fn iter(&self) -> impl Iterator<Item = &PredictEntry> {
        self.entries.iter()
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the grammar had no rules.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
