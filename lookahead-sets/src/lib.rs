//! Predict sets: FIRST, FOLLOW and PREDICT set computation for top-down
//! (LL) parser construction.
//!
//! ```
//! use lookahead_grammar::Grammar;
//! use lookahead_sets::{analyze, SymbolSets};
//!
//! let mut grammar = Grammar::new();
//! let [start, a] = grammar.sym();
//! grammar.rule(start).rhs([a]);
//!
//! let analysis = analyze(&grammar).unwrap();
//! assert!(analysis.first.get(start).unwrap().contains(a));
//! assert!(analysis.follow.get(start).unwrap().has_none());
//! assert!(analysis.predict.get(start, &[a]).unwrap().contains(a));
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod first;
pub mod follow;
pub mod predict;
pub mod sets;

use lookahead_grammar::{Grammar, GrammarError, Symbol, SymbolPolicy};

pub use self::first::FirstSets;
pub use self::follow::FollowSets;
pub use self::predict::{PredictEntry, PredictSets};
pub use self::sets::{LookaheadSet, PerSymbolSets, SymbolSets};

/// The three set families of a grammar.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// FIRST sets of nonterminals.
    pub first: FirstSets,
    /// FOLLOW sets of nonterminals.
    pub follow: FollowSets,
    /// PREDICT sets of rules.
    pub predict: PredictSets,
}

/// Validates the grammar, treating unknown symbols as terminals, and
/// computes its FIRST, FOLLOW and PREDICT sets.
pub fn analyze(grammar: &Grammar) -> Result<Analysis, GrammarError> {
    analyze_with(grammar, SymbolPolicy::Permissive)
}

/// Validates the grammar with the given policy and computes its FIRST,
/// FOLLOW and PREDICT sets.
pub fn analyze_with(grammar: &Grammar, policy: SymbolPolicy) -> Result<Analysis, GrammarError> {
    let start = checked_start(grammar, policy)?;
    let first = FirstSets::new(grammar);
    let follow = FollowSets::new(grammar, start, &first);
    let predict = PredictSets::new(grammar, &first, &follow);
    Ok(Analysis {
        first,
        follow,
        predict,
    })
}

fn checked_start(grammar: &Grammar, policy: SymbolPolicy) -> Result<Symbol, GrammarError> {
    grammar.validate(policy)?;
    grammar.start_sym().ok_or(GrammarError::Empty)
}

/// Set computation as methods on the grammar.
///
/// Each method validates the grammar with [`SymbolPolicy::Permissive`]
/// first, like [`analyze`].
pub trait GrammarSetsExt {
    /// Computes FIRST sets.
    fn first_sets(&self) -> Result<FirstSets, GrammarError>;
    /// Computes FOLLOW sets from the start symbol.
    fn follow_sets(&self) -> Result<FollowSets, GrammarError>;
    /// Computes FOLLOW sets with previously computed FIRST sets.
    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> Result<FollowSets, GrammarError>;
    /// Computes PREDICT sets.
    fn predict_sets(&self) -> Result<PredictSets, GrammarError>;
}

impl GrammarSetsExt for Grammar {
    fn first_sets(&self) -> Result<FirstSets, GrammarError> {
        checked_start(self, SymbolPolicy::Permissive)?;
        Ok(FirstSets::new(self))
    }

    fn follow_sets(&self) -> Result<FollowSets, GrammarError> {
        self.follow_sets_with_first(&self.first_sets()?)
    }

    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> Result<FollowSets, GrammarError> {
        let start = checked_start(self, SymbolPolicy::Permissive)?;
        Ok(FollowSets::new(self, start, first_sets))
    }

    fn predict_sets(&self) -> Result<PredictSets, GrammarError> {
        let first_sets = self.first_sets()?;
        let follow_sets = self.follow_sets_with_first(&first_sets)?;
        Ok(PredictSets::new(self, &first_sets, &follow_sets))
    }
}
