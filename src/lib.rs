//! FIRST, FOLLOW and PREDICT sets of context-free grammars.
//!
//! ```
//! use lookahead::{analyze, Grammar, GrammarLoadExt, Report};
//!
//! let grammar = Grammar::load("S ::= a S | ε").unwrap();
//! let analysis = analyze(&grammar).unwrap();
//! print!("{}", Report::new(&grammar, &analysis));
//! ```

#![deny(unsafe_code)]

pub mod report;

pub use lookahead_grammar::*;
pub use lookahead_load as load;
pub use lookahead_load::{GrammarLoadExt, LoadError, LoadErrorKind, LoadOptions};
pub use lookahead_sets as sets;
pub use lookahead_sets::{
    analyze, analyze_with, Analysis, FirstSets, FollowSets, GrammarSetsExt, LookaheadSet,
    PredictSets, SymbolSets,
};

pub use crate::report::{Report, Section};
