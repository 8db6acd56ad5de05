//! Context-free grammar model. A grammar is an ordered list of rules `lhs ::= rhs`.
//! Nonterminals are the symbols that appear on the left-hand side of some rule;
//! every other symbol is a terminal.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

pub mod error;
pub mod grammar;
pub mod rule_builder;
pub mod symbol_bit_set;

pub use crate::error::GrammarError;
pub use crate::grammar::{Grammar, GrammarRule, SymbolPolicy};
pub use crate::rule_builder::RuleBuilder;
pub use crate::symbol_bit_set::SymbolBitSet;
pub use lookahead_symbol::{Symbol, SymbolName, SymbolSource};

pub(crate) mod local_prelude {
    pub use crate::grammar::{Grammar, GrammarRule};
    pub use crate::symbol_bit_set::SymbolBitSet;
    pub use lookahead_symbol::{Symbol, SymbolSource};
}
