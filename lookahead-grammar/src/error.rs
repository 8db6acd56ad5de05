//! Errors found while validating a grammar.

use std::error::Error;
use std::fmt;

use crate::local_prelude::*;

/// Represents a grammar that cannot be analyzed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// The grammar has no rules.
    Empty,
    /// A nonterminal was declared with zero alternatives.
    NoAlternatives {
        /// The declared nonterminal.
        nonterminal: Symbol,
        /// Its name, or `#id` for anonymous symbols.
        name: String,
    },
    /// A symbol on the RHS of a rule is neither a nonterminal nor a declared
    /// terminal. Only reported under [`SymbolPolicy::Strict`].
    ///
    /// [`SymbolPolicy::Strict`]: crate::SymbolPolicy::Strict
    UndefinedSymbol {
        /// The offending symbol.
        symbol: Symbol,
        /// Its name, or `#id` for anonymous symbols.
        name: String,
        /// Name of the LHS of the rule that refers to it.
        referenced_by: String,
    },
    /// The assigned start symbol has no rules.
    MissingStart {
        /// The assigned start symbol.
        start: Symbol,
        /// Its name, or `#id` for anonymous symbols.
        name: String,
    },
}

impl GrammarError {
    /// Whether this is a malformed grammar, as opposed to a reference to an
    /// undefined symbol.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, GrammarError::UndefinedSymbol { .. })
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GrammarError::Empty => write!(f, "malformed grammar: no rules"),
            GrammarError::NoAlternatives { name, .. } => {
                write!(f, "malformed grammar: nonterminal `{}` has no alternatives", name)
            }
            GrammarError::UndefinedSymbol {
                name,
                referenced_by,
                ..
            } => write!(
                f,
                "undefined symbol `{}` referenced by a rule of `{}`",
                name, referenced_by
            ),
            GrammarError::MissingStart { name, .. } => {
                write!(f, "malformed grammar: start symbol `{}` has no rules", name)
            }
        }
    }
}

impl Error for GrammarError {}
