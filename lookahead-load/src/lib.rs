//! Allows us to load context-free grammars from text with one rule per
//! line:
//!
//! ```text
//! # comment
//! E  ::= T E'
//! E' ::= + T E' | ε
//! T  ::= id
//! ```
//!
//! Symbols are separated by whitespace. `ε` stands for the empty
//! alternative. A head may have rules on several lines.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod basic;
mod string_interner;

use std::error::Error;
use std::fmt;

use lookahead_grammar::GrammarError;

pub use crate::basic::{GrammarLoadExt, LoadOptions, EPSILON, SEPARATOR};

/// Represents an error when loading a grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoadError {
    /// The reason for the error.
    pub kind: LoadErrorKind,
    /// Line where the error happened.
    ///
    /// One-indexed, or zero when the error concerns the grammar as a whole.
    pub line: u32,
    /// Column where the error happened.
    ///
    /// One-indexed, or zero when the error concerns the grammar as a whole.
    pub col: u32,
}

/// The reason for a [`LoadError`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoadErrorKind {
    /// The line has no `::=` between head and body.
    MissingSeparator,
    /// There must be exactly one symbol before `::=`.
    InvalidHead(String),
    /// Nothing follows `::=`.
    NoAlternatives(String),
    /// An alternative between `|` has no symbols. The empty alternative
    /// is written `ε`.
    EmptyAlternative(String),
    /// The requested start symbol does not occur in the grammar.
    UnknownStart(String),
    /// The grammar failed validation.
    Grammar(GrammarError),
}

impl LoadError {
    pub(crate) fn at(kind: LoadErrorKind, line: usize, col: usize) -> Self {
        LoadError {
            kind,
            line: line as u32,
            col: col as u32,
        }
    }

    pub(crate) fn whole(kind: LoadErrorKind) -> Self {
        LoadError {
            kind,
            line: 0,
            col: 0,
        }
    }

    /// Whether the text or the grammar is malformed, as opposed to
    /// referring to undefined symbols.
    pub fn is_malformed(&self) -> bool {
        match &self.kind {
            LoadErrorKind::Grammar(error) => error.is_malformed(),
            LoadErrorKind::UnknownStart(_) => false,
            _ => true,
        }
    }
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadErrorKind::MissingSeparator => {
                write!(f, "malformed grammar: expected `{}` after the head", SEPARATOR)
            }
            LoadErrorKind::InvalidHead(head) => {
                write!(f, "malformed grammar: expected one head symbol, found `{}`", head)
            }
            LoadErrorKind::NoAlternatives(head) => {
                write!(f, "malformed grammar: nonterminal `{}` has no alternatives", head)
            }
            LoadErrorKind::EmptyAlternative(head) => write!(
                f,
                "malformed grammar: empty alternative for `{}`, write `{}` instead",
                head, EPSILON
            ),
            LoadErrorKind::UnknownStart(start) => write!(f, "unknown start symbol `{}`", start),
            LoadErrorKind::Grammar(error) => write!(f, "{}", error),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "line {} column {}: {}", self.line, self.col, self.kind)
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            LoadErrorKind::Grammar(error) => Some(error),
            _ => None,
        }
    }
}

impl From<GrammarError> for LoadError {
    fn from(error: GrammarError) -> Self {
        LoadError::whole(LoadErrorKind::Grammar(error))
    }
}
