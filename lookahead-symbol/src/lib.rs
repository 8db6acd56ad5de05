//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! IDs. Names are optional and only kept for display and lookup.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod source;
mod symbol;

pub use self::source::{Generate, SymbolName, SymbolSource};
pub use self::symbol::Symbol;
