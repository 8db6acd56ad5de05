//! Source

use std::borrow::Cow;
use std::rc::Rc;

use crate::Symbol;

/// The name of a symbol, as it was written in the grammar.
pub type SymbolName = Rc<str>;

/// A source of numeric symbols.
///
/// Every generated symbol may carry a name. Symbols generated without
/// a name are anonymous.
#[derive(Clone, Debug, Default)]
pub struct SymbolSource {
    names: Vec<Option<SymbolName>>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns generated anonymous symbols.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        let mut result = [Symbol::default(); N];
        for dest in &mut result {
            *dest = self.next_sym(None);
        }
        result
    }

    /// Generates a new unique symbol.
    ///
    /// If a name is given, it will be recorded within the symbol
    /// source.
    pub fn next_sym(&mut self, name: Option<Cow<str>>) -> Symbol {
        let ret = Symbol::from(self.names.len());
        self.names.push(name.map(|name| Rc::from(name.as_ref())));
        ret
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }

    /// Returns the name of the given symbol, if it has one.
    pub fn name_of(&self, sym: Symbol) -> Option<&str> {
        self.names.get(sym.usize()).and_then(|name| name.as_deref())
    }

    /// Finds the first symbol with the given name.
    pub fn sym_by_name(&self, name: &str) -> Option<Symbol> {
        self.names
            .iter()
            .position(|n| n.as_deref() == Some(name))
            .map(Symbol::from)
    }

    /// Iterates over all generated symbols in order of generation.
    pub fn syms(&self) -> impl Iterator<Item = Symbol> {
        (0..self.num_syms()).map(Symbol::from)
    }

    /// Returns an iterator that generates anonymous symbols.
    pub fn generate(&mut self) -> Generate<'_> {
        Generate { source: self }
    }
}

/// Iterator for generating symbols.
pub struct Generate<'a> {
    source: &'a mut SymbolSource,
}

impl<'a> Iterator for Generate<'a> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.source.next_sym(None))
    }
}
