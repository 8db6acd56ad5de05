//! Definitions of the context-free grammar type and its rules.

use std::borrow::Cow;
use std::rc::Rc;

use log::{debug, trace};

use crate::error::GrammarError;
use crate::local_prelude::*;
use crate::rule_builder::RuleBuilder;

/// Context-free grammar type.
///
/// Maps every nonterminal to the ordered list of its alternatives.
/// The grammar remembers the order in which nonterminals were declared,
/// and the first one is the default start symbol.
#[derive(Clone, Debug, Default)]
pub struct Grammar {
    /// The symbol source.
    sym_source: SymbolSource,
    /// Symbols declared as terminals.
    terminals: SymbolBitSet,
    /// Nonterminals in order of declaration, including those declared
    /// without any alternative.
    declared: Vec<Symbol>,
    /// The array of rules.
    rules: Vec<GrammarRule>,
    /// The assigned start symbol.
    start: Option<Symbol>,
}

/// Standard grammar rule representation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GrammarRule {
    /// The rule's left-hand side symbol.
    pub lhs: Symbol,
    /// The rule's right-hand side symbols. Empty for an ε-rule.
    pub rhs: Rc<[Symbol]>,
}

/// What to do about symbols that are neither nonterminals nor declared
/// terminals.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SymbolPolicy {
    /// Any symbol without rules is a terminal.
    #[default]
    Permissive,
    /// Every symbol without rules must be declared with [`Grammar::terminal`].
    Strict,
}

impl Grammar {
    /// Creates an empty context-free grammar.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns generated anonymous symbols.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        self.sym_source.sym()
    }

    /// Generates a new unique symbol.
    ///
    /// If a name is given, it will be recorded within the symbol
    /// source.
    pub fn next_sym(&mut self, name: Option<Cow<str>>) -> Symbol {
        self.sym_source.next_sym(name)
    }

    /// Generates a new symbol and declares it as a terminal.
    pub fn terminal(&mut self, name: Option<Cow<str>>) -> Symbol {
        let sym = self.sym_source.next_sym(name);
        self.declare_terminal(sym);
        sym
    }

    /// Declares an existing symbol as a terminal.
    pub fn declare_terminal(&mut self, sym: Symbol) {
        self.terminals.set(sym, true);
    }

    /// Returns the set of symbols declared as terminals.
    pub fn declared_terminals(&self) -> &SymbolBitSet {
        &self.terminals
    }

    /// Returns the symbol source.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Returns the name of the given symbol, if it has one.
    pub fn name_of(&self, sym: Symbol) -> Option<&str> {
        self.sym_source.name_of(sym)
    }

    /// Returns the name of the given symbol, or `#id` for anonymous symbols.
    pub fn display_name(&self, sym: Symbol) -> Cow<'_, str> {
        match self.name_of(sym) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("#{}", sym.usize())),
        }
    }

    /// Finds the symbol with the given name.
    pub fn sym_by_name(&self, name: &str) -> Option<Symbol> {
        self.sym_source.sym_by_name(name)
    }

    /// Starts building rules for the given LHS.
    ///
    /// The LHS becomes a declared nonterminal even if no alternative
    /// is added afterwards, which [`Grammar::validate`] reports.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<'_> {
        RuleBuilder::new(self).rule(lhs)
    }

    /// Declares a nonterminal without adding alternatives.
    pub fn declare(&mut self, lhs: Symbol) {
        if !self.declared.contains(&lhs) {
            self.declared.push(lhs);
        }
    }

    /// Adds a rule to the grammar.
    pub fn add_rule(&mut self, rule: GrammarRule) {
        trace!("add rule {:?} ::= {:?}", rule.lhs, &rule.rhs[..]);
        self.declare(rule.lhs);
        self.rules.push(rule);
    }

    /// Assigns the start symbol.
    pub fn set_start(&mut self, start: Symbol) {
        self.start = Some(start);
    }

    /// Returns the start symbol: the assigned one, or else the first
    /// declared nonterminal.
    pub fn start_sym(&self) -> Option<Symbol> {
        self.start.or_else(|| self.declared.first().copied())
    }

    /// Returns an iterator over the list of grammar rules.
    pub fn rules(&self) -> impl Iterator<Item = &GrammarRule> {
        self.rules.iter()
    }

    /// Returns the number of rules.
    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Returns the alternatives of the given nonterminal, in order. Empty for
    /// terminals.
    pub fn productions(&self, lhs: Symbol) -> impl Iterator<Item = &[Symbol]> {
        self.rules
            .iter()
            .filter(move |rule| rule.lhs == lhs)
            .map(|rule| &rule.rhs[..])
    }

    /// Returns nonterminals that have at least one rule, in order of
    /// declaration.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.declared
            .iter()
            .copied()
            .filter(move |&sym| self.is_nonterminal(sym))
    }

    /// Checks whether the symbol is the LHS of some rule.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.rules.iter().any(|rule| rule.lhs == sym)
    }

    /// Checks that the grammar can be analyzed.
    ///
    /// Reports the first problem found, in rule order.
    pub fn validate(&self, policy: SymbolPolicy) -> Result<(), GrammarError> {
        let result = self.check(policy);
        if let Err(ref error) = result {
            debug!("grammar rejected: {}", error);
        }
        result
    }

    fn check(&self, policy: SymbolPolicy) -> Result<(), GrammarError> {
        let nonterminals = self.nonterminal_symbols();
        if let Some(&lhs) = self.declared.iter().find(|&&lhs| !nonterminals[lhs]) {
            return Err(GrammarError::NoAlternatives {
                nonterminal: lhs,
                name: self.display_name(lhs).into_owned(),
            });
        }
        if self.rules.is_empty() {
            return Err(GrammarError::Empty);
        }
        if let Some(start) = self.start {
            if !nonterminals[start] {
                return Err(GrammarError::MissingStart {
                    start,
                    name: self.display_name(start).into_owned(),
                });
            }
        }
        if policy == SymbolPolicy::Strict {
            for rule in &self.rules {
                let undefined = rule
                    .rhs
                    .iter()
                    .find(|&&sym| !nonterminals[sym] && !self.terminals[sym]);
                if let Some(&symbol) = undefined {
                    return Err(GrammarError::UndefinedSymbol {
                        symbol,
                        name: self.display_name(symbol).into_owned(),
                        referenced_by: self.display_name(rule.lhs).into_owned(),
                    });
                }
            }
        }
        Ok(())
    }
}
