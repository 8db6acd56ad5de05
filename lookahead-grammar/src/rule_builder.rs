//! Grammar rules can be built with the builder pattern.

use std::convert::AsRef;

use crate::local_prelude::*;

/// The rule builder.
pub struct RuleBuilder<'a> {
    lhs: Option<Symbol>,
    grammar: &'a mut Grammar,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder.
    pub fn new(grammar: &'a mut Grammar) -> Self {
        RuleBuilder { lhs: None, grammar }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: Symbol) -> Self {
        self.grammar.declare(lhs);
        self.lhs = Some(lhs);
        self
    }

    /// Adds a rule alternative to the grammar. An empty slice is the
    /// ε-alternative.
    ///
    /// # Panics
    ///
    /// Panics if called before [`RuleBuilder::rule`].
    pub fn rhs<S>(self, syms: S) -> Self
    where
        S: AsRef<[Symbol]>,
    {
        let lhs = self.lhs.expect("rhs added before a rule was started");
        self.grammar.add_rule(GrammarRule {
            lhs,
            rhs: syms.as_ref().into(),
        });
        self
    }
}
