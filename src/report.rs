//! Human-readable listing of the three set families.

use std::fmt;

use lookahead_grammar::{Grammar, Symbol};
use lookahead_sets::{Analysis, LookaheadSet, SymbolSets};

/// Marker of FIRST sets.
pub const EPSILON: &str = "ε";
/// Marker of FOLLOW and PREDICT sets.
pub const END_OF_INPUT: &str = "$";

/// A part of the report.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Section {
    /// FIRST sets of nonterminals.
    First,
    /// FOLLOW sets of nonterminals.
    Follow,
    /// PREDICT sets of rules.
    Predict,
}

/// Formats an analysis for inspection. Nonterminals and rules are listed in
/// grammar order, and the terminals of each set in order of first
/// appearance in the grammar.
pub struct Report<'a> {
    grammar: &'a Grammar,
    analysis: &'a Analysis,
    sections: Vec<Section>,
}

impl<'a> Report<'a> {
    /// Creates a report with all sections.
    pub fn new(grammar: &'a Grammar, analysis: &'a Analysis) -> Self {
        Report {
            grammar,
            analysis,
            sections: vec![Section::First, Section::Follow, Section::Predict],
        }
    }

    /// Restricts the report to one section.
    pub fn only(mut self, section: Section) -> Self {
        self.sections = vec![section];
        self
    }

    fn set(&self, set: &LookaheadSet, marker: &str) -> String {
        let mut elems = set
            .iter()
            .map(|&terminal| self.grammar.display_name(terminal))
            .collect::<Vec<_>>();
        if set.has_none() {
            elems.push(marker.into());
        }
        format!("{{{}}}", elems.join(", "))
    }

    fn rule(&self, lhs: Symbol, rhs: &[Symbol]) -> String {
        let mut result = self.grammar.display_name(lhs).into_owned();
        result.push_str(" ::=");
        if rhs.is_empty() {
            result.push(' ');
            result.push_str(EPSILON);
        }
        for &sym in rhs {
            result.push(' ');
            result.push_str(&self.grammar.display_name(sym));
        }
        result
    }

    fn per_symbol(
        &self,
        f: &mut fmt::Formatter,
        sets: &dyn SymbolSets,
        marker: &str,
    ) -> fmt::Result {
        for nonterminal in self.grammar.nonterminals() {
            if let Some(set) = sets.get(nonterminal) {
                writeln!(
                    f,
                    "  {}: {}",
                    self.grammar.display_name(nonterminal),
                    self.set(set, marker)
                )?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, &section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match section {
                Section::First => {
                    writeln!(f, "FIRST sets:")?;
                    self.per_symbol(f, &self.analysis.first, EPSILON)?;
                }
                Section::Follow => {
                    writeln!(f, "FOLLOW sets:")?;
                    self.per_symbol(f, &self.analysis.follow, END_OF_INPUT)?;
                }
                Section::Predict => {
                    writeln!(f, "PREDICT sets:")?;
                    for entry in self.analysis.predict.iter() {
                        writeln!(
                            f,
                            "  {}: {}",
                            self.rule(entry.lhs, &entry.rhs[..]),
                            self.set(&entry.set, END_OF_INPUT)
                        )?;
                    }
                }
            }
        }
        Ok(())
    }
}
