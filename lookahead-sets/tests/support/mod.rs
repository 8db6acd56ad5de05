#![allow(dead_code)]

use std::collections::BTreeSet;

use lookahead_grammar::{Grammar, Symbol};
use lookahead_sets::{Analysis, LookaheadSet, SymbolSets};

/// Builds a grammar from `(lhs, rhs)` pairs, one pair per alternative.
/// Symbols are created by name, in order of first appearance.
pub fn grammar(rules: &[(&str, &[&str])]) -> Grammar {
    let mut grammar = Grammar::new();
    for &(lhs, rhs) in rules {
        let lhs = sym_or_new(&mut grammar, lhs);
        let rhs = rhs
            .iter()
            .map(|name| sym_or_new(&mut grammar, name))
            .collect::<Vec<_>>();
        grammar.rule(lhs).rhs(rhs);
    }
    grammar
}

/// Like `grammar`, with an assigned start symbol.
pub fn grammar_with_start(rules: &[(&str, &[&str])], start: &str) -> Grammar {
    let mut grammar = grammar(rules);
    let start = sym(&grammar, start);
    grammar.set_start(start);
    grammar
}

fn sym_or_new(grammar: &mut Grammar, name: &str) -> Symbol {
    match grammar.sym_by_name(name) {
        Some(sym) => sym,
        None => grammar.next_sym(Some(name.into())),
    }
}

pub fn sym(grammar: &Grammar, name: &str) -> Symbol {
    grammar
        .sym_by_name(name)
        .unwrap_or_else(|| panic!("no symbol named {}", name))
}

pub fn names(grammar: &Grammar, set: &LookaheadSet, marker: &str) -> BTreeSet<String> {
    let mut result = set
        .iter()
        .map(|&terminal| grammar.display_name(terminal).into_owned())
        .collect::<BTreeSet<_>>();
    if set.has_none() {
        result.insert(marker.to_string());
    }
    result
}

pub fn set_of(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub fn first(grammar: &Grammar, analysis: &Analysis, name: &str) -> BTreeSet<String> {
    let set = analysis.first.get(sym(grammar, name)).expect("FIRST set");
    names(grammar, set, "ε")
}

pub fn follow(grammar: &Grammar, analysis: &Analysis, name: &str) -> BTreeSet<String> {
    let set = analysis.follow.get(sym(grammar, name)).expect("FOLLOW set");
    names(grammar, set, "$")
}

pub fn predict(grammar: &Grammar, analysis: &Analysis, lhs: &str, rhs: &[&str]) -> BTreeSet<String> {
    let rhs = rhs.iter().map(|name| sym(grammar, name)).collect::<Vec<_>>();
    let set = analysis
        .predict
        .get(sym(grammar, lhs), &rhs[..])
        .expect("PREDICT set");
    names(grammar, set, "$")
}

/// All three set families, by symbol name, for comparing grammars whose
/// symbols were created in different orders.
pub fn by_name(grammar: &Grammar, analysis: &Analysis) -> Vec<(String, BTreeSet<String>)> {
    let mut result = vec![];
    for (nonterminal, set) in analysis.first.iter() {
        let name = format!("FIRST {}", grammar.display_name(nonterminal));
        result.push((name, names(grammar, set, "ε")));
    }
    for (nonterminal, set) in analysis.follow.iter() {
        let name = format!("FOLLOW {}", grammar.display_name(nonterminal));
        result.push((name, names(grammar, set, "$")));
    }
    for entry in analysis.predict.iter() {
        let rhs = entry
            .rhs
            .iter()
            .map(|&sym| grammar.display_name(sym).into_owned())
            .collect::<Vec<_>>();
        let name = format!("PREDICT {} ::= {}", grammar.display_name(entry.lhs), rhs.join(" "));
        result.push((name, names(grammar, &entry.set, "$")));
    }
    result.sort();
    result
}

/// The expression grammar `E ::= T E'`, `E' ::= + T E' | ε`, `T ::= id`.
pub fn expression_grammar() -> Grammar {
    grammar(&[
        ("E", &["T", "E'"]),
        ("E'", &["+", "T", "E'"]),
        ("E'", &[]),
        ("T", &["id"]),
    ])
}
