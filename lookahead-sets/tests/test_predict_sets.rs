use lookahead_sets::{analyze, GrammarSetsExt};

mod support;

use support::set_of;

#[test]
fn test_expression_predict_sets() {
    let grammar = support::expression_grammar();
    let analysis = analyze(&grammar).unwrap();

    assert_eq!(support::predict(&grammar, &analysis, "E", &["T", "E'"]), set_of(&["id"]));
    assert_eq!(
        support::predict(&grammar, &analysis, "E'", &["+", "T", "E'"]),
        set_of(&["+"])
    );
    assert_eq!(support::predict(&grammar, &analysis, "E'", &[]), set_of(&["$"]));
    assert_eq!(support::predict(&grammar, &analysis, "T", &["id"]), set_of(&["id"]));
    assert_eq!(analysis.predict.len(), grammar.num_rules());
}

#[test]
fn test_nullable_prefix() {
    let grammar = support::grammar(&[
        ("S", &["A", "B", "c"]),
        ("A", &[]),
        ("A", &["a"]),
        ("B", &[]),
        ("B", &["b"]),
    ]);
    let analysis = analyze(&grammar).unwrap();

    assert_eq!(
        support::predict(&grammar, &analysis, "S", &["A", "B", "c"]),
        set_of(&["a", "b", "c"])
    );
    assert_eq!(support::predict(&grammar, &analysis, "A", &[]), set_of(&["b", "c"]));
    assert_eq!(support::predict(&grammar, &analysis, "A", &["a"]), set_of(&["a"]));
    assert_eq!(support::predict(&grammar, &analysis, "B", &[]), set_of(&["c"]));
}

#[test]
fn test_nullable_production_includes_end_of_input() {
    let grammar = support::grammar(&[("S", &["A"]), ("A", &["a"]), ("A", &[])]);
    let analysis = analyze(&grammar).unwrap();

    assert_eq!(support::predict(&grammar, &analysis, "S", &["A"]), set_of(&["a", "$"]));
    assert_eq!(support::predict(&grammar, &analysis, "A", &[]), set_of(&["$"]));
}

#[test]
fn test_terminal_stops_scan() {
    let grammar = support::grammar(&[("S", &["A", "x", "B"]), ("A", &[]), ("B", &["b"])]);
    let analysis = analyze(&grammar).unwrap();

    assert_eq!(
        support::predict(&grammar, &analysis, "S", &["A", "x", "B"]),
        set_of(&["x"])
    );
}

#[test]
fn test_same_production_under_different_heads() {
    let grammar = support::grammar(&[
        ("S", &["A", "B"]),
        ("A", &["x"]),
        ("A", &[]),
        ("B", &["x"]),
        ("B", &[]),
    ]);
    let analysis = analyze(&grammar).unwrap();
    let entries = analysis
        .predict
        .iter()
        .filter(|entry| entry.rhs.is_empty())
        .count();

    assert_eq!(entries, 2);
    assert_eq!(support::predict(&grammar, &analysis, "A", &[]), set_of(&["x", "$"]));
    assert_eq!(support::predict(&grammar, &analysis, "B", &[]), set_of(&["$"]));
}

#[test]
fn test_predict_sets_in_rule_order() {
    let grammar = support::expression_grammar();
    let predict = grammar.predict_sets().unwrap();
    let lhs = predict.iter().map(|entry| entry.lhs).collect::<Vec<_>>();
    let expected = grammar.rules().map(|rule| rule.lhs).collect::<Vec<_>>();

    assert_eq!(lhs, expected);
    assert!(predict.iter().all(|entry| !entry.set.is_empty()));
}
