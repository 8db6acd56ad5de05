use lookahead_grammar::{Grammar, GrammarError, SymbolPolicy};
use lookahead_load::{GrammarLoadExt, LoadError, LoadErrorKind, LoadOptions};
use test_case::test_case;

#[test]
fn test_load() {
    let grammar = Grammar::load(
        r#"
        E ::= T E'
        E' ::= + T E' | ε
        T ::= id
    "#,
    )
    .unwrap();

    assert_eq!(grammar.num_rules(), 4);
    let names = grammar
        .nonterminals()
        .map(|sym| grammar.display_name(sym).into_owned())
        .collect::<Vec<_>>();
    assert_eq!(names, ["E", "E'", "T"]);
    assert_eq!(grammar.start_sym(), grammar.sym_by_name("E"));

    let e_prime = grammar.sym_by_name("E'").unwrap();
    let productions = grammar.productions(e_prime).collect::<Vec<_>>();
    assert_eq!(productions.len(), 2);
    assert_eq!(productions[0].len(), 3);
    assert!(productions[1].is_empty());
}

#[test]
fn test_symbols_are_shared_by_name() {
    let grammar = Grammar::load("S ::= a S a | b").unwrap();
    let start = grammar.sym_by_name("S").unwrap();
    let a = grammar.sym_by_name("a").unwrap();
    let productions = grammar.productions(start).collect::<Vec<_>>();

    assert_eq!(productions[0], &[a, start, a][..]);
    assert_eq!(grammar.num_syms(), 3);
}

#[test]
fn test_comments_blank_lines_and_repeated_heads() {
    let grammar = Grammar::load(
        "# list of items\n\
         \n\
         L ::= item L\r\n\
         L ::= ε\n",
    )
    .unwrap();
    let list = grammar.sym_by_name("L").unwrap();

    assert_eq!(grammar.productions(list).count(), 2);
}

#[test]
fn test_epsilon_inside_alternative_is_dropped() {
    let grammar = Grammar::load("S ::= a ε b | ε ε").unwrap();
    let start = grammar.sym_by_name("S").unwrap();
    let productions = grammar.productions(start).collect::<Vec<_>>();

    assert_eq!(productions[0].len(), 2);
    assert!(productions[1].is_empty());
    assert_eq!(grammar.sym_by_name("ε"), None);
}

#[test_case("S a b", LoadErrorKind::MissingSeparator, 2, 3 ; "missing separator")]
#[test_case("S T ::= a", LoadErrorKind::InvalidHead("S T".into()), 2, 3 ; "two heads")]
#[test_case("::= a", LoadErrorKind::InvalidHead("".into()), 2, 3 ; "no head")]
#[test_case("S ::=   ", LoadErrorKind::NoAlternatives("S".into()), 2, 8 ; "no alternatives")]
#[test_case("S ::= a | | b", LoadErrorKind::EmptyAlternative("S".into()), 2, 12 ; "empty alternative")]
fn test_malformed_line(line: &str, kind: LoadErrorKind, line_no: u32, col: u32) {
    let text = format!("A ::= a\n  {}\n", line);
    let error = Grammar::load(&text).unwrap_err();

    assert_eq!(
        error,
        LoadError {
            kind,
            line: line_no,
            col
        }
    );
    assert!(error.is_malformed());
    assert!(error.to_string().starts_with("line 2 column"));
}

#[test]
fn test_empty_text() {
    let error = Grammar::load("# nothing here\n").unwrap_err();

    assert_eq!(error.kind, LoadErrorKind::Grammar(GrammarError::Empty));
    assert_eq!((error.line, error.col), (0, 0));
    assert!(error.is_malformed());
}

#[test]
fn test_strict_policy() {
    let text = "S ::= a B\nB ::= b | ε";
    let mut options = LoadOptions {
        policy: SymbolPolicy::Strict,
        terminals: vec!["a".to_string()],
        start: None,
    };

    let error = Grammar::load_with(text, &options).unwrap_err();
    match error.kind {
        LoadErrorKind::Grammar(GrammarError::UndefinedSymbol {
            ref name,
            ref referenced_by,
            ..
        }) => {
            assert_eq!(name, "b");
            assert_eq!(referenced_by, "B");
        }
        ref other => panic!("unexpected error {:?}", other),
    }
    assert!(!error.is_malformed());

    options.terminals.push("b".to_string());
    let grammar = Grammar::load_with(text, &options).unwrap();
    let b = grammar.sym_by_name("b").unwrap();
    assert!(grammar.declared_terminals().contains(b));

    assert!(Grammar::load(text).is_ok());
}

#[test]
fn test_start_option() {
    let text = "A ::= a\nS ::= A s";
    let options = LoadOptions {
        start: Some("S".to_string()),
        ..LoadOptions::default()
    };
    let grammar = Grammar::load_with(text, &options).unwrap();
    assert_eq!(grammar.start_sym(), grammar.sym_by_name("S"));

    let options = LoadOptions {
        start: Some("X".to_string()),
        ..LoadOptions::default()
    };
    let error = Grammar::load_with(text, &options).unwrap_err();
    assert_eq!(error.kind, LoadErrorKind::UnknownStart("X".to_string()));

    let options = LoadOptions {
        start: Some("s".to_string()),
        ..LoadOptions::default()
    };
    let error = Grammar::load_with(text, &options).unwrap_err();
    assert!(matches!(
        error.kind,
        LoadErrorKind::Grammar(GrammarError::MissingStart { .. })
    ));
}
