use std::fs;

use arithma_front::{
    ast::Node,
    error::ErrorKind,
    interpreter::{
        lexer::{Token, TokenKind, tokenize},
        parser::core::MAX_NESTING,
    },
    run,
};
use rstest::rstest;
use walkdir::WalkDir;

/// Every input line of the `.expr` files under `dir`, skipping blank lines
/// and `#` comments.
fn case_lines(dir: &str) -> Vec<(String, String)> {
    let mut cases = Vec::new();

    for entry in WalkDir::new(dir).into_iter()
                                  .filter_map(Result::ok)
                                  .filter(|e| e.path().extension().is_some_and(|ext| ext == "expr"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for line in content.lines() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            cases.push((path.display().to_string(), line.to_string()));
        }
    }

    cases
}

fn assert_success(src: &str) -> Node {
    run("test", src).unwrap_or_else(|e| panic!("Input {src:?} failed: {e}"))
}

fn assert_failure(src: &str) -> ErrorKind {
    match run("test", src) {
        Ok(tree) => panic!("Input {src:?} parsed to {tree} but was expected to fail"),
        Err(e) => e.kind,
    }
}

#[test]
fn passing_cases_parse() {
    let cases = case_lines("tests/cases/pass");
    assert!(!cases.is_empty(), "No cases found in tests/cases/pass");

    for (file, line) in cases {
        if let Err(e) = run(&file, &line) {
            panic!("{file}: {line:?} failed: {e}");
        }
    }
}

#[test]
fn failing_cases_fail() {
    let cases = case_lines("tests/cases/fail");
    assert!(!cases.is_empty(), "No cases found in tests/cases/fail");

    for (file, line) in cases {
        if let Ok(tree) = run(&file, &line) {
            panic!("{file}: {line:?} parsed to {tree} but was expected to fail");
        }
    }
}

#[rstest]
#[case("1-2-3", "((1 - 2) - 3)")]
#[case("2+3*4", "(2 + (3 * 4))")]
#[case("(2+3)*4", "((2 + 3) * 4)")]
#[case("8 / 4 * 2", "((8 / 4) * 2)")]
#[case("1 + 2 - 3 + 4", "(((1 + 2) - 3) + 4)")]
#[case("1 * (2 - 3.5) / 4", "((1 * (2 - 3.5)) / 4)")]
#[case("(((7.)))", "7.0")]
fn precedence_and_associativity(#[case] src: &str, #[case] canonical: &str) {
    assert_eq!(assert_success(src).to_canonical(), canonical);
}

#[rstest]
#[case("1 + x", ErrorKind::IllegalCharacter)]
#[case("1.2.3", ErrorKind::IllegalCharacter)]
#[case("1 +\n2", ErrorKind::IllegalCharacter)]
#[case("99999999999999999999", ErrorKind::LiteralTooLarge)]
#[case("", ErrorKind::ExpectedExpression)]
#[case("+", ErrorKind::ExpectedExpression)]
#[case("2 * / 3", ErrorKind::ExpectedExpression)]
#[case("(1+2", ErrorKind::ExpectedClosingParen)]
#[case("(1+2 3)", ErrorKind::ExpectedClosingParen)]
#[case("1 + 2)", ErrorKind::UnexpectedTrailingToken)]
#[case("4 (5)", ErrorKind::UnexpectedTrailingToken)]
#[case("1e400", ErrorKind::IllegalCharacter)]
fn errors_have_the_expected_kind(#[case] src: &str, #[case] kind: ErrorKind) {
    assert_eq!(assert_failure(src), kind);
}

#[test]
fn tree_form_matches_token_repr() {
    assert_eq!(assert_success("1 + 2").to_string(), "(INT:1, PLUS, INT:2)");
    assert_eq!(assert_success("(1.5 - 2) / 3").to_string(),
               "((FLOAT:1.5, MINUS, INT:2), DIV, INT:3)");
    assert_eq!(assert_success("0").to_string(), "INT:0");
}

#[test]
fn empty_and_blank_input_lex_to_nothing() {
    assert!(tokenize("test", "").unwrap().is_empty());
    assert!(tokenize("test", "   ").unwrap().is_empty());
    assert!(tokenize("test", "\t \t").unwrap().is_empty());
}

#[test]
fn token_kinds_in_order() {
    let stream = tokenize("test", "(1.5 + 2) * 3 / 4 - 5").unwrap();
    assert_eq!(stream.kinds(),
               vec![TokenKind::LParen,
                    TokenKind::Float,
                    TokenKind::Plus,
                    TokenKind::Int,
                    TokenKind::RParen,
                    TokenKind::Mul,
                    TokenKind::Int,
                    TokenKind::Div,
                    TokenKind::Int,
                    TokenKind::Minus,
                    TokenKind::Int]);
    assert_eq!(stream.to_tokens()[1], Token::Float(1.5));
}

#[test]
fn rendered_errors_name_file_and_line() {
    let error = run("calc", "1 + $").unwrap_err();
    assert_eq!(error.to_string(), "Illegal Character: '$' file: calc, line: 0");
    assert_eq!(error.details, "'$'");
    assert_eq!(error.pos_start.index, 4);
    assert_eq!(error.pos_end.index, 5);

    let error = run("calc", "1 + 2 3").unwrap_err();
    assert_eq!(error.to_string(),
               "Unexpected Trailing Token: INT:3 after a complete expression file: calc, line: 0");
}

#[test]
fn lexing_failure_skips_parsing() {
    // Both a lexical and a syntactic problem: the lexical one wins.
    assert_eq!(assert_failure("(1 + @"), ErrorKind::IllegalCharacter);
}

#[test]
fn canonical_form_parses_back_to_the_same_tree() {
    for (_, line) in case_lines("tests/cases/pass") {
        let tree = assert_success(&line);
        assert_eq!(assert_success(&tree.to_canonical()), tree, "input {line:?}");
    }
}

#[test]
fn deep_input_fails_instead_of_aborting() {
    let parens = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));
    assert_eq!(assert_failure(&parens), ErrorKind::NestingTooDeep);

    let chain = vec!["1"; 100_000].join("+");
    let error = run("calc", &chain).unwrap_err();
    assert_eq!(error.kind, ErrorKind::NestingTooDeep);
    assert_eq!(error.to_string(),
               format!("Nesting Too Deep: expression nests deeper than {MAX_NESTING} levels \
                        file: calc, line: 0"));
}

#[test]
fn deepest_accepted_trees_render_and_round_trip() {
    let chain = vec!["1.5"; MAX_NESTING].join(" / ");
    let tree = assert_success(&chain);
    assert_eq!(tree.depth(), MAX_NESTING);
    assert_eq!(assert_success(&tree.to_canonical()), tree);
    assert!(tree.to_string().starts_with(&"(".repeat(MAX_NESTING - 1)));
}

#[test]
fn oversized_real_literal_is_too_large() {
    let literal = format!("{}.", "9".repeat(400));
    let error = run("calc", &format!("1 + {literal}")).unwrap_err();
    assert_eq!(error.kind, ErrorKind::LiteralTooLarge);
    assert_eq!(error.details, format!("{literal} does not fit in a 64-bit number"));
    assert_eq!(error.pos_start.index, 4);
}
