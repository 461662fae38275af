use std::fs;

use lispty::{
    error::{ErrorKind, ParseError},
    evaluate_source, get_result, get_result_with,
    interpreter::{
        evaluator::{
            core::{EvalConfig, Evaluator},
            function::core::BUILTIN_FUNCTIONS,
        },
        lexer::Token,
        parser::core::parse_expression,
        value::core::Value,
    },
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn script_transcripts_hold() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lisp"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (source, expected) in extract_transcript(&content) {
            count += 1;
            match get_result(source) {
                Ok(rendered) => assert_eq!(rendered, expected, "{source} in {path:?}"),
                Err(e) => panic!("Example {source:?} in {path:?} failed to parse: {e}"),
            }
        }
    }

    assert!(count > 0, "No transcript lines found in tests/scripts");
}

/// Splits `expression ;=> expected` lines; anything else is ignored.
fn extract_transcript(content: &str) -> Vec<(&str, &str)> {
    content.lines()
           .filter_map(|line| line.split_once(";=>"))
           .map(|(source, expected)| (source.trim(), expected.trim()))
           .collect()
}

fn assert_renders(src: &str, expected: &str) {
    match get_result(src) {
        Ok(rendered) => assert_eq!(rendered, expected, "{src}"),
        Err(e) => panic!("Script failed to parse: {e}"),
    }
}

fn error_kind(src: &str) -> ErrorKind {
    match evaluate_source(src, &Evaluator::default()) {
        Ok(Value::Error(error)) => error.kind,
        Ok(other) => panic!("{src} evaluated to {other} instead of an error"),
        Err(e) => panic!("Script failed to parse: {e}"),
    }
}

#[test]
fn arithmetic_folds_left_to_right() {
    assert_renders("(+ 1 2 3)", "6");
    assert_renders("(- 10 4 1)", "5");
    assert_renders("(- 5)", "-5");
    assert_renders("(* 2 (+ 1 1) 3)", "12");
    assert_renders("(/ 20 2 5)", "2");
}

#[test]
fn min_and_max_track_extremes() {
    assert_renders("(min 3 1 2)", "1");
    assert_renders("(max 3 1 2)", "3");
    assert_renders("(max -3 -1 -2)", "-1");
}

#[test]
fn list_builtins_select_and_concatenate() {
    assert_renders("eval {list 1 2 3}", "{1 2 3}");
    assert_renders("head (eval {list 1 2 3})", "{1}");
    assert_renders("tail (eval {list 1 2 3})", "{2 3}");
    assert_renders("join {1} {2 3} {}", "{1 2 3}");
}

#[test]
fn join_is_associative() {
    let left = get_result("join (join {1 2} {3}) {4 5}").unwrap();
    let right = get_result("join {1 2} (join {3} {4 5})").unwrap();

    assert_eq!(left, right);
    assert_eq!(left, "{1 2 3 4 5}");
}

#[test]
fn values_other_than_sexpr_evaluate_to_themselves() {
    let evaluator = Evaluator::default();

    assert_eq!(evaluator.eval(Value::Number(42)), Value::Number(42));
    assert_eq!(evaluator.eval(Value::symbol("head")), Value::symbol("head"));
    assert_eq!(evaluator.eval(Value::sexpr([])), Value::sexpr([]));

    let quoted = Value::qexpr([Value::symbol("+"), Value::Number(1), Value::Number(2)]);
    assert_eq!(evaluator.eval(quoted),
               Value::qexpr([Value::symbol("+"), Value::Number(1), Value::Number(2)]));
}

#[test]
fn single_element_sexpr_unwraps() {
    let evaluator = Evaluator::default();

    assert_eq!(evaluator.eval(Value::sexpr([Value::Number(7)])), Value::Number(7));
    assert_eq!(evaluator.eval(Value::sexpr([Value::sexpr([Value::symbol("max")])])),
               Value::symbol("max"));
}

#[test]
fn errors_carry_their_kind() {
    assert_eq!(error_kind("(/ 10 0)"), ErrorKind::DivisionByZero);
    assert_eq!(error_kind("(% 10 0)"), ErrorKind::DivisionByZero);
    assert_eq!(error_kind("head {}"), ErrorKind::EmptyList);
    assert_eq!(error_kind("tail {}"), ErrorKind::EmptyList);
    assert_eq!(error_kind("head 1"), ErrorKind::TypeMismatch);
    assert_eq!(error_kind("head {1} {2}"), ErrorKind::ArgumentCount);
    assert_eq!(error_kind("(+ 1 {2})"), ErrorKind::TypeMismatch);
    assert_eq!(error_kind("eval 5"), ErrorKind::TypeMismatch);
    assert_eq!(error_kind("(foo 1 2)"), ErrorKind::UnknownFunction);
    assert_eq!(error_kind("(1 2 3)"), ErrorKind::NotASymbol);
    assert_eq!(error_kind("123456789012345678901234567890"), ErrorKind::BadNumber);
    assert_eq!(error_kind("(* 9223372036854775807 2)"), ErrorKind::Overflow);
    assert_eq!(error_kind("(- -9223372036854775807 1 1)"), ErrorKind::Overflow);
    assert_eq!(error_kind("(/ -9223372036854775808 -1)"), ErrorKind::Overflow);
}

#[test]
fn first_error_replaces_whole_expression() {
    assert_renders("(+ 1 (/ 4 0) (foo))", "Division By Zero");
    assert_renders("(list (head {}) (/ 1 0))", "Function 'head' passed {}");
    assert_renders("{1 (/ 1 0)}", "{1 (/ 1 0)}");
}

#[test]
fn division_by_zero_aborts_the_fold() {
    assert_renders("(/ 100 0 0)", "Division By Zero");
    assert_renders("(% 7 2 0 5)", "Division By Zero");
}

#[test]
fn independent_reads_render_identically() {
    let source = "join (list 1 (+ 2 3)) (tail {9 (- 4) {x}}) {eval}";

    let first = get_result(source).unwrap();
    let second = get_result(source).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, "{1 5 (- 4) {x} eval}");
}

#[test]
fn depth_bound_stops_deep_expressions() {
    let bounded = Evaluator::new(EvalConfig { max_depth: Some(2) });
    let source = "(+ 1 (+ 1 (+ 1 1)))";

    match evaluate_source(source, &bounded) {
        Ok(Value::Error(error)) => assert_eq!(error.kind, ErrorKind::DepthExceeded),
        other => panic!("expected a depth error, got {other:?}"),
    }

    let roomy = Evaluator::new(EvalConfig { max_depth: Some(4) });
    assert_eq!(get_result_with(source, &roomy).unwrap(), "4");
}

#[test]
fn depth_bound_applies_inside_eval() {
    let bounded = Evaluator::new(EvalConfig { max_depth: Some(3) });

    assert_eq!(get_result_with("eval {+ 1 2}", &bounded).unwrap(), "3");
    assert_eq!(get_result_with("eval {eval {eval {+ 1 2}}}", &bounded).unwrap(),
               "Maximum evaluation depth of 3 exceeded");
}

const DEEP: usize = 200_000;

#[test]
fn deep_nesting_without_bound_evaluates() {
    let source = format!("{}{}{}", "(".repeat(DEEP), "+ 1 2", ")".repeat(DEEP));

    assert_renders(&source, "3");
}

#[test]
fn deep_nesting_with_bound_reports_depth() {
    let bounded = Evaluator::new(EvalConfig { max_depth: Some(10) });
    let source = format!("{}1{}", "(".repeat(DEEP), ")".repeat(DEEP));

    assert_eq!(get_result_with(&source, &bounded).unwrap(),
               "Maximum evaluation depth of 10 exceeded");
}

#[test]
fn deep_quoted_lists_render_and_drop() {
    let source = format!("{}{}", "{".repeat(DEEP), "}".repeat(DEEP));

    let value = evaluate_source(&source, &Evaluator::default()).unwrap();
    let rendered = value.to_string();
    drop(value);

    assert_eq!(rendered.len(), 2 * DEEP);
    assert!(rendered.starts_with("{{{") && rendered.ends_with("}}}"));
}

#[test]
fn unbalanced_input_is_a_parse_error() {
    assert_eq!(get_result("(+ 1 2"),
               Err(ParseError::UnclosedDelimiter { delimiter: '(',
                                                   line:      1, }));
    assert_eq!(get_result("{1 2"),
               Err(ParseError::UnclosedDelimiter { delimiter: '{',
                                                   line:      1, }));
    assert_eq!(get_result("+ 1 2)"),
               Err(ParseError::UnexpectedToken { token: ")".to_string(),
                                                 line:  1, }));
    assert_eq!(get_result("(+ 1 2}"),
               Err(ParseError::UnexpectedToken { token: "}".to_string(),
                                                 line:  1, }));
}

#[test]
fn exhausted_stream_reports_the_given_line() {
    let tokens: Vec<(Token, usize)> = Vec::new();

    assert_eq!(parse_expression(&mut tokens.iter().peekable(), 3),
               Err(ParseError::UnexpectedEndOfInput { line: 3 }));
}

#[test]
fn remainder_of_most_negative_by_minus_one_is_zero() {
    assert_renders("(% -9223372036854775808 -1)", "0");
    assert_renders("(% -9223372036854775808 7 -1)", "0");
}

#[test]
fn unknown_characters_are_parse_errors_with_lines() {
    let err = get_result("(+ 1\n 2 #)").unwrap_err();

    assert_eq!(err.line(), 2);
    assert_eq!(err.to_string(), "Error on line 2: Unexpected token: #.");
}

#[test]
fn comments_and_line_breaks_are_ignored() {
    assert_renders("(+ 1 ; one\n 2) ; two", "3");
}

#[test]
fn empty_input_is_the_empty_expression() {
    assert_renders("", "()");
    assert_renders("   ", "()");
}

#[test]
fn vocabulary_is_closed() {
    assert_eq!(BUILTIN_FUNCTIONS,
               ["list", "head", "tail", "join", "eval", "+", "-", "*", "/", "%", "^", "min", "max"]);

    for name in BUILTIN_FUNCTIONS {
        assert!(!get_result(name).unwrap().contains("Unknown"), "{name}");
    }
    assert_renders("(sqrt 4)", "Unknown Function");
}
