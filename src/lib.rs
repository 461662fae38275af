//! # lispty
//!
//! lispty is a small Lisp-like expression evaluator written in Rust.
//! It reads S-expressions and Q-expressions over 64-bit integers, evaluates
//! them with a fixed set of arithmetic and list builtins, and renders the
//! result back to text. Errors are values: a failing expression evaluates to
//! an error that is printed like any other result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        evaluator::core::Evaluator,
        lexer::{LexerExtras, Token},
        parser::core::parse_program,
        reader::read,
        value::core::Value,
    },
};

/// Defines the generic parse tree.
///
/// This module declares the `Node` type the parser produces and the reader
/// consumes, together with the `NodeKind` enum that classifies each node.
/// Classification happens once, when a node is built, so nothing downstream
/// inspects grammar tags.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// Parse errors stop a line before it is evaluated and carry the source line.
/// Evaluation errors are a closed kind plus an optional detail message and are
/// carried inside values.
pub mod error;
/// Orchestrates reading, evaluating and printing.
///
/// This module ties together lexing, parsing, reading, evaluation and value
/// representation to provide a complete path from source text to a result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, reader, evaluator, and
///   value types.
/// - Keeps each phase independent of the others' internals.
pub mod interpreter;
/// General utilities for arithmetic and deep recursion.
pub mod util;

/// Lexes and parses source text into a parse tree.
///
/// # Errors
/// Returns a `ParseError` for characters outside the grammar and for
/// unbalanced brackets.
pub fn parse_source(source: &str) -> Result<Node, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    parse_program(&mut tokens.iter().peekable())
}

/// Parses, reads and evaluates source text, returning the result value.
///
/// The whole line is read as one S-expression, so `+ 1 2` and `(+ 1 2)` mean
/// the same thing.
///
/// # Errors
/// Returns a `ParseError` if the source does not parse. Evaluation failures are
/// not errors here; they come back as `Value::Error`.
pub fn evaluate_source(source: &str, evaluator: &Evaluator) -> Result<Value, ParseError> {
    let tree = parse_source(source)?;

    Ok(evaluator.eval(read(&tree)))
}

/// Returns the rendered result of evaluating `source` with `evaluator`.
///
/// # Errors
/// Returns a `ParseError` if the source does not parse.
pub fn get_result_with(source: &str, evaluator: &Evaluator) -> Result<String, ParseError> {
    evaluate_source(source, evaluator).map(|value| value.to_string())
}

/// Returns the rendered result of evaluating `source` with the default
/// configuration.
///
/// # Errors
/// Returns a `ParseError` if the source does not parse.
///
/// # Examples
/// ```
/// use lispty::get_result;
///
/// assert_eq!(get_result("+ 1 2 3").unwrap(), "6");
/// assert_eq!(get_result("eval (tail {tail tail {5 6 7}})").unwrap(), "{6 7}");
///
/// // Evaluation errors are ordinary results.
/// assert_eq!(get_result("(/ 10 0)").unwrap(), "Division By Zero");
///
/// // Unbalanced input never reaches the evaluator.
/// assert!(get_result("(+ 1 2").is_err());
/// ```
pub fn get_result(source: &str) -> Result<String, ParseError> {
    get_result_with(source, &Evaluator::default())
}
