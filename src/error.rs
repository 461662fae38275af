/// Parsing errors.
///
/// Defines the errors the grammar front end can raise while lexing and parsing
/// source text: unknown characters, stray closing delimiters and lists that are
/// never closed. These never reach the evaluator.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the closed set of error kinds an expression can reduce to, plus the
/// `LispError` type that pairs a kind with an optional detail message. Unlike
/// parse errors, these travel through the evaluator as ordinary values.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{ErrorKind, LispError};
