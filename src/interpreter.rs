/// The evaluator module reduces values and applies builtins.
///
/// The evaluator walks a value tree, reduces S-expressions bottom up, and hands
/// operator application to the builtin dispatcher. Errors are values here: a
/// failure anywhere in an expression becomes that expression's result.
///
/// # Responsibilities
/// - Evaluates S-expressions; every other value evaluates to itself.
/// - Dispatches to the fixed set of arithmetic and list builtins.
/// - Bounds evaluation depth when configured to.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: brackets, number literals and symbols. Comments and whitespace are
/// skipped and line breaks are counted.
pub mod lexer;
/// The parser module builds the parse tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a tree of [`crate::ast::Node`]s, keeping bracket delimiters and input
/// anchors as nodes of their own.
///
/// # Responsibilities
/// - Converts tokens into S-expression and Q-expression nodes.
/// - Reports unbalanced brackets with line info.
pub mod parser;
/// The reader module turns a parse tree into values.
pub mod reader;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum, the owned child container used by
/// S-expressions and Q-expressions, and the printer that renders values back
/// to text.
pub mod value;
