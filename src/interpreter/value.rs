/// Owned child sequences.
///
/// Defines `Cells`, the container behind S-expressions and Q-expressions, and
/// the three ownership moves used by the evaluator and builtins: `pop` detaches
/// one child, `take` keeps one child and drops the rest, and `join` moves all
/// children of one list onto another.
pub mod cells;

/// The `Value` enum and its printer.
///
/// Declares the five runtime variants (number, error, symbol, S-expression,
/// Q-expression), small constructors and accessors, and the `Display` impl that
/// renders a value back to source-like text.
pub mod core;
