/// Core parsing entry points.
///
/// Parses a whole program into a root node and single expressions into number,
/// symbol or list nodes.
pub mod core;

/// Utility functions for parsing.
///
/// Provides the shared routine that parses a bracketed list of expressions for
/// both S-expressions and Q-expressions.
pub mod utils;
