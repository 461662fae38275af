/// Core evaluation logic and configuration.
///
/// Contains the evaluator, its depth configuration, and the reduction of
/// S-expressions to values.
pub mod core;

/// Builtin functions.
///
/// Holds the dispatch table together with the arithmetic and list builtins.
pub mod function;

/// Utility functions for evaluation.
///
/// Provides the argument checks shared by the list builtins.
pub mod utils;
