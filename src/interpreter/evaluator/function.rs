/// Arithmetic builtins.
///
/// Folds `+ - * / % ^ min max` left to right over integer arguments.
pub mod arithmetic;

/// The builtin table and dispatcher.
pub mod core;

/// List builtins.
///
/// Implements `list`, `head`, `tail`, `join` and `eval` over Q-expressions.
pub mod list;
