/// Integer exponentiation helpers.
///
/// Provides checked integer power that matches a real-valued power truncated
/// toward zero, without ever going through floating point.
pub mod num;
/// Stack growth for deep recursion.
///
/// Wraps the recursive steps of the parser, reader and evaluator so that deeply
/// nested input grows the stack on demand instead of overflowing it.
pub mod stack;
