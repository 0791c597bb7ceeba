/// The postfix stack machine.
///
/// Replays a postfix sequence against a value stack, dispatching operators
/// and function calls, and checks that exactly one value remains.
pub mod core;

/// Unary operator evaluation.
///
/// Implements negation and factorial.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements addition, subtraction, multiplication, division and power,
/// including the division-by-zero check.
pub mod binary;

/// Built-in function evaluation.
///
/// Applies trigonometric, logarithmic and other functions with their domain
/// checks and angle-mode conversions.
pub mod function;

/// Shared checks for evaluation results.
pub mod utils;
