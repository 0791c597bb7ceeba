/// The angle unit for trigonometric functions.
///
/// Declares `AngleMode` and the conversions applied at the boundary of the
/// trigonometric functions.
pub mod angle;
/// The evaluator module executes postfix sequences and computes results.
///
/// The evaluator replays the parser's output on a value stack, applies
/// operators and built-in functions, and reports math errors such as
/// division by zero or arguments outside a function's domain.
///
/// # Responsibilities
/// - Runs the stack machine over postfix tokens.
/// - Implements operator and function semantics with their domain checks.
/// - Verifies that a sequence reduces to exactly one finite value.
pub mod evaluator;
/// Result formatting.
///
/// Turns a finite `f64` into the canonical decimal or scientific string shown
/// to users, rounded to twelve significant digits.
pub mod formatter;
/// The table of built-in functions and their arities.
pub mod function;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw expression and produces a stream of tokens:
/// numbers, operator symbols, function names, constants, the answer register
/// and punctuation. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into lexical tokens.
/// - Resolves words to functions, constants or `ANS`.
/// - Reports lexical errors with their byte offset.
pub mod lexer;
/// Operator properties: precedence, associativity, position and arity.
pub mod operator;
/// The parser module turns lexical tokens into postfix order.
///
/// The parser runs the shunting-yard algorithm over the token stream,
/// producing a reverse Polish sequence the evaluator can run directly.
///
/// # Responsibilities
/// - Resolves precedence and associativity.
/// - Distinguishes unary minus from subtraction.
/// - Validates parentheses, commas and function argument counts.
pub mod parser;
/// Token types shared by the lexer, parser and evaluator.
pub mod token;
