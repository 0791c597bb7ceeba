/// Shunting-yard conversion from lexical tokens to postfix.
///
/// Walks the token sequence once, resolving operator precedence and
/// associativity, telling unary from binary minus, and checking function
/// call boundaries and argument counts.
pub mod core;

/// Entries of the parser's working stacks.
///
/// Defines the closed set of markers the shunting-yard keeps on its operator
/// stack, and the per-parenthesis context that counts function arguments.
pub mod marker;
