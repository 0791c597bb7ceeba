use std::fmt;

use crate::interpreter::{function::FunctionId, operator::Operator};

/// An operator symbol as written, before it is known whether it is used as
/// a prefix, infix or postfix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawOperator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*` or `×`
    Multiply,
    /// `/` or `÷`
    Divide,
    /// `^`
    Power,
    /// `!`
    Factorial,
}

impl fmt::Display for RawOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Factorial => "!",
        };
        f.write_str(symbol)
    }
}

/// Named mathematical constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantId {
    /// π, written `π` or `pi`.
    Pi,
    /// Euler's number, written `e`.
    E,
}

impl ConstantId {
    /// The constant's value.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

/// A lexical token, in the order it appears in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LexToken {
    /// A numeric literal.
    Number(f64),
    /// An operator symbol, resolved later by the parser.
    Operator(RawOperator),
    /// A function name; must be followed by `(`.
    Function(FunctionId),
    /// A named constant.
    Constant(ConstantId),
    /// The answer register, written `ans` in any case.
    Answer,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
}

/// A token of the postfix (reverse Polish) sequence produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostfixToken {
    /// Push a literal. Constants are emitted as their value.
    Number(f64),
    /// Push the answer register.
    Answer,
    /// Apply an operator to the top `arity` values.
    Operator(Operator),
    /// Call a function on the top `arg_count` values.
    FunctionCall {
        /// The function to call.
        function:  FunctionId,
        /// Number of arguments, already validated against the function.
        arg_count: usize,
    },
}
