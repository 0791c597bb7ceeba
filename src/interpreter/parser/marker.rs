use crate::interpreter::{function::FunctionId, operator::Operator};

/// An entry of the shunting-yard operator stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    /// An open parenthesis, grouping or function call.
    LeftParen,
    /// An operator waiting for its right-hand side.
    Operator(Operator),
    /// A function waiting for its `(` and arguments.
    Function(FunctionId),
}

/// What an open parenthesis belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParenContext {
    /// The called function, or `None` for a grouping parenthesis.
    pub function:  Option<FunctionId>,
    /// Arguments seen so far. Starts at one: the first argument needs no
    /// preceding comma.
    pub arg_count: usize,
}

impl ParenContext {
    /// Context for a grouping parenthesis.
    #[must_use]
    pub const fn group() -> Self {
        Self { function:  None,
               arg_count: 1, }
    }

    /// Context for the argument list of `function`.
    #[must_use]
    pub const fn call(function: FunctionId) -> Self {
        Self { function:  Some(function),
               arg_count: 1, }
    }
}
