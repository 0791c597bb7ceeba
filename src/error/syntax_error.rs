use crate::interpreter::{function::FunctionId, token::RawOperator};

/// Represents all errors caused by a malformed expression.
///
/// Tokenizer errors carry the byte offset of the offending slice in the
/// source text. Parser errors describe the grammatical rule that was broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// A character that starts no token.
    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedCharacter {
        /// The unrecognized slice.
        found:  String,
        /// Byte offset into the source.
        offset: usize,
    },
    /// A run of digits and dots that is not a number, such as `1.2.3` or `.`.
    #[error("malformed number '{literal}' at offset {offset}")]
    MalformedNumber {
        /// The rejected literal.
        literal: String,
        /// Byte offset into the source.
        offset:  usize,
    },
    /// A word that is neither `ans`, a constant nor a known function.
    #[error("unknown identifier '{name}' at offset {offset}")]
    UnknownIdentifier {
        /// The identifier, lower-cased.
        name:   String,
        /// Byte offset into the source.
        offset: usize,
    },
    /// A value (number, constant, `ANS` or function call) where an operator
    /// was expected.
    #[error("expected an operator but found an operand")]
    UnexpectedOperand,
    /// An operator that has no valid form at its position, such as a leading
    /// `*` or two consecutive infix operators.
    #[error("operator '{symbol}' is not valid here")]
    MisplacedOperator {
        /// The raw operator symbol.
        symbol: RawOperator,
    },
    /// A function name not immediately followed by `(`.
    #[error("function '{function}' must be followed by '('")]
    MissingFunctionParen {
        /// The function that was named.
        function: FunctionId,
    },
    /// A `)` with no matching `(`, or one closing an empty slot.
    #[error("unexpected ')'")]
    UnmatchedRightParen,
    /// A `(` or function call that was never closed.
    #[error("unclosed parenthesis")]
    UnclosedParen,
    /// A `,` outside a function call or directly after another separator.
    #[error("unexpected ','")]
    MisplacedComma,
    /// A function called with a number of arguments outside its bounds.
    #[error("function '{function}' does not accept {found} argument(s)")]
    ArityMismatch {
        /// The called function.
        function: FunctionId,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// The expression ended while an operand was still expected.
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    /// An operator or function found fewer values than it consumes.
    #[error("not enough operands: needed {needed}, found {found}")]
    StackUnderflow {
        /// Values required.
        needed: usize,
        /// Values available.
        found:  usize,
    },
    /// The postfix sequence reduced to more than one value.
    #[error("expression left {count} values instead of one")]
    LeftoverValues {
        /// Values remaining on the stack.
        count: usize,
    },
}
