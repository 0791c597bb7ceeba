/// Structural errors.
///
/// Defines every failure that can be detected before a value exists: unknown
/// characters, malformed numerals, unknown identifiers, misplaced operators,
/// unbalanced parentheses and wrong function arity. The evaluator also raises
/// these when a postfix sequence does not reduce to exactly one value.
pub mod syntax_error;
/// Value-domain errors.
///
/// Contains the errors raised while computing: division by a near-zero
/// divisor, arguments outside a function's domain, invalid factorial operands
/// and non-finite results.
pub mod math_error;

use std::fmt;

pub use math_error::MathError;
pub use syntax_error::SyntaxError;

/// The two classes of failure an evaluation can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed structure: bad tokens, unbalanced parentheses, wrong arity,
    /// dangling operators.
    Syntax,
    /// A value-domain violation found while computing.
    Math,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax error"),
            Self::Math => write!(f, "math error"),
        }
    }
}

/// Any failure produced by the evaluation pipeline.
///
/// The detailed variant is kept so callers and tests can tell exactly which
/// rule was violated; [`CalcError::kind`] collapses it to the two-way
/// classification shown to end users.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// The expression is structurally invalid.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    /// The expression is well formed but a computation left its domain.
    #[error("math error: {0}")]
    Math(#[from] MathError),
}

impl CalcError {
    /// Returns the coarse classification of this error.
    ///
    /// # Example
    /// ```
    /// use reckon::error::{CalcError, ErrorKind, MathError};
    ///
    /// let err = CalcError::from(MathError::DivisionByZero);
    /// assert_eq!(err.kind(), ErrorKind::Math);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Math(_) => ErrorKind::Math,
        }
    }
}
