use crate::interpreter::function::FunctionId;

/// Represents all errors raised while computing a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    /// The divisor was within the zero tolerance.
    #[error("division by zero")]
    DivisionByZero,
    /// A function argument lies outside the function's domain.
    #[error("{argument} is outside the domain of {function}")]
    OutOfDomain {
        /// The function that rejected its argument.
        function: FunctionId,
        /// The rejected argument.
        argument: f64,
    },
    /// The tangent of an odd multiple of a right angle.
    #[error("tangent is undefined at {argument}")]
    TangentUndefined {
        /// The argument as written, in the active angle unit.
        argument: f64,
    },
    /// Factorial of a negative, non-integer or too large operand.
    #[error("factorial is not defined for {operand}")]
    InvalidFactorial {
        /// The rejected operand.
        operand: f64,
    },
    /// A logarithm base that is not positive or equals one.
    #[error("{base} is not a valid logarithm base")]
    InvalidLogBase {
        /// The rejected base.
        base: f64,
    },
    /// A computation overflowed or produced NaN.
    #[error("result is not a finite number")]
    NonFinite,
}
