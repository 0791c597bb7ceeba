use crate::{
    error::MathError,
    interpreter::evaluator::{core::EvalResult, utils::ensure_finite},
    util::num::is_near_zero,
};

/// `left + right`
pub fn add(left: f64, right: f64) -> EvalResult<f64> {
    ensure_finite(left + right)
}

/// `left - right`
pub fn subtract(left: f64, right: f64) -> EvalResult<f64> {
    ensure_finite(left - right)
}

/// `left * right`
pub fn multiply(left: f64, right: f64) -> EvalResult<f64> {
    ensure_finite(left * right)
}

/// `left / right`; a divisor within `1e-12` of zero is a division by zero.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::binary::divide;
///
/// assert_eq!(divide(1.0, 4.0).unwrap(), 0.25);
/// assert!(divide(2.0, 0.0).is_err());
/// assert!(divide(2.0, 1e-13).is_err());
/// ```
pub fn divide(left: f64, right: f64) -> EvalResult<f64> {
    if is_near_zero(right) {
        return Err(MathError::DivisionByZero.into());
    }
    ensure_finite(left / right)
}

/// `left ^ right`, with the usual `powf` semantics. Results that are not
/// real numbers, like `(-8)^(1/3)`, are reported as non-finite.
pub fn power(left: f64, right: f64) -> EvalResult<f64> {
    ensure_finite(left.powf(right))
}
