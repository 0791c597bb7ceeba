use crate::{
    error::MathError,
    interpreter::evaluator::core::EvalResult,
    util::num::f64_to_u32_checked,
};

/// Largest operand whose factorial is finite in `f64`.
pub const MAX_FACTORIAL: u32 = 170;

/// Negates a value. Exact for every finite input.
#[must_use]
pub fn negate(value: f64) -> f64 {
    -value
}

/// Computes `value!`.
///
/// The operand must be finite, non-negative, within `1e-12` of an integer
/// and at most [`MAX_FACTORIAL`]. The product is built iteratively and
/// abandoned as soon as it stops being finite.
///
/// # Errors
/// Returns `MathError::InvalidFactorial` for operands outside that domain
/// and `MathError::NonFinite` if the product overflows.
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::unary::factorial;
///
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
///
/// assert!(factorial(3.2).is_err());
/// assert!(factorial(-1.0).is_err());
/// assert!(factorial(171.0).is_err());
/// ```
pub fn factorial(value: f64) -> EvalResult<f64> {
    let n = f64_to_u32_checked(value).filter(|n| *n <= MAX_FACTORIAL)
                                     .ok_or(MathError::InvalidFactorial { operand: value })?;

    let mut product = 1.0_f64;
    for i in 2..=n {
        product *= f64::from(i);
        if !product.is_finite() {
            return Err(MathError::NonFinite.into());
        }
    }
    Ok(product)
}
