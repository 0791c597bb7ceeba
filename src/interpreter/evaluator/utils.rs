use crate::{error::MathError, interpreter::evaluator::core::EvalResult};

/// Passes `value` through if it is finite.
///
/// Overflow to infinity and NaN from invalid operations both become
/// [`MathError::NonFinite`].
///
/// # Example
/// ```
/// use reckon::interpreter::evaluator::utils::ensure_finite;
///
/// assert_eq!(ensure_finite(2.5).unwrap(), 2.5);
/// assert!(ensure_finite(f64::INFINITY).is_err());
/// assert!(ensure_finite(f64::NAN).is_err());
/// ```
pub fn ensure_finite(value: f64) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::NonFinite.into())
    }
}
