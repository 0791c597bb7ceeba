/// Absolute tolerance for "is this zero" and "is this an integer" checks.
pub const ZERO_TOLERANCE: f64 = 1e-12;

/// Returns `true` if `value` is within [`ZERO_TOLERANCE`] of zero.
///
/// ## Example
/// ```
/// use reckon::util::num::is_near_zero;
///
/// assert!(is_near_zero(1e-13));
/// assert!(is_near_zero(-0.0));
/// assert!(!is_near_zero(1e-9));
/// ```
#[must_use]
pub fn is_near_zero(value: f64) -> bool {
    value.abs() < ZERO_TOLERANCE
}

/// Converts an `f64` to the `u32` it is nearly equal to.
///
/// The value must be finite, non-negative, within [`ZERO_TOLERANCE`] of an
/// integer, and that integer must fit in a `u32`. Anything else yields
/// `None`, so callers never work with a silently truncated count.
///
/// ## Example
/// ```
/// use reckon::util::num::f64_to_u32_checked;
///
/// assert_eq!(f64_to_u32_checked(5.0), Some(5));
/// // Float noise from an earlier computation is tolerated.
/// assert_eq!(f64_to_u32_checked(2.999_999_999_999_999_6), Some(3));
///
/// assert_eq!(f64_to_u32_checked(3.2), None);
/// assert_eq!(f64_to_u32_checked(-1.0), None);
/// assert_eq!(f64_to_u32_checked(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_u32_checked(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let rounded = value.round();
    if (value - rounded).abs() > ZERO_TOLERANCE || rounded > f64::from(u32::MAX) {
        return None;
    }
    Some(rounded as u32)
}
