use crate::{
    error::{MathError, SyntaxError},
    interpreter::{
        angle::AngleMode,
        evaluator::{core::EvalResult, utils::ensure_finite},
        function::FunctionId,
    },
    util::num::is_near_zero,
};

/// Calls a built-in function on its arguments.
///
/// `sin`, `cos` and `tan` read their argument in the given angle mode;
/// `asin`, `acos` and `atan` return their result in it. Every result is
/// checked for finiteness before it is returned.
///
/// Domains:
/// - `tan` is undefined where the cosine is within `1e-12` of zero.
/// - `asin`, `acos` need an argument in `[-1, 1]`.
/// - `ln`, `log` need a strictly positive argument; the base of two-argument
///   `log(x, b)` must be positive and not within `1e-12` of one.
/// - `sqrt` needs a non-negative argument.
///
/// # Errors
/// Returns a `MathError` for out-of-domain arguments or non-finite results,
/// and a `SyntaxError::ArityMismatch` if `args` does not fit the function.
///
/// # Example
/// ```
/// use reckon::{
///     AngleMode,
///     interpreter::{evaluator::function::apply_function, function::FunctionId},
/// };
///
/// let half = apply_function(FunctionId::Sin, &[30.0], AngleMode::Deg).unwrap();
/// assert!((half - 0.5).abs() < 1e-15);
///
/// let three = apply_function(FunctionId::Log, &[8.0, 2.0], AngleMode::Rad).unwrap();
/// assert!((three - 3.0).abs() < 1e-12);
///
/// assert!(apply_function(FunctionId::Sqrt, &[-1.0], AngleMode::Rad).is_err());
/// assert!(apply_function(FunctionId::Tan, &[90.0], AngleMode::Deg).is_err());
/// ```
pub fn apply_function(function: FunctionId, args: &[f64], angle_mode: AngleMode) -> EvalResult<f64> {
    let value = match (function, args) {
        (FunctionId::Sin, &[x]) => angle_mode.to_radians(x).sin(),
        (FunctionId::Cos, &[x]) => angle_mode.to_radians(x).cos(),
        (FunctionId::Tan, &[x]) => tangent(x, angle_mode)?,
        (FunctionId::Asin, &[x]) => angle_mode.from_radians(unit_interval(function, x)?.asin()),
        (FunctionId::Acos, &[x]) => angle_mode.from_radians(unit_interval(function, x)?.acos()),
        (FunctionId::Atan, &[x]) => angle_mode.from_radians(x.atan()),
        (FunctionId::Ln, &[x]) => positive(function, x)?.ln(),
        (FunctionId::Log, &[x]) => positive(function, x)?.log10(),
        (FunctionId::Log, &[x, base]) => log_base(x, base)?,
        (FunctionId::Sqrt, &[x]) => {
            if x < 0.0 {
                return Err(MathError::OutOfDomain { function,
                                                    argument: x }.into());
            }
            x.sqrt()
        },
        (FunctionId::Abs, &[x]) => x.abs(),
        (FunctionId::Exp, &[x]) => x.exp(),
        _ => {
            return Err(SyntaxError::ArityMismatch { function,
                                                    found: args.len() }.into());
        },
    };
    ensure_finite(value)
}

fn tangent(angle: f64, angle_mode: AngleMode) -> EvalResult<f64> {
    let radians = angle_mode.to_radians(angle);
    if is_near_zero(radians.cos()) {
        return Err(MathError::TangentUndefined { argument: angle }.into());
    }
    Ok(radians.tan())
}

fn unit_interval(function: FunctionId, x: f64) -> EvalResult<f64> {
    if (-1.0..=1.0).contains(&x) {
        Ok(x)
    } else {
        Err(MathError::OutOfDomain { function,
                                     argument: x }.into())
    }
}

fn positive(function: FunctionId, x: f64) -> EvalResult<f64> {
    if x > 0.0 {
        Ok(x)
    } else {
        Err(MathError::OutOfDomain { function,
                                     argument: x }.into())
    }
}

/// `log_base(x) = ln(x) / ln(base)`.
fn log_base(x: f64, base: f64) -> EvalResult<f64> {
    positive(FunctionId::Log, x)?;
    if base <= 0.0 || is_near_zero(base - 1.0) {
        return Err(MathError::InvalidLogBase { base }.into());
    }
    Ok(x.ln() / base.ln())
}
