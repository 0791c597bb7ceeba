use crate::util::num::is_near_zero;

/// Significant digits kept in every formatted result.
pub const SIGNIFICANT_DIGITS: usize = 12;
/// Magnitudes at or above this are written in scientific notation.
pub const SCIENTIFIC_UPPER: f64 = 1e9;
/// Non-zero magnitudes below this are written in scientific notation.
pub const SCIENTIFIC_LOWER: f64 = 1e-6;
/// Returned for NaN and infinities.
pub const ERROR_MARKER: &str = "Error";

/// Enough fractional digits to hold the exact decimal expansion of any
/// finite `f64`.
const EXACT_DIGITS: usize = 767;

/// Formats a value as the canonical result string.
///
/// - Non-finite values become [`ERROR_MARKER`].
/// - Magnitudes below `1e-12` snap to `"0"`.
/// - Magnitudes at or above `1e9`, or below `1e-6`, use `<mantissa>e<exp>`
///   with the mantissa in `[1, 10)`; everything else is plain fixed point.
///
/// Both forms round the exact binary value to twelve significant digits,
/// half up, and drop trailing fractional zeros. The output never depends on
/// the locale.
///
/// # Example
/// ```
/// use reckon::format;
///
/// assert_eq!(format(120.0), "120");
/// assert_eq!(format(1.0 / 3.0), "0.333333333333");
/// assert_eq!(format(0.1 + 0.2), "0.3");
/// assert_eq!(format(1e10), "1e10");
/// assert_eq!(format(-0.000_000_4), "-4e-7");
/// assert_eq!(format(1e-13), "0");
/// assert_eq!(format(f64::NAN), "Error");
/// ```
#[must_use]
pub fn format(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_MARKER.to_string();
    }
    if is_near_zero(value) {
        return "0".to_string();
    }

    let magnitude = value.abs();
    let scientific = !(SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&magnitude);
    let Some(rounded) = Rounded::new(magnitude, SIGNIFICANT_DIGITS) else {
        return ERROR_MARKER.to_string();
    };

    let sign = if value < 0.0 { "-" } else { "" };
    let body = if scientific {
        rounded.scientific()
    } else {
        rounded.plain()
    };
    format!("{sign}{body}")
}

/// A positive value rounded to a number of significant digits.
///
/// The value is `0.d0 d1 d2 ... × 10^(exponent + 1)`, i.e. `d0` is the
/// units digit of the scientific mantissa. Trailing zero digits are removed.
struct Rounded {
    digits:   Vec<u8>,
    exponent: i32,
}

impl Rounded {
    fn new(magnitude: f64, significant: usize) -> Option<Self> {
        let exact = format!("{magnitude:.EXACT_DIGITS$e}");
        let (mantissa, exponent) = exact.split_once('e')?;
        let mut exponent: i32 = exponent.parse().ok()?;
        let all: Vec<u8> = mantissa.bytes()
                                   .filter(u8::is_ascii_digit)
                                   .map(|b| b - b'0')
                                   .collect();

        let mut digits = all.get(..significant)?.to_vec();
        if all.get(significant).is_some_and(|next| *next >= 5) {
            let carried = round_up(&mut digits);
            if carried {
                digits.insert(0, 1);
                digits.truncate(significant);
                exponent += 1;
            }
        }

        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }
        Some(Self { digits, exponent })
    }

    fn scientific(&self) -> String {
        let mut out = String::new();
        push_digits(&mut out, &self.digits[..1]);
        if self.digits.len() > 1 {
            out.push('.');
            push_digits(&mut out, &self.digits[1..]);
        }
        format!("{out}e{}", self.exponent)
    }

    fn plain(&self) -> String {
        let mut out = String::new();
        if self.exponent < 0 {
            out.push_str("0.");
            for _ in 1..self.exponent.unsigned_abs() {
                out.push('0');
            }
            push_digits(&mut out, &self.digits);
            return out;
        }

        let integer_len = self.exponent.unsigned_abs() as usize + 1;
        if self.digits.len() <= integer_len {
            push_digits(&mut out, &self.digits);
            for _ in self.digits.len()..integer_len {
                out.push('0');
            }
        } else {
            push_digits(&mut out, &self.digits[..integer_len]);
            out.push('.');
            push_digits(&mut out, &self.digits[integer_len..]);
        }
        out
    }
}

/// Adds one unit in the last place. Returns `true` if the carry ran off the
/// front, leaving every digit zero.
fn round_up(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|d| char::from(b'0' + d)));
}
