/// Numeric helpers.
///
/// This module provides the tolerance shared by every near-zero and
/// near-integer comparison in the evaluator, and a checked conversion from
/// `f64` to an integer count that never truncates silently.
pub mod num;
