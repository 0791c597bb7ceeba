use crate::{
    error::{CalcError, SyntaxError},
    interpreter::{
        angle::AngleMode,
        evaluator::{binary, function::apply_function, unary, utils::ensure_finite},
        operator::{Operator, OperatorKind},
        token::PostfixToken,
    },
};

/// Result type used by the evaluator.
///
/// Evaluation can fail with either kind of error: math errors from operand
/// values, and syntax errors if a postfix sequence does not fit the stack.
pub type EvalResult<T> = Result<T, CalcError>;

/// Executes a postfix sequence and returns its single result.
///
/// Numbers push themselves and `ANS` pushes `last_answer`. Binary operators
/// pop their right operand first, then the left one. Function calls pop
/// their arguments and restore them to left-to-right order. The first
/// failure aborts the run.
///
/// # Errors
/// - `SyntaxError::StackUnderflow` if an operator, a function or the end of
///   the sequence finds too few values.
/// - `SyntaxError::LeftoverValues` if more than one value remains.
/// - Any `MathError` raised by an operator or function, or
///   `MathError::NonFinite` if the result is not finite (an overlong literal
///   or a non-finite answer register).
///
/// # Example
/// ```
/// use reckon::{
///     AngleMode,
///     interpreter::{
///         evaluator::core::evaluate,
///         operator::{Operator, OperatorKind},
///         token::PostfixToken,
///     },
/// };
///
/// // ANS 3 *
/// let postfix = [PostfixToken::Answer,
///                PostfixToken::Number(3.0),
///                PostfixToken::Operator(Operator::of(OperatorKind::Multiply))];
/// assert_eq!(evaluate(&postfix, AngleMode::Deg, 4.0).unwrap(), 12.0);
///
/// // 1 2 (no operator joins them)
/// let postfix = [PostfixToken::Number(1.0), PostfixToken::Number(2.0)];
/// assert!(evaluate(&postfix, AngleMode::Deg, 0.0).is_err());
/// ```
pub fn evaluate(postfix: &[PostfixToken], angle_mode: AngleMode, last_answer: f64) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        let value = match *token {
            PostfixToken::Number(value) => value,
            PostfixToken::Answer => last_answer,
            PostfixToken::Operator(op) => {
                let operands = pop_values(&mut stack, op.arity)?;
                apply_operator(op, &operands)?
            },
            PostfixToken::FunctionCall { function, arg_count } => {
                let args = pop_values(&mut stack, arg_count)?;
                apply_function(function, &args, angle_mode)?
            },
        };
        stack.push(value);
    }

    match stack.as_slice() {
        [value] => ensure_finite(*value),
        [] => Err(SyntaxError::StackUnderflow { needed: 1,
                                                found:  0, }.into()),
        rest => Err(SyntaxError::LeftoverValues { count: rest.len() }.into()),
    }
}

/// Removes the top `count` values, keeping their stack order.
fn pop_values(stack: &mut Vec<f64>, count: usize) -> EvalResult<Vec<f64>> {
    if stack.len() < count {
        return Err(SyntaxError::StackUnderflow { needed: count,
                                                 found:  stack.len(), }.into());
    }
    Ok(stack.split_off(stack.len() - count))
}

fn apply_operator(op: Operator, operands: &[f64]) -> EvalResult<f64> {
    match (op.kind, operands) {
        (OperatorKind::UnaryMinus, &[value]) => Ok(unary::negate(value)),
        (OperatorKind::Factorial, &[value]) => unary::factorial(value),
        (OperatorKind::Add, &[left, right]) => binary::add(left, right),
        (OperatorKind::Subtract, &[left, right]) => binary::subtract(left, right),
        (OperatorKind::Multiply, &[left, right]) => binary::multiply(left, right),
        (OperatorKind::Divide, &[left, right]) => binary::divide(left, right),
        (OperatorKind::Power, &[left, right]) => binary::power(left, right),
        _ => Err(SyntaxError::StackUnderflow { needed: op.arity,
                                               found:  operands.len(), }.into()),
    }
}
