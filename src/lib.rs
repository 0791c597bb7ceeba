//! # reckon
//!
//! reckon is a scientific calculator engine written in Rust.
//! It tokenizes an expression, converts it to postfix with the shunting-yard
//! algorithm, evaluates it on a value stack and formats the result to twelve
//! significant digits. On top of the engine it provides a calculator session
//! with an answer register, keypad input rules and a persisted history.
//!
//! ```
//! use reckon::{AngleMode, ErrorKind, evaluate};
//!
//! let outcome = evaluate("2^3^2", AngleMode::Deg, 0.0);
//! assert_eq!(outcome.formatted(), Some("512"));
//!
//! let outcome = evaluate("sqrt(-1)", AngleMode::Deg, 0.0);
//! assert_eq!(outcome.error_kind(), Some(ErrorKind::Math));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator, lexer::tokenize, parser::core::to_postfix};

/// Provides unified error types for the evaluation pipeline.
///
/// This module defines every error that can be raised while tokenizing,
/// parsing or evaluating an expression, and their two-way classification
/// into syntax and math errors.
///
/// # Responsibilities
/// - Defines detailed error enums for structural and value-domain failures.
/// - Attaches offsets, operands and function names for diagnostics.
/// - Collapses details to an `ErrorKind` for end-user display.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module holds the four stages, tokenizer, parser, evaluator and
/// formatter, along with the token, operator and function tables they share.
///
/// # Responsibilities
/// - Converts source text into lexical tokens and postfix sequences.
/// - Executes postfix sequences and formats results.
/// - Keeps every stage a pure function of its inputs.
pub mod interpreter;
/// The calculator session.
///
/// Holds the state a calculator front end needs between evaluations: the
/// expression being edited, the angle mode, the answer register, the last
/// result or error, and the history. Changes are driven by `Event`s.
pub mod session;
/// Durable storage for the history and angle mode.
///
/// Serializes the session's history and angle mode to a JSON document and
/// restores them on startup.
pub mod store;
/// General numeric helpers shared by the evaluator and formatter.
pub mod util;

pub use error::{CalcError, ErrorKind};
pub use interpreter::{angle::AngleMode, formatter::format};
pub use session::{Event, Session, history::HistoryEntry};
pub use store::HistoryStore;

/// The result of evaluating one expression.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationOutcome {
    /// The expression evaluated to a finite value.
    Success {
        /// The computed value.
        value:     f64,
        /// The value rendered by [`format`].
        formatted: String,
    },
    /// Tokenizing, parsing or evaluating failed.
    Error(CalcError),
}

impl EvaluationOutcome {
    /// Returns `true` for [`EvaluationOutcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The computed value, if evaluation succeeded.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error(_) => None,
        }
    }

    /// The formatted result, if evaluation succeeded.
    #[must_use]
    pub fn formatted(&self) -> Option<&str> {
        match self {
            Self::Success { formatted, .. } => Some(formatted),
            Self::Error(_) => None,
        }
    }

    /// The error classification, if evaluation failed.
    #[must_use]
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Error(error) => Some(error.kind()),
        }
    }
}

impl From<Result<f64, CalcError>> for EvaluationOutcome {
    fn from(result: Result<f64, CalcError>) -> Self {
        match result {
            Ok(value) => Self::Success { value,
                                         formatted: format(value) },
            Err(error) => Self::Error(error),
        }
    }
}

/// Evaluates an expression to a value.
///
/// Runs the tokenizer, parser and evaluator in turn; the first failure at
/// any stage is returned and the remaining stages are skipped.
///
/// `last_answer` is the value `ANS` stands for. The engine only reads it;
/// updating it after a success is the caller's job.
///
/// # Errors
/// Returns a `CalcError` of kind `Syntax` for malformed expressions and of
/// kind `Math` for value-domain violations.
///
/// # Example
/// ```
/// use reckon::{AngleMode, try_evaluate};
///
/// assert_eq!(try_evaluate("ANS*3", AngleMode::Deg, 4.0).unwrap(), 12.0);
/// assert!(try_evaluate("2/0", AngleMode::Deg, 0.0).is_err());
/// ```
#[tracing::instrument(level = "debug")]
pub fn try_evaluate(expression: &str,
                    angle_mode: AngleMode,
                    last_answer: f64)
                    -> Result<f64, CalcError> {
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens)?;
    let value = evaluator::core::evaluate(&postfix, angle_mode, last_answer)?;
    Ok(value)
}

/// Evaluates an expression and formats the result.
///
/// This is the engine's single entry point: a pure function of its inputs,
/// safe to call from any number of threads.
///
/// # Example
/// ```
/// use reckon::{AngleMode, ErrorKind, evaluate};
///
/// assert_eq!(evaluate("1+2*3", AngleMode::Deg, 0.0).formatted(), Some("7"));
/// assert_eq!(evaluate("sin(30)", AngleMode::Deg, 0.0).formatted(), Some("0.5"));
/// assert_eq!(evaluate("(1+2", AngleMode::Deg, 0.0).error_kind(), Some(ErrorKind::Syntax));
/// ```
#[must_use]
pub fn evaluate(expression: &str, angle_mode: AngleMode, last_answer: f64) -> EvaluationOutcome {
    let outcome = EvaluationOutcome::from(try_evaluate(expression, angle_mode, last_answer));
    match &outcome {
        EvaluationOutcome::Success { formatted, .. } => {
            tracing::debug!(expression, %formatted, "evaluated");
        },
        EvaluationOutcome::Error(error) => {
            tracing::debug!(expression, %error, "evaluation failed");
        },
    }
    outcome
}
