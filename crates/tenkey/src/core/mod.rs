//! Core calculator engine: tokens, evaluation, formatting, and the
//! display state machine.

pub mod engine;
pub mod format;
pub mod operations;
pub mod token;

pub use engine::Engine;
pub use operations::{BinaryOp, UnaryFunc};
pub use token::{Token, UnknownToken};

use thiserror::Error;

/// Result type for evaluation steps.
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors raised while evaluating a pending operation or unary function.
///
/// None of these escape [`Engine::apply`]: every variant is caught at the
/// transition that observed it and collapsed into the `"Error"` display
/// sentinel.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// Division with a zero right operand.
    #[error("division by zero")]
    DivisionByZero,

    /// A unary function applied outside its domain.
    #[error("{function}({input}) is undefined")]
    Domain {
        /// Name of the offending function.
        function: &'static str,
        /// The input that fell outside the domain.
        input: f64,
    },

    /// The display text did not parse as a numeral.
    #[error("not a numeral: {0:?}")]
    Parse(String),
}

/// Numeric policy for evaluation.
///
/// Constructed explicitly and handed to [`Engine::with_options`]; there is
/// no process-wide configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalOptions {
    /// Tolerance for the `tan` pole check: the function fails when
    /// `cos(x).abs() <= tan_pole_epsilon`. The default of `0.0` keeps the
    /// exact-zero comparison, under which `tan` near a pole returns a very
    /// large finite number instead of failing.
    pub tan_pole_epsilon: f64,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl EvalOptions {
    /// Creates the default policy: exact-zero pole detection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tan_pole_epsilon: 0.0,
        }
    }

    /// Creates a policy that treats `tan` as undefined whenever `cos(x)`
    /// is within `epsilon` of zero.
    #[must_use]
    pub const fn with_tan_pole_epsilon(epsilon: f64) -> Self {
        Self {
            tan_pole_epsilon: epsilon,
        }
    }
}
