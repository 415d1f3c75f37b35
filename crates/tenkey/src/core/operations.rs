//! Binary operators and unary scientific functions.

use serde::{Deserialize, Serialize};

use crate::core::{EvalError, EvalOptions, EvalResult};

/// The pending binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition (`+`). The reset default: with a zero left operand it
    /// passes the right operand through unchanged.
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
}

impl BinaryOp {
    /// Returns the operator symbol as shown on the keypad.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Applies the operator to `a` and `b`.
    ///
    /// Division fails with [`EvalError::DivisionByZero`] when `b` is zero;
    /// the other operators are total.
    pub fn apply(self, a: f64, b: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Sub => Ok(a - b),
            Self::Mul => Ok(a * b),
            Self::Div => {
                if b == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

/// The unary scientific functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryFunc {
    /// Sine, input in radians.
    Sin,
    /// Cosine, input in radians.
    Cos,
    /// Tangent, input in radians; undefined at the poles of cosine.
    Tan,
    /// Natural logarithm; undefined for non-positive input.
    Ln,
    /// `e` raised to the input.
    Exp,
    /// The input multiplied by itself.
    Square,
}

impl UnaryFunc {
    /// Returns the function name as spelled in the token vocabulary.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Square => "square",
        }
    }

    /// Applies the function to `x` under the given numeric policy.
    ///
    /// `tan` fails when `cos(x)` is within `options.tan_pole_epsilon` of
    /// zero (exactly zero under the default policy) and `ln` fails for
    /// non-positive input; both report [`EvalError::Domain`]. The remaining
    /// functions are total.
    pub fn apply(self, x: f64, options: &EvalOptions) -> EvalResult<f64> {
        match self {
            Self::Sin => Ok(x.sin()),
            Self::Cos => Ok(x.cos()),
            Self::Tan => {
                if x.cos().abs() <= options.tan_pole_epsilon {
                    Err(EvalError::Domain {
                        function: self.name(),
                        input: x,
                    })
                } else {
                    Ok(x.tan())
                }
            }
            Self::Ln => {
                if x <= 0.0 {
                    Err(EvalError::Domain {
                        function: self.name(),
                        input: x,
                    })
                } else {
                    Ok(x.ln())
                }
            }
            Self::Exp => Ok(x.exp()),
            Self::Square => Ok(x * x),
        }
    }
}
