//! Button tokens: the engine's input vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::operations::{BinaryOp, UnaryFunc};

/// A single unit of user input, as produced by one keypad button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// A digit key, `0` through `9`.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// A binary operator key.
    Op(BinaryOp),
    /// A scientific function key.
    Func(UnaryFunc),
    /// The `=` key: evaluate the pending operation.
    Equals,
    /// The `%` key: divide the displayed value by one hundred.
    Percent,
    /// The `+/-` key: flip the sign of the displayed numeral.
    ToggleSign,
    /// The `AC` key: reset everything.
    Clear,
}

impl Token {
    /// The character this token contributes to a numeral under construction.
    ///
    /// Only digits and the decimal point carry text; every other token
    /// returns `None`, as does a `Digit` value above nine (which no label
    /// parses to).
    #[must_use]
    pub fn numeral_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("."),
            Self::Op(op) => f.write_str(op.symbol()),
            Self::Func(func) => f.write_str(func.name()),
            Self::Equals => f.write_str("="),
            Self::Percent => f.write_str("%"),
            Self::ToggleSign => f.write_str("+/-"),
            Self::Clear => f.write_str("AC"),
        }
    }
}

/// A button label that names no token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown button label: {0:?}")]
pub struct UnknownToken(
    /// The offending label.
    pub String,
);

impl FromStr for Token {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s {
            "." => Self::Decimal,
            "=" => Self::Equals,
            "%" => Self::Percent,
            "+/-" => Self::ToggleSign,
            "AC" => Self::Clear,
            "+" => Self::Op(BinaryOp::Add),
            "-" => Self::Op(BinaryOp::Sub),
            "*" => Self::Op(BinaryOp::Mul),
            "/" => Self::Op(BinaryOp::Div),
            "sin" => Self::Func(UnaryFunc::Sin),
            "cos" => Self::Func(UnaryFunc::Cos),
            "tan" => Self::Func(UnaryFunc::Tan),
            "ln" => Self::Func(UnaryFunc::Ln),
            "exp" => Self::Func(UnaryFunc::Exp),
            "square" => Self::Func(UnaryFunc::Square),
            _ => match s.as_bytes() {
                [d @ b'0'..=b'9'] => Self::Digit(d - b'0'),
                _ => return Err(UnknownToken(s.to_string())),
            },
        };
        Ok(token)
    }
}
