//! The display state machine.
//!
//! One [`Engine`] per session, mutated only through [`Engine::apply`]. The
//! engine owns the display text, the left operand, and the pending binary
//! operator; every transition returns the new display string. A UI layer is
//! expected to map button presses to [`Token`]s and render what comes back.

use tracing::{debug, trace};

use crate::core::format::format_number;
use crate::core::operations::{BinaryOp, UnaryFunc};
use crate::core::token::Token;
use crate::core::{EvalError, EvalOptions, EvalResult};

/// Display text shown after a failed evaluation.
pub const ERROR_DISPLAY: &str = "Error";

/// The calculator state machine.
///
/// Created in the reset state: display `"0"`, left operand `0`, pending
/// operator `+`, awaiting a fresh operand. Evaluation failures never
/// propagate out of [`Engine::apply`]; they collapse into the [`ERROR_DISPLAY`]
/// sentinel, which the next token of any kind clears.
#[derive(Debug, Clone)]
pub struct Engine {
    /// The text currently shown: a numeral, a numeral under construction,
    /// or the error sentinel.
    display: String,
    /// Left operand of the pending binary operation.
    operand1: f64,
    /// Operator awaiting its second operand.
    pending: BinaryOp,
    /// When set, the next digit or decimal point starts a fresh numeral.
    awaiting_operand: bool,
    options: EvalOptions,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in the reset state with the default numeric policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EvalOptions::default())
    }

    /// Creates an engine with a custom numeric policy.
    #[must_use]
    pub fn with_options(options: EvalOptions) -> Self {
        Self {
            display: "0".to_string(),
            operand1: 0.0,
            pending: BinaryOp::Add,
            awaiting_operand: true,
            options,
        }
    }

    /// Returns the current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns true when the display shows the error sentinel.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Returns the left operand of the pending operation.
    #[must_use]
    pub fn operand1(&self) -> f64 {
        self.operand1
    }

    /// Returns the operator awaiting its second operand.
    #[must_use]
    pub fn pending_op(&self) -> BinaryOp {
        self.pending
    }

    /// Returns true when the next digit starts a fresh numeral.
    #[must_use]
    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// Applies one input token and returns the new display text.
    ///
    /// While the display shows the error sentinel, every token takes the
    /// reset branch and is consumed by it, so recovery costs exactly one
    /// press.
    pub fn apply(&mut self, token: Token) -> &str {
        if self.is_error() {
            self.reset();
        } else {
            match token {
                Token::Clear => self.reset(),
                Token::Digit(_) | Token::Decimal => {
                    if let Some(ch) = token.numeral_char() {
                        self.push_numeral(ch);
                    }
                }
                Token::Op(op) => self.apply_operator(op),
                Token::Func(func) => self.apply_function(func),
                Token::Equals => self.apply_equals(),
                Token::Percent => self.apply_percent(),
                Token::ToggleSign => self.toggle_sign(),
            }
        }
        trace!(%token, display = %self.display, "token applied");
        &self.display
    }

    /// Restores the startup state: display `"0"`, no pending operation.
    fn reset(&mut self) {
        self.display.clear();
        self.display.push('0');
        self.reset_pending();
    }

    /// Clears the pending operation without touching the display.
    fn reset_pending(&mut self) {
        self.operand1 = 0.0;
        self.pending = BinaryOp::Add;
        self.awaiting_operand = true;
    }

    /// Extends the numeral under construction, or starts a fresh one.
    ///
    /// Repeated decimal points are not rejected here; a malformed numeral
    /// surfaces as a parse failure when an operator forces evaluation.
    fn push_numeral(&mut self, ch: char) {
        if self.display == "0" || self.awaiting_operand {
            self.display.clear();
            self.display.push(ch);
            self.awaiting_operand = false;
        } else {
            self.display.push(ch);
        }
    }

    fn apply_operator(&mut self, op: BinaryOp) {
        match self.parse_display() {
            Ok(value) => {
                match self.pending.apply(self.operand1, value) {
                    Ok(result) => {
                        self.set_display_value(result);
                        // The stored operand is the rounded, displayed value.
                        self.operand1 = self.displayed_value();
                    }
                    Err(error) => {
                        self.set_error(&error);
                        self.operand1 = 0.0;
                    }
                }
                self.pending = op;
                self.awaiting_operand = true;
            }
            Err(error) => {
                self.set_error(&error);
                self.reset_pending();
            }
        }
    }

    /// Unary functions replace the display but leave the pending operator
    /// in place.
    fn apply_function(&mut self, func: UnaryFunc) {
        match self.parse_display() {
            Ok(value) => match func.apply(value, &self.options) {
                Ok(result) => {
                    self.set_display_value(result);
                    self.operand1 = self.displayed_value();
                    self.awaiting_operand = true;
                }
                Err(error) => {
                    self.set_error(&error);
                    self.operand1 = 0.0;
                    self.awaiting_operand = true;
                }
            },
            Err(error) => {
                self.set_error(&error);
                self.reset_pending();
            }
        }
    }

    fn apply_equals(&mut self) {
        match self.parse_display() {
            Ok(value) => match self.pending.apply(self.operand1, value) {
                Ok(result) => self.set_display_value(result),
                Err(error) => self.set_error(&error),
            },
            Err(error) => self.set_error(&error),
        }
        self.reset_pending();
    }

    fn apply_percent(&mut self) {
        match self.parse_display() {
            Ok(value) => self.set_display_value(value / 100.0),
            Err(error) => self.set_error(&error),
        }
        self.reset_pending();
    }

    /// Flips the sign textually: positive numerals gain a `-` prefix,
    /// negative ones lose it, zero is left alone. Pending state is not
    /// touched.
    fn toggle_sign(&mut self) {
        match self.parse_display() {
            Ok(value) => {
                if value > 0.0 {
                    self.display.insert(0, '-');
                } else if value < 0.0 {
                    if let Some(stripped) = self.display.strip_prefix('-') {
                        self.display = stripped.to_string();
                    }
                }
            }
            Err(error) => {
                self.set_error(&error);
                self.reset_pending();
            }
        }
    }

    /// Parses the display as a numeral.
    fn parse_display(&self) -> EvalResult<f64> {
        self.display
            .parse()
            .map_err(|_| EvalError::Parse(self.display.clone()))
    }

    /// The displayed numeral as a number; zero when the display is not a
    /// numeral.
    fn displayed_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    fn set_display_value(&mut self, value: f64) {
        self.display = format_number(value);
    }

    fn set_error(&mut self, error: &EvalError) {
        debug!(%error, "evaluation failed");
        self.display.clear();
        self.display.push_str(ERROR_DISPLAY);
    }
}
