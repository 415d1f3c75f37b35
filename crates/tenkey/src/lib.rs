//! Display-driven calculator engine.
//!
//! `tenkey` models the input/evaluation state machine of a keypad
//! calculator: digits and a decimal point build a numeral on the display,
//! binary operators chain left to right without precedence, a scientific
//! row applies unary functions in place, and every failure collapses into
//! an `"Error"` display that the next key press clears. The engine has no
//! I/O of its own; a presentation layer maps button presses to [`Token`]s
//! and renders the string [`Engine::apply`] returns.
//!
//! [`Token`]: core::Token
//! [`Engine::apply`]: core::Engine::apply
//!
//! # Example
//!
//! ```rust
//! use tenkey::prelude::*;
//!
//! let mut driver = KeypadDriver::new();
//! assert_eq!(driver.run(["7", "+", "3", "="]).unwrap(), "10");
//! assert_eq!(driver.run(["AC", "8", "/", "0", "="]).unwrap(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::engine::{Engine, ERROR_DISPLAY};
    pub use crate::core::format::format_number;
    pub use crate::core::operations::{BinaryOp, UnaryFunc};
    pub use crate::core::token::{Token, UnknownToken};
    pub use crate::core::{EvalError, EvalOptions, EvalResult};
    pub use crate::driver::KeypadDriver;
    pub use crate::keypad::{Button, ButtonKind, ButtonStyle, Keypad};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = Engine::new();
        assert_eq!(engine.apply(Token::Digit(4)), "4");
        assert_eq!(format_number(4.0), "4");
        assert_eq!(Keypad::new().find("4").unwrap().kind, ButtonKind::Digit);
    }

    #[test]
    fn test_driver_and_engine_agree() {
        let mut driver = KeypadDriver::new();
        driver.run(["9", "*", "9", "="]).unwrap();
        assert_eq!(driver.engine().display(), "81");
    }
}
