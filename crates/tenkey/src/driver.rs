//! Script driver: press buttons by label.
//!
//! The test-harness counterpart of a presentation layer. Write a token
//! sequence once as button labels and replay it against a fresh engine,
//! instead of spelling out [`Token`] values at every call site.

use crate::core::engine::Engine;
use crate::core::token::{Token, UnknownToken};
use crate::core::EvalOptions;

/// Drives an [`Engine`] with button labels.
#[derive(Debug, Clone)]
pub struct KeypadDriver {
    engine: Engine,
}

impl Default for KeypadDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadDriver {
    /// Creates a driver over a fresh engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    /// Creates a driver over an engine with a custom numeric policy.
    #[must_use]
    pub fn with_options(options: EvalOptions) -> Self {
        Self {
            engine: Engine::with_options(options),
        }
    }

    /// Returns the driven engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Presses one button by label and returns the new display.
    ///
    /// An unknown label is a caller error and leaves the engine untouched.
    pub fn press(&mut self, label: &str) -> Result<&str, UnknownToken> {
        let token: Token = label.parse()?;
        Ok(self.engine.apply(token))
    }

    /// Presses a sequence of buttons and returns the final display.
    ///
    /// Stops at the first unknown label; tokens before it have already been
    /// applied.
    pub fn run<'a, I>(&mut self, labels: I) -> Result<String, UnknownToken>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for label in labels {
            self.press(label)?;
        }
        Ok(self.engine.display().to_string())
    }
}
