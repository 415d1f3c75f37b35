//! The keypad the original desktop calculator exposes, as pure data.
//!
//! A presentation layer owns rendering; this module only describes the
//! grid: which buttons exist, what token each press produces, how wide each
//! button is, and which style record each button kind maps to. The engine
//! does not depend on any of this.

use serde::Serialize;

use crate::core::operations::{BinaryOp, UnaryFunc};
use crate::core::token::Token;

/// Visual classes of keypad buttons.
///
/// Flattens the source material's button inheritance chain into a tag; the
/// lookup in [`ButtonKind::style`] replaces behavioral inheritance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ButtonKind {
    /// Digits and the decimal point.
    Digit,
    /// Binary operators and `=`.
    Action,
    /// `AC`, `+/-`, and `%`.
    ExtraAction,
    /// The scientific function row.
    ScientificAction,
}

/// A style record for a button kind, colors as `#AARRGGBB` hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonStyle {
    /// Background fill color.
    pub background: &'static str,
    /// Label color.
    pub foreground: &'static str,
}

impl ButtonKind {
    /// Returns the style record for this kind.
    #[must_use]
    pub const fn style(self) -> ButtonStyle {
        match self {
            Self::Digit => ButtonStyle {
                background: "#3DFFFFFF",
                foreground: "#FFFFFFFF",
            },
            Self::Action => ButtonStyle {
                background: "#FFFF9800",
                foreground: "#FFFFFFFF",
            },
            Self::ExtraAction => ButtonStyle {
                background: "#FFCFD8DC",
                foreground: "#FF000000",
            },
            Self::ScientificAction => ButtonStyle {
                background: "#FF78909C",
                foreground: "#FFFFFFFF",
            },
        }
    }
}

/// One key on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Button {
    /// Text shown on the key; also the label the token vocabulary parses.
    pub label: &'static str,
    /// Token a press of this key produces.
    pub token: Token,
    /// Visual class of the key.
    pub kind: ButtonKind,
    /// Relative width weight within the row; the `0` key spans two columns.
    pub span: u8,
}

impl Button {
    const fn new(label: &'static str, token: Token, kind: ButtonKind) -> Self {
        Self {
            label,
            token,
            kind,
            span: 1,
        }
    }

    const fn wide(label: &'static str, token: Token, kind: ButtonKind, span: u8) -> Self {
        Self {
            label,
            token,
            kind,
            span,
        }
    }
}

/// The full keypad: six rows of buttons in the source layout.
///
/// ```text
/// [sin] [cos] [tan] [ln] [exp] [square]
/// [AC ] [+/-] [ % ] [ / ]
/// [ 7 ] [ 8 ] [ 9 ] [ * ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [   0   ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Keypad {
    rows: Vec<Vec<Button>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad.
    #[must_use]
    pub fn new() -> Self {
        use BinaryOp::{Add, Div, Mul, Sub};
        use ButtonKind::{Action, Digit, ExtraAction, ScientificAction};
        use UnaryFunc::{Cos, Exp, Ln, Sin, Square, Tan};

        let rows = vec![
            vec![
                Button::new("sin", Token::Func(Sin), ScientificAction),
                Button::new("cos", Token::Func(Cos), ScientificAction),
                Button::new("tan", Token::Func(Tan), ScientificAction),
                Button::new("ln", Token::Func(Ln), ScientificAction),
                Button::new("exp", Token::Func(Exp), ScientificAction),
                Button::new("square", Token::Func(Square), ScientificAction),
            ],
            vec![
                Button::new("AC", Token::Clear, ExtraAction),
                Button::new("+/-", Token::ToggleSign, ExtraAction),
                Button::new("%", Token::Percent, ExtraAction),
                Button::new("/", Token::Op(Div), Action),
            ],
            vec![
                Button::new("7", Token::Digit(7), Digit),
                Button::new("8", Token::Digit(8), Digit),
                Button::new("9", Token::Digit(9), Digit),
                Button::new("*", Token::Op(Mul), Action),
            ],
            vec![
                Button::new("4", Token::Digit(4), Digit),
                Button::new("5", Token::Digit(5), Digit),
                Button::new("6", Token::Digit(6), Digit),
                Button::new("-", Token::Op(Sub), Action),
            ],
            vec![
                Button::new("1", Token::Digit(1), Digit),
                Button::new("2", Token::Digit(2), Digit),
                Button::new("3", Token::Digit(3), Digit),
                Button::new("+", Token::Op(Add), Action),
            ],
            vec![
                Button::wide("0", Token::Digit(0), Digit, 2),
                Button::new(".", Token::Decimal, Digit),
                Button::new("=", Token::Equals, Action),
            ],
        ];

        Self { rows }
    }

    /// Number of rows, top to bottom.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Buttons of one row.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[Button]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Iterates over every button in row-major order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    /// Total number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Finds a button by its label.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&Button> {
        self.buttons().find(|b| b.label == label)
    }
}
