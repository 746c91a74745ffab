//! Button identities

use crate::digit::Digit;

/// The two push buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Increments the digit
    A,
    /// Decrements the digit
    B,
}

impl Button {
    /// Number of buttons
    pub const COUNT: usize = 2;

    /// Buttons in service order (A is handled first)
    pub const ALL: [Button; Self::COUNT] = [Button::A, Button::B];

    /// Stable index for per-button tables
    pub const fn index(self) -> usize {
        match self {
            Button::A => 0,
            Button::B => 1,
        }
    }

    /// Apply this button's step to a digit
    pub const fn step(self, digit: Digit) -> Digit {
        match self {
            Button::A => digit.next(),
            Button::B => digit.prev(),
        }
    }
}
