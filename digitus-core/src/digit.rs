//! The displayed digit

use core::fmt;

/// A decimal digit in `0..=9`
///
/// Stepping wraps in both directions, so the value can never leave the
/// range once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

/// Value passed in was not a decimal digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange;

impl Digit {
    /// Number of distinct digits
    pub const COUNT: u8 = 10;

    /// The digit shown at power-on
    pub const ZERO: Digit = Digit(0);

    /// Create a digit, or `None` if `value > 9`
    pub const fn new(value: u8) -> Option<Self> {
        if value < Self::COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Numeric value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// `(d + 1) mod 10`
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }

    /// `(d - 1 + 10) mod 10`
    pub const fn prev(self) -> Self {
        Self((self.0 + Self::COUNT - 1) % Self::COUNT)
    }

    /// All digits in ascending order
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..Self::COUNT).map(Digit)
    }
}

impl TryFrom<i32> for Digit {
    type Error = OutOfRange;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Digit::new)
            .ok_or(OutOfRange)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
