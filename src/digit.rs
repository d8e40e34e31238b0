//! The displayed digit.

use crate::button::ButtonId;

/// A decimal digit in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

/// Digit construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitError {
    /// Value is not a single decimal digit.
    OutOfRange(u8),
}

impl core::fmt::Display for DigitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DigitError::OutOfRange(value) => {
                write!(f, "{} is not a digit (expected 0-9)", value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitError {}

impl Digit {
    pub const ZERO: Self = Digit(0);
    pub const MAX: Self = Digit(9);

    /// Creates a digit, rejecting values above 9.
    pub const fn new(value: u8) -> Result<Self, DigitError> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Next digit, 9 wraps to 0.
    pub const fn increment(self) -> Self {
        Digit((self.0 + 1) % 10)
    }

    /// Previous digit, 0 wraps to 9.
    pub const fn decrement(self) -> Self {
        Digit((self.0 + 9) % 10)
    }

    /// Applies a confirmed press: A counts up, B counts down.
    pub const fn apply(self, button: ButtonId) -> Self {
        match button {
            ButtonId::A => self.increment(),
            ButtonId::B => self.decrement(),
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl core::fmt::Display for Digit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
