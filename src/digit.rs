//! The recognizer's output alphabet.

use crate::util::InkDigitError;
use std::fmt;

/// A decimal digit in `0..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// All ten digits in ascending order.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Creates a digit, or `None` if `value > 9`.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Index into per-digit tables.
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Digit {
    type Error = InkDigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or(InkDigitError::InvalidDigit(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Digit;
    use crate::util::InkDigitError;

    #[test]
    fn digit_range_is_checked() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::try_from(12u8), Err(InkDigitError::InvalidDigit(12)));
    }

    #[test]
    fn all_is_ascending() {
        for (idx, digit) in Digit::ALL.iter().enumerate() {
            assert_eq!(digit.index(), idx);
        }
        assert_eq!(Digit::ALL[7].to_string(), "7");
    }
}
