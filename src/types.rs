//! Type-safe truth-table cell values.
//!
//! Every cell in a truth table holds the integer 0 or 1, never a raw
//! boolean. The [`Bit`] newtype enforces that invariant at construction
//! time and converts back to plain integers at the rendering boundary.
use std::fmt;
use std::ops::Not;

/// A single truth-table cell: the integer 0 or 1.
///
/// # Invariants
///
/// - The wrapped value is always 0 or 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Bit(u8);

impl Bit {
    /// The constant 0.
    pub const ZERO: Bit = Bit(0);
    /// The constant 1.
    pub const ONE: Bit = Bit(1);

    /// Creates a bit from a raw integer.
    ///
    /// # Panics
    ///
    /// Panics if `value` is neither 0 nor 1.
    pub fn new(value: u8) -> Self {
        assert!(value <= 1, "Bit value must be 0 or 1");
        Bit(value)
    }

    /// Returns the raw value as a `u8` (0 or 1).
    pub fn value(self) -> u8 {
        self.0
    }

    /// Checks if the bit is 1.
    pub fn is_one(self) -> bool {
        self.0 == 1
    }

    /// Checks if the bit is 0.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Not for Bit {
    type Output = Bit;

    fn not(self) -> Bit {
        Bit(1 - self.0)
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::ONE
        } else {
            Bit::ZERO
        }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.0
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_creation() {
        assert_eq!(Bit::new(0), Bit::ZERO);
        assert_eq!(Bit::new(1), Bit::ONE);
        assert_eq!(Bit::new(1).value(), 1);
    }

    #[test]
    #[should_panic(expected = "Bit value must be 0 or 1")]
    fn test_bit_out_of_range_panics() {
        Bit::new(2);
    }

    #[test]
    fn test_bit_negation() {
        assert_eq!(!Bit::ZERO, Bit::ONE);
        assert_eq!(!Bit::ONE, Bit::ZERO);
    }

    #[test]
    fn test_bit_from_bool() {
        assert_eq!(Bit::from(true), Bit::ONE);
        assert_eq!(Bit::from(false), Bit::ZERO);
    }

    #[test]
    fn test_bit_display() {
        assert_eq!(Bit::ZERO.to_string(), "0");
        assert_eq!(Bit::ONE.to_string(), "1");
    }
}
