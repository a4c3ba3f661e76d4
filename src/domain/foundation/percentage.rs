//! Percentage value object (0-100 scale).
//!
//! Used for normalized quiz scores and axis confidence.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const HALF: Self = Self(50);
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Rounds a fraction (0.0 to 1.0) to the nearest whole percent.
    ///
    /// Values outside the unit interval are clamped; NaN maps to zero.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self::ZERO;
        }
        let scaled = (fraction.clamp(0.0, 1.0) * 100.0).round();
        Self(scaled as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(100).value(), 100);
        assert_eq!(Percentage::new(180).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn from_fraction_rounds_to_nearest() {
        assert_eq!(Percentage::from_fraction(0.0).value(), 0);
        assert_eq!(Percentage::from_fraction(0.834).value(), 83);
        assert_eq!(Percentage::from_fraction(0.836).value(), 84);
        assert_eq!(Percentage::from_fraction(1.0).value(), 100);
    }

    #[test]
    fn from_fraction_clamps_out_of_range_and_nan() {
        assert_eq!(Percentage::from_fraction(-0.3), Percentage::ZERO);
        assert_eq!(Percentage::from_fraction(2.5), Percentage::HUNDRED);
        assert_eq!(Percentage::from_fraction(f64::NAN), Percentage::ZERO);
    }

    #[test]
    fn percentage_displays_with_sign() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::HALF), "50%");
    }

    #[test]
    fn percentage_serializes_as_bare_number() {
        let json = serde_json::to_string(&Percentage::new(42)).unwrap();
        assert_eq!(json, "42");
        let back: Percentage = serde_json::from_str("42").unwrap();
        assert_eq!(back.value(), 42);
    }
}
