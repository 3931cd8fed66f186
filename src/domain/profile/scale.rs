//! Self-assessment scale value object (1-10).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A self-assessed value on the 1-10 scale used by skill, motivation and
/// trait sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ScaleValue(u8);

impl ScaleValue {
    /// Lowest value; the starting point for every skill.
    pub const MIN: Self = Self(1);

    /// Midpoint; the starting point for trait sliders.
    pub const MID: Self = Self(5);

    /// Highest value.
    pub const MAX: Self = Self(10);

    /// Creates a ScaleValue, returning error outside 1-10.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "scale_value",
                Self::MIN.0 as i32,
                Self::MAX.0 as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Creates a ScaleValue, clamping into 1-10.
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for ScaleValue {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for ScaleValue {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ScaleValue> for u8 {
    fn from(value: ScaleValue) -> Self {
        value.0
    }
}

impl fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_in_range() {
        assert_eq!(ScaleValue::try_new(1).unwrap(), ScaleValue::MIN);
        assert_eq!(ScaleValue::try_new(10).unwrap(), ScaleValue::MAX);
    }

    #[test]
    fn rejects_zero_and_eleven() {
        assert!(ScaleValue::try_new(0).is_err());
        assert!(ScaleValue::try_new(11).is_err());
    }

    #[test]
    fn clamped_pulls_into_range() {
        assert_eq!(ScaleValue::clamped(0).value(), 1);
        assert_eq!(ScaleValue::clamped(42).value(), 10);
    }

    #[test]
    fn deserialization_validates_range() {
        let ok: ScaleValue = serde_json::from_str("7").unwrap();
        assert_eq!(ok.value(), 7);
        assert!(serde_json::from_str::<ScaleValue>("12").is_err());
    }

    #[test]
    fn displays_out_of_ten() {
        assert_eq!(ScaleValue::MID.to_string(), "5/10");
    }
}
