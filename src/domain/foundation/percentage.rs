//! Whole-number percentage used for confidences and the weighted split.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Integer percent in `0..=100`. Serializes as a bare number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Saturates at 100. `const` so scoring tables can be built at compile time.
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// Rounds a share of a whole to the nearest percent, halves away from zero.
    ///
    /// Out-of-range and NaN inputs saturate to the nearest bound.
    pub fn from_fraction(fraction: f64) -> Self {
        let percent = (fraction * 100.0).round();
        if percent.is_nan() || percent <= 0.0 {
            Self(0)
        } else {
            Self::new(percent.min(100.0) as u8)
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// AI responses are untrusted, so out-of-range values are rejected rather
/// than clamped.
impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        if value > 100 {
            return Err(serde::de::Error::custom(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i32::from(value),
            )));
        }
        Ok(Self(value))
    }
}
