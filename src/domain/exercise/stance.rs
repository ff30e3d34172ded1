//! The learner's gut decision, locked in before any framework is scored.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::frameworks::Decision;

pub const MIN_STANCE_CONFIDENCE: u8 = 1;
pub const MAX_STANCE_CONFIDENCE: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialStance {
    pub decision: Decision,
    #[serde(default)]
    pub reasoning: String,
    /// Self-rated certainty, 1-5.
    pub confidence: u8,
    #[serde(default)]
    pub timestamp: Timestamp,
}

impl InitialStance {
    pub fn new(decision: Decision, reasoning: impl Into<String>, confidence: u8) -> Self {
        Self {
            decision,
            reasoning: reasoning.into(),
            confidence,
            timestamp: Timestamp::now(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_STANCE_CONFIDENCE..=MAX_STANCE_CONFIDENCE).contains(&self.confidence) {
            return Err(ValidationError::out_of_range(
                "stance.confidence",
                i32::from(MIN_STANCE_CONFIDENCE),
                i32::from(MAX_STANCE_CONFIDENCE),
                i32::from(self.confidence),
            ));
        }
        Ok(())
    }
}
