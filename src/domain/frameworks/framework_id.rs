//! Framework identifiers and the framework catalogue.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the six strategic lenses applied to a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrameworkId {
    Competition,
    Technology,
    TransactionCost,
    HoldUpRisk,
    Bargaining,
    Additional,
}

impl FrameworkId {
    /// All frameworks in presentation and scoring order.
    pub const ALL: [FrameworkId; 6] = [
        FrameworkId::Competition,
        FrameworkId::Technology,
        FrameworkId::TransactionCost,
        FrameworkId::HoldUpRisk,
        FrameworkId::Bargaining,
        FrameworkId::Additional,
    ];

    /// Wire identifier, as used in request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkId::Competition => "competition",
            FrameworkId::Technology => "technology",
            FrameworkId::TransactionCost => "transactionCost",
            FrameworkId::HoldUpRisk => "holdUpRisk",
            FrameworkId::Bargaining => "bargaining",
            FrameworkId::Additional => "additional",
        }
    }

    /// Name used in `FrameworkRecommendation::framework`.
    pub fn display_name(&self) -> &'static str {
        match self {
            FrameworkId::Competition => "Competition",
            FrameworkId::Technology => "Technology",
            FrameworkId::TransactionCost => "Transaction Costs",
            FrameworkId::HoldUpRisk => "Hold-Up Risk",
            FrameworkId::Bargaining => "Bargaining",
            FrameworkId::Additional => "Additional",
        }
    }

    /// Full title shown on the framework screen.
    pub fn title(&self) -> &'static str {
        match self {
            FrameworkId::Competition => "Competition-Driven Pressures",
            FrameworkId::Technology => "Technology S-Curve",
            FrameworkId::TransactionCost => "Transaction Cost Economics",
            FrameworkId::HoldUpRisk => "Hold-Up Risk",
            FrameworkId::Bargaining => "Bargaining Power",
            FrameworkId::Additional => "Additional Dimensions",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FrameworkId::Competition => {
                "Analyze how performance demands and cost pressures affect your decision."
            }
            FrameworkId::Technology => "Consider where the technology sits in its lifecycle.",
            FrameworkId::TransactionCost => "Evaluate specificity, uncertainty, and frequency.",
            FrameworkId::HoldUpRisk => {
                "Assess the risk of being locked into unfavorable arrangements."
            }
            FrameworkId::Bargaining => {
                "Analyze your negotiating position relative to potential partners."
            }
            FrameworkId::Additional => {
                "Consider time horizon, capability gaps, and optionality."
            }
        }
    }

    /// 1-based position in the exercise.
    pub fn order(&self) -> u8 {
        match self {
            FrameworkId::Competition => 1,
            FrameworkId::Technology => 2,
            FrameworkId::TransactionCost => 3,
            FrameworkId::HoldUpRisk => 4,
            FrameworkId::Bargaining => 5,
            FrameworkId::Additional => 6,
        }
    }
}

impl fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameworkId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FrameworkId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("framework", format!("unknown framework '{}'", s))
            })
    }
}
