//! Decision outcome space.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three sourcing strategies the exercise chooses between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Vertical integration: develop and produce internally.
    Make,
    /// Market sourcing: purchase from external vendors.
    Buy,
    /// Collaborative arrangement: alliance or joint venture.
    Partner,
}

impl Decision {
    /// All decisions, in tie-break precedence order.
    pub const ALL: [Decision; 3] = [Decision::Make, Decision::Buy, Decision::Partner];

    /// Wire value (`make`, `buy`, `partner`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Make => "make",
            Decision::Buy => "buy",
            Decision::Partner => "partner",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single framework: a decision, or no clear signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Make,
    Buy,
    Partner,
    /// Inputs did not clear any decision threshold.
    Inconclusive,
}

impl Verdict {
    /// The decision this verdict supports, if any.
    pub fn decision(&self) -> Option<Decision> {
        match self {
            Verdict::Make => Some(Decision::Make),
            Verdict::Buy => Some(Decision::Buy),
            Verdict::Partner => Some(Decision::Partner),
            Verdict::Inconclusive => None,
        }
    }
}

impl From<Decision> for Verdict {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Make => Verdict::Make,
            Decision::Buy => Verdict::Buy,
            Decision::Partner => Verdict::Partner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Decision::Make).unwrap(), "\"make\"");
        assert_eq!(serde_json::to_string(&Decision::Partner).unwrap(), "\"partner\"");
    }

    #[test]
    fn decision_rejects_unknown_values() {
        assert!(serde_json::from_str::<Decision>("\"inconclusive\"").is_err());
        assert!(serde_json::from_str::<Decision>("\"lease\"").is_err());
    }

    #[test]
    fn verdict_accepts_inconclusive() {
        let verdict: Verdict = serde_json::from_str("\"inconclusive\"").unwrap();
        assert_eq!(verdict, Verdict::Inconclusive);
        assert_eq!(verdict.decision(), None);
    }

    #[test]
    fn verdict_round_trips_through_decision() {
        for decision in Decision::ALL {
            assert_eq!(Verdict::from(decision).decision(), Some(decision));
        }
    }

    #[test]
    fn display_uses_wire_value() {
        assert_eq!(Decision::Buy.to_string(), "buy");
    }
}
