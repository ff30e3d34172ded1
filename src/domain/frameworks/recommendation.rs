//! Per-framework scoring output.

use serde::{Deserialize, Serialize};

use super::{FrameworkId, Verdict};
use crate::domain::foundation::Percentage;

/// What a single framework concluded about the scenario.
///
/// `framework` carries the display name ("Transaction Costs"), not the wire
/// identifier, because AI-produced results use free-form names too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkRecommendation {
    pub framework: String,
    pub recommendation: Verdict,
    pub confidence: Percentage,
    pub reasoning: String,
}

impl FrameworkRecommendation {
    pub fn new(
        framework: FrameworkId,
        recommendation: Verdict,
        confidence: Percentage,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            framework: framework.display_name().to_string(),
            recommendation,
            confidence,
            reasoning: reasoning.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_display_name() {
        let rec = FrameworkRecommendation::new(
            FrameworkId::HoldUpRisk,
            Verdict::Make,
            Percentage::new(82),
            "High hold-up risk justifies vertical integration",
        );

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["framework"], "Hold-Up Risk");
        assert_eq!(json["recommendation"], "make");
        assert_eq!(json["confidence"], 82);
    }

    #[test]
    fn deserializes_inconclusive_results() {
        let rec: FrameworkRecommendation = serde_json::from_str(
            r#"{"framework":"Competition","recommendation":"inconclusive","confidence":50,"reasoning":"x"}"#,
        )
        .unwrap();

        assert_eq!(rec.recommendation, Verdict::Inconclusive);
        assert_eq!(rec.confidence.value(), 50);
    }
}
