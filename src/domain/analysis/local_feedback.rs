//! Deterministic coaching feedback used when the AI coach is unavailable.

use serde::{Deserialize, Serialize};

use crate::domain::frameworks::Decision;

/// Category of a feedback item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Strength,
    Consideration,
    Flaw,
}

/// One piece of coaching feedback on the learner's reasoning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub title: String,
    pub description: String,
}

impl FeedbackItem {
    pub fn new(kind: FeedbackKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Builds the three fixed feedback items comparing stance and outcome.
///
/// `_stance_reasoning` is accepted for signature parity with the AI coach and
/// is not inspected.
pub fn compute_local_feedback(
    stance_decision: Decision,
    _stance_reasoning: &str,
    primary_recommendation: Decision,
) -> Vec<FeedbackItem> {
    let matched = stance_decision == primary_recommendation;
    let stance = stance_decision.as_str().to_uppercase();
    let recommended = primary_recommendation.as_str().to_uppercase();

    let strength = if matched {
        FeedbackItem::new(
            FeedbackKind::Strength,
            "Your instinct aligned with systematic analysis",
            format!(
                "Your initial choice of {stance} was validated by the frameworks. This suggests \
                 you intuitively recognized key factors that drive this decision."
            ),
        )
    } else {
        FeedbackItem::new(
            FeedbackKind::Strength,
            "You engaged thoughtfully with the problem",
            "Your reasoning shows careful consideration of the strategic context. The \
             frameworks revealed additional factors that shifted the recommendation.",
        )
    };

    let revealed = if matched {
        format!(
            "Multiple frameworks pointed toward {recommended}, reinforcing your initial \
             thinking. The systematic analysis confirmed factors like transaction costs and \
             hold-up risk."
        )
    } else {
        format!(
            "The frameworks highlighted factors you may have weighted differently. Consider \
             how transaction costs, technology lifecycle, and bargaining position influenced \
             the recommendation toward {recommended}."
        )
    };

    vec![
        strength,
        FeedbackItem::new(
            FeedbackKind::Consideration,
            "What the frameworks revealed",
            revealed,
        ),
        FeedbackItem::new(
            FeedbackKind::Consideration,
            "Key learning",
            "Systematic frameworks help surface blind spots and validate intuitions. Over \
             time, this process builds strategic pattern recognition.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(items: &[FeedbackItem]) -> Vec<FeedbackKind> {
        items.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn always_strength_then_two_considerations() {
        for stance in Decision::ALL {
            for primary in Decision::ALL {
                let items = compute_local_feedback(stance, "because", primary);
                assert_eq!(
                    kinds(&items),
                    vec![
                        FeedbackKind::Strength,
                        FeedbackKind::Consideration,
                        FeedbackKind::Consideration
                    ]
                );
                assert_eq!(items[1].title, "What the frameworks revealed");
                assert_eq!(items[2].title, "Key learning");
            }
        }
    }

    #[test]
    fn matched_stance_praises_alignment() {
        let items = compute_local_feedback(Decision::Make, "", Decision::Make);

        assert_eq!(items[0].title, "Your instinct aligned with systematic analysis");
        assert!(items[0].description.contains("Your initial choice of MAKE was validated"));
        assert!(items[1].description.starts_with("Multiple frameworks pointed toward MAKE"));
    }

    #[test]
    fn diverging_stance_names_the_recommendation() {
        let items = compute_local_feedback(Decision::Buy, "", Decision::Partner);

        assert_eq!(items[0].title, "You engaged thoughtfully with the problem");
        assert!(items[1]
            .description
            .ends_with("influenced the recommendation toward PARTNER."));
    }

    #[test]
    fn reasoning_text_does_not_change_output() {
        let a = compute_local_feedback(Decision::Buy, "", Decision::Buy);
        let b = compute_local_feedback(Decision::Buy, "a long justification", Decision::Buy);
        assert_eq!(a, b);
    }

    #[test]
    fn feedback_item_uses_type_key() {
        let item = FeedbackItem::new(FeedbackKind::Flaw, "t", "d");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["type"], "flaw");
        assert!(json.get("kind").is_none());
    }
}
