//! The complete analysis returned to the learner.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregator::{aggregate, WeightedResult};
use super::local_feedback::FeedbackItem;
use crate::domain::frameworks::{score_frameworks, Decision, FrameworkAnswers, FrameworkRecommendation};

/// Per-framework results plus the blended recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalAnalysis {
    pub framework_results: Vec<FrameworkRecommendation>,
    pub weighted_result: WeightedResult,
    pub primary_recommendation: Decision,
    pub conflicting_frameworks: bool,
    #[serde(default)]
    pub feedback: Vec<FeedbackItem>,
}

/// Scores the completed frameworks and blends them. Feedback is left empty.
pub fn compute_analysis(answers: &FrameworkAnswers) -> FinalAnalysis {
    let framework_results = score_frameworks(answers);
    let aggregation = aggregate(&framework_results);

    debug!(
        completed = framework_results.len(),
        total_weight = aggregation.total_weight,
        primary = %aggregation.primary_recommendation,
        conflicting = aggregation.conflicting_frameworks,
        "Computed local analysis"
    );

    FinalAnalysis {
        framework_results,
        weighted_result: aggregation.weighted_result,
        primary_recommendation: aggregation.primary_recommendation,
        conflicting_frameworks: aggregation.conflicting_frameworks,
        feedback: Vec::new(),
    }
}
