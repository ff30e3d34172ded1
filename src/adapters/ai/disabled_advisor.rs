//! Advisor used when AI coaching is switched off or no provider key is set.

use async_trait::async_trait;

use crate::domain::analysis::{FeedbackItem, FinalAnalysis};
use crate::domain::exercise::{InitialStance, Scenario, SourceType};
use crate::domain::frameworks::{FrameworkAnswers, FrameworkId};
use crate::ports::{AdvisorError, InputHints, StrategyAdvisor};

/// Answers every operation with [`AdvisorError::Disabled`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAdvisor;

#[async_trait]
impl StrategyAdvisor for DisabledAdvisor {
    async fn parse_scenario(&self, _: &str, _: SourceType) -> Result<Scenario, AdvisorError> {
        Err(AdvisorError::Disabled)
    }

    async fn generate_hint(
        &self,
        _: FrameworkId,
        _: &Scenario,
        _: &serde_json::Value,
    ) -> Result<String, AdvisorError> {
        Err(AdvisorError::Disabled)
    }

    async fn generate_input_hints(
        &self,
        _: FrameworkId,
        _: &Scenario,
    ) -> Result<InputHints, AdvisorError> {
        Err(AdvisorError::Disabled)
    }

    async fn analyze_results(
        &self,
        _: &Scenario,
        _: &InitialStance,
        _: &FrameworkAnswers,
    ) -> Result<FinalAnalysis, AdvisorError> {
        Err(AdvisorError::Disabled)
    }

    async fn provide_feedback(
        &self,
        _: &Scenario,
        _: &InitialStance,
        _: &FinalAnalysis,
    ) -> Result<Vec<FeedbackItem>, AdvisorError> {
        Err(AdvisorError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_operation_reports_disabled() {
        let advisor = DisabledAdvisor;
        let scenario = Scenario::example();

        assert_eq!(
            advisor.parse_scenario("x", SourceType::Text).await.unwrap_err(),
            AdvisorError::Disabled
        );
        assert!(advisor
            .generate_input_hints(FrameworkId::Technology, &scenario)
            .await
            .unwrap_err()
            .is_unavailable());
    }
}
