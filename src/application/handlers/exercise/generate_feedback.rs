//! GenerateFeedbackHandler - coaching feedback with a fixed local fallback.

use std::sync::Arc;
use tracing::warn;

use super::{ExerciseError, ResponseOrigin};
use crate::domain::analysis::{compute_local_feedback, FeedbackItem, FinalAnalysis};
use crate::domain::exercise::{InitialStance, Scenario};
use crate::ports::StrategyAdvisor;

#[derive(Debug, Clone)]
pub struct GenerateFeedbackCommand {
    pub scenario: Scenario,
    pub stance: InitialStance,
    pub analysis: FinalAnalysis,
}

#[derive(Debug, Clone)]
pub struct GenerateFeedbackResult {
    pub feedback: Vec<FeedbackItem>,
    pub origin: ResponseOrigin,
}

pub struct GenerateFeedbackHandler {
    advisor: Arc<dyn StrategyAdvisor>,
}

impl GenerateFeedbackHandler {
    pub fn new(advisor: Arc<dyn StrategyAdvisor>) -> Self {
        Self { advisor }
    }

    pub async fn handle(
        &self,
        cmd: GenerateFeedbackCommand,
    ) -> Result<GenerateFeedbackResult, ExerciseError> {
        cmd.stance.validate()?;

        match self
            .advisor
            .provide_feedback(&cmd.scenario, &cmd.stance, &cmd.analysis)
            .await
        {
            Ok(feedback) => Ok(GenerateFeedbackResult {
                feedback,
                origin: ResponseOrigin::Advisor,
            }),
            Err(e) => {
                warn!(error = %e, scenario = %cmd.scenario.id, "AI feedback failed, using local generation");
                Ok(GenerateFeedbackResult {
                    feedback: compute_local_feedback(
                        cmd.stance.decision,
                        &cmd.stance.reasoning,
                        cmd.analysis.primary_recommendation,
                    ),
                    origin: ResponseOrigin::Fallback,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{DisabledAdvisor, LlmStrategyAdvisor, MockAIProvider};
    use crate::domain::analysis::{compute_analysis, FeedbackKind};
    use crate::domain::frameworks::{Decision, FrameworkAnswers};

    fn command(stance: Decision) -> GenerateFeedbackCommand {
        GenerateFeedbackCommand {
            scenario: Scenario::example(),
            stance: InitialStance::new(stance, "Gut feel", 2),
            analysis: compute_analysis(&FrameworkAnswers::default()),
        }
    }

    #[tokio::test]
    async fn falls_back_to_three_local_items() {
        let handler = GenerateFeedbackHandler::new(Arc::new(DisabledAdvisor));

        let result = handler.handle(command(Decision::Make)).await.unwrap();

        assert_eq!(result.origin, ResponseOrigin::Fallback);
        let kinds: Vec<_> = result.feedback.iter().map(|item| item.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FeedbackKind::Strength,
                FeedbackKind::Consideration,
                FeedbackKind::Consideration
            ]
        );
        assert_eq!(
            result.feedback[0].title,
            "Your instinct aligned with systematic analysis"
        );
    }

    #[tokio::test]
    async fn fallback_reflects_mismatch() {
        let handler = GenerateFeedbackHandler::new(Arc::new(DisabledAdvisor));

        let result = handler.handle(command(Decision::Partner)).await.unwrap();

        assert_eq!(
            result.feedback[0].title,
            "You engaged thoughtfully with the problem"
        );
        assert!(result.feedback[1].description.contains("toward MAKE"));
    }

    #[tokio::test]
    async fn malformed_ai_feedback_falls_back() {
        let mock = MockAIProvider::new().with_response(r#"[{"type":"praise","title":"t","description":"d"}]"#);
        let handler =
            GenerateFeedbackHandler::new(Arc::new(LlmStrategyAdvisor::new(Arc::new(mock))));

        let result = handler.handle(command(Decision::Make)).await.unwrap();
        assert_eq!(result.origin, ResponseOrigin::Fallback);
        assert_eq!(result.feedback.len(), 3);
    }

    #[tokio::test]
    async fn ai_feedback_is_returned_as_is() {
        let mock = MockAIProvider::new()
            .with_response(r#"[{"type":"flaw","title":"Ignored lock-in","description":"d"}]"#);
        let handler =
            GenerateFeedbackHandler::new(Arc::new(LlmStrategyAdvisor::new(Arc::new(mock))));

        let result = handler.handle(command(Decision::Make)).await.unwrap();

        assert_eq!(result.origin, ResponseOrigin::Advisor);
        assert_eq!(result.feedback.len(), 1);
        assert_eq!(result.feedback[0].kind, FeedbackKind::Flaw);
    }
}
