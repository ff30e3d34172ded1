//! AnalyzeFrameworksHandler - AI analysis with deterministic fallback.

use std::sync::Arc;
use tracing::{info, warn};

use super::{ExerciseError, ResponseOrigin};
use crate::domain::analysis::{compute_analysis, FinalAnalysis};
use crate::domain::exercise::{InitialStance, Scenario};
use crate::domain::frameworks::FrameworkAnswers;
use crate::ports::StrategyAdvisor;

#[derive(Debug, Clone)]
pub struct AnalyzeFrameworksCommand {
    pub scenario: Scenario,
    pub stance: InitialStance,
    pub frameworks: FrameworkAnswers,
}

#[derive(Debug, Clone)]
pub struct AnalyzeFrameworksResult {
    pub analysis: FinalAnalysis,
    pub origin: ResponseOrigin,
}

pub struct AnalyzeFrameworksHandler {
    advisor: Arc<dyn StrategyAdvisor>,
}

impl AnalyzeFrameworksHandler {
    pub fn new(advisor: Arc<dyn StrategyAdvisor>) -> Self {
        Self { advisor }
    }

    /// Fails only on invalid input; advisor failures fall back to local scoring.
    pub async fn handle(
        &self,
        cmd: AnalyzeFrameworksCommand,
    ) -> Result<AnalyzeFrameworksResult, ExerciseError> {
        cmd.stance.validate()?;
        cmd.frameworks.validate()?;

        match self
            .advisor
            .analyze_results(&cmd.scenario, &cmd.stance, &cmd.frameworks)
            .await
        {
            Ok(analysis) => {
                info!(
                    scenario = %cmd.scenario.id,
                    primary = %analysis.primary_recommendation,
                    "AI analysis complete"
                );
                Ok(AnalyzeFrameworksResult {
                    analysis,
                    origin: ResponseOrigin::Advisor,
                })
            }
            Err(e) => {
                warn!(error = %e, scenario = %cmd.scenario.id, "AI analysis failed, using local calculation");
                Ok(AnalyzeFrameworksResult {
                    analysis: compute_analysis(&cmd.frameworks),
                    origin: ResponseOrigin::Fallback,
                })
            }
        }
    }
}
