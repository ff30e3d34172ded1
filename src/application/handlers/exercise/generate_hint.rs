//! GenerateHintHandler - framework-level coaching hint.

use std::sync::Arc;
use tracing::error;

use super::ExerciseError;
use crate::domain::exercise::Scenario;
use crate::domain::frameworks::FrameworkId;
use crate::ports::StrategyAdvisor;

#[derive(Debug, Clone)]
pub struct GenerateHintCommand {
    pub framework: FrameworkId,
    pub scenario: Scenario,
    /// Whatever the learner has entered so far; `{}` when nothing.
    pub inputs: serde_json::Value,
}

pub struct GenerateHintHandler {
    advisor: Arc<dyn StrategyAdvisor>,
}

impl GenerateHintHandler {
    pub fn new(advisor: Arc<dyn StrategyAdvisor>) -> Self {
        Self { advisor }
    }

    /// There is no local fallback for hints.
    pub async fn handle(&self, cmd: GenerateHintCommand) -> Result<String, ExerciseError> {
        self.advisor
            .generate_hint(cmd.framework, &cmd.scenario, &cmd.inputs)
            .await
            .map_err(|e| {
                error!(error = %e, framework = %cmd.framework, "Hint generation failed");
                e.into()
            })
    }
}
