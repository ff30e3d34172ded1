//! GenerateInputHintsHandler - one hint per framework input.

use std::sync::Arc;
use tracing::error;

use super::ExerciseError;
use crate::domain::exercise::Scenario;
use crate::domain::frameworks::FrameworkId;
use crate::ports::{InputHints, StrategyAdvisor};

#[derive(Debug, Clone)]
pub struct GenerateInputHintsCommand {
    pub framework: FrameworkId,
    pub scenario: Scenario,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateInputHintsResult {
    pub framework: FrameworkId,
    pub hints: InputHints,
}

pub struct GenerateInputHintsHandler {
    advisor: Arc<dyn StrategyAdvisor>,
}

impl GenerateInputHintsHandler {
    pub fn new(advisor: Arc<dyn StrategyAdvisor>) -> Self {
        Self { advisor }
    }

    pub async fn handle(
        &self,
        cmd: GenerateInputHintsCommand,
    ) -> Result<GenerateInputHintsResult, ExerciseError> {
        let hints = self
            .advisor
            .generate_input_hints(cmd.framework, &cmd.scenario)
            .await
            .map_err(|e| {
                error!(error = %e, framework = %cmd.framework, "Input hints generation failed");
                ExerciseError::from(e)
            })?;

        Ok(GenerateInputHintsResult {
            framework: cmd.framework,
            hints,
        })
    }
}
