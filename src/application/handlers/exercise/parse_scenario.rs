//! ParseScenarioHandler - frames source text as a decision scenario.

use std::sync::Arc;
use tracing::{error, info};

use super::ExerciseError;
use crate::domain::exercise::{validate_scenario_input, Scenario, SourceType};
use crate::ports::StrategyAdvisor;

#[derive(Debug, Clone)]
pub struct ParseScenarioCommand {
    pub input: String,
    pub source_type: SourceType,
}

pub struct ParseScenarioHandler {
    advisor: Arc<dyn StrategyAdvisor>,
}

impl ParseScenarioHandler {
    pub fn new(advisor: Arc<dyn StrategyAdvisor>) -> Self {
        Self { advisor }
    }

    pub async fn handle(&self, cmd: ParseScenarioCommand) -> Result<Scenario, ExerciseError> {
        validate_scenario_input("input", &cmd.input)?;

        let scenario = self
            .advisor
            .parse_scenario(&cmd.input, cmd.source_type)
            .await
            .map_err(|e| {
                error!(error = %e, source_type = cmd.source_type.as_str(), "Parse scenario failed");
                ExerciseError::from(e)
            })?;

        info!(scenario = %scenario.id, title = %scenario.title, "Scenario parsed");
        Ok(scenario)
    }
}
