//! LLM-backed strategy advisor.
//!
//! Renders the coaching prompts, sends them through an [`AIProvider`] and
//! decodes the answers strictly. The provider decides which vendor is used;
//! this type never reads configuration.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

use super::prompts;
use super::response_parser::{decode_json, decode_text};
use crate::domain::analysis::{FeedbackItem, FinalAnalysis};
use crate::domain::exercise::{InitialStance, Scenario, SourceType};
use crate::domain::frameworks::{inputs_for, FrameworkAnswers, FrameworkId};
use crate::ports::{
    AIError, AIProvider, AdvisorError, CompletionRequest, FinishReason, InputHints, MessageRole,
    ParseError, RequestMetadata, StrategyAdvisor,
};

const STRUCTURED_MAX_TOKENS: u32 = 4096;
const HINT_MAX_TOKENS: u32 = 2048;

pub struct LlmStrategyAdvisor {
    provider: Arc<dyn AIProvider>,
}

impl LlmStrategyAdvisor {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, AdvisorError> {
        let info = self.provider.provider_info();
        debug!(
            operation = %request.metadata.operation,
            trace_id = %request.metadata.trace_id,
            provider = %info.name,
            model = %info.model,
            estimated_tokens = self.provider.estimate_tokens(&request.prompt_text()),
            "Requesting completion"
        );

        let operation = request.metadata.operation.clone();
        let response = self.provider.complete(request).await?;
        if response.finish_reason == FinishReason::Length {
            warn!(operation = %operation, "Completion stopped at the token limit");
        }
        debug!(
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            "Completion received"
        );
        Ok(response.content)
    }

    fn prompt(operation: &str, prompt: String, max_tokens: u32) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(operation))
            .with_message(MessageRole::User, prompt)
            .with_max_tokens(max_tokens)
    }
}

/// Scenario fields the model is asked to produce.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParsedScenario {
    title: String,
    summary: String,
    context: String,
    #[serde(default)]
    key_factors: Vec<String>,
    #[serde(default)]
    stakeholders: Vec<String>,
    #[serde(default)]
    constraints: Vec<String>,
}

fn to_value<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, AdvisorError> {
    serde_json::to_value(value)
        .map_err(|e| AIError::InvalidRequest(format!("failed to serialize prompt input: {}", e)).into())
}

#[async_trait]
impl StrategyAdvisor for LlmStrategyAdvisor {
    async fn parse_scenario(
        &self,
        input: &str,
        source_type: SourceType,
    ) -> Result<Scenario, AdvisorError> {
        const OPERATION: &str = "parse_scenario";

        let request = CompletionRequest::new(RequestMetadata::new(OPERATION))
            .with_system_prompt(prompts::SCENARIO_PARSING_PROMPT)
            .with_message(
                MessageRole::User,
                prompts::render_scenario_input(input, source_type),
            )
            .with_max_tokens(STRUCTURED_MAX_TOKENS);

        let text = self.complete(request).await?;
        let parsed: ParsedScenario = decode_json(OPERATION, &text)?;
        if parsed.title.trim().is_empty() {
            return Err(ParseError::invalid_content(OPERATION, "scenario has no title").into());
        }

        Ok(Scenario {
            id: Scenario::new_id(),
            title: parsed.title,
            summary: parsed.summary,
            context: parsed.context,
            key_factors: parsed.key_factors,
            stakeholders: parsed.stakeholders,
            constraints: parsed.constraints,
            raw_input: Some(input.to_string()),
            source_type,
        })
    }

    async fn generate_hint(
        &self,
        framework: FrameworkId,
        scenario: &Scenario,
        inputs: &serde_json::Value,
    ) -> Result<String, AdvisorError> {
        let prompt = prompts::render_hint(framework, scenario, inputs);
        let text = self
            .complete(Self::prompt("generate_hint", prompt, HINT_MAX_TOKENS))
            .await?;
        Ok(decode_text("generate_hint", &text)?)
    }

    async fn generate_input_hints(
        &self,
        framework: FrameworkId,
        scenario: &Scenario,
    ) -> Result<InputHints, AdvisorError> {
        const OPERATION: &str = "generate_input_hints";

        let prompt = prompts::render_input_hints(framework, scenario);
        let text = self
            .complete(Self::prompt(OPERATION, prompt, HINT_MAX_TOKENS))
            .await?;
        let mut hints: InputHints = decode_json(OPERATION, &text)?;

        let known = inputs_for(framework);
        hints.retain(|id, hint| known.iter().any(|meta| meta.id == id) && !hint.trim().is_empty());
        if hints.is_empty() {
            return Err(ParseError::invalid_content(
                OPERATION,
                format!("no hints for any {} input", framework.as_str()),
            )
            .into());
        }
        Ok(hints)
    }

    async fn analyze_results(
        &self,
        scenario: &Scenario,
        stance: &InitialStance,
        frameworks: &FrameworkAnswers,
    ) -> Result<FinalAnalysis, AdvisorError> {
        const OPERATION: &str = "analyze_results";

        let prompt = prompts::render_analysis(
            scenario,
            stance.decision.as_str(),
            &to_value(frameworks)?,
        );
        let text = self
            .complete(Self::prompt(OPERATION, prompt, STRUCTURED_MAX_TOKENS))
            .await?;

        let mut analysis: FinalAnalysis = decode_json(OPERATION, &text)?;
        analysis.feedback = Vec::new();
        Ok(analysis)
    }

    async fn provide_feedback(
        &self,
        scenario: &Scenario,
        stance: &InitialStance,
        analysis: &FinalAnalysis,
    ) -> Result<Vec<FeedbackItem>, AdvisorError> {
        const OPERATION: &str = "provide_feedback";

        let summary = json!({
            "primaryRecommendation": analysis.primary_recommendation,
            "weightedResult": analysis.weighted_result,
        });
        let prompt = prompts::render_feedback(
            scenario,
            stance.decision.as_str(),
            &stance.reasoning,
            &summary,
        );
        let text = self
            .complete(Self::prompt(OPERATION, prompt, STRUCTURED_MAX_TOKENS))
            .await?;

        let items: Vec<FeedbackItem> = decode_json(OPERATION, &text)?;
        if items.is_empty() {
            return Err(ParseError::invalid_content(OPERATION, "no feedback items").into());
        }
        Ok(items)
    }
}
