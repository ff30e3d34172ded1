//! Strategy Advisor Port - the AI coach behind the exercise.
//!
//! Every operation has a typed result. Implementations decode model output
//! strictly; anything that does not fit the expected shape surfaces as
//! [`ParseError`] so the request boundary can fall back or report it.

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::domain::analysis::{FeedbackItem, FinalAnalysis};
use crate::domain::exercise::{InitialStance, Scenario, SourceType};
use crate::domain::frameworks::{FrameworkAnswers, FrameworkId};

use super::AIError;

/// Per-input hint text keyed by input id (e.g. `assetSpecificity`).
pub type InputHints = BTreeMap<String, String>;

/// Port for AI coaching operations.
#[async_trait]
pub trait StrategyAdvisor: Send + Sync {
    /// Frames raw source material as a make/buy/partner scenario.
    async fn parse_scenario(
        &self,
        input: &str,
        source_type: SourceType,
    ) -> Result<Scenario, AdvisorError>;

    /// Framework-level hint. `inputs` is whatever the learner has entered so far.
    async fn generate_hint(
        &self,
        framework: FrameworkId,
        scenario: &Scenario,
        inputs: &serde_json::Value,
    ) -> Result<String, AdvisorError>;

    /// One hint per input of `framework`.
    async fn generate_input_hints(
        &self,
        framework: FrameworkId,
        scenario: &Scenario,
    ) -> Result<InputHints, AdvisorError>;

    /// Full analysis of the learner's answers. `feedback` is always empty.
    async fn analyze_results(
        &self,
        scenario: &Scenario,
        stance: &InitialStance,
        frameworks: &FrameworkAnswers,
    ) -> Result<FinalAnalysis, AdvisorError>;

    /// Coaching feedback comparing the stance with the analysis.
    async fn provide_feedback(
        &self,
        scenario: &Scenario,
        stance: &InitialStance,
        analysis: &FinalAnalysis,
    ) -> Result<Vec<FeedbackItem>, AdvisorError>;
}

/// Failure of an advisor operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    #[error("AI provider error: {0}")]
    Provider(#[from] AIError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No provider is configured, or AI is switched off.
    #[error("AI coaching is disabled")]
    Disabled,
}

impl AdvisorError {
    /// Whether the caller should treat this as "AI unavailable" rather than a bug.
    pub fn is_unavailable(&self) -> bool {
        match self {
            AdvisorError::Provider(_) | AdvisorError::Disabled => true,
            AdvisorError::Parse(_) => false,
        }
    }
}

/// Model output that did not decode into the expected type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{operation}: response was empty")]
    Empty { operation: &'static str },

    #[error("{operation}: response is not valid JSON: {message}")]
    InvalidJson {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: {reason}")]
    InvalidContent {
        operation: &'static str,
        reason: String,
    },
}

impl ParseError {
    pub fn empty(operation: &'static str) -> Self {
        ParseError::Empty { operation }
    }

    pub fn invalid_json(operation: &'static str, message: impl Into<String>) -> Self {
        ParseError::InvalidJson {
            operation,
            message: message.into(),
        }
    }

    pub fn invalid_content(operation: &'static str, reason: impl Into<String>) -> Self {
        ParseError::InvalidContent {
            operation,
            reason: reason.into(),
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            ParseError::Empty { operation }
            | ParseError::InvalidJson { operation, .. }
            | ParseError::InvalidContent { operation, .. } => operation,
        }
    }
}
