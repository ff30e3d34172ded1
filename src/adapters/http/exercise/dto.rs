//! HTTP DTOs for exercise endpoints.
//!
//! Request bodies reuse the domain types directly where the wire shape is the
//! domain shape (scenario, stance, answers, analysis).

use serde::{Deserialize, Serialize};

use crate::domain::analysis::FinalAnalysis;
use crate::domain::exercise::{InitialStance, Scenario, SourceType};
use crate::domain::frameworks::FrameworkAnswers;
use crate::ports::InputHints;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub scenario: Scenario,
    pub stance: InitialStance,
    pub frameworks: FrameworkAnswers,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub scenario: Scenario,
    pub stance: InitialStance,
    pub analysis: FinalAnalysis,
}

/// `framework` stays a string so an unknown id is a 400 with a clear message
/// rather than a body rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct HintRequest {
    pub framework: String,
    pub scenario: Scenario,
    #[serde(default)]
    pub inputs: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputHintsRequest {
    pub framework: String,
    pub scenario: Scenario,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseScenarioRequest {
    pub input: String,
    #[serde(default)]
    pub source_type: Option<SourceType>,
}

/// Exactly one of `url` or `text`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractContentRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct HintResponse {
    pub hint: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputHintsResponse {
    pub framework: String,
    pub hints: InputHints,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractContentResponse {
    pub text: String,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub ai_enabled: bool,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
