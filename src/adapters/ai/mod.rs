//! AI adapters.
//!
//! ## Providers (`AIProvider`)
//!
//! - `AnthropicProvider` - Anthropic Messages API
//! - `OpenAIProvider` - OpenAI Chat Completions API
//! - `FailoverAIProvider` - primary with optional fallback on transient errors
//! - `MockAIProvider` - scripted responses for tests
//!
//! ## Advisors (`StrategyAdvisor`)
//!
//! - `LlmStrategyAdvisor` - prompt rendering and strict decoding over a provider
//! - `DisabledAdvisor` - used when AI is off
//!
//! [`advisor_from_config`] picks between them at startup.

mod anthropic_provider;
mod disabled_advisor;
mod factory;
mod failover_provider;
mod llm_advisor;
mod mock_provider;
mod openai_provider;
pub mod prompts;
mod response_parser;
mod retry;

use std::time::Duration;

pub use anthropic_provider::{AnthropicConfig, AnthropicProvider, DEFAULT_ANTHROPIC_MODEL};
pub use disabled_advisor::DisabledAdvisor;
pub use factory::advisor_from_config;
pub use failover_provider::FailoverAIProvider;
pub use llm_advisor::LlmStrategyAdvisor;
pub use mock_provider::{MockAIProvider, MOCK_PLACEHOLDER};
pub use openai_provider::{OpenAIConfig, OpenAIProvider, DEFAULT_OPENAI_MODEL};
pub use response_parser::strip_code_fences;
pub use retry::RetryPolicy;

use crate::ports::AIError;

/// Maps a reqwest transport failure onto the provider error model.
pub(crate) fn transport_error(e: reqwest::Error, timeout: Duration) -> AIError {
    if e.is_timeout() {
        AIError::Timeout {
            timeout_secs: u32::try_from(timeout.as_secs()).unwrap_or(u32::MAX),
        }
    } else if e.is_connect() {
        AIError::network(format!("Connection failed: {}", e))
    } else {
        AIError::network(e.to_string())
    }
}
