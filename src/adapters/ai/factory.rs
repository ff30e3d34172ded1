//! Builds the strategy advisor from configuration.

use std::sync::Arc;

use tracing::info;

use super::{
    AnthropicConfig, AnthropicProvider, DisabledAdvisor, FailoverAIProvider,
    LlmStrategyAdvisor, OpenAIConfig, OpenAIProvider,
};
use crate::config::{AiConfig, AiProvider, AppConfig};
use crate::ports::{AIError, AIProvider, StrategyAdvisor};

/// Advisor for the loaded configuration.
///
/// Returns [`DisabledAdvisor`] when AI is switched off or the primary provider
/// has no key, so callers fall through to the deterministic core.
pub fn advisor_from_config(config: &AppConfig) -> Result<Arc<dyn StrategyAdvisor>, AIError> {
    if !config.ai_enabled() {
        info!("AI coaching disabled, using deterministic scoring only");
        return Ok(Arc::new(DisabledAdvisor));
    }

    let ai = &config.ai;
    let mut provider = FailoverAIProvider::new(build_provider(ai, ai.primary_provider)?);

    if config.features.enable_ai_fallback {
        if let Some(fallback) = ai.fallback_provider {
            provider = provider.with_fallback(build_provider(ai, fallback)?);
        }
    }

    info!(
        primary = ai.primary_provider.as_str(),
        fallback = provider.has_fallback(),
        "AI coaching enabled"
    );

    Ok(Arc::new(LlmStrategyAdvisor::new(Arc::new(provider))))
}

fn build_provider(ai: &AiConfig, which: AiProvider) -> Result<Arc<dyn AIProvider>, AIError> {
    let key = ai.api_key(which).ok_or(AIError::AuthenticationFailed)?;

    let provider: Arc<dyn AIProvider> = match which {
        AiProvider::Anthropic => {
            let mut cfg = AnthropicConfig::new(key)
                .with_timeout(ai.timeout())
                .with_max_retries(ai.max_retries);
            if let Some(model) = ai.model(which) {
                cfg = cfg.with_model(model);
            }
            Arc::new(AnthropicProvider::new(cfg)?)
        }
        AiProvider::OpenAI => {
            let mut cfg = OpenAIConfig::new(key)
                .with_timeout(ai.timeout())
                .with_max_retries(ai.max_retries);
            if let Some(model) = ai.model(which) {
                cfg = cfg.with_model(model);
            }
            Arc::new(OpenAIProvider::new(cfg)?)
        }
    };

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exercise::Scenario;
    use crate::domain::frameworks::FrameworkId;
    use crate::ports::AdvisorError;
    use secrecy::SecretString;

    #[tokio::test]
    async fn missing_key_yields_disabled_advisor() {
        let advisor = advisor_from_config(&AppConfig::default()).unwrap();

        let err = advisor
            .generate_hint(FrameworkId::Competition, &Scenario::example(), &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, AdvisorError::Disabled));
    }

    #[tokio::test]
    async fn feature_flag_overrides_configured_key() {
        let mut config = AppConfig::default();
        config.ai.anthropic_api_key = Some(SecretString::new("sk-ant-test".to_string()));
        config.features.enable_ai = false;

        let advisor = advisor_from_config(&config).unwrap();
        let err = advisor
            .generate_hint(FrameworkId::Competition, &Scenario::example(), &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, AdvisorError::Disabled));
    }

    #[test]
    fn configured_providers_build() {
        let mut config = AppConfig::default();
        config.ai.anthropic_api_key = Some(SecretString::new("sk-ant-test".to_string()));
        config.ai.openai_api_key = Some(SecretString::new("sk-test".to_string()));
        config.ai.fallback_provider = Some(AiProvider::OpenAI);
        config.features.enable_ai_fallback = true;

        assert!(advisor_from_config(&config).is_ok());
    }

    #[test]
    fn model_override_is_applied() {
        let mut ai = AiConfig::default();
        ai.openai_api_key = Some(SecretString::new("sk-test".to_string()));
        ai.openai_model = Some("gpt-4".to_string());

        let provider = build_provider(&ai, AiProvider::OpenAI).unwrap();
        assert_eq!(provider.provider_info().model, "gpt-4");
    }

    #[test]
    fn missing_key_is_an_auth_error() {
        let ai = AiConfig::default();
        assert!(matches!(
            build_provider(&ai, AiProvider::OpenAI),
            Err(AIError::AuthenticationFailed)
        ));
    }
}
