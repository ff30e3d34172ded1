//! Failover AI Provider - switches to a secondary provider on transient errors.
//!
//! # Example
//!
//! ```ignore
//! let provider = FailoverAIProvider::new(Arc::new(anthropic))
//!     .with_fallback(Arc::new(openai));
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

/// Wraps a primary provider and an optional fallback.
///
/// Only retryable errors (rate limiting, outages, network, timeouts) trigger
/// the fallback. Authentication or request errors are returned as-is.
pub struct FailoverAIProvider {
    primary: Arc<dyn AIProvider>,
    fallback: Option<Arc<dyn AIProvider>>,
}

impl FailoverAIProvider {
    pub fn new(primary: Arc<dyn AIProvider>) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn AIProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

#[async_trait]
impl AIProvider for FailoverAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let primary_err = match self.primary.complete(request.clone()).await {
            Ok(response) => return Ok(response),
            Err(err) => err,
        };

        let Some(fallback) = self.fallback.as_ref().filter(|_| primary_err.is_retryable()) else {
            return Err(primary_err);
        };

        let primary_name = self.primary.provider_info().name;
        let fallback_name = fallback.provider_info().name;
        warn!(
            trace_id = %request.metadata.trace_id,
            primary = %primary_name,
            fallback = %fallback_name,
            error = %primary_err,
            "Primary AI provider failed, failing over"
        );

        let response = fallback.complete(request).await?;
        info!(provider = %fallback_name, model = %response.model, "Fallback provider succeeded");
        Ok(response)
    }

    fn estimate_tokens(&self, text: &str) -> u32 {
        self.primary.estimate_tokens(text)
    }

    fn provider_info(&self) -> ProviderInfo {
        self.primary.provider_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::ports::{ProviderInfo, RequestMetadata};

    fn request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new("test"))
            .with_message(crate::ports::MessageRole::User, "hi")
    }

    fn named(name: &str) -> MockAIProvider {
        MockAIProvider::new().with_provider_info(ProviderInfo::new(name, "m", 1000))
    }

    #[tokio::test]
    async fn primary_success_skips_fallback() {
        let primary = named("primary").with_response("from primary");
        let fallback = named("fallback").with_response("from fallback");
        let provider = FailoverAIProvider::new(Arc::new(primary.clone()))
            .with_fallback(Arc::new(fallback.clone()));

        let response = provider.complete(request()).await.unwrap();

        assert_eq!(response.content, "from primary");
        assert_eq!(fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn transient_error_uses_fallback() {
        let primary = named("primary").with_error(AIError::Unavailable {
            message: "down".into(),
        });
        let fallback = named("fallback").with_response("from fallback");
        let provider = FailoverAIProvider::new(Arc::new(primary.clone()))
            .with_fallback(Arc::new(fallback.clone()));

        let response = provider.complete(request()).await.unwrap();

        assert_eq!(response.content, "from fallback");
        assert_eq!(primary.call_count(), 1);
        assert_eq!(fallback.call_count(), 1);
    }

    #[tokio::test]
    async fn permanent_error_is_returned() {
        let primary = named("primary").with_error(AIError::AuthenticationFailed);
        let fallback = named("fallback").with_response("unused");
        let provider = FailoverAIProvider::new(Arc::new(primary))
            .with_fallback(Arc::new(fallback.clone()));

        let err = provider.complete(request()).await.unwrap_err();

        assert_eq!(err, AIError::AuthenticationFailed);
        assert_eq!(fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn without_fallback_error_passes_through() {
        let primary = named("primary").with_error(AIError::RateLimited {
            retry_after_secs: 5,
        });
        let provider = FailoverAIProvider::new(Arc::new(primary));

        assert!(!provider.has_fallback());
        assert_eq!(
            provider.complete(request()).await.unwrap_err(),
            AIError::rate_limited(5)
        );
    }

    #[test]
    fn info_comes_from_primary() {
        let provider = FailoverAIProvider::new(Arc::new(named("primary")))
            .with_fallback(Arc::new(named("fallback")));
        assert_eq!(provider.provider_info().name, "primary");
    }
}
