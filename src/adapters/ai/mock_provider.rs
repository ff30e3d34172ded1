//! Scripted AIProvider for tests and offline demos.
//!
//! Replies are queued and consumed in order; an empty queue answers with a
//! fixed placeholder. Every request is recorded so tests can assert on the
//! rendered prompts.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response(r#"{"title": "..."}"#)
//!     .with_error(AIError::unavailable("overloaded"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Reply used once the queue runs dry.
pub const MOCK_PLACEHOLDER: &str = "Mock response";

/// Clones share the queue and the call log.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    replies: Arc<Mutex<VecDeque<Result<String, AIError>>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
    info: ProviderInfo,
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Recovers the data if a panicking test poisoned the lock.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            info: ProviderInfo::new("mock", "mock-model-1", 128_000),
        }
    }

    pub fn with_response(self, content: impl Into<String>) -> Self {
        lock(&self.replies).push_back(Ok(content.into()));
        self
    }

    pub fn with_error(self, error: AIError) -> Self {
        lock(&self.replies).push_back(Err(error));
        self
    }

    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }

    pub fn remaining(&self) -> usize {
        lock(&self.replies).len()
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let prompt_tokens = self.estimate_tokens(&request.prompt_text());
        lock(&self.calls).push(request);

        let reply = lock(&self.replies)
            .pop_front()
            .unwrap_or_else(|| Ok(MOCK_PLACEHOLDER.to_string()));

        reply.map(|content| CompletionResponse {
            usage: TokenUsage::new(prompt_tokens, self.estimate_tokens(&content)),
            content,
            model: self.info.model.clone(),
            finish_reason: FinishReason::Stop,
        })
    }

    fn estimate_tokens(&self, text: &str) -> u32 {
        u32::try_from(text.len() / 4).unwrap_or(u32::MAX).max(1)
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MessageRole, RequestMetadata};

    fn request(text: &str) -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new("test")).with_message(MessageRole::User, text)
    }

    #[tokio::test]
    async fn replies_in_queue_order_then_placeholder() {
        let provider = MockAIProvider::new()
            .with_response("first")
            .with_error(AIError::Timeout { timeout_secs: 3 })
            .with_response("third");

        assert_eq!(provider.complete(request("a")).await.unwrap().content, "first");
        assert_eq!(
            provider.complete(request("b")).await.unwrap_err(),
            AIError::Timeout { timeout_secs: 3 }
        );
        assert_eq!(provider.complete(request("c")).await.unwrap().content, "third");
        assert_eq!(
            provider.complete(request("d")).await.unwrap().content,
            MOCK_PLACEHOLDER
        );
    }

    #[tokio::test]
    async fn records_prompts_and_shares_state_across_clones() {
        let provider = MockAIProvider::new().with_response("shared");
        let clone = provider.clone();

        let response = clone.complete(request("hello there")).await.unwrap();

        assert_eq!(response.model, "mock-model-1");
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.get_calls()[0].messages[0].content, "hello there");
        assert_eq!(provider.remaining(), 0);
    }
}
