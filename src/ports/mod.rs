//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - raw LLM completions
//! - `StrategyAdvisor` - typed AI coaching operations
//! - `ContentExtractor` - fetching source documents as text

mod ai_provider;
mod content_extractor;
mod strategy_advisor;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use content_extractor::{
    BlockReason, ContentExtractor, ExtractedContent, ExtractionError, MAX_BODY_BYTES,
};
pub use strategy_advisor::{AdvisorError, InputHints, ParseError, StrategyAdvisor};
