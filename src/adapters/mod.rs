//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - LLM providers and the strategy advisor built on them
//! - `content` - URL fetching and HTML-to-text extraction
//! - `http` - Axum routes and handlers

pub mod ai;
pub mod content;
pub mod http;
