//! Configuration error types

use thiserror::Error;

/// Failure to read the environment into [`super::AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A loaded value that the service cannot run with.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A fallback provider was named without its API key.
    #[error("{0} must be set when that provider is the AI fallback")]
    MissingRequired(&'static str),

    #[error("Port must be non-zero")]
    InvalidPort,

    #[error("Server timeouts must be 1-300 seconds")]
    InvalidTimeout,

    #[error("Extract timeout must not exceed the request timeout")]
    ExtractTimeoutExceedsRequest,

    #[error("Cannot bind to {0}: host must be an IP address")]
    InvalidSocketAddr(String),

    #[error("AI timeout must be 1-600 seconds")]
    InvalidAiTimeout,

    #[error("AI max_retries must be at most 10")]
    TooManyRetries,

    #[error("Fallback AI provider must differ from the primary provider")]
    FallbackSameAsPrimary,
}
