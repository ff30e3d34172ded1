//! Content Extractor Port - turning a web page into scenario source text.

use async_trait::async_trait;
use thiserror::Error;

/// Largest source document accepted, fetched or uploaded, in bytes.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Port for fetching external documents as plain text.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    /// Fetches `url` and returns its readable text.
    ///
    /// Implementations must refuse internal and non-HTTP targets before any
    /// network access.
    async fn extract_url(&self, url: &str) -> Result<ExtractedContent, ExtractionError>;
}

/// Text pulled from a remote document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    pub text: String,
    /// Final URL after redirects.
    pub source_url: String,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedScheme,

    #[error("{0}")]
    BlockedHost(BlockReason),

    #[error("Website returned error {status}. The site may be blocking automated requests.")]
    HttpStatus { status: u16 },

    #[error("Failed to fetch content from URL. The site may be blocking automated requests, or the URL may be invalid.")]
    Fetch(String),

    #[error("File too large. Maximum size is {limit_mb}MB.")]
    TooLarge { limit_mb: u64 },

    #[error("Unsupported content type '{0}'. Paste the document text instead.")]
    UnsupportedContentType(String),
}

/// Why a host was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlockReason {
    #[error("Cannot fetch from localhost")]
    Localhost,

    #[error("Cannot fetch from internal network addresses")]
    PrivateAddress,

    #[error("Cannot fetch from internal hostnames")]
    InternalHostname,
}

impl ExtractionError {
    /// The error for a document over [`MAX_BODY_BYTES`].
    pub fn too_large() -> Self {
        ExtractionError::TooLarge {
            limit_mb: (MAX_BODY_BYTES / (1024 * 1024)) as u64,
        }
    }

    /// True when the caller supplied something unusable, as opposed to the
    /// remote side failing.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExtractionError::InvalidUrl
                | ExtractionError::UnsupportedScheme
                | ExtractionError::BlockedHost(_)
                | ExtractionError::TooLarge { .. }
                | ExtractionError::UnsupportedContentType(_)
        )
    }
}
