//! reqwest-backed [`ContentExtractor`].

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{redirect, Client, Response};
use std::time::Duration;
use tracing::{debug, error};

use super::html_text::html_to_text;
use super::url_guard::{check_url, validate_external_url};
use crate::ports::{ContentExtractor, ExtractedContent, ExtractionError, MAX_BODY_BYTES};

const MAX_REDIRECTS: usize = 10;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

pub struct HttpContentExtractor {
    client: Client,
}

impl HttpContentExtractor {
    pub fn new(timeout: Duration) -> Result<Self, ExtractionError> {
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(browser_headers())
            .redirect(redirect::Policy::custom(|attempt| {
                if attempt.previous().len() >= MAX_REDIRECTS {
                    attempt.stop()
                } else if let Err(blocked) = check_url(attempt.url()) {
                    attempt.error(blocked)
                } else {
                    attempt.follow()
                }
            }))
            .build()
            .map_err(|e| ExtractionError::Fetch(format!("HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn read_body(response: &mut Response) -> Result<Vec<u8>, ExtractionError> {
        if let Some(length) = response.content_length() {
            if length > MAX_BODY_BYTES as u64 {
                return Err(ExtractionError::too_large());
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(fetch_error)? {
            if body.len() + chunk.len() > MAX_BODY_BYTES {
                return Err(ExtractionError::too_large());
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

/// Surfaces a guard rejection raised inside the redirect policy.
fn fetch_error(e: reqwest::Error) -> ExtractionError {
    let mut source = std::error::Error::source(&e);
    while let Some(inner) = source {
        if let Some(blocked) = inner.downcast_ref::<ExtractionError>() {
            return blocked.clone();
        }
        source = inner.source();
    }
    ExtractionError::Fetch(e.to_string())
}

#[async_trait]
impl ContentExtractor for HttpContentExtractor {
    async fn extract_url(&self, url: &str) -> Result<ExtractedContent, ExtractionError> {
        let url = validate_external_url(url)?;
        debug!(url = %url, "Fetching source document");

        let mut response = self.client.get(url.clone()).send().await.map_err(|e| {
            error!(url = %url, error = %e, "URL fetch failed");
            fetch_error(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(url = %url, status = status.as_u16(), "URL fetch returned error status");
            return Err(ExtractionError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        if let Some(ref kind) = content_type {
            if kind.contains("application/pdf") {
                return Err(ExtractionError::UnsupportedContentType(kind.clone()));
            }
        }

        let source_url = response.url().to_string();
        let body = Self::read_body(&mut response).await?;
        let raw = String::from_utf8_lossy(&body);

        let text = match content_type.as_deref() {
            Some(kind) if kind.starts_with("text/plain") => raw.trim().to_string(),
            _ => html_to_text(&raw),
        };

        debug!(
            url = %source_url,
            bytes = body.len(),
            chars = text.chars().count(),
            "Extracted source text"
        );

        Ok(ExtractedContent {
            text,
            source_url,
            content_type,
        })
    }
}
