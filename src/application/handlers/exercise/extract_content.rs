//! ExtractContentHandler - source text from a URL, an uploaded file or pasted text.

use std::sync::Arc;
use tracing::{error, info, warn};

use super::ExerciseError;
use crate::domain::exercise::MIN_SCENARIO_INPUT_CHARS;
use crate::ports::{ContentExtractor, ExtractionError, MAX_BODY_BYTES};

/// Longest text handed back, in characters.
pub const MAX_EXTRACTED_CHARS: usize = 50_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractContentCommand {
    Url(String),
    File(UploadedFile),
    Text(String),
}

/// A document posted by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    fn is_pdf(&self) -> bool {
        let typed_pdf = self
            .content_type
            .as_deref()
            .is_some_and(|kind| kind.starts_with("application/pdf"));
        let named_pdf = self
            .file_name
            .as_deref()
            .is_some_and(|name| name.to_ascii_lowercase().ends_with(".pdf"));
        typed_pdf || named_pdf
    }

    /// Decodes the upload as text. Invalid UTF-8 sequences are replaced.
    fn into_text(self) -> Result<String, ExtractionError> {
        if self.bytes.len() > MAX_BODY_BYTES {
            return Err(ExtractionError::too_large());
        }
        if self.is_pdf() {
            let kind = self
                .content_type
                .unwrap_or_else(|| "application/pdf".to_string());
            return Err(ExtractionError::UnsupportedContentType(kind));
        }
        Ok(String::from_utf8_lossy(&self.bytes).into_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractContentResult {
    pub text: String,
    pub truncated: bool,
    pub source_url: Option<String>,
}

pub struct ExtractContentHandler {
    extractor: Arc<dyn ContentExtractor>,
}

impl ExtractContentHandler {
    pub fn new(extractor: Arc<dyn ContentExtractor>) -> Self {
        Self { extractor }
    }

    pub async fn handle(
        &self,
        cmd: ExtractContentCommand,
    ) -> Result<ExtractContentResult, ExerciseError> {
        let (raw, source_url) = match cmd {
            ExtractContentCommand::Text(text) => (text, None),
            ExtractContentCommand::File(file) => {
                let file_name = file.file_name.clone().unwrap_or_default();
                let text = file.into_text().map_err(|e| {
                    warn!(error = %e, file_name = %file_name, "Uploaded file rejected");
                    ExerciseError::from(e)
                })?;
                (text, None)
            }
            ExtractContentCommand::Url(url) => {
                let content = self.extractor.extract_url(&url).await.map_err(|e| {
                    error!(error = %e, url = %url, "Content extraction failed");
                    ExerciseError::from(e)
                })?;
                (content.text, Some(content.source_url))
            }
        };

        let (text, truncated) = truncate_chars(raw.trim(), MAX_EXTRACTED_CHARS);
        let chars = text.chars().count();
        if chars < MIN_SCENARIO_INPUT_CHARS {
            return Err(ExerciseError::InsufficientContent { chars });
        }

        info!(chars, truncated, "Content extracted");
        Ok(ExtractContentResult {
            text: text.to_string(),
            truncated,
            source_url,
        })
    }
}

/// Cuts `text` to at most `max` characters on a char boundary.
fn truncate_chars(text: &str, max: usize) -> (&str, bool) {
    match text.char_indices().nth(max) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}
