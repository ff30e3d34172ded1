//! HTTP handlers for exercise endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.

use std::str::FromStr;
use std::sync::Arc;

use axum::async_trait;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::handlers::exercise::{
    AnalyzeFrameworksCommand, AnalyzeFrameworksHandler, ExerciseError, ExtractContentCommand,
    ExtractContentHandler, GenerateFeedbackCommand, GenerateFeedbackHandler, GenerateHintCommand,
    GenerateHintHandler, GenerateInputHintsCommand, GenerateInputHintsHandler,
    ParseScenarioCommand, ParseScenarioHandler, UploadedFile,
};
use crate::domain::exercise::Scenario;
use crate::domain::frameworks::{catalogue, FrameworkDescriptor, FrameworkId};
use crate::ports::{ContentExtractor, ExtractionError, StrategyAdvisor, MAX_BODY_BYTES};

use super::dto::{
    AnalyzeRequest, ErrorResponse, ExtractContentRequest, ExtractContentResponse,
    FeedbackRequest, HealthResponse, HintRequest, HintResponse, InputHintsRequest,
    InputHintsResponse, ParseScenarioRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct ExerciseAppState {
    pub advisor: Arc<dyn StrategyAdvisor>,
    pub extractor: Arc<dyn ContentExtractor>,
    /// Reported by `/health`; the advisor itself decides whether calls succeed.
    pub ai_enabled: bool,
    /// Attach internal error text to 500 responses.
    pub verbose_errors: bool,
}

impl ExerciseAppState {
    pub fn new(advisor: Arc<dyn StrategyAdvisor>, extractor: Arc<dyn ContentExtractor>) -> Self {
        Self {
            advisor,
            extractor,
            ai_enabled: true,
            verbose_errors: false,
        }
    }

    pub fn with_ai_enabled(mut self, enabled: bool) -> Self {
        self.ai_enabled = enabled;
        self
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    pub fn analyze_handler(&self) -> AnalyzeFrameworksHandler {
        AnalyzeFrameworksHandler::new(self.advisor.clone())
    }

    pub fn feedback_handler(&self) -> GenerateFeedbackHandler {
        GenerateFeedbackHandler::new(self.advisor.clone())
    }

    pub fn hint_handler(&self) -> GenerateHintHandler {
        GenerateHintHandler::new(self.advisor.clone())
    }

    pub fn input_hints_handler(&self) -> GenerateInputHintsHandler {
        GenerateInputHintsHandler::new(self.advisor.clone())
    }

    pub fn parse_scenario_handler(&self) -> ParseScenarioHandler {
        ParseScenarioHandler::new(self.advisor.clone())
    }

    pub fn extract_content_handler(&self) -> ExtractContentHandler {
        ExtractContentHandler::new(self.extractor.clone())
    }

    /// Maps a handler failure, with `fallback_message` for server-side errors.
    fn error(&self, err: ExerciseError, fallback_message: &str) -> ExerciseApiError {
        if err.is_client_error() {
            return ExerciseApiError::BadRequest(err.to_string());
        }
        let message = match &err {
            ExerciseError::Extraction(e) => e.to_string(),
            _ => fallback_message.to_string(),
        };
        ExerciseApiError::Internal {
            message,
            detail: self.verbose_errors.then(|| err.to_string()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for exercise endpoints.
#[derive(Debug)]
pub enum ExerciseApiError {
    BadRequest(String),
    Internal {
        message: String,
        detail: Option<String>,
    },
}

impl IntoResponse for ExerciseApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ExerciseApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ExerciseApiError::Internal { message, detail } => {
                let mut error = ErrorResponse::internal(message);
                if let Some(detail) = detail {
                    error = error.with_details(serde_json::json!({ "error": detail }));
                }
                (StatusCode::INTERNAL_SERVER_ERROR, error)
            }
        };

        (status, Json(error)).into_response()
    }
}

/// JSON body extractor whose rejections use the crate's error body.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ExerciseApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ExerciseApiError::BadRequest(rejection.body_text())),
        }
    }
}

/// Request body cap for extract-content: one maximum-size file plus form overhead.
pub(super) const EXTRACT_BODY_LIMIT: usize = MAX_BODY_BYTES + 64 * 1024;

/// Extract-content source, read from either a JSON body (`url` or `text`)
/// or a `multipart/form-data` form (`file` or `url`).
pub struct ExtractSource(pub ExtractContentCommand);

#[async_trait]
impl<S> FromRequest<S> for ExtractSource
where
    S: Send + Sync,
{
    type Rejection = ExerciseApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if is_form {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| ExerciseApiError::BadRequest(rejection.body_text()))?;
            return read_extract_form(multipart).await.map(ExtractSource);
        }

        let ApiJson(body) = ApiJson::<ExtractContentRequest>::from_request(req, state).await?;
        let cmd = match (body.url, body.text) {
            (Some(url), _) if !url.trim().is_empty() => ExtractContentCommand::Url(url),
            (_, Some(text)) => ExtractContentCommand::Text(text),
            _ => {
                return Err(ExerciseApiError::BadRequest(
                    "No URL or text provided".to_string(),
                ))
            }
        };
        Ok(ExtractSource(cmd))
    }
}

/// A non-empty `file` part wins over `url`.
async fn read_extract_form(
    mut form: Multipart,
) -> Result<ExtractContentCommand, ExerciseApiError> {
    let mut url = None;

    while let Some(mut field) = form.next_field().await.map_err(form_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let mut bytes = Vec::new();
                while let Some(chunk) = field.chunk().await.map_err(form_error)? {
                    if bytes.len() + chunk.len() > MAX_BODY_BYTES {
                        return Err(too_large());
                    }
                    bytes.extend_from_slice(&chunk);
                }
                if !bytes.is_empty() {
                    return Ok(ExtractContentCommand::File(UploadedFile {
                        file_name,
                        content_type,
                        bytes,
                    }));
                }
            }
            Some("url") => url = Some(field.text().await.map_err(form_error)?),
            _ => {}
        }
    }

    match url {
        Some(url) if !url.trim().is_empty() => Ok(ExtractContentCommand::Url(url)),
        _ => Err(ExerciseApiError::BadRequest("No file or URL provided".to_string())),
    }
}

fn form_error(err: MultipartError) -> ExerciseApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return too_large();
    }
    ExerciseApiError::BadRequest(err.body_text())
}

fn too_large() -> ExerciseApiError {
    ExerciseApiError::BadRequest(ExtractionError::too_large().to_string())
}

fn parse_framework(raw: &str) -> Result<FrameworkId, ExerciseApiError> {
    FrameworkId::from_str(raw)
        .map_err(|_| ExerciseApiError::BadRequest(format!("Invalid framework: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// HTTP Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/analyze - Framework analysis, AI first with local fallback
pub async fn analyze(
    State(state): State<ExerciseAppState>,
    ApiJson(req): ApiJson<AnalyzeRequest>,
) -> Result<impl IntoResponse, ExerciseApiError> {
    let cmd = AnalyzeFrameworksCommand {
        scenario: req.scenario,
        stance: req.stance,
        frameworks: req.frameworks,
    };

    let result = state
        .analyze_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.error(e, "Failed to analyze results. Please try again."))?;

    Ok(Json(result.analysis))
}

/// POST /api/feedback - Coaching feedback, AI first with local fallback
pub async fn feedback(
    State(state): State<ExerciseAppState>,
    ApiJson(req): ApiJson<FeedbackRequest>,
) -> Result<impl IntoResponse, ExerciseApiError> {
    let cmd = GenerateFeedbackCommand {
        scenario: req.scenario,
        stance: req.stance,
        analysis: req.analysis,
    };

    let result = state
        .feedback_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.error(e, "Failed to generate feedback."))?;

    Ok(Json(result.feedback))
}

/// POST /api/hint - Framework-level hint
pub async fn hint(
    State(state): State<ExerciseAppState>,
    ApiJson(req): ApiJson<HintRequest>,
) -> Result<impl IntoResponse, ExerciseApiError> {
    let cmd = GenerateHintCommand {
        framework: parse_framework(&req.framework)?,
        scenario: req.scenario,
        inputs: req.inputs.unwrap_or_else(|| serde_json::json!({})),
    };

    let hint = state
        .hint_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.error(e, "Failed to generate hint. Please try again."))?;

    Ok(Json(HintResponse { hint }))
}

/// POST /api/input-hints - One hint per framework input
pub async fn input_hints(
    State(state): State<ExerciseAppState>,
    ApiJson(req): ApiJson<InputHintsRequest>,
) -> Result<impl IntoResponse, ExerciseApiError> {
    let cmd = GenerateInputHintsCommand {
        framework: parse_framework(&req.framework)?,
        scenario: req.scenario,
    };

    let result = state
        .input_hints_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.error(e, "Failed to generate hints. Please try again."))?;

    Ok(Json(InputHintsResponse {
        framework: result.framework.as_str().to_string(),
        hints: result.hints,
    }))
}

/// POST /api/parse-scenario - Frame source text as a scenario
pub async fn parse_scenario(
    State(state): State<ExerciseAppState>,
    ApiJson(req): ApiJson<ParseScenarioRequest>,
) -> Result<impl IntoResponse, ExerciseApiError> {
    let cmd = ParseScenarioCommand {
        input: req.input,
        source_type: req.source_type.unwrap_or_default(),
    };

    let scenario = state
        .parse_scenario_handler()
        .handle(cmd)
        .await
        .map_err(|e| {
            state.error(
                e,
                "Failed to parse scenario. Please try again with a different input.",
            )
        })?;

    Ok(Json(scenario))
}

/// POST /api/extract-content - Source text from a URL, an uploaded file or pasted text
pub async fn extract_content(
    State(state): State<ExerciseAppState>,
    ExtractSource(cmd): ExtractSource,
) -> Result<impl IntoResponse, ExerciseApiError> {
    let result = state
        .extract_content_handler()
        .handle(cmd)
        .await
        .map_err(|e| state.error(e, "Failed to extract content"))?;

    Ok(Json(ExtractContentResponse {
        text: result.text,
        truncated: result.truncated,
        source_url: result.source_url,
    }))
}

/// GET /api/frameworks - Framework catalogue with input metadata
pub async fn list_frameworks() -> Json<Vec<FrameworkDescriptor>> {
    Json(catalogue())
}

/// GET /api/scenarios/example - The built-in example scenario
pub async fn example_scenario() -> Json<Scenario> {
    Json(Scenario::example())
}

/// GET /health - Liveness
pub async fn health(State(state): State<ExerciseAppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        ai_enabled: state.ai_enabled,
    })
}
