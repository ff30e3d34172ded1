//! Route configuration for exercise endpoints.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    analyze, example_scenario, extract_content, feedback, health, hint, input_hints,
    list_frameworks, parse_scenario, ExerciseAppState, EXTRACT_BODY_LIMIT,
};

/// Creates the exercise router with all endpoints.
///
/// Routes:
/// - `POST /api/analyze` - Framework analysis (AI, falls back to local scoring)
/// - `POST /api/feedback` - Coaching feedback (AI, falls back to fixed feedback)
/// - `POST /api/hint` - Framework-level hint
/// - `POST /api/input-hints` - Per-input hints
/// - `POST /api/parse-scenario` - Scenario from source text
/// - `POST /api/extract-content` - Source text from a URL, an uploaded file or pasted text
/// - `GET /api/frameworks` - Framework catalogue
/// - `GET /api/scenarios/example` - Built-in example scenario
/// - `GET /health` - Liveness
pub fn exercise_router() -> Router<ExerciseAppState> {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/feedback", post(feedback))
        .route("/api/hint", post(hint))
        .route("/api/input-hints", post(input_hints))
        .route("/api/parse-scenario", post(parse_scenario))
        .route(
            "/api/extract-content",
            post(extract_content).layer(DefaultBodyLimit::max(EXTRACT_BODY_LIMIT)),
        )
        .route("/api/frameworks", get(list_frameworks))
        .route("/api/scenarios/example", get(example_scenario))
        .route("/health", get(health))
}
