//! HTTP adapter for the make/buy/partner exercise endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnalyzeRequest, ErrorResponse, ExtractContentRequest, ExtractContentResponse,
    FeedbackRequest, HealthResponse, HintRequest, HintResponse, InputHintsRequest,
    InputHintsResponse, ParseScenarioRequest,
};
pub use handlers::{ApiJson, ExerciseApiError, ExerciseAppState};
pub use routes::exercise_router;
