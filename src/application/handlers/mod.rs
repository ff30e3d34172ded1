//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over the ports.

pub mod exercise;

pub use exercise::{
    AnalyzeFrameworksCommand, AnalyzeFrameworksHandler, AnalyzeFrameworksResult, ExerciseError,
    ExtractContentCommand, ExtractContentHandler, ExtractContentResult, GenerateFeedbackCommand,
    GenerateFeedbackHandler, GenerateFeedbackResult, GenerateHintCommand, GenerateHintHandler,
    GenerateInputHintsCommand, GenerateInputHintsHandler, GenerateInputHintsResult,
    ParseScenarioCommand, ParseScenarioHandler, ResponseOrigin, MAX_EXTRACTED_CHARS,
};
