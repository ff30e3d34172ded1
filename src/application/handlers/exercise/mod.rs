//! Exercise handlers - the request boundary of the coaching exercise.
//!
//! Analysis and feedback try the AI advisor first and fall back to the
//! deterministic core. Hints, scenario parsing and extraction have no
//! fallback and report failures.

mod analyze_frameworks;
mod error;
mod extract_content;
mod generate_feedback;
mod generate_hint;
mod generate_input_hints;
mod parse_scenario;

pub use analyze_frameworks::{
    AnalyzeFrameworksCommand, AnalyzeFrameworksHandler, AnalyzeFrameworksResult,
};
pub use error::ExerciseError;
pub use extract_content::{
    ExtractContentCommand, ExtractContentHandler, ExtractContentResult, UploadedFile,
    MAX_EXTRACTED_CHARS,
};
pub use generate_feedback::{
    GenerateFeedbackCommand, GenerateFeedbackHandler, GenerateFeedbackResult,
};
pub use generate_hint::{GenerateHintCommand, GenerateHintHandler};
pub use generate_input_hints::{
    GenerateInputHintsCommand, GenerateInputHintsHandler, GenerateInputHintsResult,
};
pub use parse_scenario::{ParseScenarioCommand, ParseScenarioHandler};

/// Which path produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOrigin {
    Advisor,
    /// Deterministic core, used after an advisor failure.
    Fallback,
}
