//! Analysis module - blending framework results into a recommendation.
//!
//! Everything here is pure and synchronous. The request boundary calls
//! [`compute_analysis`] and [`compute_local_feedback`] directly when the AI
//! coach cannot answer.

mod aggregator;
mod final_analysis;
mod local_feedback;

pub use aggregator::{aggregate, Aggregation, WeightedResult, CONFLICT_SPREAD};
pub use final_analysis::{compute_analysis, FinalAnalysis};
pub use local_feedback::{compute_local_feedback, FeedbackItem, FeedbackKind};
