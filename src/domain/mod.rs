//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `frameworks` - The six strategic frameworks, their inputs and scoring
//! - `analysis` - Aggregation of framework results and local feedback
//! - `exercise` - Scenario and initial stance

pub mod analysis;
pub mod exercise;
pub mod foundation;
pub mod frameworks;
