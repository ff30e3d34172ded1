//! Frameworks module - the six strategic lenses and their scoring rules.
//!
//! - `answers` - learner inputs per framework
//! - `scorer` - deterministic per-framework recommendation
//! - `metadata` - input descriptions used for hints and the catalogue

mod answers;
mod decision;
mod framework_id;
mod metadata;
mod recommendation;
mod scorer;

pub use answers::{
    AdditionalAnswers, BargainingAnswers, CompetitionAnswers, FrameworkAnswers,
    HoldUpRiskAnswers, LifecyclePhase, TechnologyAnswers, TimeHorizon, TransactionCostAnswers,
    SLIDER_MAX, SLIDER_MIN,
};
pub use decision::{Decision, Verdict};
pub use framework_id::FrameworkId;
pub use metadata::{
    catalogue, input_metadata, inputs_for, FrameworkDescriptor, InputKind, InputMetadata,
};
pub use recommendation::FrameworkRecommendation;
pub use scorer::{
    score_frameworks, Evaluation, FrameworkScorer, MeanThresholdRule, BARGAINING_RULE,
    HOLD_UP_RISK_RULE, TRANSACTION_COST_RULE,
};
