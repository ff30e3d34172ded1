//! Exercise module - the scenario and the learner's initial stance.

mod scenario;
mod stance;

pub use scenario::{validate_scenario_input, Scenario, SourceType, MIN_SCENARIO_INPUT_CHARS};
pub use stance::{InitialStance, MAX_STANCE_CONFIDENCE, MIN_STANCE_CONFIDENCE};
