//! Framework input model - the learner's answers for each framework.
//!
//! Every numeric answer is a 1-5 slider. Range checking lives in
//! [`FrameworkAnswers::validate`], which the request boundary runs; the
//! scorers themselves take the values as given.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Lowest slider position.
pub const SLIDER_MIN: u8 = 1;

/// Highest slider position.
pub const SLIDER_MAX: u8 = 5;

/// Position of the technology on its S-curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecyclePhase {
    Early,
    Mature,
    Plateau,
}

/// Strategic planning horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeHorizon {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionAnswers {
    pub performance_pressure: u8,
    pub cost_pressure: u8,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyAnswers {
    pub current_phase: LifecyclePhase,
    pub emerging_threat: bool,
    /// Collected for the AI coach; the deterministic scorer ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_level: Option<u8>,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCostAnswers {
    pub asset_specificity: u8,
    pub uncertainty: u8,
    pub frequency: u8,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldUpRiskAnswers {
    pub switching_costs: u8,
    pub relationship_specificity: u8,
    pub information_asymmetry: u8,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BargainingAnswers {
    pub supplier_power: u8,
    pub buyer_alternatives: u8,
    pub urgency: u8,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalAnswers {
    pub time_horizon: TimeHorizon,
    pub capability_gap: u8,
    pub optionality: u8,
    pub completed: bool,
}

/// Answers for all six frameworks. Every framework is present; the
/// `completed` flags say which ones the learner actually worked through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkAnswers {
    pub competition: CompetitionAnswers,
    pub technology: TechnologyAnswers,
    pub transaction_cost: TransactionCostAnswers,
    pub hold_up_risk: HoldUpRiskAnswers,
    pub bargaining: BargainingAnswers,
    pub additional: AdditionalAnswers,
}

impl FrameworkAnswers {
    /// Checks that every slider sits in `1..=5`.
    ///
    /// Returns the first offending field, named `framework.input`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let c = &self.competition;
        let tc = &self.transaction_cost;
        let h = &self.hold_up_risk;
        let b = &self.bargaining;
        let a = &self.additional;

        let sliders = [
            ("competition.performancePressure", c.performance_pressure),
            ("competition.costPressure", c.cost_pressure),
            ("transactionCost.assetSpecificity", tc.asset_specificity),
            ("transactionCost.uncertainty", tc.uncertainty),
            ("transactionCost.frequency", tc.frequency),
            ("holdUpRisk.switchingCosts", h.switching_costs),
            ("holdUpRisk.relationshipSpecificity", h.relationship_specificity),
            ("holdUpRisk.informationAsymmetry", h.information_asymmetry),
            ("bargaining.supplierPower", b.supplier_power),
            ("bargaining.buyerAlternatives", b.buyer_alternatives),
            ("bargaining.urgency", b.urgency),
            ("additional.capabilityGap", a.capability_gap),
            ("additional.optionality", a.optionality),
        ];

        for (field, value) in sliders {
            check_slider(field, value)?;
        }

        if let Some(level) = self.technology.investment_level {
            check_slider("technology.investmentLevel", level)?;
        }

        Ok(())
    }

    /// Number of frameworks the learner marked complete.
    pub fn completed_count(&self) -> usize {
        [
            self.competition.completed,
            self.technology.completed,
            self.transaction_cost.completed,
            self.hold_up_risk.completed,
            self.bargaining.completed,
            self.additional.completed,
        ]
        .into_iter()
        .filter(|done| *done)
        .count()
    }
}

impl Default for FrameworkAnswers {
    /// Mid-scale answers with nothing completed, matching a fresh session.
    fn default() -> Self {
        Self {
            competition: CompetitionAnswers {
                performance_pressure: 3,
                cost_pressure: 3,
                completed: false,
            },
            technology: TechnologyAnswers {
                current_phase: LifecyclePhase::Mature,
                emerging_threat: false,
                investment_level: Some(3),
                completed: false,
            },
            transaction_cost: TransactionCostAnswers {
                asset_specificity: 3,
                uncertainty: 3,
                frequency: 3,
                completed: false,
            },
            hold_up_risk: HoldUpRiskAnswers {
                switching_costs: 3,
                relationship_specificity: 3,
                information_asymmetry: 3,
                completed: false,
            },
            bargaining: BargainingAnswers {
                supplier_power: 3,
                buyer_alternatives: 3,
                urgency: 3,
                completed: false,
            },
            additional: AdditionalAnswers {
                time_horizon: TimeHorizon::Medium,
                capability_gap: 3,
                optionality: 3,
                completed: false,
            },
        }
    }
}

fn check_slider(field: &str, value: u8) -> Result<(), ValidationError> {
    if (SLIDER_MIN..=SLIDER_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            field,
            SLIDER_MIN as i32,
            SLIDER_MAX as i32,
            value as i32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "competition": { "performancePressure": 5, "costPressure": 2, "completed": true },
            "technology": { "currentPhase": "early", "emergingThreat": false, "investmentLevel": 4, "completed": true },
            "transactionCost": { "assetSpecificity": 4, "uncertainty": 4, "frequency": 5, "completed": true },
            "holdUpRisk": { "switchingCosts": 5, "relationshipSpecificity": 5, "informationAsymmetry": 4, "completed": true },
            "bargaining": { "supplierPower": 4, "buyerAlternatives": 2, "urgency": 5, "completed": false },
            "additional": { "timeHorizon": "long", "capabilityGap": 2, "optionality": 3, "completed": false }
        })
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let answers: FrameworkAnswers = serde_json::from_value(sample_json()).unwrap();

        assert_eq!(answers.competition.performance_pressure, 5);
        assert_eq!(answers.technology.current_phase, LifecyclePhase::Early);
        assert_eq!(answers.technology.investment_level, Some(4));
        assert_eq!(answers.hold_up_risk.information_asymmetry, 4);
        assert_eq!(answers.additional.time_horizon, TimeHorizon::Long);
        assert_eq!(answers.completed_count(), 4);
    }

    #[test]
    fn investment_level_is_optional() {
        let mut value = sample_json();
        value["technology"]
            .as_object_mut()
            .unwrap()
            .remove("investmentLevel");

        let answers: FrameworkAnswers = serde_json::from_value(value).unwrap();
        assert_eq!(answers.technology.investment_level, None);
    }

    #[test]
    fn missing_framework_fails_to_deserialize() {
        let mut value = sample_json();
        value.as_object_mut().unwrap().remove("bargaining");

        assert!(serde_json::from_value::<FrameworkAnswers>(value).is_err());
    }

    #[test]
    fn unknown_phase_fails_to_deserialize() {
        let mut value = sample_json();
        value["technology"]["currentPhase"] = json!("declining");

        assert!(serde_json::from_value::<FrameworkAnswers>(value).is_err());
    }

    #[test]
    fn validate_accepts_full_range() {
        let answers: FrameworkAnswers = serde_json::from_value(sample_json()).unwrap();
        assert!(answers.validate().is_ok());
        assert!(FrameworkAnswers::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_slider_above_range() {
        let mut answers = FrameworkAnswers::default();
        answers.bargaining.urgency = 6;

        let err = answers.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::out_of_range("bargaining.urgency", 1, 5, 6)
        );
    }

    #[test]
    fn validate_rejects_zero_slider() {
        let mut answers = FrameworkAnswers::default();
        answers.competition.cost_pressure = 0;

        assert_eq!(
            answers.validate().unwrap_err().field(),
            "competition.costPressure"
        );
    }

    #[test]
    fn validate_checks_investment_level_when_present() {
        let mut answers = FrameworkAnswers::default();
        answers.technology.investment_level = Some(9);

        assert_eq!(
            answers.validate().unwrap_err().field(),
            "technology.investmentLevel"
        );
    }

    #[test]
    fn validate_ignores_completion_flags() {
        let mut answers = FrameworkAnswers::default();
        answers.additional.optionality = 10;
        answers.additional.completed = false;

        assert!(answers.validate().is_err());
    }
}
