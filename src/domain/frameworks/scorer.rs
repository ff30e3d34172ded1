//! Deterministic per-framework scoring.
//!
//! Each answer type implements [`FrameworkScorer`]. Branches are evaluated in
//! order and the first match wins; every threshold is inclusive. The three
//! averaging frameworks share [`MeanThresholdRule`], which compares integer
//! sums against `3 * threshold` so no floating point is involved.

use super::answers::{
    AdditionalAnswers, BargainingAnswers, CompetitionAnswers, FrameworkAnswers,
    HoldUpRiskAnswers, LifecyclePhase, TechnologyAnswers, TimeHorizon, TransactionCostAnswers,
};
use super::{FrameworkId, FrameworkRecommendation, Verdict};
use crate::domain::foundation::Percentage;

/// A single scoring branch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub confidence: Percentage,
    pub reasoning: &'static str,
}

impl Evaluation {
    const fn new(verdict: Verdict, confidence: u8, reasoning: &'static str) -> Self {
        Self {
            verdict,
            confidence: Percentage::new(confidence),
            reasoning,
        }
    }
}

/// Capability shared by every framework's answers.
pub trait FrameworkScorer {
    fn framework(&self) -> FrameworkId;

    fn is_completed(&self) -> bool;

    /// Applies the framework's decision rule, ignoring completion.
    fn evaluate(&self) -> Evaluation;

    /// The recommendation, or `None` while the framework is incomplete.
    fn recommend(&self) -> Option<FrameworkRecommendation> {
        if !self.is_completed() {
            return None;
        }
        let eval = self.evaluate();
        Some(FrameworkRecommendation::new(
            self.framework(),
            eval.verdict,
            eval.confidence,
            eval.reasoning,
        ))
    }
}

/// Three-input averaging rule: high mean, low mean, or in between.
#[derive(Debug, Clone, Copy)]
pub struct MeanThresholdRule {
    pub high: Evaluation,
    pub low: Evaluation,
    pub middle: Evaluation,
}

impl MeanThresholdRule {
    /// Mean at or above this is "high".
    pub const HIGH_MEAN: i32 = 4;
    /// Mean at or below this is "low".
    pub const LOW_MEAN: i32 = 2;

    pub fn apply(&self, values: [i32; 3]) -> Evaluation {
        let sum: i32 = values.iter().sum();
        let n = values.len() as i32;

        if sum >= Self::HIGH_MEAN * n {
            self.high
        } else if sum <= Self::LOW_MEAN * n {
            self.low
        } else {
            self.middle
        }
    }
}

pub const TRANSACTION_COST_RULE: MeanThresholdRule = MeanThresholdRule {
    high: Evaluation::new(Verdict::Make, 78, "High TCE factors favor hierarchy"),
    low: Evaluation::new(Verdict::Buy, 72, "Low TCE factors favor market transactions"),
    middle: Evaluation::new(Verdict::Partner, 60, "Moderate TCE suggests hybrid governance"),
};

pub const HOLD_UP_RISK_RULE: MeanThresholdRule = MeanThresholdRule {
    high: Evaluation::new(
        Verdict::Make,
        82,
        "High hold-up risk justifies vertical integration",
    ),
    low: Evaluation::new(Verdict::Buy, 68, "Low hold-up risk makes outsourcing safe"),
    middle: Evaluation::new(
        Verdict::Partner,
        55,
        "Moderate risk can be managed through partnerships",
    ),
};

/// Applied to the buyer's position score, so a high mean favours buying.
pub const BARGAINING_RULE: MeanThresholdRule = MeanThresholdRule {
    high: Evaluation::new(
        Verdict::Buy,
        70,
        "Strong position enables favorable market terms",
    ),
    low: Evaluation::new(
        Verdict::Make,
        75,
        "Weak position suggests reducing external dependency",
    ),
    middle: Evaluation::new(Verdict::Partner, 58, "Balanced position works for partnership"),
};

const HIGH: u8 = 4;
const LOW: u8 = 2;

impl FrameworkScorer for CompetitionAnswers {
    fn framework(&self) -> FrameworkId {
        FrameworkId::Competition
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn evaluate(&self) -> Evaluation {
        let perf = self.performance_pressure >= HIGH;
        let cost = self.cost_pressure >= HIGH;

        match (perf, cost) {
            (true, false) => Evaluation::new(
                Verdict::Make,
                75,
                "High performance pressure favors in-house control",
            ),
            (false, true) => Evaluation::new(
                Verdict::Buy,
                70,
                "Cost pressure suggests leveraging external efficiency",
            ),
            (true, true) => Evaluation::new(
                Verdict::Partner,
                65,
                "Balanced pressures suggest partnership",
            ),
            (false, false) => Evaluation::new(
                Verdict::Inconclusive,
                50,
                "Low pressures make this dimension less decisive",
            ),
        }
    }
}

impl FrameworkScorer for TechnologyAnswers {
    fn framework(&self) -> FrameworkId {
        FrameworkId::Technology
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn evaluate(&self) -> Evaluation {
        if self.current_phase == LifecyclePhase::Early && !self.emerging_threat {
            Evaluation::new(
                Verdict::Make,
                80,
                "Early-stage technology benefits from in-house learning",
            )
        } else if self.current_phase == LifecyclePhase::Plateau || self.emerging_threat {
            Evaluation::new(
                Verdict::Partner,
                70,
                "Technology uncertainty favors flexible arrangements",
            )
        } else {
            Evaluation::new(Verdict::Buy, 65, "Mature technology can be efficiently sourced")
        }
    }
}

impl FrameworkScorer for TransactionCostAnswers {
    fn framework(&self) -> FrameworkId {
        FrameworkId::TransactionCost
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn evaluate(&self) -> Evaluation {
        TRANSACTION_COST_RULE.apply([
            i32::from(self.asset_specificity),
            i32::from(self.uncertainty),
            i32::from(self.frequency),
        ])
    }
}

impl FrameworkScorer for HoldUpRiskAnswers {
    fn framework(&self) -> FrameworkId {
        FrameworkId::HoldUpRisk
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn evaluate(&self) -> Evaluation {
        HOLD_UP_RISK_RULE.apply([
            i32::from(self.switching_costs),
            i32::from(self.relationship_specificity),
            i32::from(self.information_asymmetry),
        ])
    }
}

impl FrameworkScorer for BargainingAnswers {
    fn framework(&self) -> FrameworkId {
        FrameworkId::Bargaining
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn evaluate(&self) -> Evaluation {
        // Supplier power and urgency weaken the buyer, so they are inverted.
        BARGAINING_RULE.apply([
            6 - i32::from(self.supplier_power),
            i32::from(self.buyer_alternatives),
            6 - i32::from(self.urgency),
        ])
    }
}

impl FrameworkScorer for AdditionalAnswers {
    fn framework(&self) -> FrameworkId {
        FrameworkId::Additional
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn evaluate(&self) -> Evaluation {
        if self.time_horizon == TimeHorizon::Short || self.capability_gap >= HIGH {
            Evaluation::new(
                Verdict::Partner,
                60,
                "Time or capability constraints favor partnerships",
            )
        } else if self.time_horizon == TimeHorizon::Long && self.capability_gap <= LOW {
            Evaluation::new(
                Verdict::Make,
                65,
                "Long horizon with capability supports in-house",
            )
        } else if self.optionality >= HIGH {
            Evaluation::new(
                Verdict::Buy,
                55,
                "High optionality need favors flexible sourcing",
            )
        } else {
            Evaluation::new(
                Verdict::Inconclusive,
                50,
                "Mixed signals from additional factors",
            )
        }
    }
}

impl FrameworkAnswers {
    /// The six scorers in fixed framework order.
    pub fn scorers(&self) -> [&dyn FrameworkScorer; 6] {
        [
            &self.competition,
            &self.technology,
            &self.transaction_cost,
            &self.hold_up_risk,
            &self.bargaining,
            &self.additional,
        ]
    }
}

/// Scores every completed framework, in framework order.
pub fn score_frameworks(answers: &FrameworkAnswers) -> Vec<FrameworkRecommendation> {
    answers
        .scorers()
        .into_iter()
        .filter_map(|scorer| scorer.recommend())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn completed() -> FrameworkAnswers {
        let mut answers = FrameworkAnswers::default();
        answers.competition.completed = true;
        answers.technology.completed = true;
        answers.transaction_cost.completed = true;
        answers.hold_up_risk.completed = true;
        answers.bargaining.completed = true;
        answers.additional.completed = true;
        answers
    }

    fn competition(perf: u8, cost: u8) -> Evaluation {
        CompetitionAnswers {
            performance_pressure: perf,
            cost_pressure: cost,
            completed: true,
        }
        .evaluate()
    }

    #[test]
    fn incomplete_frameworks_emit_nothing() {
        assert!(score_frameworks(&FrameworkAnswers::default()).is_empty());

        let mut answers = FrameworkAnswers::default();
        answers.bargaining.completed = true;
        let results = score_frameworks(&answers);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].framework, "Bargaining");
    }

    #[test]
    fn results_follow_framework_order() {
        let names: Vec<String> = score_frameworks(&completed())
            .into_iter()
            .map(|r| r.framework)
            .collect();

        assert_eq!(
            names,
            vec![
                "Competition",
                "Technology",
                "Transaction Costs",
                "Hold-Up Risk",
                "Bargaining",
                "Additional"
            ]
        );
    }

    #[test]
    fn competition_branches() {
        assert_eq!(competition(5, 2).verdict, Verdict::Make);
        assert_eq!(competition(5, 2).confidence.value(), 75);
        assert_eq!(competition(2, 4).verdict, Verdict::Buy);
        assert_eq!(competition(2, 4).confidence.value(), 70);
        assert_eq!(competition(4, 4).verdict, Verdict::Partner);
        assert_eq!(competition(4, 4).confidence.value(), 65);
        assert_eq!(competition(3, 3).verdict, Verdict::Inconclusive);
        assert_eq!(competition(3, 3).confidence.value(), 50);
    }

    #[test]
    fn technology_branches() {
        let tech = |phase, threat| {
            TechnologyAnswers {
                current_phase: phase,
                emerging_threat: threat,
                investment_level: None,
                completed: true,
            }
            .evaluate()
        };

        assert_eq!(tech(LifecyclePhase::Early, false).verdict, Verdict::Make);
        assert_eq!(tech(LifecyclePhase::Early, false).confidence.value(), 80);
        assert_eq!(tech(LifecyclePhase::Early, true).verdict, Verdict::Partner);
        assert_eq!(tech(LifecyclePhase::Plateau, false).verdict, Verdict::Partner);
        assert_eq!(tech(LifecyclePhase::Plateau, false).confidence.value(), 70);
        assert_eq!(tech(LifecyclePhase::Mature, true).verdict, Verdict::Partner);
        assert_eq!(tech(LifecyclePhase::Mature, false).verdict, Verdict::Buy);
        assert_eq!(tech(LifecyclePhase::Mature, false).confidence.value(), 65);
    }

    #[test]
    fn mean_rule_thresholds_are_inclusive() {
        // 4,4,4 -> mean 4; 4,4,3 -> mean 3.67
        assert_eq!(TRANSACTION_COST_RULE.apply([4, 4, 4]).verdict, Verdict::Make);
        assert_eq!(TRANSACTION_COST_RULE.apply([4, 4, 3]).verdict, Verdict::Partner);
        // 2,2,2 -> mean 2; 3,2,2 -> mean 2.33
        assert_eq!(TRANSACTION_COST_RULE.apply([2, 2, 2]).verdict, Verdict::Buy);
        assert_eq!(TRANSACTION_COST_RULE.apply([3, 2, 2]).verdict, Verdict::Partner);
        assert_eq!(TRANSACTION_COST_RULE.apply([5, 5, 2]).verdict, Verdict::Make);
    }

    #[test]
    fn hold_up_risk_high_mean_is_make() {
        let eval = HoldUpRiskAnswers {
            switching_costs: 5,
            relationship_specificity: 5,
            information_asymmetry: 4,
            completed: true,
        }
        .evaluate();

        assert_eq!(eval.verdict, Verdict::Make);
        assert_eq!(eval.confidence.value(), 82);
        assert_eq!(HOLD_UP_RISK_RULE.apply([1, 2, 3]).confidence.value(), 68);
        assert_eq!(HOLD_UP_RISK_RULE.apply([3, 3, 3]).confidence.value(), 55);
    }

    #[test]
    fn bargaining_inverts_supplier_power_and_urgency() {
        let bargaining = |supplier, alternatives, urgency| {
            BargainingAnswers {
                supplier_power: supplier,
                buyer_alternatives: alternatives,
                urgency,
                completed: true,
            }
            .evaluate()
        };

        // Weak suppliers, many alternatives, no urgency: strong buyer.
        let strong = bargaining(1, 5, 1);
        assert_eq!(strong.verdict, Verdict::Buy);
        assert_eq!(strong.confidence.value(), 70);

        // Powerful suppliers, no alternatives, urgent: weak buyer.
        let weak = bargaining(5, 1, 5);
        assert_eq!(weak.verdict, Verdict::Make);
        assert_eq!(weak.confidence.value(), 75);

        let balanced = bargaining(3, 3, 3);
        assert_eq!(balanced.verdict, Verdict::Partner);
        assert_eq!(balanced.confidence.value(), 58);
    }

    #[test]
    fn additional_branches() {
        let additional = |horizon, gap, optionality| {
            AdditionalAnswers {
                time_horizon: horizon,
                capability_gap: gap,
                optionality,
                completed: true,
            }
            .evaluate()
        };

        assert_eq!(additional(TimeHorizon::Short, 1, 5).verdict, Verdict::Partner);
        assert_eq!(additional(TimeHorizon::Long, 4, 1).verdict, Verdict::Partner);
        assert_eq!(additional(TimeHorizon::Long, 2, 5).verdict, Verdict::Make);
        assert_eq!(additional(TimeHorizon::Long, 2, 5).confidence.value(), 65);
        assert_eq!(additional(TimeHorizon::Medium, 2, 4).verdict, Verdict::Buy);
        assert_eq!(additional(TimeHorizon::Medium, 2, 4).confidence.value(), 55);
        assert_eq!(
            additional(TimeHorizon::Medium, 3, 3).verdict,
            Verdict::Inconclusive
        );
    }

    #[test]
    fn every_valid_slider_combination_is_scored() {
        for a in 1..=5 {
            for b in 1..=5 {
                for c in 1..=5 {
                    let rules = [TRANSACTION_COST_RULE, HOLD_UP_RISK_RULE, BARGAINING_RULE];
                    for rule in rules {
                        let eval = rule.apply([a, b, c]);
                        assert!(
                            eval == rule.high || eval == rule.low || eval == rule.middle,
                            "no branch for {a},{b},{c}"
                        );
                    }
                }
            }
        }
    }

    fn slider() -> impl Strategy<Value = u8> {
        1u8..=5
    }

    fn phase() -> impl Strategy<Value = LifecyclePhase> {
        prop_oneof![
            Just(LifecyclePhase::Early),
            Just(LifecyclePhase::Mature),
            Just(LifecyclePhase::Plateau),
        ]
    }

    fn horizon() -> impl Strategy<Value = TimeHorizon> {
        prop_oneof![
            Just(TimeHorizon::Short),
            Just(TimeHorizon::Medium),
            Just(TimeHorizon::Long),
        ]
    }

    proptest! {
        #[test]
        fn completed_answers_always_yield_six_results(
            perf in slider(), cost in slider(),
            phase in phase(), threat in any::<bool>(),
            tc in [slider(), slider(), slider()],
            hu in [slider(), slider(), slider()],
            bg in [slider(), slider(), slider()],
            horizon in horizon(), gap in slider(), opt in slider(),
        ) {
            let mut answers = completed();
            answers.competition.performance_pressure = perf;
            answers.competition.cost_pressure = cost;
            answers.technology.current_phase = phase;
            answers.technology.emerging_threat = threat;
            answers.transaction_cost.asset_specificity = tc[0];
            answers.transaction_cost.uncertainty = tc[1];
            answers.transaction_cost.frequency = tc[2];
            answers.hold_up_risk.switching_costs = hu[0];
            answers.hold_up_risk.relationship_specificity = hu[1];
            answers.hold_up_risk.information_asymmetry = hu[2];
            answers.bargaining.supplier_power = bg[0];
            answers.bargaining.buyer_alternatives = bg[1];
            answers.bargaining.urgency = bg[2];
            answers.additional.time_horizon = horizon;
            answers.additional.capability_gap = gap;
            answers.additional.optionality = opt;

            let results = score_frameworks(&answers);
            prop_assert_eq!(results.len(), 6);
            for result in &results {
                prop_assert!((50..=82).contains(&result.confidence.value()));
                prop_assert!(!result.reasoning.is_empty());
            }
        }

        #[test]
        fn out_of_range_sliders_never_panic(values in [any::<u8>(), any::<u8>(), any::<u8>()]) {
            let answers = BargainingAnswers {
                supplier_power: values[0],
                buyer_alternatives: values[1],
                urgency: values[2],
                completed: true,
            };
            let _ = answers.evaluate();
        }
    }
}
