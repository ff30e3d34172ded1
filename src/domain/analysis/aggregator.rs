//! Aggregator - blends per-framework results into a weighted split.
//!
//! Each decisive framework adds its confidence to its decision's bucket.
//! Buckets are rounded to percentages independently, so the split can sum to
//! 99, 100 or 101.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::frameworks::{Decision, FrameworkRecommendation};

/// Spread below which the blended split counts as ambiguous.
pub const CONFLICT_SPREAD: u8 = 20;

/// Confidence-weighted share of each decision, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedResult {
    pub make: Percentage,
    pub buy: Percentage,
    pub partner: Percentage,
}

impl WeightedResult {
    /// Split reported when no framework was decisive.
    pub const FALLBACK: WeightedResult = WeightedResult {
        make: Percentage::new(33),
        buy: Percentage::new(33),
        partner: Percentage::new(34),
    };

    pub fn new(make: u8, buy: u8, partner: u8) -> Self {
        Self {
            make: Percentage::new(make),
            buy: Percentage::new(buy),
            partner: Percentage::new(partner),
        }
    }

    pub fn get(&self, decision: Decision) -> Percentage {
        match decision {
            Decision::Make => self.make,
            Decision::Buy => self.buy,
            Decision::Partner => self.partner,
        }
    }

    /// Sum of the three buckets; not renormalized.
    pub fn total(&self) -> u16 {
        Decision::ALL
            .into_iter()
            .map(|d| u16::from(self.get(d).value()))
            .sum()
    }

    /// Highest bucket, ties resolved make > buy > partner.
    pub fn leading(&self) -> Decision {
        let mut best = Decision::Make;
        for decision in Decision::ALL {
            if self.get(decision) > self.get(best) {
                best = decision;
            }
        }
        best
    }

    /// Difference between the highest and lowest bucket.
    pub fn spread(&self) -> u8 {
        let values = Decision::ALL.map(|d| self.get(d).value());
        let max = values.iter().copied().max().unwrap_or(0);
        let min = values.iter().copied().min().unwrap_or(0);
        max - min
    }

    pub fn is_conflicting(&self) -> bool {
        self.spread() < CONFLICT_SPREAD
    }
}

/// Outcome of blending the per-framework results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregation {
    pub weighted_result: WeightedResult,
    pub primary_recommendation: Decision,
    pub conflicting_frameworks: bool,
    /// Sum of the confidences that fed the split.
    pub total_weight: u32,
}

/// Blends framework results. Inconclusive results carry no weight.
///
/// With no decisive result the split falls back to [`WeightedResult::FALLBACK`]
/// and every decision is equally unsupported, so the tie-break order picks
/// `make`.
pub fn aggregate(results: &[FrameworkRecommendation]) -> Aggregation {
    let mut weights = [0u32; 3];
    let mut total_weight = 0u32;

    for result in results {
        if let Some(decision) = result.recommendation.decision() {
            let confidence = u32::from(result.confidence.value());
            weights[bucket(decision)] += confidence;
            total_weight += confidence;
        }
    }

    if total_weight == 0 {
        let weighted_result = WeightedResult::FALLBACK;
        return Aggregation {
            weighted_result,
            primary_recommendation: Decision::Make,
            conflicting_frameworks: weighted_result.is_conflicting(),
            total_weight,
        };
    }

    let share = |decision: Decision| {
        Percentage::from_fraction(f64::from(weights[bucket(decision)]) / f64::from(total_weight))
    };
    let weighted_result = WeightedResult {
        make: share(Decision::Make),
        buy: share(Decision::Buy),
        partner: share(Decision::Partner),
    };

    Aggregation {
        weighted_result,
        primary_recommendation: weighted_result.leading(),
        conflicting_frameworks: weighted_result.is_conflicting(),
        total_weight,
    }
}

fn bucket(decision: Decision) -> usize {
    match decision {
        Decision::Make => 0,
        Decision::Buy => 1,
        Decision::Partner => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::frameworks::{FrameworkId, Verdict};
    use proptest::prelude::*;

    fn rec(verdict: Verdict, confidence: u8) -> FrameworkRecommendation {
        FrameworkRecommendation::new(
            FrameworkId::Competition,
            verdict,
            Percentage::new(confidence),
            "test",
        )
    }

    #[test]
    fn empty_results_use_fallback_split() {
        let agg = aggregate(&[]);

        assert_eq!(agg.weighted_result, WeightedResult::new(33, 33, 34));
        assert_eq!(agg.primary_recommendation, Decision::Make);
        assert!(agg.conflicting_frameworks);
        assert_eq!(agg.total_weight, 0);
    }

    #[test]
    fn all_inconclusive_uses_fallback_split() {
        let agg = aggregate(&[rec(Verdict::Inconclusive, 50), rec(Verdict::Inconclusive, 50)]);

        assert_eq!(agg.weighted_result, WeightedResult::FALLBACK);
        assert_eq!(agg.primary_recommendation, Decision::Make);
    }

    #[test]
    fn single_decision_takes_everything() {
        let agg = aggregate(&[rec(Verdict::Make, 75), rec(Verdict::Make, 82)]);

        assert_eq!(agg.weighted_result, WeightedResult::new(100, 0, 0));
        assert_eq!(agg.primary_recommendation, Decision::Make);
        assert!(!agg.conflicting_frameworks);
        assert_eq!(agg.total_weight, 157);
    }

    #[test]
    fn inconclusive_results_are_excluded_from_weight() {
        let agg = aggregate(&[rec(Verdict::Buy, 70), rec(Verdict::Inconclusive, 50)]);

        assert_eq!(agg.weighted_result, WeightedResult::new(0, 100, 0));
        assert_eq!(agg.total_weight, 70);
    }

    #[test]
    fn rounding_is_per_bucket() {
        // 1/3 each rounds to 33 apiece.
        let agg = aggregate(&[
            rec(Verdict::Make, 60),
            rec(Verdict::Buy, 60),
            rec(Verdict::Partner, 60),
        ]);
        assert_eq!(agg.weighted_result, WeightedResult::new(33, 33, 33));
        assert_eq!(agg.weighted_result.total(), 99);

        // 1/6, 1/6, 2/3 -> 17 + 17 + 67 = 101
        let agg = aggregate(&[
            rec(Verdict::Make, 10),
            rec(Verdict::Buy, 10),
            rec(Verdict::Partner, 40),
        ]);
        assert_eq!(agg.weighted_result, WeightedResult::new(17, 17, 67));
        assert_eq!(agg.weighted_result.total(), 101);
    }

    #[test]
    fn three_way_tie_resolves_to_make() {
        let split = WeightedResult::new(33, 33, 33);
        assert_eq!(split.leading(), Decision::Make);
    }

    #[test]
    fn aggregated_ties_resolve_to_make() {
        let agg = aggregate(&[
            rec(Verdict::Make, 60),
            rec(Verdict::Buy, 60),
            rec(Verdict::Partner, 60),
        ]);
        assert_eq!(agg.primary_recommendation, Decision::Make);
        assert!(agg.conflicting_frameworks);

        let agg = aggregate(&[rec(Verdict::Make, 60), rec(Verdict::Buy, 60)]);
        assert_eq!(agg.weighted_result, WeightedResult::new(50, 50, 0));
        assert_eq!(agg.primary_recommendation, Decision::Make);
        assert!(!agg.conflicting_frameworks);
    }

    #[test]
    fn buy_beats_partner_on_tie() {
        let agg = aggregate(&[rec(Verdict::Buy, 60), rec(Verdict::Partner, 60)]);

        assert_eq!(agg.weighted_result, WeightedResult::new(0, 50, 50));
        assert_eq!(agg.primary_recommendation, Decision::Buy);
    }

    #[test]
    fn conflict_boundary_is_twenty() {
        assert!(WeightedResult::new(40, 40, 21).is_conflicting());
        assert!(!WeightedResult::new(40, 40, 20).is_conflicting());
        assert_eq!(WeightedResult::new(40, 40, 21).spread(), 19);
    }

    #[test]
    fn serializes_as_plain_numbers() {
        let json = serde_json::to_value(WeightedResult::new(50, 30, 20)).unwrap();
        assert_eq!(json, serde_json::json!({"make": 50, "buy": 30, "partner": 20}));
    }

    fn decisive() -> impl Strategy<Value = FrameworkRecommendation> {
        (
            prop_oneof![Just(Verdict::Make), Just(Verdict::Buy), Just(Verdict::Partner)],
            50u8..=82,
        )
            .prop_map(|(verdict, confidence)| rec(verdict, confidence))
    }

    proptest! {
        #[test]
        fn decisive_splits_sum_to_about_one_hundred(results in prop::collection::vec(decisive(), 1..=6)) {
            let total = aggregate(&results).weighted_result.total();
            prop_assert!((99..=101).contains(&total), "sum was {}", total);
        }

        #[test]
        fn primary_is_never_below_another_bucket(results in prop::collection::vec(decisive(), 1..=6)) {
            let agg = aggregate(&results);
            let primary = agg.weighted_result.get(agg.primary_recommendation);
            for decision in Decision::ALL {
                prop_assert!(primary >= agg.weighted_result.get(decision));
            }
        }
    }
}
