//! Content density scorer.
//!
//! Counts rules, examples, and questions and maps each count to a
//! saturating share of the score. Saturation points default to 3 rules,
//! 5 examples, 6 questions.

use crate::config::DensityWeights;
use crate::mapping::ExampleMap;

fn saturating(count: usize, target: usize) -> f64 {
    if target == 0 {
        return 1.0;
    }
    (count as f64 / target as f64).min(1.0)
}

/// Score content density in [0, 1]. Absent records score 0.
pub fn score(map: Option<&ExampleMap>, weights: &DensityWeights) -> f64 {
    let Some(map) = map else {
        return 0.0;
    };

    saturating(map.rules.len(), weights.rule_target) * weights.rule_weight
        + saturating(map.total_examples(), weights.example_target) * weights.example_weight
        + saturating(map.total_questions(), weights.question_target) * weights.question_weight
}
