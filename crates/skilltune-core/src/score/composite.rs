//! Deterministic composite metric.
//!
//! Parses a candidate output string and combines the structure, density,
//! and diversity scores with fixed weights. Pure: the same candidate
//! string always produces the same score, with no external calls.

use crate::config::{CompositeWeights, DensityWeights};
use crate::mapping::ExampleMap;
use crate::score::{density, diversity, structural};
use crate::{parse, score::ScoreTier};
use serde::{Deserialize, Serialize};

/// Per-dimension scores plus the weighted combination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompositeBreakdown {
    pub structure: f64,
    pub density: f64,
    pub diversity: f64,
    pub combined: f64,
}

impl CompositeBreakdown {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.combined)
    }

    fn zero() -> Self {
        Self {
            structure: 0.0,
            density: 0.0,
            diversity: 0.0,
            combined: 0.0,
        }
    }
}

/// Evaluate a candidate output string, returning the combined score.
///
/// `expected` is accepted for interface symmetry with the judged metrics
/// and the external optimizer's call contract; this deterministic variant
/// never consults it.
pub fn evaluate(candidate: &str, expected: Option<&ExampleMap>) -> f64 {
    evaluate_with(
        candidate,
        expected,
        &CompositeWeights::default(),
        &DensityWeights::default(),
    )
    .combined
}

/// Evaluate with explicit weights, returning the full breakdown.
pub fn evaluate_with(
    candidate: &str,
    _expected: Option<&ExampleMap>,
    weights: &CompositeWeights,
    density_weights: &DensityWeights,
) -> CompositeBreakdown {
    let Some(map) = parse::parse(candidate) else {
        tracing::warn!("candidate did not parse, scoring 0");
        return CompositeBreakdown::zero();
    };

    let structure = structural::score(Some(&map));
    let density = density::score(Some(&map), density_weights);
    let diversity = diversity::score(Some(&map));
    let combined = structure * weights.structure
        + density * weights.density
        + diversity * weights.diversity;

    tracing::debug!(structure, density, diversity, combined, "composite breakdown");

    CompositeBreakdown {
        structure,
        density,
        diversity,
        combined,
    }
}
