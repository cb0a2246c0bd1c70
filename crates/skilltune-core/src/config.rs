//! Configuration for the scoring layer.
//!
//! Weights and thresholds are design constants with fixed defaults, but
//! they are carried as values injected into the scorers rather than
//! hard-coded literals so test suites can substitute edge-case sets.
//! An optional `skilltune.toml` next to the working directory can
//! override them, along with the judge model and endpoint.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Weights for the deterministic composite (structure/density/diversity).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub structure: f64,
    pub density: f64,
    pub diversity: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            structure: 0.4,
            density: 0.3,
            diversity: 0.3,
        }
    }
}

/// Saturation thresholds and term weights for the density scorer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DensityWeights {
    /// Rule count at which the rule term saturates.
    pub rule_target: usize,
    /// Total example count at which the example term saturates.
    pub example_target: usize,
    /// Total question count at which the question term saturates.
    pub question_target: usize,
    pub rule_weight: f64,
    pub example_weight: f64,
    pub question_weight: f64,
}

impl Default for DensityWeights {
    fn default() -> Self {
        Self {
            rule_target: 3,
            example_target: 5,
            question_target: 6,
            rule_weight: 0.4,
            example_weight: 0.3,
            question_weight: 0.3,
        }
    }
}

/// Weights for the judged composite (three rubric dimensions).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JudgedWeights {
    pub three_amigos_coverage: f64,
    pub question_pattern_diversity: f64,
    pub example_testability: f64,
}

impl Default for JudgedWeights {
    fn default() -> Self {
        Self {
            three_amigos_coverage: 0.35,
            question_pattern_diversity: 0.35,
            example_testability: 0.30,
        }
    }
}

/// Judge endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeConfig {
    pub model: String,
    pub api_base: String,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            model: "claude-haiku-4-5".to_string(),
            api_base: "https://api.openai.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub composite: CompositeWeights,
    #[serde(default)]
    pub density: DensityWeights,
    #[serde(default)]
    pub judged: JudgedWeights,
    #[serde(default)]
    pub judge: JudgeConfig,
}

impl Config {
    pub fn load_or_default() -> Self {
        let config_path = Path::new("skilltune.toml");

        if config_path.exists() {
            match Self::load(config_path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to load skilltune.toml, using defaults");
                }
            }
        }

        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))?;

        Ok(config)
    }
}
