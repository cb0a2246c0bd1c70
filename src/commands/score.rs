//! Deterministic scoring of a single candidate file.

use anyhow::{Context, Result};
use serde::Serialize;
use skilltune_core::config::Config;
use skilltune_core::score::{composite, ScoreTier};
use std::path::Path;

#[derive(Serialize)]
struct ScoreReport {
    input: String,
    structure: f64,
    density: f64,
    diversity: f64,
    combined: f64,
    tier: String,
}

pub fn run(input: &Path, report_dir: Option<&Path>, config: &Config) -> Result<()> {
    let candidate = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read candidate file: {}", input.display()))?;

    let breakdown = composite::evaluate_with(&candidate, None, &config.composite, &config.density);
    let tier = ScoreTier::from_score(breakdown.combined);

    println!("Structure: {:.2}", breakdown.structure);
    println!("Density:   {:.2}", breakdown.density);
    println!("Diversity: {:.2}", breakdown.diversity);
    println!("Combined:  {:.2} ({})", breakdown.combined, tier);

    if let Some(dir) = report_dir {
        let report = ScoreReport {
            input: input.display().to_string(),
            structure: breakdown.structure,
            density: breakdown.density,
            diversity: breakdown.diversity,
            combined: breakdown.combined,
            tier: tier.to_string(),
        };
        let path = skilltune_core::artifacts::save_report(dir, "score", &report)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
