//! LLM-as-judge scoring of a single candidate file.

use anyhow::{Context, Result};
use serde::Serialize;
use skilltune_core::config::Config;
use skilltune_core::judge::{evaluate_objectives, evaluate_single, HttpJudge, ObjectiveScores};
use skilltune_core::score::ScoreTier;
use std::path::Path;

#[derive(Serialize)]
struct JudgeReport {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    objectives: Option<ObjectiveScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    combined: Option<f64>,
}

pub async fn run(
    input: &Path,
    multi: bool,
    report_dir: Option<&Path>,
    config: &Config,
) -> Result<()> {
    // The credential check happens before any file is read or scored; a
    // run without one can never produce a judged score.
    let judge = HttpJudge::from_env(&config.judge).context("Judge configuration failed")?;

    let candidate = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read candidate file: {}", input.display()))?;

    let report = if multi {
        let scores = evaluate_objectives(&judge, &candidate).await;
        println!("Three amigos coverage:      {:.2}", scores.three_amigos_coverage);
        println!("Question pattern diversity: {:.2}", scores.question_pattern_diversity);
        println!("Example testability:        {:.2}", scores.example_testability);
        JudgeReport {
            input: input.display().to_string(),
            objectives: Some(scores),
            combined: None,
        }
    } else {
        let score = evaluate_single(&judge, &candidate, None, &config.judged).await;
        println!("Judged score: {:.2} ({})", score, ScoreTier::from_score(score));
        JudgeReport {
            input: input.display().to_string(),
            objectives: None,
            combined: Some(score),
        }
    };

    if let Some(dir) = report_dir {
        let path = skilltune_core::artifacts::save_report(dir, "judge", &report)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
