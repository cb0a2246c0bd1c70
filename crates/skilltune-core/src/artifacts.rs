//! File artifacts around an optimization run.
//!
//! Two persisted things only: the instruction document being tuned
//! (read once as UTF-8 text) and the run report (written once as pretty
//! JSON under a timestamped name). No schema versioning.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Read the instruction document (the SKILL file under tuning).
pub fn load_instruction(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read instruction document: {}", path.display()))
}

/// Write a run report as pretty JSON, returning the path written.
///
/// Files land in `dir` as `<prefix>-<timestamp>.json`; the directory is
/// created if needed.
pub fn save_report<T: Serialize>(dir: &Path, prefix: &str, report: &T) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory: {}", dir.display()))?;

    let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S");
    let path = dir.join(format!("{}-{}.json", prefix, timestamp));

    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    Ok(path)
}
