//! LLM-as-judge evaluation.
//!
//! The deterministic scorers cover structure; the judge covers the
//! qualities that need reading comprehension (perspective coverage,
//! question patterns, example testability). Everything behind the
//! [`Judge`] trait is an external collaborator: the core builds a rubric
//! plus extracted content, requests a single bare number in [0, 1], and
//! absorbs any failure into a 0 for that dimension only.

pub mod client;
pub mod metric;
pub mod mock;
pub mod numeric;
pub mod rubric;

pub use client::HttpJudge;
pub use metric::{evaluate_objectives, evaluate_single, ObjectiveScores};

use crate::error::Error;

/// Capability interface for rubric-guided numeric evaluation.
///
/// Implementations send one user-role message containing the rubric and
/// content and return a score already clamped to [0, 1]. Retry and
/// rate-limit policy belong to the collaborator, not this layer.
pub trait Judge {
    fn score(
        &self,
        rubric: &str,
        content: &str,
    ) -> impl std::future::Future<Output = Result<f64, Error>> + Send;
}
