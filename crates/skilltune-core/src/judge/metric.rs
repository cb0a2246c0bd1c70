//! Judged composite metrics.
//!
//! Two variants over the same three rubric dimensions: a single weighted
//! score for the few-shot optimizer, and a labeled triple for the
//! multi-objective (Pareto) optimizer. The three sub-evaluations are
//! independent, run concurrently, and each one absorbs its own failure
//! into a 0 without aborting the others.

use crate::config::JudgedWeights;
use crate::judge::{rubric, Judge};
use crate::mapping::ExampleMap;
use crate::parse;
use serde::{Deserialize, Serialize};

/// Labeled sub-scores for multi-objective search.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ObjectiveScores {
    pub three_amigos_coverage: f64,
    pub question_pattern_diversity: f64,
    pub example_testability: f64,
}

impl ObjectiveScores {
    pub fn weighted(&self, weights: &JudgedWeights) -> f64 {
        self.three_amigos_coverage * weights.three_amigos_coverage
            + self.question_pattern_diversity * weights.question_pattern_diversity
            + self.example_testability * weights.example_testability
    }
}

/// Run one rubric evaluation, scoring 0 when there is no content to
/// evaluate or the delegation fails.
async fn evaluate_dimension<J: Judge + Sync>(
    judge: &J,
    name: &str,
    rubric_text: &str,
    content: Option<String>,
) -> f64 {
    let Some(content) = content else {
        return 0.0;
    };

    match judge.score(rubric_text, &content).await {
        Ok(score) => score,
        Err(e) => {
            tracing::warn!(dimension = name, error = %e, "judge evaluation failed, scoring 0");
            0.0
        }
    }
}

async fn evaluate_map<J: Judge + Sync>(judge: &J, map: &ExampleMap) -> ObjectiveScores {
    let (three_amigos_coverage, question_pattern_diversity, example_testability) = tokio::join!(
        evaluate_dimension(
            judge,
            "three_amigos_coverage",
            rubric::THREE_AMIGOS,
            rubric::three_amigos_content(map),
        ),
        evaluate_dimension(
            judge,
            "question_pattern_diversity",
            rubric::QUESTION_PATTERNS,
            rubric::question_pattern_content(map),
        ),
        evaluate_dimension(
            judge,
            "example_testability",
            rubric::EXAMPLE_TESTABILITY,
            rubric::testability_content(map),
        ),
    );

    ObjectiveScores {
        three_amigos_coverage,
        question_pattern_diversity,
        example_testability,
    }
}

/// Multi-objective judged metric: the labeled triple, for Pareto search.
///
/// An unparseable candidate yields the all-zero triple.
pub async fn evaluate_objectives<J: Judge + Sync>(judge: &J, candidate: &str) -> ObjectiveScores {
    let Some(map) = parse::parse(candidate) else {
        tracing::warn!("candidate did not parse, all objectives score 0");
        return ObjectiveScores::default();
    };

    let scores = evaluate_map(judge, &map).await;
    tracing::debug!(
        amigos = scores.three_amigos_coverage,
        diversity = scores.question_pattern_diversity,
        testability = scores.example_testability,
        "judged objectives"
    );
    scores
}

/// Single-score judged metric: the triple collapsed by fixed weights.
///
/// `expected` is part of the optimizer call contract but unused here;
/// quality is judged against the rubrics, not a reference record.
pub async fn evaluate_single<J: Judge + Sync>(
    judge: &J,
    candidate: &str,
    _expected: Option<&ExampleMap>,
    weights: &JudgedWeights,
) -> f64 {
    let Some(map) = parse::parse(candidate) else {
        tracing::warn!("candidate did not parse, scoring 0");
        return 0.0;
    };

    evaluate_map(judge, &map).await.weighted(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::mock::MockJudge;

    const CANDIDATE: &str = r#"{
        "story": {"as_a": "pm", "i_want_to": "map stories", "so_that": "scope is clear"},
        "rules": [{"id": "R1", "name": "r", "examples": [
            {"given": "g", "when": "w", "then": "t"}
        ]}],
        "questions": {
            "blocker": ["What is the upper limit?"],
            "clarification": ["Does this include drafts?"],
            "future": ["Bulk import later?"]
        },
        "next_actions": ["review"]
    }"#;

    #[tokio::test]
    async fn test_objectives_from_mock_judge() {
        let judge = MockJudge::scoring(0.9, 0.6, 0.3);
        let scores = evaluate_objectives(&judge, CANDIDATE).await;
        assert_eq!(scores.three_amigos_coverage, 0.9);
        assert_eq!(scores.question_pattern_diversity, 0.6);
        assert_eq!(scores.example_testability, 0.3);
    }

    #[tokio::test]
    async fn test_single_score_is_weighted_sum() {
        let judge = MockJudge::scoring(0.9, 0.6, 0.3);
        let score = evaluate_single(&judge, CANDIDATE, None, &JudgedWeights::default()).await;
        let expected = 0.9 * 0.35 + 0.6 * 0.35 + 0.3 * 0.30;
        assert!((score - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_unparseable_candidate_zeroes_everything() {
        let judge = MockJudge::scoring(1.0, 1.0, 1.0);
        let scores = evaluate_objectives(&judge, "not json").await;
        assert_eq!(scores.three_amigos_coverage, 0.0);
        assert_eq!(scores.question_pattern_diversity, 0.0);
        assert_eq!(scores.example_testability, 0.0);

        let single = evaluate_single(&judge, "not json", None, &JudgedWeights::default()).await;
        assert_eq!(single, 0.0);
    }

    #[tokio::test]
    async fn test_one_failing_dimension_does_not_abort_others() {
        let judge = MockJudge {
            three_amigos: Err(()),
            question_patterns: Ok(0.8),
            testability: Ok(0.4),
        };
        let scores = evaluate_objectives(&judge, CANDIDATE).await;
        assert_eq!(scores.three_amigos_coverage, 0.0);
        assert_eq!(scores.question_pattern_diversity, 0.8);
        assert_eq!(scores.example_testability, 0.4);
    }

    #[tokio::test]
    async fn test_empty_sections_skip_delegation() {
        // No questions and no examples: both question dimensions and the
        // testability dimension must score 0 without consulting the judge
        // (the mock would have returned 1.0).
        let judge = MockJudge::scoring(1.0, 1.0, 1.0);
        let candidate = r#"{"rules": [{"id": "R1", "name": "r", "examples": []}]}"#;
        let scores = evaluate_objectives(&judge, candidate).await;
        assert_eq!(scores.three_amigos_coverage, 0.0);
        assert_eq!(scores.question_pattern_diversity, 0.0);
        assert_eq!(scores.example_testability, 0.0);
    }
}
