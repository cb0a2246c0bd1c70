//! Fixed-score judge for tests and dry runs.

use crate::error::Error;
use crate::judge::{rubric, Judge};

/// Judge that answers from a fixed score table keyed by rubric, without
/// any network traffic. Unknown rubrics fail like a delegation error so
/// tests can exercise the absorb-to-zero path.
pub struct MockJudge {
    pub three_amigos: Result<f64, ()>,
    pub question_patterns: Result<f64, ()>,
    pub testability: Result<f64, ()>,
}

impl MockJudge {
    pub fn scoring(three_amigos: f64, question_patterns: f64, testability: f64) -> Self {
        Self {
            three_amigos: Ok(three_amigos),
            question_patterns: Ok(question_patterns),
            testability: Ok(testability),
        }
    }

    fn lookup(&self, rubric_text: &str) -> Result<f64, Error> {
        let entry = if rubric_text == rubric::THREE_AMIGOS {
            &self.three_amigos
        } else if rubric_text == rubric::QUESTION_PATTERNS {
            &self.question_patterns
        } else if rubric_text == rubric::EXAMPLE_TESTABILITY {
            &self.testability
        } else {
            return Err(Error::JudgeResponseShape(format!(
                "unknown rubric: {}",
                rubric_text.lines().next().unwrap_or_default()
            )));
        };

        match entry {
            Ok(score) => Ok(*score),
            Err(()) => Err(Error::JudgeRequest {
                status: 500,
                body: "mock delegation failure".to_string(),
            }),
        }
    }
}

impl Judge for MockJudge {
    async fn score(&self, rubric_text: &str, _content: &str) -> Result<f64, Error> {
        self.lookup(rubric_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_table_scores() {
        let judge = MockJudge::scoring(0.9, 0.8, 0.7);
        assert_eq!(judge.score(rubric::THREE_AMIGOS, "c").await.unwrap(), 0.9);
        assert_eq!(
            judge.score(rubric::QUESTION_PATTERNS, "c").await.unwrap(),
            0.8
        );
        assert_eq!(
            judge.score(rubric::EXAMPLE_TESTABILITY, "c").await.unwrap(),
            0.7
        );
    }

    #[tokio::test]
    async fn test_mock_failure_arm() {
        let judge = MockJudge {
            three_amigos: Err(()),
            question_patterns: Ok(0.5),
            testability: Ok(0.5),
        };
        assert!(judge.score(rubric::THREE_AMIGOS, "c").await.is_err());
    }
}
