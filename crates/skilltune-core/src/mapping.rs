//! BDD Example Mapping document model.
//!
//! The structured record extracted from raw model output. A record is
//! built fresh on every scoring call and never mutated afterwards; every
//! count the scorers need is recomputed from the live collections, never
//! read from `metadata`.

use serde::{Deserialize, Serialize};

/// User story narrative. Complete only when all three fields are non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Story {
    #[serde(default)]
    pub as_a: String,
    #[serde(default)]
    pub i_want_to: String,
    #[serde(default)]
    pub so_that: String,
}

/// A concrete Gherkin-style example attached to a rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub given: String,
    #[serde(default)]
    pub when: String,
    #[serde(default)]
    pub then: String,
}

/// A business rule with zero or more examples.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub examples: Vec<Example>,
}

/// Open questions, partitioned into exactly three fixed categories.
/// No other categories exist or are recognized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Questions {
    #[serde(default)]
    pub blocker: Vec<String>,
    #[serde(default)]
    pub clarification: Vec<String>,
    #[serde(default)]
    pub future: Vec<String>,
}

impl Questions {
    pub fn total(&self) -> usize {
        self.blocker.len() + self.clarification.len() + self.future.len()
    }

    /// Number of the three categories that hold at least one question.
    pub fn populated_categories(&self) -> usize {
        [&self.blocker, &self.clarification, &self.future]
            .iter()
            .filter(|c| !c.is_empty())
            .count()
    }
}

/// Derived counts emitted by some producers. Informational only; scorers
/// must not trust these over the live collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub rule_count: usize,
    #[serde(default)]
    pub example_count: usize,
    #[serde(default)]
    pub question_count: usize,
}

/// A full BDD Example Mapping record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExampleMap {
    #[serde(default)]
    pub story: Story,
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub questions: Questions,
    #[serde(default)]
    pub next_actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ExampleMap {
    /// All three narrative fields present and non-empty.
    pub fn story_complete(&self) -> bool {
        !self.story.as_a.trim().is_empty()
            && !self.story.i_want_to.trim().is_empty()
            && !self.story.so_that.trim().is_empty()
    }

    /// Total examples across all rules, recomputed from the rule list.
    pub fn total_examples(&self) -> usize {
        self.rules.iter().map(|r| r.examples.len()).sum()
    }

    /// Total questions across the three categories.
    pub fn total_questions(&self) -> usize {
        self.questions.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(a: &str, w: &str, t: &str) -> Story {
        Story {
            as_a: a.to_string(),
            i_want_to: w.to_string(),
            so_that: t.to_string(),
        }
    }

    #[test]
    fn test_story_complete_requires_all_fields() {
        let mut map = ExampleMap {
            story: story("manager", "see variances", "react quickly"),
            ..Default::default()
        };
        assert!(map.story_complete());

        map.story.so_that = String::new();
        assert!(!map.story_complete());

        map.story.so_that = "   ".to_string();
        assert!(!map.story_complete());
    }

    #[test]
    fn test_total_examples_sums_across_rules() {
        let map = ExampleMap {
            rules: vec![
                Rule {
                    examples: vec![Example::default(), Example::default()],
                    ..Default::default()
                },
                Rule::default(),
                Rule {
                    examples: vec![Example::default()],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(map.total_examples(), 3);
    }

    #[test]
    fn test_populated_categories() {
        let mut q = Questions::default();
        assert_eq!(q.populated_categories(), 0);

        q.blocker.push("What blocks release?".to_string());
        q.future.push("Multi-currency later?".to_string());
        assert_eq!(q.populated_categories(), 2);
        assert_eq!(q.total(), 2);
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let map: ExampleMap = serde_json::from_str(r#"{"rules": []}"#).unwrap();
        assert!(!map.story_complete());
        assert_eq!(map.total_questions(), 0);
        assert!(map.next_actions.is_empty());
        assert!(map.metadata.is_none());
    }

    #[test]
    fn test_metadata_is_not_authoritative() {
        // A producer may claim counts that disagree with the collections;
        // the helpers must ignore the claim.
        let raw = r#"{
            "rules": [{"id": "R1", "name": "one", "examples": []}],
            "metadata": {"rule_count": 9, "example_count": 9, "question_count": 9}
        }"#;
        let map: ExampleMap = serde_json::from_str(raw).unwrap();
        assert_eq!(map.rules.len(), 1);
        assert_eq!(map.total_examples(), 0);
        assert_eq!(map.total_questions(), 0);
    }
}
