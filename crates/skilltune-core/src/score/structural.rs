//! Structure completeness scorer.
//!
//! Four independent checks, each worth a fixed share: complete story,
//! at least one rule, question coverage, at least one next action.
//! The questions check pays 0.25 only when all three categories hold a
//! question; partial coverage (one or two categories) pays 0.15.

use crate::mapping::ExampleMap;

const STORY_SHARE: f64 = 0.25;
const RULES_SHARE: f64 = 0.25;
const QUESTIONS_FULL_SHARE: f64 = 0.25;
const QUESTIONS_PARTIAL_SHARE: f64 = 0.15;
const NEXT_ACTIONS_SHARE: f64 = 0.25;

/// Score structure completeness in [0, 1]. Absent records score 0.
pub fn score(map: Option<&ExampleMap>) -> f64 {
    let Some(map) = map else {
        return 0.0;
    };

    let mut score = 0.0;

    if map.story_complete() {
        score += STORY_SHARE;
    }

    if !map.rules.is_empty() {
        score += RULES_SHARE;
    }

    match map.questions.populated_categories() {
        3 => score += QUESTIONS_FULL_SHARE,
        1 | 2 => score += QUESTIONS_PARTIAL_SHARE,
        _ => {}
    }

    if !map.next_actions.is_empty() {
        score += NEXT_ACTIONS_SHARE;
    }

    score
}
