//! Question diversity scorer.
//!
//! Measures how evenly questions spread across the blocker /
//! clarification / future categories. A record with an entirely empty
//! category is capped at 0.5 no matter how the remaining mass is
//! balanced; otherwise the score is 1 minus the normalized absolute
//! deviation from the uniform 1/3 split.

use crate::mapping::ExampleMap;

/// Cap applied when any category is empty while total questions > 0.
const MISSING_CATEGORY_CAP: f64 = 0.5;

/// Deviation at which the score bottoms out: all mass in one category
/// gives |1 - 1/3| + 1/3 + 1/3 = 2/3.
const MAX_DEVIATION: f64 = 2.0 / 3.0;

/// Score question spread in [0, 1]. Absent records and records with no
/// questions score 0.
pub fn score(map: Option<&ExampleMap>) -> f64 {
    let Some(map) = map else {
        return 0.0;
    };

    let blocker = map.questions.blocker.len();
    let clarification = map.questions.clarification.len();
    let future = map.questions.future.len();
    let total = blocker + clarification + future;

    if total == 0 {
        return 0.0;
    }

    if blocker == 0 || clarification == 0 || future == 0 {
        return MISSING_CATEGORY_CAP;
    }

    let ideal = 1.0 / 3.0;
    let total = total as f64;
    let deviation = (blocker as f64 / total - ideal).abs()
        + (clarification as f64 / total - ideal).abs()
        + (future as f64 / total - ideal).abs();

    (1.0 - deviation / MAX_DEVIATION).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::Questions;

    fn map_with_counts(blocker: usize, clarification: usize, future: usize) -> ExampleMap {
        let fill = |n: usize| (0..n).map(|i| format!("q{}", i)).collect();
        ExampleMap {
            questions: Questions {
                blocker: fill(blocker),
                clarification: fill(clarification),
                future: fill(future),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_scores_zero() {
        assert_eq!(score(None), 0.0);
    }

    #[test]
    fn test_no_questions_scores_zero() {
        assert_eq!(score(Some(&map_with_counts(0, 0, 0))), 0.0);
    }

    #[test]
    fn test_uniform_split_scores_one() {
        assert!((score(Some(&map_with_counts(1, 1, 1))) - 1.0).abs() < 1e-9);
        assert!((score(Some(&map_with_counts(2, 2, 2))) - 1.0).abs() < 1e-9);
        assert!((score(Some(&map_with_counts(4, 4, 4))) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_category_caps_at_half() {
        // Heavy but single-category records cannot exceed the cap.
        assert_eq!(score(Some(&map_with_counts(5, 0, 0))), 0.5);
        assert_eq!(score(Some(&map_with_counts(3, 3, 0))), 0.5);
        assert_eq!(score(Some(&map_with_counts(0, 1, 9))), 0.5);
    }

    #[test]
    fn test_skew_lowers_score() {
        let balanced = score(Some(&map_with_counts(2, 2, 2)));
        let skewed = score(Some(&map_with_counts(3, 1, 1)));
        assert!(skewed < balanced);
        assert!(skewed > 0.0);
    }

    #[test]
    fn test_skew_value() {
        // shares 4/6, 1/6, 1/6 -> deviations 1/3 + 1/6 + 1/6 = 2/3 exactly,
        // the practical maximum, so the score floors at 0.
        assert!((score(Some(&map_with_counts(4, 1, 1))) - 0.0).abs() < 1e-9);

        // shares 2/4, 1/4, 1/4 -> deviations 1/6 + 1/12 + 1/12 = 1/3
        let expected = 1.0 - (1.0 / 3.0) / (2.0 / 3.0);
        assert!((score(Some(&map_with_counts(2, 1, 1))) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_result_stays_in_unit_interval() {
        for b in 1..6 {
            for c in 1..6 {
                for f in 1..6 {
                    let s = score(Some(&map_with_counts(b, c, f)));
                    assert!((0.0..=1.0).contains(&s));
                }
            }
        }
    }
}
