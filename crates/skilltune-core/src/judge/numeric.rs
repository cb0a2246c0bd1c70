//! Numeric extraction from judge replies.
//!
//! The judge is asked for a bare number, but free-text models drift.
//! Extraction is strict-then-fallback: try the whole trimmed reply as a
//! float first, then the first float-looking token anywhere in the text.
//! Whatever is found is clamped to [0, 1]; nothing found means `None`
//! and the caller scores the dimension 0.

use regex::Regex;
use std::sync::OnceLock;

fn float_pattern() -> &'static Regex {
    static FLOAT: OnceLock<Regex> = OnceLock::new();
    FLOAT.get_or_init(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("valid float pattern"))
}

/// Extract a score from a judge reply, clamped to [0, 1].
pub fn extract_score(reply: &str) -> Option<f64> {
    let trimmed = reply.trim();

    if let Ok(value) = trimmed.parse::<f64>() {
        return Some(value.clamp(0.0, 1.0));
    }

    float_pattern()
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(|value| value.clamp(0.0, 1.0))
}
