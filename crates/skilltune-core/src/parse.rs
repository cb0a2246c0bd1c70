//! Document parser for raw model output.
//!
//! Model output usually wraps the mapping JSON in a markdown code fence,
//! optionally tagged (```json). Extraction takes the first fence's
//! interior; without a fence the whole trimmed string is decoded. Any
//! decode failure yields `None` - absence is an expected outcome that
//! every downstream scorer treats as 0, never an error to the caller.

use crate::mapping::ExampleMap;
use regex::Regex;
use std::sync::OnceLock;

fn fence_pattern() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"(?s)```(?:[a-zA-Z0-9_-]*)\s*\n?(.*?)\n?```").expect("valid fence pattern")
    })
}

/// Extract the candidate JSON text from a raw output blob.
///
/// Returns the interior of the first fenced code block if one exists,
/// otherwise the trimmed input.
pub fn extract_json_text(raw: &str) -> &str {
    match fence_pattern().captures(raw) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()).trim(),
        None => raw.trim(),
    }
}

/// Parse raw model output into an [`ExampleMap`].
///
/// Never panics and never returns an error: malformed syntax or a wrong
/// top-level shape both resolve to `None`. Missing optional fields are
/// tolerated and decode as empty.
pub fn parse(raw: &str) -> Option<ExampleMap> {
    let text = extract_json_text(raw);
    match serde_json::from_str::<ExampleMap>(text) {
        Ok(map) => Some(map),
        Err(e) => {
            tracing::debug!(error = %e, "candidate output did not decode as a mapping");
            None
        }
    }
}
