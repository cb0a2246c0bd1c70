//! Error types for skilltune-core.
//!
//! Per-candidate failures (unparseable documents, failed judge calls) are
//! never errors: they resolve to score 0 so the external optimizer always
//! receives a well-formed number. The variants here cover the failures
//! that should stop a run instead of being absorbed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Train/validation split ratio outside the open interval (0, 1).
    #[error("split ratio must be in (0, 1), got {0}")]
    InvalidRatio(f64),

    /// No API credential available for the judge.
    #[error("no judge credential: set ANTHROPIC_API_KEY or SKILLTUNE_API_KEY")]
    MissingCredential,

    /// The judge endpoint returned a non-success status.
    #[error("judge request failed: {status} - {body}")]
    JudgeRequest { status: u16, body: String },

    /// The judge response did not carry a message content field.
    #[error("judge response missing content: {0}")]
    JudgeResponseShape(String),

    /// Transport-level failure talking to the judge endpoint.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
