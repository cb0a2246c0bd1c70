//! Skilltune Core Library
//!
//! Scoring layer for BDD Example Mapping outputs: a tolerant document
//! parser, deterministic structure/density/diversity scorers with a
//! weighted composite, rubric-driven LLM-as-judge metrics, and the static
//! training datasets consumed by the external prompt optimizers.

pub mod artifacts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod judge;
pub mod mapping;
pub mod parse;
pub mod score;

pub use error::Error;
pub use mapping::ExampleMap;
