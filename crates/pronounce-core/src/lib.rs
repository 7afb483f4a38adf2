//! Shared types for pronunciation scoring and word suggestion.
//!
//! This crate holds the vocabulary every other crate in the workspace
//! speaks: normalized tokens, token sequences, match tags and the single
//! invalid-argument error type.
//!
//! # Architecture
//!
//! - [`character`] -- Character classification used by validation and normalization
//! - [`enums`] -- Match tags and score bands
//! - [`token`] -- `Token` and `TokenSequence` (validated and normalized constructors)

pub mod character;
pub mod enums;
pub mod token;

pub use enums::{MatchTag, ScoreBand};
pub use token::{Token, TokenSequence};

/// Caller contract violation detected at an API boundary.
///
/// The engines never try to repair malformed input: normalization is the
/// caller's job, and silently fixing it here would hide defects upstream.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("token {index} is empty")]
    EmptyToken { index: usize },
    #[error("token {index} contains invalid character {ch:?}")]
    InvalidChar { index: usize, ch: char },
    #[error("word is empty")]
    EmptyWord,
    #[error("word {word:?} contains invalid character {ch:?}")]
    InvalidWordChar { word: String, ch: char },
    #[error("{name} must be within [0, 1], got {value}")]
    OutOfRange { name: &'static str, value: f64 },
}
