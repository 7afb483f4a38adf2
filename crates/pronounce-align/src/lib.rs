//! Token-level alignment and pronunciation scoring.
//!
//! Compares what a learner said (the candidate) against what they were
//! asked to say (the reference). Both are normalized
//! [`TokenSequence`](pronounce_core::TokenSequence)s; the comparison unit is
//! the word, not the character.
//!
//! # Architecture
//!
//! - [`matrix`] -- Dense edit-distance table and deterministic backtracking
//! - [`distance`] -- Distance value only, with a rolling two-row buffer
//! - [`alignment`] -- Edit path, word annotation, missing words
//! - [`score`] -- 0-100 score over token sequences
//! - [`similarity`] -- Character-level similarity and blended scores
//!
//! All functions are pure and allocate only per call, so they can be used
//! from any number of threads at once.

pub mod alignment;
pub mod distance;
pub mod matrix;
pub mod score;
pub mod similarity;

pub use alignment::{Alignment, EditOp, WordMatch, align};
pub use distance::distance;
pub use matrix::EditMatrix;
pub use score::{Scored, percent, score};
pub use similarity::{blend, char_similarity};
