//! Prefix-tree vocabulary for word autocomplete.
//!
//! A [`Vocabulary`] stores lower-case words and answers "which known words
//! start with this prefix" in lexicographic order. It is usually populated
//! once at startup from a bundled word list and then queried on every
//! keystroke.
//!
//! - `node` -- Owned trie node
//! - [`vocabulary`] -- Insert, suggest, lookup, batch load

mod node;
pub mod vocabulary;

pub use vocabulary::{PrefixMatch, Vocabulary, VocabularyStats};
