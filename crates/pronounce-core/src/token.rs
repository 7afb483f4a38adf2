// Token and TokenSequence public API types

use std::fmt;

use crate::InputError;
use crate::character::{first_invalid, is_token_char};

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A single normalized word: non-empty, lower-case, alphanumeric.
///
/// A `Token` can only be obtained through validation ([`Token::new`]) or
/// normalization ([`TokenSequence::normalize`]), so holding one is proof
/// that the comparison granularity is consistent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Token(String);

impl Token {
    /// Validate `text` as a token.
    pub fn new(text: impl Into<String>) -> Result<Self, InputError> {
        Self::validated(text.into(), 0)
    }

    /// Validate `text`, reporting errors against sequence position `index`.
    fn validated(text: String, index: usize) -> Result<Self, InputError> {
        if text.is_empty() {
            return Err(InputError::EmptyToken { index });
        }
        if let Some(ch) = first_invalid(&text, is_token_char) {
            return Err(InputError::InvalidChar { index, ch });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the token in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<String> for Token {
    type Error = InputError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::validated(text, 0)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

// ---------------------------------------------------------------------------
// TokenSequence
// ---------------------------------------------------------------------------

/// Ordered, immutable sequence of normalized tokens.
///
/// Empty sequences are legal and meaningful (nothing was said, or nothing
/// was expected).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    /// Build a sequence from words that are already normalized.
    ///
    /// Fails on the first element that is empty or contains anything other
    /// than lower-case letters and digits.
    pub fn new<I, S>(words: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = words
            .into_iter()
            .enumerate()
            .map(|(index, w)| Token::validated(w.into(), index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tokens })
    }

    /// Normalize raw text into a sequence.
    ///
    /// Lower-cases, removes every character that is neither alphanumeric
    /// nor whitespace, then splits on whitespace. "Hello, World!" becomes
    /// `["hello", "world"]`. Characters whose lower-case form is still not
    /// a token character (e.g. titlecase digraphs without a mapping) are
    /// dropped as well.
    pub fn normalize(text: &str) -> Self {
        let cleaned: String = text
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|&c| c.is_whitespace() || is_token_char(c))
            .collect();
        let tokens = cleaned
            .split_whitespace()
            .map(|w| Token(w.to_string()))
            .collect();
        Self { tokens }
    }

    /// An empty sequence.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Join the tokens with single spaces.
    pub fn to_text(&self) -> String {
        self.tokens
            .iter()
            .map(Token::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
