// Character classification for tokens and vocabulary words

/// Coarse character classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Anything that is neither alphanumeric nor whitespace counts as
/// punctuation, which is exactly the set normalization strips.
pub fn char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        CharType::Letter
    } else if c.is_numeric() {
        CharType::Digit
    } else if c.is_whitespace() {
        CharType::Whitespace
    } else {
        CharType::Punctuation
    }
}

/// Whether `c` may appear inside a normalized token.
///
/// Tokens are case-folded and punctuation-free, so only letters and digits
/// that have no upper-case form are accepted.
pub fn is_token_char(c: char) -> bool {
    matches!(char_type(c), CharType::Letter | CharType::Digit) && !c.is_uppercase()
}

/// Whether `c` may appear inside a vocabulary word.
///
/// Vocabulary words are lower-case and alphabetic; digits are rejected.
pub fn is_word_char(c: char) -> bool {
    char_type(c) == CharType::Letter && !c.is_uppercase()
}

/// Return the first character of `s` that fails `pred`, if any.
pub fn first_invalid(s: &str, pred: impl Fn(char) -> bool) -> Option<char> {
    s.chars().find(|&c| !pred(c))
}
