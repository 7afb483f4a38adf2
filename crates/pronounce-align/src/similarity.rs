// Character-level similarity and blended scores

use pronounce_core::InputError;

use crate::distance::distance;

/// Weight of the similarity term in [`blend`].
pub const SIMILARITY_WEIGHT: f64 = 0.6;

/// Weight of the recognizer confidence term in [`blend`].
pub const CONFIDENCE_WEIGHT: f64 = 0.4;

/// Character-level similarity of two strings, in `[0, 100]`.
///
/// Both strings are trimmed and lower-cased, then compared `char` by
/// `char`. Two empty strings are identical (100); exactly one empty string
/// scores 0. The result is rounded to two decimals, halves to even.
///
/// Unlike [`score`](crate::score::score) this does not require normalized
/// input, so it grades near-misses inside a word ("brwn" vs "brown").
pub fn char_similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.trim().chars().flat_map(char::to_lowercase).collect();
    let b: Vec<char> = b.trim().chars().flat_map(char::to_lowercase).collect();

    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 100.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }

    let longest = a.len().max(b.len()) as f64;
    let d = distance(&a, &b) as f64;
    let raw = (1.0 - d / longest) * 100.0;
    ((raw * 100.0).round_ties_even() / 100.0).max(0.0)
}

/// Combine a similarity ratio and a recognizer confidence into one score.
///
/// `(similarity * 0.6 + confidence * 0.4) * 100`. Both inputs are ratios
/// in `[0, 1]`; anything else (including NaN) is rejected.
pub fn blend(similarity: f64, confidence: f64) -> Result<f64, InputError> {
    check_ratio("similarity", similarity)?;
    check_ratio("confidence", confidence)?;
    Ok((similarity * SIMILARITY_WEIGHT + confidence * CONFIDENCE_WEIGHT) * 100.0)
}

fn check_ratio(name: &'static str, value: f64) -> Result<(), InputError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(InputError::OutOfRange { name, value })
    }
}
