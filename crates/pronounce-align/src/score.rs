// Token-level pronunciation score

use pronounce_core::{ScoreBand, TokenSequence};

use crate::alignment::{Alignment, WordMatch, align};

/// Result of scoring a candidate utterance against a reference phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scored {
    /// Token-level edit distance.
    pub distance: usize,
    /// Similarity in `[0, 100]`.
    pub score: u8,
    /// One entry per candidate word, in candidate order.
    pub annotation: Vec<WordMatch>,
    /// Reference positions the candidate skipped.
    pub missing: Vec<usize>,
}

impl Scored {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.score)
    }

    fn from_alignment(alignment: &Alignment, longest: usize) -> Self {
        let distance = alignment.distance();
        Self {
            distance,
            score: percent(distance, longest),
            annotation: alignment.annotation(),
            missing: alignment.missing(),
        }
    }
}

/// Score `candidate` against `reference`.
///
/// `score = round(100 * (1 - distance / max(len_ref, len_cand)))`, with
/// halves rounded up. Two empty sequences score 100; one empty sequence
/// against a non-empty one scores 0.
pub fn score(reference: &TokenSequence, candidate: &TokenSequence) -> Scored {
    let alignment = align(reference.as_slice(), candidate.as_slice());
    let longest = reference.len().max(candidate.len());
    let scored = Scored::from_alignment(&alignment, longest);
    tracing::debug!(
        reference_len = reference.len(),
        candidate_len = candidate.len(),
        distance = scored.distance,
        score = scored.score,
        "scored utterance"
    );
    scored
}

/// Convert a distance over sequences of at most `longest` items into a
/// 0-100 similarity.
///
/// Integer arithmetic keeps `.5` cases exact: `round(100 * (longest - d) /
/// longest)` is computed as `(200 * (longest - d) + longest) / (2 * longest)`.
pub fn percent(distance: usize, longest: usize) -> u8 {
    if longest == 0 {
        return 100;
    }
    let kept = longest.saturating_sub(distance);
    let rounded = (200 * kept + longest) / (2 * longest);
    rounded.min(100) as u8
}
