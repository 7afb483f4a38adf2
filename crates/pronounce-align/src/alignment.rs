// Edit path and word-level match annotation

use pronounce_core::MatchTag;

use crate::matrix::EditMatrix;

/// One step of an optimal edit path.
///
/// Indices point into the reference and candidate sequences that produced
/// the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum EditOp {
    /// Equal tokens at both positions.
    Match { reference: usize, candidate: usize },
    /// Different tokens at both positions.
    Substitute { reference: usize, candidate: usize },
    /// Candidate token with no reference counterpart (an extra word).
    Insert { candidate: usize },
    /// Reference token the candidate skipped (a missing word).
    Delete { reference: usize },
}

impl EditOp {
    /// Cost of this step in the edit distance.
    pub fn cost(self) -> usize {
        match self {
            Self::Match { .. } => 0,
            _ => 1,
        }
    }

    /// The candidate-side annotation, if this step consumes a candidate token.
    pub fn word_match(self) -> Option<WordMatch> {
        match self {
            Self::Match {
                reference,
                candidate,
            } => Some(WordMatch {
                candidate,
                tag: MatchTag::Matched,
                reference: Some(reference),
            }),
            Self::Substitute {
                reference,
                candidate,
            } => Some(WordMatch {
                candidate,
                tag: MatchTag::Substituted,
                reference: Some(reference),
            }),
            Self::Insert { candidate } => Some(WordMatch {
                candidate,
                tag: MatchTag::Extra,
                reference: None,
            }),
            Self::Delete { .. } => None,
        }
    }
}

/// Classification of one candidate word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordMatch {
    /// Position in the candidate sequence.
    pub candidate: usize,
    pub tag: MatchTag,
    /// Aligned reference position; `None` for extra words.
    pub reference: Option<usize>,
}

/// An optimal alignment between a reference and a candidate sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    distance: usize,
    ops: Vec<EditOp>,
}

impl Alignment {
    /// Edit distance of the aligned pair (sum of step costs).
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// The edit path in reading order.
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// One annotation per candidate position, in candidate order.
    pub fn annotation(&self) -> Vec<WordMatch> {
        self.ops.iter().filter_map(|op| op.word_match()).collect()
    }

    /// Reference positions the candidate skipped, ascending.
    pub fn missing(&self) -> Vec<usize> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                EditOp::Delete { reference } => Some(reference),
                _ => None,
            })
            .collect()
    }

    /// Tags only, in candidate order.
    pub fn tags(&self) -> Vec<MatchTag> {
        self.ops
            .iter()
            .filter_map(|op| op.word_match().map(|m| m.tag))
            .collect()
    }
}

/// Align `candidate` against `reference`.
///
/// Builds the full matrix and backtracks it; see
/// [`EditMatrix::backtrack`] for the tie-break order.
pub fn align<T: PartialEq>(reference: &[T], candidate: &[T]) -> Alignment {
    let matrix = EditMatrix::build(reference, candidate);
    Alignment {
        distance: matrix.distance(),
        ops: matrix.backtrack(),
    }
}
