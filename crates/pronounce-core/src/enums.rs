// Shared enums: MatchTag, ScoreBand

/// Classification of one candidate word after alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchTag {
    /// Same token as the aligned reference word.
    Matched,
    /// Aligned with a different reference word.
    Substituted,
    /// Not aligned with any reference word.
    Extra,
}

impl MatchTag {
    /// Lower-case label used in plain-text output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Matched => "matched",
            Self::Substituted => "substituted",
            Self::Extra => "extra",
        }
    }

    /// `true` only for [`MatchTag::Matched`].
    pub fn is_correct(self) -> bool {
        self == Self::Matched
    }
}

/// Coarse grade of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScoreBand {
    Poor,
    Average,
    Good,
}

/// Lowest score graded as [`ScoreBand::Good`].
pub const GOOD_THRESHOLD: f64 = 80.0;

/// Lowest score graded as [`ScoreBand::Average`].
pub const AVERAGE_THRESHOLD: f64 = 50.0;

impl ScoreBand {
    /// Grade a score. Accepts integer scores and blended floating scores alike.
    pub fn of(score: impl Into<f64>) -> Self {
        let score = score.into();
        if score >= GOOD_THRESHOLD {
            Self::Good
        } else if score >= AVERAGE_THRESHOLD {
            Self::Average
        } else {
            Self::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Average => "average",
            Self::Good => "good",
        }
    }
}
