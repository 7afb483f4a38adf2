// Score report: one scored sentence pair, rendered as text or JSON

use std::fmt::Write as _;

use serde::Serialize;

use pronounce_align::{blend, char_similarity, score};
use pronounce_core::{InputError, MatchTag, ScoreBand, TokenSequence};

/// Optional extras computed alongside the token score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Also compute the character-level similarity of the raw texts.
    pub chars: bool,
    /// Recognizer confidence in `[0, 1]`; blends it with the character
    /// similarity into a final score.
    pub confidence: Option<f64>,
}

/// One candidate word and how it aligned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordReport {
    pub word: String,
    pub tag: MatchTag,
    /// The reference word it was aligned with, when it differs or matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub reference: String,
    pub candidate: String,
    pub distance: usize,
    pub score: u8,
    pub band: ScoreBand,
    pub words: Vec<WordReport>,
    pub missing: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_similarity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blended: Option<f64>,
}

impl ScoreReport {
    /// Normalize both texts, score them and collect the extras.
    pub fn build(
        reference_text: &str,
        candidate_text: &str,
        options: ReportOptions,
    ) -> Result<Self, InputError> {
        let reference = TokenSequence::normalize(reference_text);
        let candidate = TokenSequence::normalize(candidate_text);
        let scored = score(&reference, &candidate);

        let words = scored
            .annotation
            .iter()
            .map(|m| WordReport {
                word: token_text(&candidate, m.candidate),
                tag: m.tag,
                expected: m.reference.map(|r| token_text(&reference, r)),
            })
            .collect();
        let missing = scored
            .missing
            .iter()
            .map(|&r| token_text(&reference, r))
            .collect();

        let similarity = (options.chars || options.confidence.is_some())
            .then(|| char_similarity(reference_text, candidate_text));
        let blended = match (similarity, options.confidence) {
            (Some(sim), Some(conf)) => Some(blend(sim / 100.0, conf)?),
            _ => None,
        };

        Ok(Self {
            reference: reference.to_text(),
            candidate: candidate.to_text(),
            distance: scored.distance,
            score: scored.score,
            band: scored.band(),
            words,
            missing,
            char_similarity: similarity,
            blended,
        })
    }

    /// Human-readable multi-line rendering.
    pub fn to_plain(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "score: {} ({}), distance: {}",
            self.score,
            self.band.label(),
            self.distance
        );
        for w in &self.words {
            match (&w.expected, w.tag) {
                (Some(expected), MatchTag::Substituted) => {
                    let _ = writeln!(out, "  {} {} (expected {})", w.word, w.tag.label(), expected);
                }
                _ => {
                    let _ = writeln!(out, "  {} {}", w.word, w.tag.label());
                }
            }
        }
        if !self.missing.is_empty() {
            let _ = writeln!(out, "missing: {}", self.missing.join(" "));
        }
        if let Some(sim) = self.char_similarity {
            let _ = writeln!(out, "char similarity: {sim:.2}");
        }
        if let Some(b) = self.blended {
            let _ = writeln!(out, "blended: {b:.1} ({})", ScoreBand::of(b).label());
        }
        out
    }

    /// Single-line JSON rendering.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn token_text(seq: &TokenSequence, index: usize) -> String {
    seq.get(index).map(|t| t.to_string()).unwrap_or_default()
}
