pub mod alignment;
pub mod overlap;

use crate::normalize::{normalize, tokenize};
use crate::types::report::ProgressReport;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scoring policy selected by the caller.
///
/// Both strategies are kept deliberately: `Alignment` measures verbatim,
/// in-order reproduction of the reference, while `Overlap` rewards volume
/// plus vocabulary coverage. Neither subsumes the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Alignment,
    Overlap,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Alignment => "alignment",
            Strategy::Overlap => "overlap",
        }
    }
}

/// Resolved scoring parameters, after config and CLI overrides.
#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub strategy: Strategy,
    pub target_words: usize,
    pub min_words: usize,
    pub length_weight: f32,
    pub quality_weight: f32,
    pub max_words: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            strategy: Strategy::Alignment,
            target_words: 200,
            min_words: 10,
            length_weight: 0.6,
            quality_weight: 0.4,
            max_words: 5000,
        }
    }
}

/// Score a candidate text against a reference text.
///
/// Total over all string inputs: empty candidate or reference yields a zero
/// report rather than an error. Token sequences are truncated at
/// `max_words` to bound the cost of the sliding window.
pub fn evaluate(
    candidate_text: &str,
    reference_text: &str,
    settings: &ScoringSettings,
) -> ProgressReport {
    let candidate_normalized = normalize(candidate_text);
    let reference_normalized = normalize(reference_text);

    let mut candidate_words = tokenize(&candidate_normalized);
    let mut reference_words = tokenize(&reference_normalized);
    candidate_words.truncate(settings.max_words);
    reference_words.truncate(settings.max_words);

    if candidate_words.is_empty() || reference_words.is_empty() {
        return ProgressReport::zero(
            settings.strategy,
            candidate_words.len(),
            reference_words.len(),
        );
    }

    let (raw, matched_words) = match settings.strategy {
        Strategy::Alignment => {
            let matched = alignment::best_alignment(&candidate_words, &reference_words);
            let raw = alignment::alignment_percentage(&candidate_words, &reference_words);
            (raw, matched)
        }
        Strategy::Overlap => {
            let length = overlap::length_progress(
                candidate_words.len(),
                settings.target_words,
                settings.min_words,
            );
            let quality = overlap::quality_progress(&candidate_words, &reference_words);
            let raw = settings.length_weight * length + settings.quality_weight * quality;
            let matched = overlap::covered_words(&candidate_words, &reference_words);
            (raw, matched)
        }
    };

    let progress_percentage = clamp_and_round(raw);
    debug!(
        strategy = settings.strategy.as_str(),
        raw,
        progress_percentage,
        matched_words,
        "scored candidate against reference"
    );

    ProgressReport {
        progress_percentage,
        is_completed: progress_percentage == 100,
        strategy: settings.strategy,
        candidate_words: candidate_words.len(),
        reference_words: reference_words.len(),
        matched_words,
    }
}

/// Percentages are always clamped and rounded at the boundary; values
/// outside [0, 100] are not meaningful to present.
fn clamp_and_round(raw: f32) -> u8 {
    raw.clamp(0.0, 100.0).round() as u8
}
