//! Weighted length + vocabulary-overlap scoring.
//!
//! The unordered alternative to sliding-window alignment: credit is given
//! for writing enough words and for covering the reference vocabulary,
//! regardless of ordering or repetition.

use std::collections::HashSet;

/// Length credit: word count against a configured target, zero below the
/// minimum threshold, capped at 100.
pub fn length_progress(word_count: usize, target_words: usize, min_words: usize) -> f32 {
    if word_count < min_words || target_words == 0 {
        return 0.0;
    }
    ((word_count as f32 / target_words as f32) * 100.0).min(100.0)
}

/// Vocabulary credit: share of the reference's unique words that appear in
/// the candidate. A word either matches or not; repetition earns nothing.
pub fn quality_progress(candidate: &[&str], reference: &[&str]) -> f32 {
    let reference_vocabulary: HashSet<&str> = reference.iter().copied().collect();
    if reference_vocabulary.is_empty() {
        return 0.0;
    }
    let candidate_vocabulary: HashSet<&str> = candidate.iter().copied().collect();
    let covered = reference_vocabulary
        .intersection(&candidate_vocabulary)
        .count();
    (covered as f32 / reference_vocabulary.len() as f32) * 100.0
}

/// Number of unique reference words present in the candidate.
pub fn covered_words(candidate: &[&str], reference: &[&str]) -> usize {
    let reference_vocabulary: HashSet<&str> = reference.iter().copied().collect();
    let candidate_vocabulary: HashSet<&str> = candidate.iter().copied().collect();
    reference_vocabulary
        .intersection(&candidate_vocabulary)
        .count()
}
