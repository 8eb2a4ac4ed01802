//! Sliding-window alignment scoring.
//!
//! The candidate word sequence is treated as a fixed-length window slid
//! across the reference at every offset. At each offset, tokens are compared
//! position by position; the best offset wins. This rewards reproducing a
//! contiguous, correctly ordered run of the reference anywhere within it,
//! rather than scattered keyword overlap.

/// Best positional match count of `candidate` against `reference` across
/// all window offsets.
///
/// Returns 0 when the candidate is empty or longer than the reference
/// (no valid offset exists). Exits early once a perfect window is found.
pub fn best_alignment(candidate: &[&str], reference: &[&str]) -> usize {
    let window = candidate.len();
    if window == 0 || window > reference.len() {
        return 0;
    }

    let mut best = 0;
    for offset in 0..=reference.len() - window {
        let matched = candidate
            .iter()
            .zip(&reference[offset..offset + window])
            .filter(|(candidate_word, reference_word)| candidate_word == reference_word)
            .count();
        if matched > best {
            best = matched;
            if best == window {
                break;
            }
        }
    }
    best
}

/// Raw alignment percentage: best match count over reference length.
///
/// The caller guards the empty-reference case; this returns 0.0 for it
/// rather than dividing by zero.
pub fn alignment_percentage(candidate: &[&str], reference: &[&str]) -> f32 {
    if reference.is_empty() {
        return 0.0;
    }
    (best_alignment(candidate, reference) as f32 / reference.len() as f32) * 100.0
}
