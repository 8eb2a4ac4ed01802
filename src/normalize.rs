//! Text normalization for progress comparison.
//!
//! Candidate and reference texts are normalized identically before any
//! matching happens, so the scorers only ever see lowercase,
//! punctuation-free, single-spaced word sequences.

/// Characters treated as word separators alongside line breaks.
const PUNCTUATION: [char; 10] = ['.', ',', '!', '?', ';', ':', '\'', '"', '(', ')'];

/// Normalize a string for progress comparison.
///
/// Applies, in order: lowercase, replace punctuation and line breaks with
/// spaces, collapse whitespace runs to a single space, trim. The order is
/// fixed so the result is deterministic, and the function is idempotent:
/// normalizing already-normalized text returns it unchanged.
///
/// Empty input yields an empty string; callers must treat an empty result
/// as score 0 rather than invoking a matcher on zero tokens.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if PUNCTUATION.contains(&c) || c == '\n' || c == '\r' {
                ' '
            } else {
                c
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split normalized text into its word sequence.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}
