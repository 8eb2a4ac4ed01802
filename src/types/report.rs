use crate::scoring::Strategy;
use serde::Serialize;

/// Result of scoring one candidate text against one reference text.
///
/// `matched_words` is a count only; the scorer does not report which
/// passages matched.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub progress_percentage: u8,
    pub is_completed: bool,
    pub strategy: Strategy,
    pub candidate_words: usize,
    pub reference_words: usize,
    pub matched_words: usize,
}

impl ProgressReport {
    /// Zero-score report for empty candidate or reference input.
    pub fn zero(strategy: Strategy, candidate_words: usize, reference_words: usize) -> Self {
        Self {
            progress_percentage: 0,
            is_completed: false,
            strategy,
            candidate_words,
            reference_words,
            matched_words: 0,
        }
    }
}

/// One scored file within a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub file: String,
    pub progress_percentage: u8,
    pub is_completed: bool,
    pub matched_words: usize,
}

/// Aggregated results of scoring a submissions directory.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub reference_words: usize,
    pub strategy: Strategy,
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn new(reference_words: usize, strategy: Strategy) -> Self {
        Self {
            reference_words,
            strategy,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, file: String, report: &ProgressReport) {
        self.entries.push(BatchEntry {
            file,
            progress_percentage: report.progress_percentage,
            is_completed: report.is_completed,
            matched_words: report.matched_words,
        });
    }

    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_completed).count()
    }
}
