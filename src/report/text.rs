use crate::types::report::{BatchReport, ProgressReport};

pub fn progress_to_text(report: &ProgressReport) -> String {
    format!(
        "progress: {}% ({} of {} reference words, strategy {}){}",
        report.progress_percentage,
        report.matched_words,
        report.reference_words,
        report.strategy.as_str(),
        if report.is_completed { " [completed]" } else { "" }
    )
}

pub fn batch_to_text(report: &BatchReport) -> String {
    let mut output = String::new();
    for entry in &report.entries {
        output.push_str(&format!(
            "{}: {}%{}\n",
            entry.file,
            entry.progress_percentage,
            if entry.is_completed { " [completed]" } else { "" }
        ));
    }
    output.push_str(&format!(
        "completed {}/{} submissions\n",
        report.completed_count(),
        report.entries.len()
    ));
    output
}
