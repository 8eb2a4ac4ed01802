use crate::types::report::{BatchReport, ProgressReport};

pub fn progress_to_markdown(report: &ProgressReport) -> String {
    let mut output = String::new();
    output.push_str("# Progress Report\n\n");
    output.push_str(&format!("Progress: {}%\n", report.progress_percentage));
    output.push_str(&format!(
        "Completed: {}\n\n",
        if report.is_completed { "yes" } else { "no" }
    ));
    output.push_str("## Details\n\n");
    output.push_str(&format!("- strategy: {}\n", report.strategy.as_str()));
    output.push_str(&format!("- candidate words: {}\n", report.candidate_words));
    output.push_str(&format!("- reference words: {}\n", report.reference_words));
    output.push_str(&format!("- matched words: {}\n", report.matched_words));
    output
}

pub fn batch_to_markdown(report: &BatchReport) -> String {
    let mut output = String::new();
    output.push_str("# Batch Progress Report\n\n");
    output.push_str(&format!("Strategy: {}\n", report.strategy.as_str()));
    output.push_str(&format!("Reference words: {}\n", report.reference_words));
    output.push_str(&format!(
        "Completed: {}/{}\n\n",
        report.completed_count(),
        report.entries.len()
    ));
    output.push_str("## Submissions\n\n");
    if report.entries.is_empty() {
        output.push_str("- none\n");
    } else {
        for entry in &report.entries {
            output.push_str(&format!(
                "- {}: {}%{}\n",
                entry.file,
                entry.progress_percentage,
                if entry.is_completed { " (completed)" } else { "" }
            ));
        }
    }
    output
}
