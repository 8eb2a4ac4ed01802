use crate::types::report::{BatchReport, ProgressReport};

pub fn progress_to_json(report: &ProgressReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn batch_to_json(report: &BatchReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
