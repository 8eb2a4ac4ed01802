pub mod json;
pub mod md;
pub mod text;

use crate::error::ScoreError;
use crate::types::report::{BatchReport, ProgressReport};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Text,
}

pub fn render_progress(report: &ProgressReport, format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::progress_to_json(report).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::progress_to_markdown(report)),
        OutputFormat::Text => Ok(text::progress_to_text(report)),
    }
}

pub fn render_batch(report: &BatchReport, format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::batch_to_json(report).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::batch_to_markdown(report)),
        OutputFormat::Text => Ok(text::batch_to_text(report)),
    }
}
