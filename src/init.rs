use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::{Result, ScoreError};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_TEMPLATE: &str = r#"[project]
name = "my-project"
# Directory holding one reference document per task: <reference_dir>/<task>.md
reference_dir = "references"

[scoring]
# "alignment" scores verbatim in-order reproduction; "overlap" scores
# volume plus vocabulary coverage.
strategy = "alignment"
target_words = 200
min_words = 10
length_weight = 0.6
quality_weight = 0.4

[limits]
max_words = 5000
"#;

/// Write a default refscore.toml and reference directory into a project
/// root. Refuses to overwrite an existing config unless forced.
pub fn init_project(root: &Path, force: bool) -> Result<PathBuf> {
    let config_path = root.join(DEFAULT_CONFIG_FILE);
    if config_path.exists() && !force {
        return Err(ScoreError::AlreadyInitialized(
            config_path.display().to_string(),
        ));
    }
    fs::create_dir_all(root.join("references"))?;
    fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    Ok(config_path)
}
