use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const CANDIDATE_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// Collect candidate submission files under a directory, sorted for
/// deterministic batch output.
pub fn collect_candidates(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| CANDIDATE_EXTENSIONS.contains(&ext))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}
