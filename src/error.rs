use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("no reference text available for task: {0}")]
    ReferenceNotFound(String),

    #[error("progress store is corrupt: {0}")]
    StoreCorrupt(String),

    #[error("refusing to overwrite existing file: {0}")]
    AlreadyInitialized(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
