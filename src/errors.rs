use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontendError {
    #[error("libclang is unavailable: {0}")]
    Unavailable(String),

    #[error("unable to load input {file}: {reason}")]
    Parse { file: PathBuf, reason: String },

    /// The translation unit parsed but produced error/fatal diagnostics.
    /// `rendered` holds one preformatted line per diagnostic for display.
    #[error("{file}: translation unit has error diagnostics")]
    Diagnostics { file: PathBuf, rendered: Vec<String> },
}

#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid compilation database {file}: {source}")]
    CompileDb { file: PathBuf, source: serde_json::Error },

    #[error(transparent)]
    Frontend(#[from] FrontendError),
}
