use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MimeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read database {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid record {mime_type:?}: {reason}")]
    InvalidRecord { mime_type: String, reason: String },
}

pub type Result<T> = std::result::Result<T, MimeError>;
