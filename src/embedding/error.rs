use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("vectorizer artifact not found at path: {path}")]
    ArtifactNotFound { path: PathBuf },

    #[error("failed to load vectorizer artifact: {reason}")]
    ArtifactLoadFailed { reason: String },

    #[error("invalid vectorizer artifact: {reason}")]
    InvalidArtifact { reason: String },
}

impl From<std::io::Error> for EmbeddingError {
    fn from(err: std::io::Error) -> Self {
        EmbeddingError::ArtifactLoadFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for EmbeddingError {
    fn from(err: serde_json::Error) -> Self {
        EmbeddingError::ArtifactLoadFailed {
            reason: err.to_string(),
        }
    }
}
