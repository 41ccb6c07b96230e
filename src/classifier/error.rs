use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier artifact not found at path: {path}")]
    ArtifactNotFound { path: PathBuf },

    #[error("failed to load classifier artifact: {reason}")]
    ArtifactLoadFailed { reason: String },

    #[error("invalid classifier artifact: {reason}")]
    InvalidArtifact { reason: String },

    #[error("classifier expects {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl From<std::io::Error> for ClassifierError {
    fn from(err: std::io::Error) -> Self {
        ClassifierError::ArtifactLoadFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClassifierError {
    fn from(err: serde_json::Error) -> Self {
        ClassifierError::ArtifactLoadFailed {
            reason: err.to_string(),
        }
    }
}
