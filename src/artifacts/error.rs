use std::path::PathBuf;
use thiserror::Error;

use crate::classifier::ClassifierError;
use crate::embedding::EmbeddingError;
use crate::rules::RuleError;
use crate::verdict::ThresholdError;

/// Startup failures while loading scoring artifacts. All of them are fatal.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("feature column list at {path} is empty")]
    EmptyFeatureColumns { path: PathBuf },

    #[error("invalid thresholds: {0}")]
    Thresholds(#[from] ThresholdError),

    #[error("invalid blacklist: {0}")]
    Blacklist(#[from] RuleError),

    #[error("vectorizer: {0}")]
    Vectorizer(#[from] EmbeddingError),

    #[error("classifier: {0}")]
    Classifier(#[from] ClassifierError),
}
