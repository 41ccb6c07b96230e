use thiserror::Error;

use crate::assembly::FeatureMismatch;
use crate::classifier::ClassifierError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error(transparent)]
    FeatureMismatch(#[from] FeatureMismatch),

    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("classifier returned a non-finite probability: {value}")]
    InvalidProbability { value: f64 },
}

impl ScoringError {
    /// Short status tag for logs and response headers.
    pub fn kind(&self) -> &'static str {
        match self {
            ScoringError::FeatureMismatch(_) => "feature_mismatch",
            ScoringError::Classifier(_) => "classifier_error",
            ScoringError::InvalidProbability { .. } => "invalid_probability",
        }
    }
}
