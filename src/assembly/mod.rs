//! Feature-vector assembly.
//!
//! Layout: the ten lexical features (headline then bio, five each), then the
//! headline embedding, then the bio embedding. The total length is checked
//! against the configured column count on every call so that a vectorizer
//! artifact drifting from the column schema fails loudly instead of feeding
//! the classifier shifted columns.

use thiserror::Error;
use tracing::debug;

use crate::constants::LEXICAL_FEATURE_COUNT;
use crate::features::ProfileFeatures;

/// Assembled length disagrees with the configured feature columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("feature mismatch: extracted {actual}, expected {expected}")]
pub struct FeatureMismatch {
    pub actual: usize,
    pub expected: usize,
}

/// Ordered numeric input to the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Concatenates lexical features and both embeddings, then validates length.
    pub fn assemble(
        features: &ProfileFeatures,
        headline_embedding: &[f64],
        bio_embedding: &[f64],
        expected_len: usize,
    ) -> Result<Self, FeatureMismatch> {
        let actual = LEXICAL_FEATURE_COUNT + headline_embedding.len() + bio_embedding.len();
        if actual != expected_len {
            return Err(FeatureMismatch {
                actual,
                expected: expected_len,
            });
        }

        let mut values = Vec::with_capacity(actual);
        values.extend_from_slice(&features.values());
        values.extend_from_slice(headline_embedding);
        values.extend_from_slice(bio_embedding);

        debug!(len = values.len(), "Assembled feature vector");
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}
