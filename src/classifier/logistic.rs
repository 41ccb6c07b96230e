use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::Classifier;
use super::error::ClassifierError;

/// Fitted weights of a binary logistic regression (positive class = authentic).
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticArtifact {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug, Clone)]
pub struct LogisticModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LogisticModel {
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        if !path.exists() {
            return Err(ClassifierError::ArtifactNotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = std::fs::read_to_string(path)?;
        let artifact: LogisticArtifact = serde_json::from_str(&raw)?;
        let model = Self::from_artifact(artifact)?;

        info!(
            path = %path.display(),
            input_dim = model.input_dim(),
            "Logistic classifier loaded"
        );

        Ok(model)
    }

    pub fn from_artifact(artifact: LogisticArtifact) -> Result<Self, ClassifierError> {
        if artifact.coefficients.is_empty() {
            return Err(ClassifierError::InvalidArtifact {
                reason: "coefficients cannot be empty".to_string(),
            });
        }
        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite())
        {
            return Err(ClassifierError::InvalidArtifact {
                reason: "weights must be finite".to_string(),
            });
        }

        Ok(Self {
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
        })
    }

    pub fn input_dim(&self) -> usize {
        self.coefficients.len()
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, features: &[f64]) -> Result<f64, ClassifierError> {
        if features.len() != self.coefficients.len() {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: features.len(),
            });
        }

        let logit = self
            .coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (w, x)| acc + w * x);

        Ok(sigmoid(logit))
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
