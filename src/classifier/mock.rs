//! Stub classifier for tests without artifact files.

use super::{Classifier, ClassifierError};

/// Returns the same probability for every input.
#[derive(Debug, Clone, Copy)]
pub struct ConstantClassifier {
    probability: f64,
}

impl ConstantClassifier {
    pub fn new(probability: f64) -> Self {
        Self { probability }
    }
}

impl Classifier for ConstantClassifier {
    fn predict(&self, _features: &[f64]) -> Result<f64, ClassifierError> {
        Ok(self.probability)
    }
}
