//! Stub vectorizer for tests without artifact files.

use super::TextVectorizer;

/// Emits a constant vector of fixed dimension regardless of input.
#[derive(Debug, Clone)]
pub struct StubVectorizer {
    dimension: usize,
    value: f64,
}

impl StubVectorizer {
    /// Zero vector of `dimension` entries.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            value: 0.0,
        }
    }

    pub fn constant(dimension: usize, value: f64) -> Self {
        Self { dimension, value }
    }
}

impl TextVectorizer for StubVectorizer {
    fn embed(&self, _text: &str) -> Vec<f64> {
        vec![self.value; self.dimension]
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
