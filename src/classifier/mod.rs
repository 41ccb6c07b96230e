//! Probabilistic classifiers.
//!
//! A [`Classifier`] maps an assembled feature vector to the probability that
//! the profile is authentic. [`LogisticModel`] loads a fitted logistic
//! regression from JSON; [`ConstantClassifier`] is the test stand-in.

mod error;
pub mod logistic;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::ClassifierError;
pub use logistic::{LogisticArtifact, LogisticModel};
#[cfg(any(test, feature = "mock"))]
pub use mock::ConstantClassifier;

/// Read-only model invoked concurrently by scoring calls.
pub trait Classifier: Send + Sync + std::fmt::Debug {
    /// Probability of the authentic class, expected in `[0, 1]`.
    fn predict(&self, features: &[f64]) -> Result<f64, ClassifierError>;
}
