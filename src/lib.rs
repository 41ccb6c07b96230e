//! Sentinel library crate (used by the server binary and integration tests).
//!
//! Scores user profiles (a headline and a bio) for authenticity. A profile is
//! either caught by a deterministic override rule or handed to a trained
//! classifier over lexical features and TF-IDF embeddings. Every result
//! carries a score, a [`Verdict`], a human-readable reason and the fields
//! that contributed to it.
//!
//! # Modules
//!
//! - [`profile`] - input types
//! - [`features`] - lexical features, buzzwords, readability
//! - [`embedding`] - [`TextVectorizer`] seam and the TF-IDF implementation
//! - [`assembly`] - feature vector construction and length validation
//! - [`classifier`] - [`Classifier`] seam and the logistic model
//! - [`rules`] - override rules, blacklist and diagnostics
//! - [`verdict`] - thresholds and result construction
//! - [`scoring`] - the [`ProfileScorer`] pipeline
//! - [`artifacts`] - startup loading of model artifacts
//! - [`config`] - environment configuration
//! - [`gateway`] - HTTP surface
//!
//! ## Test/Mock Support
//! Stub vectorizers and classifiers are available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod artifacts;
pub mod assembly;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod features;
pub mod gateway;
pub mod profile;
pub mod rules;
pub mod scoring;
pub mod verdict;

pub use artifacts::ArtifactError;
pub use assembly::{FeatureMismatch, FeatureVector};
pub use classifier::{Classifier, ClassifierError, LogisticModel};
#[cfg(any(test, feature = "mock"))]
pub use classifier::ConstantClassifier;
pub use config::{Config, ConfigError};
pub use embedding::{EmbeddingError, TextVectorizer, TfidfVectorizer};
#[cfg(any(test, feature = "mock"))]
pub use embedding::StubVectorizer;
pub use features::{BuzzwordSet, ProfileFeatures};
pub use profile::{ProfileField, ProfileInput};
pub use rules::{Blacklist, ReasonTemplates, RuleEngine};
pub use scoring::{ModelInfo, ProfileScorer, ScoringContext, ScoringError};
pub use verdict::{ScoringResult, Thresholds, Verdict};
