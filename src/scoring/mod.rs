//! Profile scoring.
//!
//! [`ProfileScorer::score`] is the single entry point: it runs the override
//! cascade, extracts features, assembles and validates the feature vector,
//! consults the classifier and builds a [`ScoringResult`](crate::verdict::ScoringResult).
//!
//! # Order of Checks
//!
//! 1. Empty-fields override (before any extraction)
//! 2. Feature extraction, vectorization and length validation
//! 3. Blacklist override, then buzzword+readability override
//! 4. Classifier, thresholds and secondary diagnostics
//!
//! A length drift between the vectorizers and the configured columns
//! therefore fails every non-empty profile with
//! [`ScoringError::FeatureMismatch`], even ones an override would catch.
//!
//! All state lives in an immutable [`ScoringContext`]; scoring never mutates
//! it, so one scorer can be shared across threads behind an `Arc`.

pub mod context;
pub mod error;
pub mod scorer;


pub use context::{ModelInfo, ScoringContext};
pub use error::ScoringError;
pub use scorer::ProfileScorer;
