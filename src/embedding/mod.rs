//! Text vectorizers.
//!
//! A [`TextVectorizer`] turns one normalized field into a fixed-length vector.
//! Production artifacts are TF-IDF models ([`TfidfVectorizer`]); tests swap in
//! [`StubVectorizer`].

mod error;
/// TF-IDF vectorizer loaded from a JSON artifact.
pub mod tfidf;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::StubVectorizer;
pub use tfidf::{Norm, TfidfArtifact, TfidfVectorizer};

/// Deterministic, stateless text-to-vector transform.
///
/// Implementations are shared across concurrent scoring calls and must not
/// mutate internal state in [`embed`](TextVectorizer::embed).
pub trait TextVectorizer: Send + Sync + std::fmt::Debug {
    /// Embeds `text`; the result always has [`dimension`](TextVectorizer::dimension) entries.
    fn embed(&self, text: &str) -> Vec<f64>;

    fn dimension(&self) -> usize;
}
