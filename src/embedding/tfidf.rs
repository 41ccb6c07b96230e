use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info};

use super::TextVectorizer;
use super::error::EmbeddingError;

/// Token pattern used when the artifact does not specify one.
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Row normalization applied after TF-IDF weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    L1,
    None,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_true() -> bool {
    true
}

/// On-disk representation of a fitted TF-IDF vectorizer.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfArtifact {
    /// Term (or space-joined n-gram) to column index.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column.
    pub idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub norm: Norm,
    #[serde(default)]
    pub token_pattern: Option<String>,
}

pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    ngram_range: (usize, usize),
    lowercase: bool,
    sublinear_tf: bool,
    norm: Norm,
    token_pattern: Regex,
}

impl std::fmt::Debug for TfidfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfidfVectorizer")
            .field("dimension", &self.idf.len())
            .field("vocabulary_size", &self.vocabulary.len())
            .field("ngram_range", &self.ngram_range)
            .field("sublinear_tf", &self.sublinear_tf)
            .field("norm", &self.norm)
            .finish()
    }
}

impl TfidfVectorizer {
    /// Reads and validates a JSON artifact from `path`.
    pub fn load(path: &Path) -> Result<Self, EmbeddingError> {
        if !path.exists() {
            return Err(EmbeddingError::ArtifactNotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = std::fs::read_to_string(path)?;
        let artifact: TfidfArtifact = serde_json::from_str(&raw)?;
        let vectorizer = Self::from_artifact(artifact)?;

        info!(
            path = %path.display(),
            dimension = vectorizer.dimension(),
            "TF-IDF vectorizer loaded"
        );

        Ok(vectorizer)
    }

    pub fn from_artifact(artifact: TfidfArtifact) -> Result<Self, EmbeddingError> {
        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(EmbeddingError::InvalidArtifact {
                reason: format!("invalid ngram_range ({}, {})", min_n, max_n),
            });
        }

        let dimension = artifact.idf.len();
        if let Some((term, index)) = artifact.vocabulary.iter().find(|(_, i)| **i >= dimension) {
            return Err(EmbeddingError::InvalidArtifact {
                reason: format!(
                    "vocabulary term '{}' maps to column {} but idf has {} entries",
                    term, index, dimension
                ),
            });
        }

        if artifact.idf.iter().any(|v| !v.is_finite()) {
            return Err(EmbeddingError::InvalidArtifact {
                reason: "idf contains non-finite values".to_string(),
            });
        }

        let pattern = artifact
            .token_pattern
            .as_deref()
            .unwrap_or(DEFAULT_TOKEN_PATTERN);
        let token_pattern = Regex::new(pattern).map_err(|e| EmbeddingError::InvalidArtifact {
            reason: format!("invalid token_pattern '{}': {}", pattern, e),
        })?;

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            ngram_range: artifact.ngram_range,
            lowercase: artifact.lowercase,
            sublinear_tf: artifact.sublinear_tf,
            norm: artifact.norm,
            token_pattern,
        })
    }

    fn term_counts(&self, text: &str) -> HashMap<usize, f64> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(&text)
            .map(|m| m.as_str())
            .collect();

        let mut counts: HashMap<usize, f64> = HashMap::new();
        let (min_n, max_n) = self.ngram_range;
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(&column) = self.vocabulary.get(&gram) {
                    *counts.entry(column).or_insert(0.0) += 1.0;
                }
            }
        }
        counts
    }
}

impl TextVectorizer for TfidfVectorizer {
    fn embed(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.idf.len()];

        for (column, count) in self.term_counts(text) {
            let tf = if self.sublinear_tf {
                1.0 + count.ln()
            } else {
                count
            };
            vector[column] = tf * self.idf[column];
        }

        let norm = match self.norm {
            Norm::L2 => vector.iter().map(|v| v * v).sum::<f64>().sqrt(),
            Norm::L1 => vector.iter().map(|v| v.abs()).sum::<f64>(),
            Norm::None => 0.0,
        };
        if norm > 0.0 {
            vector.iter_mut().for_each(|v| *v /= norm);
        }

        debug!(dimension = vector.len(), "Embedded text");
        vector
    }

    fn dimension(&self) -> usize {
        self.idf.len()
    }
}
