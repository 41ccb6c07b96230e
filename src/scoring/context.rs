use std::sync::Arc;

use serde::Serialize;

use crate::classifier::Classifier;
use crate::constants::UNKNOWN_MODEL_INFO;
use crate::embedding::TextVectorizer;
use crate::features::BuzzwordSet;
use crate::rules::RuleEngine;
use crate::verdict::Thresholds;

/// Model identification reported by the version endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub model_version: String,
    pub model_type: String,
}

impl Default for ModelInfo {
    fn default() -> Self {
        Self {
            model_version: UNKNOWN_MODEL_INFO.to_string(),
            model_type: UNKNOWN_MODEL_INFO.to_string(),
        }
    }
}

/// Immutable, process-wide scoring artifacts.
///
/// Built once at startup (see [`crate::artifacts`]) or directly in tests with
/// stub vectorizers and classifiers. Rules, buzzwords and thresholds default
/// to empty/default values until set with the `with_*` methods.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    thresholds: Thresholds,
    rules: RuleEngine,
    buzzwords: BuzzwordSet,
    expected_len: usize,
    headline_vectorizer: Arc<dyn TextVectorizer>,
    bio_vectorizer: Arc<dyn TextVectorizer>,
    classifier: Arc<dyn Classifier>,
    model_info: ModelInfo,
}

impl ScoringContext {
    pub fn new(
        headline_vectorizer: Arc<dyn TextVectorizer>,
        bio_vectorizer: Arc<dyn TextVectorizer>,
        classifier: Arc<dyn Classifier>,
        expected_len: usize,
    ) -> Self {
        Self {
            thresholds: Thresholds::default(),
            rules: RuleEngine::default(),
            buzzwords: BuzzwordSet::default(),
            expected_len,
            headline_vectorizer,
            bio_vectorizer,
            classifier,
            model_info: ModelInfo::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_rules(mut self, rules: RuleEngine) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_buzzwords(mut self, buzzwords: BuzzwordSet) -> Self {
        self.buzzwords = buzzwords;
        self
    }

    pub fn with_model_info(mut self, model_info: ModelInfo) -> Self {
        self.model_info = model_info;
        self
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }

    pub fn buzzwords(&self) -> &BuzzwordSet {
        &self.buzzwords
    }

    /// Length every assembled feature vector must have.
    pub fn expected_len(&self) -> usize {
        self.expected_len
    }

    pub fn headline_vectorizer(&self) -> &dyn TextVectorizer {
        self.headline_vectorizer.as_ref()
    }

    pub fn bio_vectorizer(&self) -> &dyn TextVectorizer {
        self.bio_vectorizer.as_ref()
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn model_info(&self) -> &ModelInfo {
        &self.model_info
    }

    /// Length the vectorizers currently produce, for startup sanity checks.
    pub fn assembled_len(&self) -> usize {
        crate::constants::LEXICAL_FEATURE_COUNT
            + self.headline_vectorizer.dimension()
            + self.bio_vectorizer.dimension()
    }
}
