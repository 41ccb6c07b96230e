//! Startup loading of scoring artifacts.
//!
//! Reads the artifact configuration (`config.json`), the buzzword list, the
//! feature-column list, both TF-IDF vectorizers and the classifier, and
//! assembles them into a [`ScoringContext`]. Relative paths inside
//! `config.json` are resolved against the directory that contains it.
//!
//! Any failure here is fatal: the process must not serve without artifacts.

mod error;


pub use error::ArtifactError;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::classifier::LogisticModel;
use crate::config::Config;
use crate::constants::UNKNOWN_MODEL_INFO;
use crate::embedding::TfidfVectorizer;
use crate::features::BuzzwordSet;
use crate::rules::{Blacklist, ReasonTemplates, RuleEngine};
use crate::scoring::{ModelInfo, ScoringContext};
use crate::verdict::Thresholds;

/// Artifact paths for the two field vectorizers and the column schema.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorizerPaths {
    pub headline_vectorizer: PathBuf,
    pub bio_vectorizer: PathBuf,
    pub feature_columns: PathBuf,
}

/// Contents of `config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactConfig {
    /// Classifier artifact.
    pub model: PathBuf,
    #[serde(default)]
    pub model_version: Option<String>,
    #[serde(default)]
    pub model_type: Option<String>,
    pub vectorizers: VectorizerPaths,
    pub thresholds: Thresholds,
    #[serde(default)]
    pub regex_blacklist_patterns: Vec<String>,
    #[serde(default)]
    pub reason_templates: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct BuzzwordFile {
    buzzwords: Vec<String>,
}

/// Loads every artifact referenced by `config`.
pub fn load(config: &Config) -> Result<ScoringContext, ArtifactError> {
    load_context(&config.config_path, &config.buzzword_path)
}

pub fn load_context(
    config_path: &Path,
    buzzword_path: &Path,
) -> Result<ScoringContext, ArtifactError> {
    let artifact_config: ArtifactConfig = read_json(config_path)?;
    let base = config_path.parent().unwrap_or_else(|| Path::new("."));

    artifact_config.thresholds.validate()?;

    let buzzwords = load_buzzwords(buzzword_path)?;
    let blacklist = Blacklist::new(&artifact_config.regex_blacklist_patterns)?;
    let reasons = ReasonTemplates::new(artifact_config.reason_templates.clone());

    let paths = &artifact_config.vectorizers;
    let columns_path = resolve(base, &paths.feature_columns);
    let columns: Vec<String> = read_json(&columns_path)?;
    if columns.is_empty() {
        return Err(ArtifactError::EmptyFeatureColumns { path: columns_path });
    }

    let headline_vectorizer = TfidfVectorizer::load(&resolve(base, &paths.headline_vectorizer))?;
    let bio_vectorizer = TfidfVectorizer::load(&resolve(base, &paths.bio_vectorizer))?;
    let classifier = LogisticModel::load(&resolve(base, &artifact_config.model))?;

    let model_info = ModelInfo {
        model_version: artifact_config
            .model_version
            .clone()
            .unwrap_or_else(|| UNKNOWN_MODEL_INFO.to_string()),
        model_type: artifact_config
            .model_type
            .clone()
            .unwrap_or_else(|| UNKNOWN_MODEL_INFO.to_string()),
    };

    if classifier.input_dim() != columns.len() {
        warn!(
            classifier_dim = classifier.input_dim(),
            feature_columns = columns.len(),
            "Classifier input dimension disagrees with feature columns"
        );
    }

    let context = ScoringContext::new(
        Arc::new(headline_vectorizer),
        Arc::new(bio_vectorizer),
        Arc::new(classifier),
        columns.len(),
    )
    .with_thresholds(artifact_config.thresholds)
    .with_rules(RuleEngine::new(blacklist, reasons))
    .with_buzzwords(buzzwords)
    .with_model_info(model_info);

    // length drift is reported per request as FeatureMismatch; only warn here
    if context.assembled_len() != context.expected_len() {
        warn!(
            assembled = context.assembled_len(),
            expected = context.expected_len(),
            "Vectorizer dimensions disagree with feature columns; scoring will fail"
        );
    }

    info!(
        model_version = %context.model_info().model_version,
        model_type = %context.model_info().model_type,
        feature_columns = context.expected_len(),
        buzzwords = context.buzzwords().len(),
        blacklist_patterns = context.rules().blacklist().len(),
        "Scoring artifacts loaded"
    );

    Ok(context)
}

/// Reads `{"buzzwords": [...]}` into a lowercased set.
pub fn load_buzzwords(path: &Path) -> Result<BuzzwordSet, ArtifactError> {
    let file: BuzzwordFile = read_json(path)?;
    Ok(BuzzwordSet::new(file.buzzwords))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
