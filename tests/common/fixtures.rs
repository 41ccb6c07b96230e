//! On-disk artifact fixtures.
//!
//! Writes a small but complete artifact set into a temp directory: config,
//! buzzword list, feature columns, two TF-IDF vectorizers and a logistic
//! model. The classifier only weighs the headline `code` column, so the score
//! is `sigmoid(2 * tfidf(code))` and easy to predict.

use std::path::PathBuf;

use sentinel::artifacts::{self, ArtifactError};
use sentinel::{ProfileScorer, ScoringContext};
use serde_json::json;
use tempfile::TempDir;

pub const LEXICAL_COLUMNS: usize = 10;
pub const HEADLINE_DIM: usize = 3;
pub const BIO_DIM: usize = 3;
pub const COLUMNS: usize = LEXICAL_COLUMNS + HEADLINE_DIM + BIO_DIM;

/// Column of the headline `code` term in the assembled vector.
pub const HEADLINE_CODE_COLUMN: usize = LEXICAL_COLUMNS;

pub const BUZZWORDS: &[&str] = &[
    "visionary",
    "leader",
    "exponential",
    "growth",
    "renowned",
    "spearheading",
    "disruptive",
    "leveraging",
    "synergies",
    "unparalleled",
    "innovative",
    "thought",
];

pub struct ArtifactFixture {
    pub dir: TempDir,
}

impl ArtifactFixture {
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().unwrap(),
        };
        fixture.write("config.json", &config_json());
        fixture.write("buzzwordlist.json", &json!({ "buzzwords": BUZZWORDS }));
        fixture.write(
            "artifacts/headline_tfidf.json",
            &json!({
                "vocabulary": {"code": 0, "engineer": 1, "backend": 2},
                "idf": [1.2, 1.0, 1.4],
                "norm": "l2"
            }),
        );
        fixture.write(
            "artifacts/bio_tfidf.json",
            &json!({
                "vocabulary": {"rust": 0, "python": 1, "hiking": 2},
                "idf": [1.1, 1.1, 1.6],
                "sublinear_tf": true
            }),
        );
        fixture.write("artifacts/feature_columns.json", &columns_json(COLUMNS));

        let mut coefficients = vec![0.0; COLUMNS];
        coefficients[HEADLINE_CODE_COLUMN] = 2.0;
        fixture.write(
            "artifacts/model.json",
            &json!({"coefficients": coefficients, "intercept": 0.0}),
        );
        fixture
    }

    pub fn write(&self, name: &str, value: &serde_json::Value) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.json")
    }

    pub fn buzzword_path(&self) -> PathBuf {
        self.dir.path().join("buzzwordlist.json")
    }

    pub fn context(&self) -> Result<ScoringContext, ArtifactError> {
        artifacts::load_context(&self.config_path(), &self.buzzword_path())
    }

    pub fn scorer(&self) -> ProfileScorer {
        ProfileScorer::new(self.context().expect("fixture artifacts should load"))
    }
}

pub fn config_json() -> serde_json::Value {
    json!({
        "model": "artifacts/model.json",
        "model_version": "0.3.0",
        "model_type": "logistic_regression",
        "vectorizers": {
            "headline_vectorizer": "artifacts/headline_tfidf.json",
            "bio_vectorizer": "artifacts/bio_tfidf.json",
            "feature_columns": "artifacts/feature_columns.json"
        },
        "thresholds": {"likely_fabricated": 0.4, "borderline": 0.7},
        "regex_blacklist_patterns": [
            "\\b(asdf|qwer|zxcv)\\w*",
            "[bcdfghjklmnpqrstvwxz]{6,}"
        ],
        "reason_templates": {
            "gibberish": "Detected gibberish or nonsensical input",
            "buzzword_density": "Overused buzzwords and poor readability"
        }
    })
}

pub fn columns_json(n: usize) -> serde_json::Value {
    json!((0..n).map(|i| format!("feature_{}", i)).collect::<Vec<_>>())
}
