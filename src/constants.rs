//! Cross-cutting, shared constants.
//!
//! Rule cutoffs live here so the override cascade and the secondary diagnostics
//! read from one place.
//!
//! # Cutoff Invariants
//!
//! The hard override uses [`OVERRIDE_BUZZWORD_DENSITY`] together with
//! [`LOW_READABILITY`]; the softer diagnostic pass uses
//! [`DIAGNOSTIC_BUZZWORD_DENSITY`]. The diagnostic cutoff must stay below the
//! override cutoff, otherwise a profile could escape the override yet never be
//! flagged.

/// Buzzword density above which the buzzword+readability override may fire.
pub const OVERRIDE_BUZZWORD_DENSITY: f64 = 0.15;

/// Buzzword density above which a field is flagged on the classifier path.
pub const DIAGNOSTIC_BUZZWORD_DENSITY: f64 = 0.10;

/// Reading-ease score below which a field counts as hard to read.
pub const LOW_READABILITY: f64 = 30.0;

/// Number of decimal places the authenticity score is reported with.
pub const SCORE_DECIMALS: i32 = 3;

/// Lexical features computed per field.
pub const LEXICAL_FEATURES_PER_FIELD: usize = 5;

/// Lexical features across both fields (headline then bio).
pub const LEXICAL_FEATURE_COUNT: usize = LEXICAL_FEATURES_PER_FIELD * 2;

/// Per-field feature suffixes in canonical vector order.
pub const LEXICAL_FEATURE_NAMES: [&str; LEXICAL_FEATURES_PER_FIELD] = [
    "char_count",
    "word_count",
    "readability",
    "buzzword_matches",
    "buzzword_density",
];

/// Default lower threshold: scores below it are `likely_fabricated`.
pub const DEFAULT_FABRICATED_THRESHOLD: f64 = 0.4;

/// Default upper threshold: scores at or above it are `authentic`.
pub const DEFAULT_BORDERLINE_THRESHOLD: f64 = 0.7;

/// Reported for `model_version` / `model_type` when the artifact config omits them.
pub const UNKNOWN_MODEL_INFO: &str = "unknown";

/// Header carrying a short machine-readable status on every gateway response.
pub const SENTINEL_STATUS_HEADER: &str = "x-sentinel-status";

pub const SENTINEL_STATUS_HEALTHY: &str = "healthy";
pub const SENTINEL_STATUS_SCORED: &str = "scored";
pub const SENTINEL_STATUS_ERROR: &str = "error";

/// Rounds a probability to [`SCORE_DECIMALS`] places.
pub fn round_score(value: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS);
    (value * factor).round() / factor
}
