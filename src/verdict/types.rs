use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_BORDERLINE_THRESHOLD, DEFAULT_FABRICATED_THRESHOLD};
use crate::profile::ProfileField;

/// Three-way classification returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Authentic,
    Borderline,
    LikelyFabricated,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Authentic => "authentic",
            Verdict::Borderline => "borderline",
            Verdict::LikelyFabricated => "likely_fabricated",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error("threshold '{name}' must be within [0, 1], got {value}")]
    OutOfRange { name: &'static str, value: f64 },

    #[error("likely_fabricated threshold ({fabricated}) must be below borderline threshold ({borderline})")]
    NotOrdered { fabricated: f64, borderline: f64 },
}

/// Score cutoffs: below `likely_fabricated` is fabricated, below `borderline`
/// is borderline, anything else is authentic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub likely_fabricated: f64,
    pub borderline: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            likely_fabricated: DEFAULT_FABRICATED_THRESHOLD,
            borderline: DEFAULT_BORDERLINE_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn new(likely_fabricated: f64, borderline: f64) -> Result<Self, ThresholdError> {
        let thresholds = Self {
            likely_fabricated,
            borderline,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<(), ThresholdError> {
        for (name, value) in [
            ("likely_fabricated", self.likely_fabricated),
            ("borderline", self.borderline),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ThresholdError::OutOfRange { name, value });
            }
        }
        if self.likely_fabricated >= self.borderline {
            return Err(ThresholdError::NotOrdered {
                fabricated: self.likely_fabricated,
                borderline: self.borderline,
            });
        }
        Ok(())
    }

    pub fn verdict_for(&self, score: f64) -> Verdict {
        if score < self.likely_fabricated {
            Verdict::LikelyFabricated
        } else if score < self.borderline {
            Verdict::Borderline
        } else {
            Verdict::Authentic
        }
    }
}

/// Final answer for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub user_id: String,
    /// Probability of authenticity rounded to three places, in `[0, 1]`.
    pub authenticity_score: f64,
    pub verdict: Verdict,
    pub reason: String,
    pub flagged_fields: Vec<ProfileField>,
}
