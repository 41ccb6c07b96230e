//! Verdict mapping and result assembly.

mod types;


pub use types::{ScoringResult, Thresholds, ThresholdError, Verdict};

use tracing::info;

use crate::constants::round_score;
use crate::rules::{Diagnostics, Override, ReasonTemplates};

/// Builds the result for a profile decided by an override rule.
pub fn from_override(user_id: &str, fired: Override) -> ScoringResult {
    info!(
        user_id,
        rule = %fired.rule,
        verdict = %Verdict::LikelyFabricated,
        "Profile scored by override"
    );
    ScoringResult {
        user_id: user_id.to_string(),
        authenticity_score: 0.0,
        verdict: Verdict::LikelyFabricated,
        reason: fired.reason,
        flagged_fields: fired.flagged_fields,
    }
}

/// Builds the result for a profile scored by the classifier.
///
/// `probability` is rounded to three places before thresholding, so the
/// verdict always agrees with the reported score.
pub fn from_classifier(
    user_id: &str,
    probability: f64,
    thresholds: &Thresholds,
    diagnostics: &Diagnostics,
    reasons: &ReasonTemplates,
) -> ScoringResult {
    let authenticity_score = round_score(probability.clamp(0.0, 1.0));
    let verdict = thresholds.verdict_for(authenticity_score);
    let reason = diagnostics
        .joined_reason()
        .unwrap_or_else(|| reasons.no_indicators());

    info!(
        user_id,
        authenticity_score,
        %verdict,
        flagged = diagnostics.flagged_fields().len(),
        "Profile scored by classifier"
    );

    ScoringResult {
        user_id: user_id.to_string(),
        authenticity_score,
        verdict,
        reason,
        flagged_fields: diagnostics.flagged_fields(),
    }
}
