use std::sync::Arc;

use tracing::{debug, instrument};

use crate::assembly::FeatureVector;
use crate::features::ProfileFeatures;
use crate::profile::ProfileInput;
use crate::rules::{RuleInput, RuleOutcome};
use crate::verdict::{self, ScoringResult};

use super::context::ScoringContext;
use super::error::ScoringError;

/// Scores profiles against a shared [`ScoringContext`].
#[derive(Debug, Clone)]
pub struct ProfileScorer {
    context: Arc<ScoringContext>,
}

impl ProfileScorer {
    pub fn new(context: ScoringContext) -> Self {
        Self {
            context: Arc::new(context),
        }
    }

    pub fn from_shared(context: Arc<ScoringContext>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &ScoringContext {
        &self.context
    }

    /// Scores one profile. Deterministic for identical input and artifacts.
    pub fn score(
        &self,
        user_id: &str,
        headline: &str,
        bio: &str,
    ) -> Result<ScoringResult, ScoringError> {
        self.score_profile(&ProfileInput::new(user_id, headline, bio))
    }

    #[instrument(skip(self, profile), fields(user_id = %profile.user_id))]
    pub fn score_profile(&self, profile: &ProfileInput) -> Result<ScoringResult, ScoringError> {
        let ctx = &self.context;
        let rules = ctx.rules();
        let trimmed = profile.trimmed();

        if let RuleOutcome::Fabricated(fired) = rules.check_empty(&trimmed) {
            return Ok(verdict::from_override(&profile.user_id, fired));
        }

        let features = ProfileFeatures::extract(profile, ctx.buzzwords());
        let vector = self.assemble(&features)?;

        let input = RuleInput {
            profile: trimmed,
            features: &features,
        };
        if let RuleOutcome::Fabricated(fired) = rules.check_overrides(&input) {
            return Ok(verdict::from_override(&profile.user_id, fired));
        }

        let probability = ctx.classifier().predict(vector.as_slice())?;
        if !probability.is_finite() {
            return Err(ScoringError::InvalidProbability { value: probability });
        }
        debug!(probability, "Classifier consulted");

        let diagnostics = rules.diagnose(&features);

        Ok(verdict::from_classifier(
            &profile.user_id,
            probability,
            ctx.thresholds(),
            &diagnostics,
            rules.reasons(),
        ))
    }

    /// Embeds both fields and assembles the validated feature vector.
    pub fn assemble(&self, features: &ProfileFeatures) -> Result<FeatureVector, ScoringError> {
        let ctx = &self.context;
        let headline_embedding = ctx.headline_vectorizer().embed(&features.headline_text);
        let bio_embedding = ctx.bio_vectorizer().embed(&features.bio_text);

        Ok(FeatureVector::assemble(
            features,
            &headline_embedding,
            &bio_embedding,
            ctx.expected_len(),
        )?)
    }
}
