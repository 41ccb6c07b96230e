//! Override rules and classifier-path diagnostics.
//!
//! The overrides form a priority cascade: empty fields, then the regex
//! blacklist, then the buzzword+readability combination. The first rule that
//! fires decides the verdict and nothing after it (including the classifier)
//! runs. Each rule returns a [`RuleOutcome`]; [`RuleOutcome::Continue`] hands
//! over to the next one.
//!
//! # Normalization Asymmetry
//!
//! The blacklist override matches the trimmed, case-preserved text, while the
//! diagnostic re-scan matches the trimmed, lowercased text used for feature
//! extraction. Patterns are compiled case-insensitively, so the two almost
//! always agree; the asymmetry is kept as-is for parity with the deployed
//! model's behaviour and should be revisited together with the artifacts.

mod blacklist;
mod diagnostics;
mod error;
pub mod reasons;

#[cfg(test)]
mod tests;

pub use blacklist::Blacklist;
pub use diagnostics::Diagnostics;
pub use error::RuleError;
pub use reasons::ReasonTemplates;

use tracing::debug;

use crate::constants::{DIAGNOSTIC_BUZZWORD_DENSITY, LOW_READABILITY, OVERRIDE_BUZZWORD_DENSITY};
use crate::features::ProfileFeatures;
use crate::profile::{ProfileField, TrimmedProfile};

/// Identifies which override fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleName {
    EmptyFields,
    Blacklist,
    BuzzwordReadability,
}

impl RuleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::EmptyFields => "empty_fields",
            RuleName::Blacklist => "blacklist",
            RuleName::BuzzwordReadability => "buzzword_readability",
        }
    }
}

impl std::fmt::Display for RuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A triggered override: the profile is `likely_fabricated` with score 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub rule: RuleName,
    pub reason: String,
    pub flagged_fields: Vec<ProfileField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Fabricated(Override),
    Continue,
}

impl RuleOutcome {
    pub fn is_fabricated(&self) -> bool {
        matches!(self, RuleOutcome::Fabricated(_))
    }
}

/// Everything an override rule may inspect.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub profile: TrimmedProfile<'a>,
    pub features: &'a ProfileFeatures,
}

type OverrideRule = fn(&RuleEngine, &RuleInput<'_>) -> RuleOutcome;

/// Post-extraction overrides in priority order.
const OVERRIDE_CHAIN: [OverrideRule; 2] = [
    RuleEngine::blacklist_rule,
    RuleEngine::buzzword_readability_rule,
];

#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    blacklist: Blacklist,
    reasons: ReasonTemplates,
}

impl RuleEngine {
    pub fn new(blacklist: Blacklist, reasons: ReasonTemplates) -> Self {
        Self { blacklist, reasons }
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    pub fn reasons(&self) -> &ReasonTemplates {
        &self.reasons
    }

    /// First override. Runs before any feature extraction.
    pub fn check_empty(&self, profile: &TrimmedProfile<'_>) -> RuleOutcome {
        if !profile.is_empty() {
            return RuleOutcome::Continue;
        }
        debug!(rule = %RuleName::EmptyFields, "Override fired");
        RuleOutcome::Fabricated(Override {
            rule: RuleName::EmptyFields,
            reason: self.reasons.empty_fields(),
            flagged_fields: ProfileField::ALL.to_vec(),
        })
    }

    /// Remaining overrides, in order; stops at the first that fires.
    pub fn check_overrides(&self, input: &RuleInput<'_>) -> RuleOutcome {
        OVERRIDE_CHAIN
            .iter()
            .map(|rule| rule(self, input))
            .find(RuleOutcome::is_fabricated)
            .unwrap_or(RuleOutcome::Continue)
    }

    fn blacklist_rule(&self, input: &RuleInput<'_>) -> RuleOutcome {
        let Some((field, index)) = self.blacklist.first_flagged(&input.profile) else {
            return RuleOutcome::Continue;
        };
        debug!(
            rule = %RuleName::Blacklist,
            %field,
            pattern = self.blacklist.pattern(index).unwrap_or_default(),
            "Override fired"
        );
        RuleOutcome::Fabricated(Override {
            rule: RuleName::Blacklist,
            reason: self.reasons.gibberish(),
            flagged_fields: vec![field],
        })
    }

    fn buzzword_readability_rule(&self, input: &RuleInput<'_>) -> RuleOutcome {
        let f = input.features;
        let dense = f.headline.buzzword_density > OVERRIDE_BUZZWORD_DENSITY
            || f.bio.buzzword_density > OVERRIDE_BUZZWORD_DENSITY;
        let hard_to_read =
            f.headline.readability < LOW_READABILITY || f.bio.readability < LOW_READABILITY;

        if !(dense && hard_to_read) {
            return RuleOutcome::Continue;
        }
        debug!(
            rule = %RuleName::BuzzwordReadability,
            headline_density = f.headline.buzzword_density,
            bio_density = f.bio.buzzword_density,
            headline_readability = f.headline.readability,
            bio_readability = f.bio.readability,
            "Override fired"
        );
        RuleOutcome::Fabricated(Override {
            rule: RuleName::BuzzwordReadability,
            reason: self.reasons.buzzword_override(),
            flagged_fields: ProfileField::ALL.to_vec(),
        })
    }

    /// Secondary findings for the classifier path; never changes the verdict.
    pub fn diagnose(&self, features: &ProfileFeatures) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        for field in ProfileField::ALL {
            if self.blacklist.is_match(features.text(field)) {
                diagnostics.flag(field, self.reasons.regex_match());
            }
        }

        for field in ProfileField::ALL {
            if features.field(field).buzzword_density > DIAGNOSTIC_BUZZWORD_DENSITY {
                diagnostics.flag(field, self.reasons.buzzword_diagnostic());
            }
        }

        for field in ProfileField::ALL {
            if features.field(field).readability < LOW_READABILITY {
                diagnostics.flag(field, self.reasons.low_readability());
            }
        }

        debug!(
            flagged = ?diagnostics.flagged_fields(),
            reasons = diagnostics.raw_reasons().len(),
            "Diagnostics computed"
        );
        diagnostics
    }
}
