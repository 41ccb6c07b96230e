use regex::{Regex, RegexBuilder};

use super::error::RuleError;
use crate::profile::{ProfileField, TrimmedProfile};

/// Ordered, case-insensitive regex blacklist.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    patterns: Vec<Regex>,
}

impl Blacklist {
    /// Compiles `patterns` in order; the first invalid pattern is an error.
    pub fn new<I, S>(patterns: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                RegexBuilder::new(p)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| RuleError::InvalidPattern {
                        pattern: p.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Index of the first pattern found anywhere in `text`.
    pub fn first_match(&self, text: &str) -> Option<usize> {
        self.patterns.iter().position(|p| p.is_match(text))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }

    /// First field (headline before bio) hit by any pattern, with the pattern index.
    pub fn first_flagged(&self, profile: &TrimmedProfile<'_>) -> Option<(ProfileField, usize)> {
        ProfileField::ALL.into_iter().find_map(|field| {
            self.first_match(profile.field(field))
                .map(|index| (field, index))
        })
    }

    pub fn pattern(&self, index: usize) -> Option<&str> {
        self.patterns.get(index).map(Regex::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
