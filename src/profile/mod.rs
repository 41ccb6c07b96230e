//! Profile input and field identifiers.

use serde::{Deserialize, Serialize};

/// A scored profile text field.
///
/// The derived ordering is the reporting order: headline before bio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Headline,
    Bio,
}

impl ProfileField {
    /// Both fields in canonical order.
    pub const ALL: [ProfileField; 2] = [ProfileField::Headline, ProfileField::Bio];

    /// Field name as used in feature names and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Headline => "headline",
            ProfileField::Bio => "bio",
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw profile as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub user_id: String,
    pub headline: String,
    pub bio: String,
}

impl ProfileInput {
    pub fn new(
        user_id: impl Into<String>,
        headline: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            headline: headline.into(),
            bio: bio.into(),
        }
    }

    /// Whitespace-trimmed view used by the override rules.
    pub fn trimmed(&self) -> TrimmedProfile<'_> {
        TrimmedProfile {
            headline: self.headline.trim(),
            bio: self.bio.trim(),
        }
    }
}

/// Trimmed but case-preserved field texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimmedProfile<'a> {
    pub headline: &'a str,
    pub bio: &'a str,
}

impl<'a> TrimmedProfile<'a> {
    pub fn field(&self, field: ProfileField) -> &'a str {
        match field {
            ProfileField::Headline => self.headline,
            ProfileField::Bio => self.bio,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.headline.is_empty() && self.bio.is_empty()
    }
}
