//! Lexical feature extraction.
//!
//! Every field is reduced to five numbers (see
//! [`LEXICAL_FEATURE_NAMES`](crate::constants::LEXICAL_FEATURE_NAMES)). Extraction
//! is a pure function of the normalized text and the configured [`BuzzwordSet`].
//!
//! Normalization here means trim + lowercase. The blacklist override in
//! [`crate::rules`] deliberately sees the trimmed, case-preserved text instead.

pub mod readability;


pub use readability::{flesch_reading_ease, readability};

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{LEXICAL_FEATURE_COUNT, LEXICAL_FEATURE_NAMES, LEXICAL_FEATURES_PER_FIELD};
use crate::profile::{ProfileField, ProfileInput};

static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word token pattern is valid"));

/// Lowercased set of buzzwords matched against word tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuzzwordSet {
    words: HashSet<String>,
}

impl BuzzwordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Trims and lowercases a field for feature extraction and vectorization.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Word tokens under the word-boundary rule, lowercased.
pub fn word_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    WORD_TOKEN.find_iter(text).map(|m| m.as_str().to_lowercase())
}

/// Number of word tokens that appear in `buzzwords`.
pub fn count_buzzwords(text: &str, buzzwords: &BuzzwordSet) -> usize {
    word_tokens(text).filter(|t| buzzwords.contains(t)).count()
}

/// Fraction of word tokens that are buzzwords; `0.0` when there are no tokens.
pub fn buzzword_density(text: &str, buzzwords: &BuzzwordSet) -> f64 {
    let (total, matches) = word_tokens(text).fold((0usize, 0usize), |(total, matches), t| {
        (total + 1, matches + usize::from(buzzwords.contains(&t)))
    });
    if total == 0 {
        0.0
    } else {
        matches as f64 / total as f64
    }
}

/// The five lexical features of one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexicalFeatures {
    pub char_count: usize,
    pub word_count: usize,
    pub readability: f64,
    pub buzzword_matches: usize,
    pub buzzword_density: f64,
}

impl LexicalFeatures {
    /// Extracts features from already-normalized text.
    pub fn extract(normalized: &str, buzzwords: &BuzzwordSet) -> Self {
        Self {
            char_count: normalized.chars().count(),
            word_count: normalized.split_whitespace().count(),
            readability: readability(normalized),
            buzzword_matches: count_buzzwords(normalized, buzzwords),
            buzzword_density: buzzword_density(normalized, buzzwords),
        }
    }

    /// Values in canonical order.
    pub fn values(&self) -> [f64; LEXICAL_FEATURES_PER_FIELD] {
        [
            self.char_count as f64,
            self.word_count as f64,
            self.readability,
            self.buzzword_matches as f64,
            self.buzzword_density,
        ]
    }
}

/// Normalized texts plus lexical features for a whole profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFeatures {
    pub headline_text: String,
    pub bio_text: String,
    pub headline: LexicalFeatures,
    pub bio: LexicalFeatures,
}

impl ProfileFeatures {
    pub fn extract(profile: &ProfileInput, buzzwords: &BuzzwordSet) -> Self {
        let headline_text = normalize(&profile.headline);
        let bio_text = normalize(&profile.bio);
        let headline = LexicalFeatures::extract(&headline_text, buzzwords);
        let bio = LexicalFeatures::extract(&bio_text, buzzwords);
        Self {
            headline_text,
            bio_text,
            headline,
            bio,
        }
    }

    pub fn field(&self, field: ProfileField) -> &LexicalFeatures {
        match field {
            ProfileField::Headline => &self.headline,
            ProfileField::Bio => &self.bio,
        }
    }

    pub fn text(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Headline => &self.headline_text,
            ProfileField::Bio => &self.bio_text,
        }
    }

    /// Looks up a feature by its full name, e.g. `bio_buzzword_density`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.named().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// `(name, value)` pairs in canonical vector order.
    pub fn named(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        ProfileField::ALL.into_iter().flat_map(move |field| {
            LEXICAL_FEATURE_NAMES
                .iter()
                .zip(self.field(field).values())
                .map(move |(suffix, value)| (format!("{}_{}", field, suffix), value))
        })
    }

    /// All lexical values, headline then bio.
    pub fn values(&self) -> [f64; LEXICAL_FEATURE_COUNT] {
        let mut out = [0.0; LEXICAL_FEATURE_COUNT];
        out[..LEXICAL_FEATURES_PER_FIELD].copy_from_slice(&self.headline.values());
        out[LEXICAL_FEATURES_PER_FIELD..].copy_from_slice(&self.bio.values());
        out
    }
}
