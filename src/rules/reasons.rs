use std::collections::HashMap;

pub const REASON_EMPTY_FIELDS: &str = "empty_fields";
pub const REASON_GIBBERISH: &str = "gibberish";
pub const REASON_BUZZWORD_DENSITY: &str = "buzzword_density";
pub const REASON_REGEX_MATCH: &str = "regex_match";
pub const REASON_LOW_READABILITY: &str = "low_readability";
pub const REASON_NO_INDICATORS: &str = "no_indicators";

const FALLBACK_EMPTY_FIELDS: &str = "Profile fields are empty";
const FALLBACK_GIBBERISH: &str = "Detected gibberish or nonsensical input";
const FALLBACK_BUZZWORD_OVERRIDE: &str = "Overused buzzwords and poor readability";
const FALLBACK_REGEX_MATCH: &str = "Contains overused phrases";
const FALLBACK_BUZZWORD_DIAGNOSTIC: &str = "Overused buzzwords detected";
const FALLBACK_LOW_READABILITY: &str = "Low readability suggests fabricated content";
const FALLBACK_NO_INDICATORS: &str = "No strong indicators of fabrication";

/// Human-readable reason strings keyed by rule name.
///
/// Missing keys fall back to built-in wording. The override and diagnostic
/// buzzword checks share the `buzzword_density` key but differ in fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReasonTemplates {
    templates: HashMap<String, String>,
}

impl ReasonTemplates {
    pub fn new(templates: HashMap<String, String>) -> Self {
        Self { templates }
    }

    pub fn get(&self, key: &str, fallback: &str) -> String {
        self.templates
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn empty_fields(&self) -> String {
        self.get(REASON_EMPTY_FIELDS, FALLBACK_EMPTY_FIELDS)
    }

    pub fn gibberish(&self) -> String {
        self.get(REASON_GIBBERISH, FALLBACK_GIBBERISH)
    }

    pub fn buzzword_override(&self) -> String {
        self.get(REASON_BUZZWORD_DENSITY, FALLBACK_BUZZWORD_OVERRIDE)
    }

    pub fn regex_match(&self) -> String {
        self.get(REASON_REGEX_MATCH, FALLBACK_REGEX_MATCH)
    }

    pub fn buzzword_diagnostic(&self) -> String {
        self.get(REASON_BUZZWORD_DENSITY, FALLBACK_BUZZWORD_DIAGNOSTIC)
    }

    pub fn low_readability(&self) -> String {
        self.get(REASON_LOW_READABILITY, FALLBACK_LOW_READABILITY)
    }

    pub fn no_indicators(&self) -> String {
        self.get(REASON_NO_INDICATORS, FALLBACK_NO_INDICATORS)
    }
}
