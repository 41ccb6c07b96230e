use crate::profile::ProfileField;

/// Secondary findings collected on the classifier path.
///
/// Fields are deduplicated in first-seen order. Reasons keep first-seen
/// order and are deduplicated by exact text when joined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    flagged: Vec<ProfileField>,
    reasons: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(&mut self, field: ProfileField, reason: String) {
        if !self.flagged.contains(&field) {
            self.flagged.push(field);
        }
        self.reasons.push(reason);
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn flagged_fields(&self) -> Vec<ProfileField> {
        self.flagged.clone()
    }

    /// Every reason pushed, duplicates included.
    pub fn raw_reasons(&self) -> &[String] {
        &self.reasons
    }

    /// Distinct reasons joined with `"; "`, or `None` when nothing fired.
    pub fn joined_reason(&self) -> Option<String> {
        if self.reasons.is_empty() {
            return None;
        }
        let mut distinct: Vec<&str> = Vec::with_capacity(self.reasons.len());
        for reason in &self.reasons {
            if !distinct.contains(&reason.as_str()) {
                distinct.push(reason);
            }
        }
        Some(distinct.join("; "))
    }
}
