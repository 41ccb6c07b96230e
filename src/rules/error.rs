use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid blacklist pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
