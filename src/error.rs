use thiserror::Error;

/// Custom error types for code-tooltip
#[derive(Debug, Error)]
pub enum TooltipError {
    #[error("Term key must not be empty")]
    EmptyKey,

    #[error("Term key '{0}' has leading or trailing whitespace")]
    UntrimmedKey(String),

    #[error("Term '{key}' is missing required field '{field}'")]
    MissingField { key: String, field: &'static str },

    #[error("Term '{0}' is registered more than once")]
    DuplicateKey(String),

    #[error("Failed to compile keyword pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TooltipError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
