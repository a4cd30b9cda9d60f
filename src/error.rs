//! Error types for the fluent-matcher crate.
//!
//! Matching itself is total and never produces a [`MatchError`]. These errors
//! cover the configuration surface only: parsing mode names and loading
//! [`MatcherConfig`](crate::config::MatcherConfig) from YAML or JSON. Failures
//! raised by caller-supplied actions keep their own error type and are
//! propagated untouched by the `try_*` branch calls.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Invalid string mode: {0}")]
    InvalidStringMode(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("YAML parsing error: {0}")]
    YamlError(String),
    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl From<std::io::Error> for MatchError {
    fn from(err: std::io::Error) -> Self {
        MatchError::IoError(err.to_string())
    }
}

impl From<serde_yaml::Error> for MatchError {
    fn from(err: serde_yaml::Error) -> Self {
        MatchError::YamlError(err.to_string())
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::JsonError(err.to_string())
    }
}
