//! Configuration for matchers and the recovery helper.
//!
//! Configuration is optional: every matcher can be built directly with an
//! explicit mode. [`MatcherConfig`] exists so applications can pick a default
//! [`StringMode`] and recovery behavior from a YAML or JSON file instead of
//! hard-coding them at each call site.

use crate::error::{MatchError, Result};
use crate::matcher::StringMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Behavior of [`Deferred`](crate::recovery::Deferred) runs.
///
/// # Examples
///
/// ```rust
/// use fluent_matcher::RecoveryConfig;
/// use std::time::Duration;
///
/// let config = RecoveryConfig {
///     delay_ms: 250,
///     log_on_failure: false,
/// };
/// assert_eq!(config.delay(), Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecoveryConfig {
    /// Milliseconds to sleep before running the action.
    pub delay_ms: u64,

    /// Log failures through `tracing` before recovering.
    pub log_on_failure: bool,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            log_on_failure: true,
        }
    }
}

impl RecoveryConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Top-level configuration.
///
/// # Examples
///
/// ```rust
/// use fluent_matcher::{MatcherConfig, StringMode};
///
/// let config = MatcherConfig::from_yaml_str(
///     "default_string_mode: ic_contain\nrecovery:\n  delay_ms: 10\n",
/// )?;
/// assert_eq!(config.default_string_mode, StringMode::IcContain);
/// assert!(config.recovery.log_on_failure);
/// # Ok::<(), fluent_matcher::MatchError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    /// Mode used by [`StringMatcher::with_config`](crate::StringMatcher::with_config).
    pub default_string_mode: StringMode,

    pub recovery: RecoveryConfig,
}

impl MatcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive string matching by default.
    pub fn case_insensitive() -> Self {
        Self {
            default_string_mode: StringMode::IgnoreCase,
            ..Self::default()
        }
    }

    /// Recovery failures are not logged.
    pub fn quiet() -> Self {
        Self {
            recovery: RecoveryConfig {
                log_on_failure: false,
                ..RecoveryConfig::default()
            },
            ..Self::default()
        }
    }

    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load from a file. `.json` files are parsed as JSON, anything else as
    /// YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
        .map_err(|err| MatchError::ConfigError(format!("{}: {err}", path.display())))?;

        tracing::debug!(path = %path.display(), mode = %config.default_string_mode, "loaded matcher config");
        Ok(config)
    }

    pub fn with_default_string_mode(mut self, mode: StringMode) -> Self {
        self.default_string_mode = mode;
        self
    }

    pub fn with_recovery_delay(mut self, delay: Duration) -> Self {
        self.recovery.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_failure_logging(mut self, enable: bool) -> Self {
        self.recovery.log_on_failure = enable;
        self
    }
}
