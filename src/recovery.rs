//! Delayed execution with failure recovery.
//!
//! [`Deferred`] runs a fallible action after an optional delay and decides
//! what happens to a failure: log it and return a default, hand it to a
//! handler, or propagate it. It is independent of the matchers and is often
//! used from inside their actions or fallbacks.
//!
//! # Example
//! ```rust
//! use fluent_matcher::recovery::Deferred;
//!
//! let port: u16 = Deferred::new()
//!     .with_logging(false)
//!     .run_or(|| "80a".parse::<u16>(), 8080);
//! assert_eq!(port, 8080);
//! ```

use crate::config::RecoveryConfig;
use std::fmt::Display;
use std::thread;
use std::time::Duration;

/// Runs actions after a delay and recovers from their failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deferred {
    delay: Duration,
    log_on_failure: bool,
}

impl Default for Deferred {
    fn default() -> Self {
        Self::new()
    }
}

impl Deferred {
    /// No delay, failures logged.
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
            log_on_failure: true,
        }
    }

    pub fn from_config(config: &RecoveryConfig) -> Self {
        Self {
            delay: config.delay(),
            log_on_failure: config.log_on_failure,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_logging(mut self, enable: bool) -> Self {
        self.log_on_failure = enable;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn logs_failures(&self) -> bool {
        self.log_on_failure
    }

    /// Sleep for the configured delay on the calling thread.
    fn wait(&self) {
        if !self.delay.is_zero() {
            tracing::debug!(delay_ms = self.delay.as_millis() as u64, "delaying action");
            thread::sleep(self.delay);
        }
    }

    fn report<E: Display>(&self, err: &E) {
        if self.log_on_failure {
            tracing::error!(error = %err, "deferred action failed");
        }
    }

    /// Run `action`; on failure log it (if enabled) and return `None`.
    pub fn run<T, E, F>(&self, action: F) -> Option<T>
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        self.wait();
        match action() {
            Ok(value) => Some(value),
            Err(err) => {
                self.report(&err);
                None
            }
        }
    }

    /// Run `action`; on failure log it (if enabled) and return `default`.
    pub fn run_or<T, E, F>(&self, action: F, default: T) -> T
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        self.run(action).unwrap_or(default)
    }

    /// Run `action`; on failure pass the error to `on_failure` and return
    /// `default`. The handler always receives the error; logging settings do
    /// not apply.
    pub fn run_or_else<T, E, F, H>(&self, action: F, default: T, on_failure: H) -> T
    where
        F: FnOnce() -> Result<T, E>,
        H: FnOnce(E),
    {
        self.wait();
        match action() {
            Ok(value) => value,
            Err(err) => {
                on_failure(err);
                default
            }
        }
    }

    /// Run `action` after the delay and return its result unchanged.
    pub fn run_propagate<T, E, F>(&self, action: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.wait();
        action()
    }
}
