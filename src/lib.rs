//! # fluent-matcher
//!
//! Fluent, chainable pattern matching over a single subject value.
//!
//! Register an ordered sequence of patterns, each paired with an action. The
//! first pattern that matches commits; its action runs and every later branch
//! is skipped. An optional fallback covers the case where nothing matched.
//!
//! ## Quick Start
//!
//! ### Literal values
//!
//! ```rust
//! use fluent_matcher::prelude::*;
//!
//! let status = 503;
//! let class = ValueMatcher::new(status)
//!     .when_in(&any_of([200, 204]), |_| "ok")
//!     .when_in(&any_of([500, 502, 503]), |_| "server error")
//!     .or_else(|_| "unexpected");
//! assert_eq!(class, "server error");
//! ```
//!
//! ### String modes
//!
//! ```rust
//! use fluent_matcher::prelude::*;
//!
//! let kind = StringMatcher::new("Content-Type: text/HTML", StringMode::IcContain)
//!     .when("application/json", |_| "json")
//!     .when("text/html", |_| "html")
//!     .or_else(|_| "other");
//! assert_eq!(kind, "html");
//! ```
//!
//! ### Derived values and fallible actions
//!
//! ```rust
//! use fluent_matcher::prelude::*;
//!
//! fn classify(width: usize) -> Result<&'static str, String> {
//!     DerivedValueMatcher::new(width, |tag: &str| tag.len())
//!         .try_when("byte", |_| Ok::<_, String>("four"))?
//!         .try_when("word", |_| Err("duplicate width".to_string()))?
//!         .try_or_else(|_| Ok("other"))
//! }
//!
//! assert_eq!(classify(4), Ok("four"));
//! assert_eq!(classify(9), Ok("other"));
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod recovery;

// Configuration
pub use config::{MatcherConfig, RecoveryConfig};

// Core types and errors
pub use error::{MatchError, Result};

// Matcher system
pub use matcher::{
    any_of, DerivedValueMatcher, MatchState, Matcher, Outcome, PatternSet, StringMatcher,
    StringMode, ValueMatcher,
};

// Delayed execution helper
pub use recovery::Deferred;

/// Everything needed to write a match expression.
pub mod prelude {
    pub use crate::matcher::{
        any_of, DerivedValueMatcher, Matcher, PatternSet, StringMatcher, StringMode, ValueMatcher,
    };
}
