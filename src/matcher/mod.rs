//! Fluent first-match-wins matchers.
//!
//! A matcher is bound to one subject and evaluates branches in the order they
//! are chained. The first branch whose pattern matches commits: its action
//! runs, its result is stored, and every later branch becomes a no-op. A
//! terminal fallback produces the result when nothing committed.
//!
//! ## Core Components
//!
//! - [`MatchState`] - Subject, commit state and result bookkeeping
//! - [`Matcher`] - Branch, probe and fallback operations shared by all matchers
//! - [`ValueMatcher`] - Null-safe equality against literal values
//! - [`StringMatcher`] - Textual comparison under a [`StringMode`]
//! - [`DerivedValueMatcher`] - Equality against `transform(pattern)`
//! - [`PatternSet`] - Ordered "any of these" alternatives
//!
//! ## Probes
//!
//! The `when_next*` calls run their action on a match without committing, so
//! a later branch can still commit on the same subject. Probes stop once the
//! expression has committed.
//!
//! ## Example Usage
//!
//! ```rust
//! use fluent_matcher::prelude::*;
//!
//! let mut seen = Vec::new();
//! StringMatcher::new("/api/v2/users", StringMode::Prefix)
//!     .when_next("/api", |_| seen.push("api"))
//!     .when("/api/v1", |_| ())
//!     .when("/api/v2", |_| seen.push("v2"))
//!     .or_else(|_| seen.push("fallback"));
//!
//! assert_eq!(seen, vec!["api", "v2"]);
//! ```

pub mod chain;
pub mod derived;
pub mod pattern;
pub mod state;
pub mod string;
pub mod types;
pub mod value;

pub use chain::Matcher;
pub use derived::DerivedValueMatcher;
pub use pattern::{any_of, PatternSet};
pub use state::{MatchState, Outcome};
pub use string::{StringMatcher, StringMode};
pub use types::{Action, FallibleAction, Handler, Transform};
pub use value::ValueMatcher;
