//! Equality matching against literal values.

use crate::matcher::chain::Matcher;
use crate::matcher::state::MatchState;

/// Matches the subject against literal patterns with null-safe equality.
///
/// An absent subject matches only the absent pattern, and a present subject
/// never matches it.
///
/// # Example
/// ```rust
/// use fluent_matcher::prelude::*;
///
/// let kind = ValueMatcher::new(404)
///     .when_in(&any_of([200, 201, 204]), |_| "success")
///     .when_in(&any_of([400, 404]), |_| "client error")
///     .or_else(|_| "other");
/// assert_eq!(kind, "client error");
/// ```
#[derive(Debug, Clone)]
pub struct ValueMatcher<V, R = ()> {
    state: MatchState<V, R>,
}

impl<V, R> ValueMatcher<V, R>
where
    V: PartialEq,
{
    pub fn new(subject: impl Into<Option<V>>) -> Self {
        Self {
            state: MatchState::new(subject.into()),
        }
    }
}

impl<V, R> Matcher for ValueMatcher<V, R>
where
    V: PartialEq,
{
    type Subject = V;
    type Pattern = V;
    type Output = R;

    const KIND: &'static str = "value";

    fn state(&self) -> &MatchState<V, R> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut MatchState<V, R> {
        &mut self.state
    }

    fn into_state(self) -> MatchState<V, R> {
        self.state
    }

    fn test(&self, pattern: Option<&V>) -> bool {
        self.state.subject() == pattern
    }
}
