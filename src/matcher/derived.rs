//! Matching against values derived from each pattern.

use crate::matcher::chain::Matcher;
use crate::matcher::state::MatchState;
use crate::matcher::types::Transform;
use std::fmt;

/// Matches the subject against `transform(pattern)` rather than the pattern.
///
/// Useful when the subject is already in canonical form and the candidates
/// are raw tags: the transform runs once per tested pattern, lazily, and
/// never after the expression has committed.
///
/// # Example
/// ```rust
/// use fluent_matcher::prelude::*;
///
/// let size = DerivedValueMatcher::new(3, |p: &str| p.len())
///     .when("ab", |_| "two")
///     .when("abc", |_| "three")
///     .or_else(|_| "other");
/// assert_eq!(size, "three");
/// ```
pub struct DerivedValueMatcher<'a, V, P: ?Sized, R = ()> {
    state: MatchState<V, R>,
    transform: Transform<'a, P, V>,
}

impl<'a, V, P, R> DerivedValueMatcher<'a, V, P, R>
where
    V: PartialEq,
    P: ?Sized,
{
    /// Build with a transform over present patterns; the absent pattern
    /// derives the absent value.
    pub fn new<F>(subject: impl Into<Option<V>>, transform: F) -> Self
    where
        F: Fn(&P) -> V + 'a,
    {
        Self::with_nullable(subject, move |pattern: Option<&P>| pattern.map(&transform))
    }

    /// Build with a transform that also sees the absent pattern.
    pub fn with_nullable<F>(subject: impl Into<Option<V>>, transform: F) -> Self
    where
        F: Fn(Option<&P>) -> Option<V> + 'a,
    {
        Self {
            state: MatchState::new(subject.into()),
            transform: Box::new(transform),
        }
    }
}

impl<V, P, R> fmt::Debug for DerivedValueMatcher<'_, V, P, R>
where
    V: fmt::Debug,
    P: ?Sized,
    R: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedValueMatcher")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<V, P, R> Matcher for DerivedValueMatcher<'_, V, P, R>
where
    V: PartialEq,
    P: ?Sized,
{
    type Subject = V;
    type Pattern = P;
    type Output = R;

    const KIND: &'static str = "derived";

    fn state(&self) -> &MatchState<V, R> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut MatchState<V, R> {
        &mut self.state
    }

    fn into_state(self) -> MatchState<V, R> {
        self.state
    }

    fn test(&self, pattern: Option<&P>) -> bool {
        let derived = (self.transform)(pattern);
        derived.as_ref() == self.state.subject()
    }
}
