//! The fluent branch/probe/fallback surface shared by every matcher.

use crate::matcher::pattern::PatternSet;
use crate::matcher::state::{MatchState, Outcome};
use std::borrow::Borrow;
use std::convert::Infallible;

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// A first-match-wins match expression over a single subject.
///
/// Implementors only decide whether one pattern matches ([`Matcher::test`]);
/// ordering, write-once commit, probes and fallback resolution are provided
/// here and behave identically for every matcher.
///
/// Branch calls take `self` by value and return it, so an expression reads as
/// one chain. The `try_*` forms accept actions returning `Result` and hand the
/// first error back unchanged, which lets the chain continue with `?`.
///
/// # Example
/// ```rust
/// use fluent_matcher::prelude::*;
///
/// let label = ValueMatcher::new(2)
///     .when(&1, |_| "one")
///     .when(&2, |_| "two")
///     .or_else(|_| "many");
/// assert_eq!(label, "two");
/// ```
pub trait Matcher: Sized {
    /// The value being matched.
    type Subject;
    /// What each branch supplies to compare against the subject.
    type Pattern: ?Sized;
    /// The value produced by actions.
    type Output;

    /// Name used in trace output.
    const KIND: &'static str;

    fn state(&self) -> &MatchState<Self::Subject, Self::Output>;

    fn state_mut(&mut self) -> &mut MatchState<Self::Subject, Self::Output>;

    fn into_state(self) -> MatchState<Self::Subject, Self::Output>;

    /// Whether `pattern` matches the subject. `None` is the absent pattern.
    fn test(&self, pattern: Option<&Self::Pattern>) -> bool;

    /// Whether any member of `set` matches, stopping at the first hit.
    ///
    /// An absent set is tested as the single absent pattern.
    fn test_any<T>(&self, set: &PatternSet<T>) -> bool
    where
        T: Borrow<Self::Pattern>,
    {
        match set.items() {
            None => self.test(None),
            Some(members) => members.iter().any(|member| {
                let pattern = member.as_ref().map(<T as Borrow<Self::Pattern>>::borrow);
                self.test(pattern)
            }),
        }
    }

    fn is_committed(&self) -> bool {
        self.state().is_committed()
    }

    fn probe_matched(&self) -> bool {
        self.state().probe_matched()
    }

    fn outcome(&self) -> &Outcome<Self::Output> {
        self.state().outcome()
    }

    /// Commit to `action` if `pattern` is the first to match.
    fn try_when<'p, E, F>(
        mut self,
        pattern: impl Into<Option<&'p Self::Pattern>>,
        action: F,
    ) -> Result<Self, E>
    where
        Self::Pattern: 'p,
        F: FnOnce(Option<&Self::Subject>) -> Result<Self::Output, E>,
    {
        if !self.is_committed() && self.test(pattern.into()) {
            self.state_mut().commit_with(action)?;
            tracing::trace!(matcher = Self::KIND, "branch committed");
        }
        Ok(self)
    }

    fn when<'p, F>(self, pattern: impl Into<Option<&'p Self::Pattern>>, action: F) -> Self
    where
        Self::Pattern: 'p,
        F: FnOnce(Option<&Self::Subject>) -> Self::Output,
    {
        infallible(self.try_when(pattern, |subject| Ok(action(subject))))
    }

    /// Commit to `action` if any member of `set` is the first to match.
    fn try_when_in<T, E, F>(mut self, set: &PatternSet<T>, action: F) -> Result<Self, E>
    where
        T: Borrow<Self::Pattern>,
        F: FnOnce(Option<&Self::Subject>) -> Result<Self::Output, E>,
    {
        if !self.is_committed() && self.test_any(set) {
            self.state_mut().commit_with(action)?;
            tracing::trace!(matcher = Self::KIND, members = set.len(), "set branch committed");
        }
        Ok(self)
    }

    fn when_in<T, F>(self, set: &PatternSet<T>, action: F) -> Self
    where
        T: Borrow<Self::Pattern>,
        F: FnOnce(Option<&Self::Subject>) -> Self::Output,
    {
        infallible(self.try_when_in(set, |subject| Ok(action(subject))))
    }

    /// Run `action` on a match without committing.
    ///
    /// Later committing branches are still evaluated, and may match the same
    /// subject. Once the expression has committed this does nothing.
    fn try_when_next<'p, E, F>(
        mut self,
        pattern: impl Into<Option<&'p Self::Pattern>>,
        action: F,
    ) -> Result<Self, E>
    where
        Self::Pattern: 'p,
        F: FnOnce(Option<&Self::Subject>) -> Result<Self::Output, E>,
    {
        if !self.is_committed() && self.test(pattern.into()) {
            self.state_mut().probe_with(action)?;
            tracing::trace!(matcher = Self::KIND, "probe matched");
        }
        Ok(self)
    }

    fn when_next<'p, F>(self, pattern: impl Into<Option<&'p Self::Pattern>>, action: F) -> Self
    where
        Self::Pattern: 'p,
        F: FnOnce(Option<&Self::Subject>) -> Self::Output,
    {
        infallible(self.try_when_next(pattern, |subject| Ok(action(subject))))
    }

    /// Probe form of [`Matcher::try_when_in`]. The action runs at most once,
    /// for the first matching member.
    fn try_when_next_in<T, E, F>(mut self, set: &PatternSet<T>, action: F) -> Result<Self, E>
    where
        T: Borrow<Self::Pattern>,
        F: FnOnce(Option<&Self::Subject>) -> Result<Self::Output, E>,
    {
        if !self.is_committed() && self.test_any(set) {
            self.state_mut().probe_with(action)?;
            tracing::trace!(matcher = Self::KIND, members = set.len(), "set probe matched");
        }
        Ok(self)
    }

    fn when_next_in<T, F>(self, set: &PatternSet<T>, action: F) -> Self
    where
        T: Borrow<Self::Pattern>,
        F: FnOnce(Option<&Self::Subject>) -> Self::Output,
    {
        infallible(self.try_when_next_in(set, |subject| Ok(action(subject))))
    }

    /// Close the expression. `fallback` runs only if nothing committed;
    /// otherwise the committed result is returned as-is.
    fn try_or_else<E, F>(self, fallback: F) -> Result<Self::Output, E>
    where
        F: FnOnce(Option<&Self::Subject>) -> Result<Self::Output, E>,
    {
        let state = self.into_state();
        if !state.is_committed() {
            tracing::trace!(matcher = Self::KIND, "no branch matched, running fallback");
        }
        state.resolve_with(fallback)
    }

    fn or_else<F>(self, fallback: F) -> Self::Output
    where
        F: FnOnce(Option<&Self::Subject>) -> Self::Output,
    {
        infallible(self.try_or_else(|subject| Ok(fallback(subject))))
    }

    fn or_value(self, value: Self::Output) -> Self::Output {
        self.or_else(|_| value)
    }

    fn or_default(self) -> Self::Output
    where
        Self::Output: Default,
    {
        self.or_else(|_| Default::default())
    }

    /// The committed result, if any branch committed.
    fn into_result(self) -> Option<Self::Output> {
        self.into_state().into_committed()
    }
}
