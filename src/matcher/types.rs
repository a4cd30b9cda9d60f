//! Callable type definitions shared across matchers.
//!
//! Branch methods accept any `impl FnOnce`; these aliases exist for callers
//! that need to name or store an action, e.g. a table of branches built ahead
//! of time.

/// Transform applied to each candidate pattern by
/// [`DerivedValueMatcher`](crate::matcher::DerivedValueMatcher).
///
/// Receives `None` for the absent pattern and may yield `None` for an absent
/// derived value.
///
/// # Example
/// ```rust
/// use fluent_matcher::matcher::Transform;
///
/// let width: Transform<'_, str, usize> = Box::new(|p| p.map(str::len));
/// assert_eq!(width(Some("abc")), Some(3));
/// assert_eq!(width(None), None);
/// ```
pub type Transform<'a, P, V> = Box<dyn Fn(Option<&P>) -> Option<V> + 'a>;

/// Action run on the subject when a branch matches.
pub type Action<'a, V, R> = Box<dyn FnOnce(Option<&V>) -> R + 'a>;

/// Action run on the subject that may fail with `E`.
pub type FallibleAction<'a, V, R, E> = Box<dyn FnOnce(Option<&V>) -> Result<R, E> + 'a>;

/// Receives the failure of a recovered action.
pub type Handler<'a, E> = Box<dyn FnOnce(E) + 'a>;
