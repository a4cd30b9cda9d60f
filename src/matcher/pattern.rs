//! Ordered "match any of these" pattern sets.

/// Immutable, ordered collection of alternative patterns.
///
/// Members are optional so a set can hold the absent pattern alongside
/// present ones. The set itself can also be *absent*, which is distinct from
/// an empty set: matchers treat an absent set as the single absent pattern,
/// while an empty set never matches anything.
///
/// # Example
/// ```rust
/// use fluent_matcher::PatternSet;
///
/// let weekdays = PatternSet::of(["mon", "tue", "wed", "thu", "fri"]);
/// assert_eq!(weekdays.len(), 5);
/// assert!(!weekdays.is_absent());
///
/// let nothing: PatternSet<&str> = PatternSet::absent();
/// assert!(nothing.is_absent());
/// assert!(nothing.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet<P> {
    items: Option<Vec<Option<P>>>,
}

impl<P> PatternSet<P> {
    /// Build a set from present patterns, keeping their order.
    pub fn of<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
    {
        Self {
            items: Some(patterns.into_iter().map(Some).collect()),
        }
    }

    /// Build a set whose members may themselves be absent.
    pub fn of_optional<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = Option<P>>,
    {
        Self {
            items: Some(patterns.into_iter().collect()),
        }
    }

    /// A present set with no members.
    pub fn empty() -> Self {
        Self {
            items: Some(Vec::new()),
        }
    }

    /// No set at all.
    pub fn absent() -> Self {
        Self { items: None }
    }

    /// The members in evaluation order, or `None` for an absent set.
    pub fn items(&self) -> Option<&[Option<P>]> {
        self.items.as_deref()
    }

    pub fn is_absent(&self) -> bool {
        self.items.is_none()
    }

    pub fn len(&self) -> usize {
        self.items.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate members in order. An absent set yields nothing.
    pub fn iter(&self) -> impl Iterator<Item = Option<&P>> {
        self.items
            .iter()
            .flat_map(|items| items.iter().map(Option::as_ref))
    }

    /// Whether the set holds `pattern` as a member, the absent pattern included.
    pub fn contains(&self, pattern: Option<&P>) -> bool
    where
        P: PartialEq,
    {
        self.iter().any(|member| member == pattern)
    }
}

impl<P> Default for PatternSet<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> FromIterator<P> for PatternSet<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::of(iter)
    }
}

/// Shorthand for [`PatternSet::of`].
pub fn any_of<P, I>(patterns: I) -> PatternSet<P>
where
    I: IntoIterator<Item = P>,
{
    PatternSet::of(patterns)
}
