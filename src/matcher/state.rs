//! Shared match bookkeeping for every matcher variant.

/// Where a match expression currently stands.
///
/// `Pending` and `Probed` are both uncommitted: a probe hit records the value
/// its action produced but leaves the expression open, so a later committing
/// branch or the fallback still decides the final result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<R> {
    /// No branch has matched yet.
    Pending,
    /// A probe matched and produced this value; nothing has committed.
    Probed(R),
    /// A committing branch matched. Write-once.
    Committed(R),
}

impl<R> Outcome<R> {
    pub fn is_committed(&self) -> bool {
        matches!(self, Outcome::Committed(_))
    }

    /// The value currently held, committed or provisional.
    pub fn value(&self) -> Option<&R> {
        match self {
            Outcome::Pending => None,
            Outcome::Probed(value) | Outcome::Committed(value) => Some(value),
        }
    }
}

/// Mutable matching context: the subject, the commit state and the result.
///
/// Every transition goes through the methods below, which refuse to touch the
/// outcome once it is [`Outcome::Committed`].
#[derive(Debug, Clone)]
pub struct MatchState<V, R> {
    subject: Option<V>,
    outcome: Outcome<R>,
    probe_matched: bool,
}

impl<V, R> MatchState<V, R> {
    /// Create an uncommitted state bound to `subject`.
    pub fn new(subject: Option<V>) -> Self {
        Self {
            subject,
            outcome: Outcome::Pending,
            probe_matched: false,
        }
    }

    pub fn subject(&self) -> Option<&V> {
        self.subject.as_ref()
    }

    pub fn outcome(&self) -> &Outcome<R> {
        &self.outcome
    }

    pub fn is_committed(&self) -> bool {
        self.outcome.is_committed()
    }

    /// Whether any probe has matched on this expression so far.
    pub fn probe_matched(&self) -> bool {
        self.probe_matched
    }

    /// Run `action` against the subject and commit its result.
    ///
    /// A no-op when already committed. On `Err` the outcome is left untouched
    /// and the error is handed back to the caller as-is.
    pub fn commit_with<E, F>(&mut self, action: F) -> Result<(), E>
    where
        F: FnOnce(Option<&V>) -> Result<R, E>,
    {
        if self.is_committed() {
            return Ok(());
        }
        let result = action(self.subject.as_ref())?;
        self.outcome = Outcome::Committed(result);
        Ok(())
    }

    /// Run `action` against the subject without committing.
    pub fn probe_with<E, F>(&mut self, action: F) -> Result<(), E>
    where
        F: FnOnce(Option<&V>) -> Result<R, E>,
    {
        if self.is_committed() {
            return Ok(());
        }
        let result = action(self.subject.as_ref())?;
        self.outcome = Outcome::Probed(result);
        self.probe_matched = true;
        Ok(())
    }

    /// Close the expression: the committed result if there is one, otherwise
    /// whatever `fallback` produces for the subject.
    pub fn resolve_with<E, F>(self, fallback: F) -> Result<R, E>
    where
        F: FnOnce(Option<&V>) -> Result<R, E>,
    {
        match self.outcome {
            Outcome::Committed(result) => Ok(result),
            Outcome::Pending | Outcome::Probed(_) => fallback(self.subject.as_ref()),
        }
    }

    /// The committed result, discarding any provisional probe value.
    pub fn into_committed(self) -> Option<R> {
        match self.outcome {
            Outcome::Committed(result) => Some(result),
            Outcome::Pending | Outcome::Probed(_) => None,
        }
    }
}
