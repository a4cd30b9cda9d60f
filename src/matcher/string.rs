//! Textual matching modes and the string matcher.

use crate::error::MatchError;
use crate::matcher::chain::Matcher;
use crate::matcher::state::MatchState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a [`StringMatcher`] compares the subject with each pattern.
///
/// The `Ic*` variants fold both sides to upper case before comparing.
/// [`StringMode::IgnoreCase`] compares char by char, so two strings of
/// different lengths never match. The others are case-sensitive.
///
/// | Mode | Matches when |
/// |------|--------------|
/// | `Exact` | subject equals pattern |
/// | `IgnoreCase` | subject equals pattern, ignoring case |
/// | `Contain` / `IcContain` | subject contains pattern |
/// | `Prefix` / `IcPrefix` | subject starts with pattern |
/// | `Suffix` / `IcSuffix` | subject ends with pattern |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StringMode {
    #[default]
    Exact,
    IgnoreCase,
    Contain,
    IcContain,
    Prefix,
    IcPrefix,
    Suffix,
    IcSuffix,
}

impl StringMode {
    pub const ALL: [StringMode; 8] = [
        StringMode::Exact,
        StringMode::IgnoreCase,
        StringMode::Contain,
        StringMode::IcContain,
        StringMode::Prefix,
        StringMode::IcPrefix,
        StringMode::Suffix,
        StringMode::IcSuffix,
    ];

    pub fn ignores_case(self) -> bool {
        matches!(
            self,
            StringMode::IgnoreCase
                | StringMode::IcContain
                | StringMode::IcPrefix
                | StringMode::IcSuffix
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StringMode::Exact => "exact",
            StringMode::IgnoreCase => "ignore_case",
            StringMode::Contain => "contain",
            StringMode::IcContain => "ic_contain",
            StringMode::Prefix => "prefix",
            StringMode::IcPrefix => "ic_prefix",
            StringMode::Suffix => "suffix",
            StringMode::IcSuffix => "ic_suffix",
        }
    }

    fn folds_to_upper(self) -> bool {
        matches!(
            self,
            StringMode::IcContain | StringMode::IcPrefix | StringMode::IcSuffix
        )
    }

    /// Fold `text` the way this mode compares it.
    pub fn normalize(self, text: &str) -> String {
        if self.folds_to_upper() {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }

    /// Compare `subject` with `pattern` under this mode.
    ///
    /// # Example
    /// ```rust
    /// use fluent_matcher::StringMode;
    ///
    /// assert!(StringMode::Contain.matches("Hello", "ell"));
    /// assert!(!StringMode::Prefix.matches("Hello", "he"));
    /// assert!(StringMode::IcPrefix.matches("Hello", "HE"));
    /// ```
    pub fn matches(self, subject: &str, pattern: &str) -> bool {
        if self.folds_to_upper() {
            self.compare(&subject.to_uppercase(), &pattern.to_uppercase())
        } else {
            self.compare(subject, pattern)
        }
    }

    /// Compare operands already passed through [`StringMode::normalize`].
    fn compare(self, subject: &str, pattern: &str) -> bool {
        match self {
            StringMode::Exact => subject == pattern,
            StringMode::IgnoreCase => equals_ignore_case(subject, pattern),
            StringMode::Contain | StringMode::IcContain => subject.contains(pattern),
            StringMode::Prefix | StringMode::IcPrefix => subject.starts_with(pattern),
            StringMode::Suffix | StringMode::IcSuffix => subject.ends_with(pattern),
        }
    }
}

fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn lower_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Chars are equal as-is, after a single-char upper-case mapping, or after
/// mapping to upper and then lower case. Multi-char expansions never apply.
fn chars_equal_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (ua, ub) = (upper_char(a), upper_char(b));
    ua == ub || lower_char(ua) == lower_char(ub)
}

fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars()
            .zip(b.chars())
            .all(|(x, y)| chars_equal_ignore_case(x, y))
}

impl fmt::Display for StringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StringMode {
    type Err = MatchError;

    /// Accepts snake_case names (`ic_prefix`) as well as the compact
    /// upper-case spellings (`ICPREFIX`, `IGNORECASE`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match compact.as_str() {
            "exact" => Ok(StringMode::Exact),
            "ignorecase" => Ok(StringMode::IgnoreCase),
            "contain" | "contains" => Ok(StringMode::Contain),
            "iccontain" | "iccontains" => Ok(StringMode::IcContain),
            "prefix" => Ok(StringMode::Prefix),
            "icprefix" => Ok(StringMode::IcPrefix),
            "suffix" => Ok(StringMode::Suffix),
            "icsuffix" => Ok(StringMode::IcSuffix),
            _ => Err(MatchError::InvalidStringMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for StringMode {
    type Error = MatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StringMode> for String {
    fn from(mode: StringMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Matches a string subject under a fixed [`StringMode`].
///
/// The subject's folded form is computed once at construction; each pattern
/// is folded as it is tested. When either the subject or the pattern is
/// absent the mode is bypassed and the branch matches only if both are
/// absent.
///
/// # Example
/// ```rust
/// use fluent_matcher::prelude::*;
///
/// let ext = StringMatcher::new("Report.PDF", StringMode::IcSuffix)
///     .when(".pdf", |_| "document")
///     .when_in(&any_of([".png", ".jpg"]), |_| "image")
///     .or_else(|_| "unknown");
/// assert_eq!(ext, "document");
/// ```
#[derive(Debug, Clone)]
pub struct StringMatcher<R = ()> {
    state: MatchState<String, R>,
    mode: StringMode,
    normalized: Option<String>,
}

impl<R> StringMatcher<R> {
    pub fn new<'s>(subject: impl Into<Option<&'s str>>, mode: StringMode) -> Self {
        let subject: Option<String> = subject.into().map(str::to_string);
        let normalized = subject.as_deref().map(|s| mode.normalize(s));
        Self {
            state: MatchState::new(subject),
            mode,
            normalized,
        }
    }

    /// Build with the configured default mode.
    pub fn with_config<'s>(
        subject: impl Into<Option<&'s str>>,
        config: &crate::config::MatcherConfig,
    ) -> Self {
        Self::new(subject, config.default_string_mode)
    }

    pub fn mode(&self) -> StringMode {
        self.mode
    }
}

impl<R> Matcher for StringMatcher<R> {
    type Subject = String;
    type Pattern = str;
    type Output = R;

    const KIND: &'static str = "string";

    fn state(&self) -> &MatchState<String, R> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut MatchState<String, R> {
        &mut self.state
    }

    fn into_state(self) -> MatchState<String, R> {
        self.state
    }

    fn test(&self, pattern: Option<&str>) -> bool {
        match (self.normalized.as_deref(), pattern) {
            (Some(subject), Some(pattern)) => {
                if self.mode.folds_to_upper() {
                    self.mode.compare(subject, &pattern.to_uppercase())
                } else {
                    self.mode.compare(subject, pattern)
                }
            }
            (None, None) => true,
            _ => false,
        }
    }
}
