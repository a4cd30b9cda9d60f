//! Integration tests for string modes, null handling and probes.

use fluent_matcher::prelude::*;
use fluent_matcher::MatcherConfig;
use std::cell::{Cell, RefCell};

fn matches(subject: Option<&str>, mode: StringMode, pattern: Option<&str>) -> bool {
    StringMatcher::new(subject, mode)
        .when(pattern, |_| true)
        .or_value(false)
}

#[test]
fn test_mode_table() {
    let cases = [
        (StringMode::Exact, "Hello", "Hello", true),
        (StringMode::Exact, "Hello", "HELLO", false),
        (StringMode::IgnoreCase, "Hello", "HELLO", true),
        (StringMode::IgnoreCase, "Hello", "HELL", false),
        (StringMode::Contain, "Hello", "ell", true),
        (StringMode::Contain, "Hello", "ELL", false),
        (StringMode::IcContain, "Hello", "ELL", true),
        (StringMode::Prefix, "Hello", "he", false),
        (StringMode::Prefix, "Hello", "He", true),
        (StringMode::IcPrefix, "Hello", "HE", true),
        (StringMode::Suffix, "Hello", "LO", false),
        (StringMode::Suffix, "Hello", "lo", true),
        (StringMode::IcSuffix, "Hello", "LO", true),
        (StringMode::IcSuffix, "Hello", "HE", false),
    ];

    for (mode, subject, pattern, expected) in cases {
        assert_eq!(
            matches(Some(subject), mode, Some(pattern)),
            expected,
            "{mode}: {subject:?} vs {pattern:?}"
        );
    }
}

#[test]
fn test_unicode_case_folding() {
    assert!(matches(Some("Straße"), StringMode::IcContain, Some("STRASSE")));
    assert!(matches(Some("ÉCOLE"), StringMode::IgnoreCase, Some("école")));
    assert!(!matches(Some("ÉCOLE"), StringMode::Exact, Some("école")));
}

#[test]
fn test_ignore_case_compares_char_by_char() {
    assert!(!matches(Some("ß"), StringMode::IgnoreCase, Some("SS")));
    assert!(!matches(Some("Straße"), StringMode::IgnoreCase, Some("STRASSE")));
    assert!(matches(Some("\u{212A}elvin"), StringMode::IgnoreCase, Some("kelvin")));
    assert!(matches(Some("kelvin"), StringMode::IgnoreCase, Some("\u{212A}ELVIN")));
    // Ic modes still fold with full upper-case expansion.
    assert!(matches(Some("ß"), StringMode::IcContain, Some("SS")));
}

#[test]
fn test_null_short_circuit() {
    for mode in StringMode::ALL {
        assert!(!matches(None, mode, Some("x")), "{mode}");
        assert!(!matches(None, mode, Some("")), "{mode}");
        assert!(!matches(Some("x"), mode, None), "{mode}");
        assert!(matches(None, mode, None), "{mode}");
    }
}

#[test]
fn test_first_match_wins_with_overlapping_modes() {
    let runs = RefCell::new(Vec::new());
    let label = StringMatcher::new("error: disk full", StringMode::Contain)
        .when("warn", |_| {
            runs.borrow_mut().push("warn");
            "warning"
        })
        .when("error", |_| {
            runs.borrow_mut().push("error");
            "error"
        })
        .when("disk", |_| {
            runs.borrow_mut().push("disk");
            "disk"
        })
        .or_else(|_| "info");

    assert_eq!(label, "error");
    assert_eq!(*runs.borrow(), vec!["error"]);
}

#[test]
fn test_pattern_set_dispatch() {
    let extensions = any_of([".tar.gz", ".tgz", ".zip"]);
    let images = any_of([".png", ".jpg", ".gif"]);

    let classify = |name: &str| {
        StringMatcher::new(name, StringMode::IcSuffix)
            .when_in(&extensions, |_| "archive")
            .when_in(&images, |_| "image")
            .or_value("other")
    };

    assert_eq!(classify("backup.TGZ"), "archive");
    assert_eq!(classify("photo.Jpg"), "image");
    assert_eq!(classify("notes.txt"), "other");
}

#[test]
fn test_absent_set_with_present_subject_never_matches() {
    let absent: PatternSet<String> = PatternSet::absent();
    let result = StringMatcher::new("anything", StringMode::Contain)
        .when_in(&absent, |_| "absent set")
        .or_value("fallback");
    assert_eq!(result, "fallback");
}

#[test]
fn test_probe_non_interference() {
    let audit = RefCell::new(Vec::new());
    let result = StringMatcher::new("GET /health", StringMode::Prefix)
        .when_next("GET", |s| {
            audit.borrow_mut().push(format!("read request {}", s.map_or("", String::as_str)));
        })
        .when("GET /health", |_| audit.borrow_mut().push("health".to_string()))
        .when("GET", |_| audit.borrow_mut().push("generic".to_string()))
        .into_result();

    assert_eq!(result, Some(()));
    assert_eq!(
        *audit.borrow(),
        vec!["read request GET /health".to_string(), "health".to_string()]
    );
}

#[test]
fn test_probe_set_and_commit_on_same_pattern() {
    let probes = Cell::new(0);
    let matcher = StringMatcher::new("alpha", StringMode::Exact)
        .when_next_in(&any_of(["beta", "alpha", "alpha"]), |_| probes.set(probes.get() + 1));
    assert!(matcher.probe_matched());

    let matcher = matcher.when_in(&any_of(["alpha"]), |_| ());
    assert!(matcher.is_committed());
    assert_eq!(probes.get(), 1);
}

#[test]
fn test_non_matching_probe_leaves_flag_clear() {
    let matcher = StringMatcher::new("alpha", StringMode::Exact)
        .when_next("beta", |_| 1)
        .when_next_in(&PatternSet::<&str>::empty(), |_| 2);
    assert!(!matcher.probe_matched());
    assert_eq!(matcher.or_value(0), 0);
}

#[test]
fn test_try_branches_propagate_errors() {
    let result = StringMatcher::new("v2", StringMode::Exact)
        .try_when("v1", |_| Ok::<_, String>(1))
        .and_then(|m| m.try_when("v2", |_| Err("v2 is retired".to_string())))
        .and_then(|m| m.try_or_else(|_| Ok(0)));
    assert_eq!(result, Err("v2 is retired".to_string()));
}

#[test]
fn test_with_config_uses_default_mode() {
    let config = MatcherConfig::case_insensitive();
    let matcher: StringMatcher<bool> = StringMatcher::with_config("MiXeD", &config);
    assert_eq!(matcher.mode(), StringMode::IgnoreCase);
    assert!(matcher.when("mixed", |_| true).or_value(false));
}
