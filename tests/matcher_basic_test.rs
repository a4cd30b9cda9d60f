//! Basic tests for value matching, commit semantics and fallback resolution.

use fluent_matcher::prelude::*;
use fluent_matcher::{MatchState, Outcome};
use std::cell::Cell;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(i64),
    Word(String),
    Eof,
}

fn describe(token: Option<Token>) -> String {
    ValueMatcher::<Token, String>::new(token)
        .when(&Token::Eof, |_| "end of input".to_string())
        .when_in(
            &any_of([Token::Number(0), Token::Number(1)]),
            |t| format!("bit {t:?}"),
        )
        .when(None, |_| "nothing".to_string())
        .or_else(|t| match t {
            Some(Token::Word(w)) => format!("word {w}"),
            Some(other) => format!("token {other:?}"),
            None => unreachable!("absent subject matched the absent branch"),
        })
}

#[test]
fn test_enum_subject() {
    assert_eq!(describe(Some(Token::Eof)), "end of input");
    assert_eq!(describe(Some(Token::Number(1))), "bit Some(Number(1))");
    assert_eq!(describe(Some(Token::Word("hi".into()))), "word hi");
    assert_eq!(describe(Some(Token::Number(7))), "token Number(7)");
    assert_eq!(describe(None), "nothing");
}

#[test]
fn test_first_match_wins_across_many_branches() {
    let runs: Vec<Cell<u32>> = (0..5).map(|_| Cell::new(0)).collect();

    let winner = ValueMatcher::new(3)
        .when(&1, |_| {
            runs[0].set(runs[0].get() + 1);
            0
        })
        .when(&3, |_| {
            runs[1].set(runs[1].get() + 1);
            1
        })
        .when_in(&any_of([2, 3]), |_| {
            runs[2].set(runs[2].get() + 1);
            2
        })
        .when(&3, |_| {
            runs[3].set(runs[3].get() + 1);
            3
        })
        .or_else(|_| {
            runs[4].set(runs[4].get() + 1);
            4
        });

    assert_eq!(winner, 1);
    let counts: Vec<u32> = runs.iter().map(Cell::get).collect();
    assert_eq!(counts, vec![0, 1, 0, 0, 0]);
}

#[test]
fn test_fallback_runs_exactly_once_when_nothing_matches() {
    let branch_runs = Cell::new(0);
    let fallback_runs = Cell::new(0);

    let mut matcher = ValueMatcher::new("zeta");
    for candidate in ["alpha", "beta", "gamma", "delta"] {
        matcher = matcher.when(&candidate, |_| branch_runs.set(branch_runs.get() + 1));
    }
    matcher.or_else(|_| fallback_runs.set(fallback_runs.get() + 1));

    assert_eq!(branch_runs.get(), 0);
    assert_eq!(fallback_runs.get(), 1);
}

#[test]
fn test_commit_state_visible_mid_chain() {
    let matcher = ValueMatcher::new(10).when(&9, |_| "nine");
    assert!(!matcher.is_committed());
    assert_eq!(matcher.outcome(), &Outcome::Pending);

    let matcher = matcher.when(&10, |_| "ten");
    assert!(matcher.is_committed());
    assert_eq!(matcher.outcome(), &Outcome::Committed("ten"));

    assert_eq!(matcher.or_value("other"), "ten");
}

#[test]
fn test_probe_then_commit_on_value_matcher() {
    let probes = Cell::new(0);
    let result = ValueMatcher::new(8)
        .when_next(&8, |_| {
            probes.set(probes.get() + 1);
            "probe"
        })
        .when_next_in(&any_of([1, 8]), |_| {
            probes.set(probes.get() + 1);
            "second probe"
        })
        .when(&8, |_| "commit")
        .or_value("fallback");

    assert_eq!(result, "commit");
    assert_eq!(probes.get(), 2);
}

#[test]
fn test_probe_value_discarded_by_fallback() {
    let result = ValueMatcher::new(8)
        .when_next(&8, |_| "probe")
        .or_value("fallback");
    assert_eq!(result, "fallback");
}

#[test]
fn test_action_errors_propagate_unchanged() -> anyhow::Result<()> {
    let outcome = ValueMatcher::new("config.toml")
        .try_when(&"config.toml", |_| -> anyhow::Result<u32> {
            anyhow::bail!("parse failure at line 3")
        })
        .map(|m| m.or_value(0));

    let err = outcome.expect_err("action error should surface");
    assert_eq!(err.to_string(), "parse failure at line 3");

    let parsed = ValueMatcher::new("port")
        .try_when(&"port", |_| Ok::<_, anyhow::Error>("8080".parse::<u16>()?))?
        .try_or_else(|_| Ok::<_, anyhow::Error>(0))?;
    assert_eq!(parsed, 8080);
    Ok(())
}

#[test]
fn test_fallback_error_propagates() {
    let result: Result<i32, String> = ValueMatcher::new(1)
        .when(&2, |_| 2)
        .try_or_else(|v| Err(format!("no branch for {v:?}")));
    assert_eq!(result, Err("no branch for Some(1)".to_string()));
}

#[test]
fn test_or_default() {
    let count: usize = ValueMatcher::new('q').when(&'z', |_| 26).or_default();
    assert_eq!(count, 0);
}

#[test]
fn test_match_state_standalone() {
    let mut state: MatchState<&str, usize> = MatchState::new(Some("abc"));
    state
        .commit_with(|s| Ok::<_, String>(s.map_or(0, |s| s.len())))
        .unwrap();
    assert!(state.is_committed());
    assert_eq!(state.into_committed(), Some(3));
}
