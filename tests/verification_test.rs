//! Verification queries over recorded call history.
use fnmock::{Arg, MockError, Pattern};
use serde_json::json;

mod common;
use common::fixtures::{add_mock, kwargs, method_mock};

#[test]
fn test_add_scenario_verification() -> anyhow::Result<()> {
    let mut mock = add_mock();
    mock.setup(Pattern::new().arg(1).arg(Arg::any()))?
        .returns_with(|_, kw| json!(kw["a"].as_i64().unwrap_or(0) + kw["b"].as_i64().unwrap_or(0)));

    mock.call_positional(&[json!(1), json!(5)])?;

    mock.verify(Pattern::new().arg(1).arg(Arg::any()))?.times(1)?;
    mock.verify(Pattern::new().arg(2).arg(Arg::any()))?.never()?;
    Ok(())
}

#[test]
fn test_unmatched_calls_are_still_verifiable() -> anyhow::Result<()> {
    let mut mock = add_mock();
    mock.setup(Pattern::new().arg(1).arg(Arg::any()))?
        .returns_value(0);

    mock.call_positional(&[json!(2), json!(5)])?;

    mock.verify(Pattern::new().arg(2).arg(Arg::any()))?.times(1)?;
    mock.verify(Pattern::new().arg(1).arg(Arg::any()))?.never()?;
    Ok(())
}

#[test]
fn test_wildcard_pattern_returns_whole_history() -> anyhow::Result<()> {
    let mock = add_mock();
    for a in 0..4 {
        mock.call_positional(&[json!(a), json!(a * 2)])?;
    }
    let verified = mock.verify(Pattern::new().arg(Arg::any()).arg(Arg::any()))?;
    assert_eq!(verified.verified(), 4);
    assert_eq!(verified.matched(), verified.all_calls());
    assert_eq!(verified.all_calls(), mock.calls().as_slice());
    Ok(())
}

#[test]
fn test_filter_preserves_invocation_order() -> anyhow::Result<()> {
    let mock = add_mock();
    for (a, b) in [(1, 1), (2, 2), (1, 3), (1, 4)] {
        mock.call_positional(&[json!(a), json!(b)])?;
    }
    let verified = mock.verify(Pattern::new().arg(1).arg(Arg::any()))?;
    let bs: Vec<_> = verified.matched().iter().map(|c| c.kwargs["b"].clone()).collect();
    assert_eq!(bs, vec![json!(1), json!(3), json!(4)]);
    verified.more_than(2)?;
    assert!(verified.more_than(3).is_err());
    Ok(())
}

#[test]
fn test_pattern_omitting_defaulted_parameter_expects_default() -> anyhow::Result<()> {
    let mock = add_mock();
    mock.call_positional(&[json!(1)])?;
    mock.call_positional(&[json!(1), json!(10)])?;
    mock.call_positional(&[json!(1), json!(11)])?;

    mock.verify(Pattern::new().arg(1))?.times(2)?;
    mock.verify(Pattern::new().kwarg("b", 11))?.times(1)?;
    Ok(())
}

#[test]
fn test_keyword_and_positional_calls_verify_alike() -> anyhow::Result<()> {
    let mock = add_mock();
    mock.call_positional(&[json!(3), json!(4)])?;
    mock.call(&[], &kwargs(&[("b", json!(4)), ("a", json!(3))]))?;

    mock.verify(Pattern::new().arg(3).arg(4))?.times(2)?;
    mock.verify(Pattern::new().kwarg("a", 3).kwarg("b", 4))?.times(2)?;
    Ok(())
}

#[test]
fn test_instance_method_verification_implies_receiver() -> anyhow::Result<()> {
    let mock = method_mock();
    mock.call_positional(&[json!(5)])?;
    mock.call(&[], &kwargs(&[("x", json!(6))]))?;

    mock.verify(Pattern::new().arg(5))?.times(1)?;
    mock.verify(Pattern::new().kwarg("x", 6))?.times(1)?;
    mock.verify(Pattern::new().arg(Arg::any()))?.times(2)?;
    Ok(())
}

#[test]
fn test_more_than_zero_without_calls_fails_with_message() -> anyhow::Result<()> {
    let mock = add_mock();
    let failure = mock
        .verify(Pattern::new().arg(Arg::any()))?
        .more_than(0)
        .unwrap_err();
    assert!(failure.message.contains("Expected more than 0 calls, got 0."));
    assert_eq!(failure.actual, 0);
    Ok(())
}

#[test]
fn test_times_failure_lists_matched_and_all_calls() -> anyhow::Result<()> {
    let mock = add_mock();
    mock.call_positional(&[json!(1), json!(2)])?;
    mock.call_positional(&[json!(3)])?;

    let failure = mock.verify(Pattern::new().arg(1).arg(2))?.times(2).unwrap_err();
    let lines: Vec<&str> = failure.message.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Expected 2 calls, got 1.",
            "Matched Calls:",
            "\t((1, 2), {a=1, b=2})",
            "All Calls:",
            "\t((1, 2), {a=1, b=2})",
            "\t((3), {a=3, b=10})",
        ]
    );

    let as_mock_error = MockError::from(failure);
    assert!(as_mock_error.to_string().starts_with("verification failed: Expected 2 calls"));
    Ok(())
}

#[test]
fn test_verify_rejects_unbindable_pattern() {
    let mock = add_mock();
    assert!(matches!(
        mock.verify(Pattern::new().kwarg("nope", 1)),
        Err(MockError::Binding(_))
    ));
}
