// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::io;
use transduce_error::{IntoTransduceError, Result, ResultExt, TransduceError};

#[test]
fn test_error_display() {
    let err = TransduceError::invalid_argument("take count must be non-negative");
    assert_eq!(
        err.to_string(),
        "Invalid argument: take count must be non-negative"
    );

    let err = TransduceError::step_failed("mapping");
    assert_eq!(err.to_string(), "Reduction step failed: mapping");
}

#[test]
fn test_error_constructors() {
    let err = TransduceError::invalid_argument("n");
    assert!(matches!(err, TransduceError::InvalidArgument { .. }));

    let err = TransduceError::user_error(io::Error::other("boom"));
    assert!(matches!(err, TransduceError::UserError(_)));
}

#[test]
fn test_classification() {
    assert!(TransduceError::invalid_argument("n").is_construction_error());
    assert!(!TransduceError::invalid_argument("n").is_user_error());

    assert!(TransduceError::user_error(io::Error::other("boom")).is_user_error());
    assert!(TransduceError::step_failed("boom").is_user_error());
    assert!(!TransduceError::step_failed("boom").is_construction_error());
}

#[test]
fn test_result_context_wraps_user_error() {
    let result: Result<()> = Err(TransduceError::UserError("bad element".into()));

    let err = result.context("while mapping").unwrap_err();

    assert!(matches!(err, TransduceError::StepFailed { .. }));
    assert!(err.to_string().contains("while mapping"));
    assert!(err.to_string().contains("bad element"));
}

#[test]
fn test_result_context_preserves_other_errors() {
    let result: Result<()> = Err(TransduceError::invalid_argument("n"));

    let err = result.context("while building").unwrap_err();

    assert!(matches!(err, TransduceError::InvalidArgument { .. }));
}

#[test]
fn test_result_with_context_is_lazy_on_ok() {
    let result: Result<i32> = Ok(42);

    let value = result
        .with_context(|| panic!("context must not be evaluated"))
        .unwrap();

    assert_eq!(value, 42);
}

#[test]
fn test_into_transduce_error() {
    let err = io::Error::other("disk").into_transduce();
    assert!(matches!(err, TransduceError::UserError(_)));

    let err = io::Error::other("disk").into_transduce_error("loading source");
    assert_eq!(err.to_string(), "Reduction step failed: loading source: disk");
}
