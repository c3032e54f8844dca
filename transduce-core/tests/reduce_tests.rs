// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use transduce_core::{from_fn, reduce, try_from_fn, Append, Reducer, Result, Step, Sum};
use transduce_error::TransduceError;
use transduce_test_utils::{CallCounter, FixtureError};

/// Sums elements and signals `Done` once the total reaches `limit`.
struct SumUntil {
    limit: u64,
}

impl Reducer<u64, u64> for SumUntil {
    fn step(&mut self, acc: u64, item: u64) -> Result<Step<u64>> {
        let total = acc + item;
        if total >= self.limit {
            Ok(Step::Done(total))
        } else {
            Ok(Step::Continue(total))
        }
    }
}

#[test]
fn test_empty_source_returns_initial() -> anyhow::Result<()> {
    // Arrange
    let source: Vec<u64> = Vec::new();

    // Act
    let result = reduce(source, 42, Sum)?;

    // Assert
    assert_eq!(result, 42);
    Ok(())
}

#[test]
fn test_folds_in_source_order() -> anyhow::Result<()> {
    // Act
    let result = reduce(vec!['a', 'b', 'c'], String::from(">"), Append)?;

    // Assert
    assert_eq!(result, ">abc");
    Ok(())
}

#[test]
fn test_one_step_per_element() -> anyhow::Result<()> {
    // Arrange
    let calls = CallCounter::new();
    let counter = calls.clone();
    let reducer = from_fn(move |acc: u64, x: u64| {
        counter.record();
        acc + x
    });

    // Act
    let result = reduce(1..=10, 0, reducer)?;

    // Assert
    assert_eq!(result, 55);
    assert_eq!(calls.count(), 10);
    Ok(())
}

#[test]
fn test_done_stops_pulling_from_source() -> anyhow::Result<()> {
    // Arrange
    let pulled = CallCounter::new();
    let source = (1..=100).inspect(|_| pulled.record());

    // Act
    let result = reduce(source, 0, SumUntil { limit: 10 })?;

    // Assert - 1 + 2 + 3 + 4 reaches the limit; element 5 is never pulled
    assert_eq!(result, 10);
    assert_eq!(pulled.count(), 4);
    Ok(())
}

#[test]
fn test_done_terminates_unbounded_source() -> anyhow::Result<()> {
    // Act
    let result = reduce(1.., 0, SumUntil { limit: 1_000 })?;

    // Assert
    assert_eq!(result, 1_035);
    Ok(())
}

#[test]
fn test_error_aborts_fold() {
    // Arrange
    let pulled = CallCounter::new();
    let source = (1..=10).inspect(|_| pulled.record());
    let reducer = try_from_fn(|acc: u64, x: u64| {
        if x == 3 {
            Err(TransduceError::user_error(FixtureError(x)))
        } else {
            Ok(acc + x)
        }
    });

    // Act
    let result = reduce(source, 0, reducer);

    // Assert
    let err = result.unwrap_err();
    assert!(err.is_user_error());
    assert_eq!(err.to_string(), "User error: fixture rejected element 3");
    assert_eq!(pulled.count(), 3);
}

#[test]
fn test_reduce_through_mutable_reference() -> anyhow::Result<()> {
    // Arrange
    let mut reducer = SumUntil { limit: 5 };

    // Act
    let first = reduce(vec![1, 1], 0, &mut reducer)?;
    let second = reduce(vec![4, 4], first, &mut reducer)?;

    // Assert
    assert_eq!(first, 2);
    assert_eq!(second, 6);
    Ok(())
}
