// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use transduce::prelude::*;
use transduce_test_utils::{
    incr, is_prime, is_twin_prime, square, CallCounter, FIRST_TEN_TWIN_PRIME_SQUARES,
};

#[test]
fn test_first_ten_twin_prime_squares() -> anyhow::Result<()> {
    // Arrange - n * n + 1, keep twin primes, stop after ten
    let xform = mapping(square)
        .then(mapping(incr))
        .then(filtering(is_twin_prime))
        .then(taking(10));

    // Act
    let result: Vec<u64> = transduce(1..=200, &xform, Append, Vec::new())?;

    // Assert
    assert_eq!(result, FIRST_TEN_TWIN_PRIME_SQUARES);
    assert!(result.windows(2).all(|w| w[0] < w[1]));
    for p in &result {
        assert!(is_prime(*p) && is_prime(*p + 2));
        assert!((2..=200).any(|n| n * n + 1 == *p));
    }
    Ok(())
}

#[test]
fn test_twin_prime_search_stops_at_tenth_match() -> anyhow::Result<()> {
    // Arrange
    let visited = CallCounter::new();
    let source = (1..=200).inspect(|_| visited.record());
    let xform = mapping(square)
        .then(mapping(incr))
        .then(filtering(is_twin_prime))
        .then(taking(10));

    // Act
    let result: Vec<u64> = transduce(source, xform, Append, Vec::new())?;

    // Assert - the tenth match is 160 * 160 + 1, so nothing past 160 is visited
    assert_eq!(result.last(), Some(&25_601));
    assert_eq!(visited.count(), 160);
    Ok(())
}

#[test]
fn test_same_pipeline_sums_instead_of_collecting() -> anyhow::Result<()> {
    // Arrange
    let xform = mapping(square)
        .then(mapping(incr))
        .then(filtering(is_twin_prime))
        .then(taking(10));

    // Act
    let total = transduce(1..=200, &xform, Sum, 0)?;
    let count = transduce(1..=200, &xform, Count, 0)?;

    // Assert
    assert_eq!(total, FIRST_TEN_TWIN_PRIME_SQUARES.iter().sum::<u64>());
    assert_eq!(count, 10);
    Ok(())
}

#[test]
fn test_finite_filter_scenario() -> anyhow::Result<()> {
    // Act
    let result: Vec<f64> = transduce(
        vec![1.0, 2.0, 3.0, f64::INFINITY],
        filtering(|x: &f64| x.is_finite()),
        Append,
        Vec::new(),
    )?;

    // Assert
    assert_eq!(result, vec![1.0, 2.0, 3.0]);
    Ok(())
}

#[test]
fn test_negative_take_rejected_at_construction() {
    let err = try_taking::<u64>(-5).unwrap_err();

    assert!(err.is_construction_error());
}

#[tokio::test]
async fn test_stream_source_matches_iterator_source() -> anyhow::Result<()> {
    // Arrange
    let xform = mapping(square)
        .then(mapping(incr))
        .then(filtering(is_twin_prime))
        .then(taking(10));

    // Act
    let from_stream: Vec<u64> = futures::stream::iter(1..=200)
        .transduce(&xform, Append, Vec::new())
        .await?;
    let from_iter: Vec<u64> = transduce(1..=200, &xform, Append, Vec::new())?;

    // Assert
    assert_eq!(from_stream, from_iter);
    Ok(())
}
