// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use transduce::prelude::*;
use transduce_test_utils::{incr, is_even, square, CallCounter};

fn sources() -> Vec<Vec<u64>> {
    vec![
        vec![],
        vec![7],
        vec![1, 2, 3, 4, 5],
        (0..40).map(|n| (n * 13) % 17).collect(),
    ]
}

#[test]
fn test_mapping_identity_law() -> anyhow::Result<()> {
    for xs in sources() {
        // Act
        let plain: Vec<u64> = reduce(xs.clone(), Vec::new(), Append)?;
        let mapped: Vec<u64> = reduce(xs.clone(), Vec::new(), mapping(|x: u64| x).apply(Append))?;
        let plain_sum = reduce(xs.clone(), 0, Sum)?;
        let mapped_sum = reduce(xs, 0, mapping(|x: u64| x).apply(Sum))?;

        // Assert
        assert_eq!(plain, mapped);
        assert_eq!(plain_sum, mapped_sum);
    }
    Ok(())
}

#[test]
fn test_map_fusion() -> anyhow::Result<()> {
    for xs in sources() {
        // Act
        let composed: Vec<u64> =
            reduce(xs.clone(), Vec::new(), compose(mapping(square), mapping(incr)).apply(Append))?;
        let fused: Vec<u64> =
            reduce(xs, Vec::new(), mapping(|x: u64| incr(square(x))).apply(Append))?;

        // Assert - square runs first because it is named first
        assert_eq!(composed, fused);
    }
    Ok(())
}

#[test]
fn test_filter_correctness() -> anyhow::Result<()> {
    for xs in sources() {
        // Arrange
        let expected: Vec<u64> = xs.iter().copied().filter(is_even).collect();

        // Act
        let result: Vec<u64> = reduce(xs, Vec::new(), filtering(is_even).apply(Append))?;

        // Assert
        assert_eq!(result, expected);
    }
    Ok(())
}

#[test]
fn test_bounded_take() -> anyhow::Result<()> {
    for xs in sources() {
        for n in 0..=xs.len() + 2 {
            // Act
            let result: Vec<u64> = reduce(xs.clone(), Vec::new(), taking(n).apply(Append))?;

            // Assert
            let expected = n.min(xs.len());
            assert_eq!(result.len(), expected);
            assert_eq!(result, xs[..expected]);
        }
    }
    Ok(())
}

#[test]
fn test_composition_is_associative() -> anyhow::Result<()> {
    for xs in sources() {
        // Arrange
        let left = compose(compose(mapping(square), filtering(is_even)), taking(3));
        let right = compose(mapping(square), compose(filtering(is_even), taking(3)));

        // Act
        let from_left: Vec<u64> = transduce(xs.clone(), &left, Append, Vec::new())?;
        let from_right: Vec<u64> = transduce(xs, &right, Append, Vec::new())?;

        // Assert
        assert_eq!(from_left, from_right);
    }
    Ok(())
}

#[test]
fn test_composition_is_not_commutative() -> anyhow::Result<()> {
    // Arrange
    let xs: Vec<u64> = (1..=10).collect();

    // Act
    let filter_then_take: Vec<u64> =
        transduce(xs.clone(), filtering(is_even).then(taking(2)), Append, Vec::new())?;
    let take_then_filter: Vec<u64> =
        transduce(xs, taking(2).then(filtering(is_even)), Append, Vec::new())?;

    // Assert
    assert_eq!(filter_then_take, vec![2, 4]);
    assert_eq!(take_then_filter, vec![2]);
    Ok(())
}

#[test]
fn test_identity_is_neutral() -> anyhow::Result<()> {
    for xs in sources() {
        let base: Vec<u64> = transduce(xs.clone(), mapping(square), Append, Vec::new())?;
        let left: Vec<u64> =
            transduce(xs.clone(), identity().then(mapping(square)), Append, Vec::new())?;
        let right: Vec<u64> =
            transduce(xs, mapping(square).then(identity()), Append, Vec::new())?;

        assert_eq!(base, left);
        assert_eq!(base, right);
    }
    Ok(())
}

#[test]
fn test_single_pass() -> anyhow::Result<()> {
    // Arrange
    let visited = CallCounter::new();
    let squared = CallCounter::new();
    let incremented = CallCounter::new();
    let tested = CallCounter::new();
    let source = (1..=1_000).inspect(|_| visited.record());

    let xform = mapping(squared.counting(square))
        .then(mapping(incremented.counting(incr)))
        .then(filtering(tested.counting_predicate(|n: &u64| n % 5 == 0)))
        .then(taking(4));

    // Act
    let result: Vec<u64> = transduce(source, xform, Append, Vec::new())?;

    // Assert - every stage ran exactly once per visited element, and no more
    assert_eq!(result, vec![5, 10, 50, 65]);
    assert_eq!(visited.count(), 8);
    assert_eq!(squared.count(), visited.count());
    assert_eq!(incremented.count(), visited.count());
    assert_eq!(tested.count(), visited.count());
    Ok(())
}

#[test]
fn test_independent_instantiation() -> anyhow::Result<()> {
    // Arrange
    let take_five = taking(5);
    let mut left = take_five.apply(Append);
    let mut right = take_five.apply(Append);

    // Act - interleave the two reducers over different sources
    let mut left_acc: Vec<u64> = Vec::new();
    let mut right_acc: Vec<u64> = Vec::new();
    for (a, b) in (1..=3).zip(101..=103) {
        left_acc = left.step(left_acc, a)?.into_inner();
        right_acc = right.step(right_acc, b)?.into_inner();
    }
    let left_acc = reduce(4..=10, left_acc, &mut left)?;
    let right_acc = reduce(vec![104], right_acc, &mut right)?;

    // Assert - neither counter leaked into the other
    assert_eq!(left_acc, vec![1, 2, 3, 4, 5]);
    assert_eq!(right_acc, vec![101, 102, 103, 104]);
    Ok(())
}
