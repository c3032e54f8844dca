// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fallible mapping transducer.

use transduce_core::{Reducer, Result, Step, Transducer};

/// Transducer returned by [`try_mapping`].
#[derive(Debug, Clone, Copy)]
pub struct TryMapping<F> {
    f: F,
}

/// Transforms each element with a function that may fail.
///
/// An `Err` from `f` aborts the reduction: the downstream reducer is not
/// called and the driver returns the error instead of an accumulator.
///
/// # Examples
///
/// ```rust
/// use transduce_core::{transduce, Append, TransduceError};
/// use transduce_ops::try_mapping;
///
/// let parse = try_mapping(|s: &str| s.parse::<i32>().map_err(TransduceError::user_error));
///
/// let ok: Vec<i32> = transduce(vec!["1", "2"], parse, Append, Vec::new()).unwrap();
/// assert_eq!(ok, vec![1, 2]);
///
/// let failed = transduce(vec!["1", "x", "3"], parse, Append, Vec::<i32>::new());
/// assert!(failed.is_err());
/// ```
pub fn try_mapping<A, B, F>(f: F) -> TryMapping<F>
where
    F: FnMut(A) -> Result<B> + Clone,
{
    TryMapping { f }
}

impl<A, B, F> Transducer<A, B> for TryMapping<F>
where
    F: FnMut(A) -> Result<B> + Clone,
{
    type Output<R> = TryMapped<F, R>;

    fn apply<R>(&self, downstream: R) -> Self::Output<R> {
        TryMapped {
            f: self.f.clone(),
            downstream,
        }
    }
}

/// Reducer produced by applying a [`TryMapping`].
#[derive(Debug, Clone)]
pub struct TryMapped<F, R> {
    f: F,
    downstream: R,
}

impl<Acc, A, B, F, R> Reducer<Acc, A> for TryMapped<F, R>
where
    F: FnMut(A) -> Result<B>,
    R: Reducer<Acc, B>,
{
    fn step(&mut self, acc: Acc, item: A) -> Result<Step<Acc>> {
        let mapped = (self.f)(item)?;
        self.downstream.step(acc, mapped)
    }
}
