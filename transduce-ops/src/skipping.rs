// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skipping transducer that discards the first n elements.

use core::fmt;
use core::marker::PhantomData;
use transduce_core::{Reducer, Result, Step, Transducer};

/// Transducer returned by [`skipping`].
pub struct Skipping<A> {
    n: usize,
    _element: PhantomData<fn(A) -> A>,
}

/// Discards the first `n` elements, then forwards the rest.
///
/// If the source has fewer than `n` elements nothing reaches the downstream
/// reducer. Like [`taking`](crate::taking), every applied reducer counts on
/// its own.
///
/// # Examples
///
/// ```rust
/// use transduce_core::{transduce, Append, TransducerExt};
/// use transduce_ops::{skipping, taking};
///
/// let window: Vec<u32> = transduce(1..=10, skipping(2).then(taking(3)), Append, Vec::new()).unwrap();
/// assert_eq!(window, vec![3, 4, 5]);
/// ```
#[must_use]
pub const fn skipping<A>(n: usize) -> Skipping<A> {
    Skipping {
        n,
        _element: PhantomData,
    }
}

impl<A> Transducer<A, A> for Skipping<A> {
    type Output<R> = Skipped<R, A>;

    fn apply<R>(&self, downstream: R) -> Self::Output<R> {
        Skipped {
            to_skip: self.n,
            downstream,
            _element: PhantomData,
        }
    }
}

impl<A> Clone for Skipping<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Skipping<A> {}

impl<A> fmt::Debug for Skipping<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Skipping").field("n", &self.n).finish()
    }
}

/// Reducer produced by applying a [`Skipping`].
pub struct Skipped<R, A> {
    to_skip: usize,
    downstream: R,
    _element: PhantomData<fn(A) -> A>,
}

impl<Acc, A, R> Reducer<Acc, A> for Skipped<R, A>
where
    R: Reducer<Acc, A>,
{
    fn step(&mut self, acc: Acc, item: A) -> Result<Step<Acc>> {
        if self.to_skip > 0 {
            self.to_skip -= 1;
            return Ok(Step::Continue(acc));
        }
        self.downstream.step(acc, item)
    }
}
