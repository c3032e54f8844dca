// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Taking transducer: accepts at most `n` elements, then signals termination.

use core::fmt;
use core::marker::PhantomData;
use transduce_core::{Reducer, Result, Step, Transducer};
use transduce_error::TransduceError;

/// Transducer returned by [`taking`] and [`try_taking`].
pub struct Taking<A> {
    n: usize,
    _element: PhantomData<fn(A) -> A>,
}

/// Forwards the first `n` elements, then stops the reduction.
///
/// # Termination
///
/// The reducer signals [`Step::Done`] together with the result of the `n`-th
/// accepted element, so a driver never pulls element `n + 1` from the source.
/// With `n == 0` the downstream reducer is never invoked: the first element
/// observed yields `Done` with the accumulator unchanged.
///
/// A `Done` coming from downstream before the bound is reached is passed
/// back as-is.
///
/// # State
///
/// Each [`apply`](Transducer::apply) starts a fresh counter. Two reducers
/// built from the same `Taking` value count independently.
///
/// # Examples
///
/// ```rust
/// use transduce_core::{transduce, Append};
/// use transduce_ops::taking;
///
/// let first: Vec<u32> = transduce(1.., taking(3), Append, Vec::new()).unwrap();
/// assert_eq!(first, vec![1, 2, 3]);
/// ```
#[must_use]
pub const fn taking<A>(n: usize) -> Taking<A> {
    Taking {
        n,
        _element: PhantomData,
    }
}

/// Like [`taking`], for counts arriving as signed integers.
///
/// # Errors
///
/// Returns [`TransduceError::InvalidArgument`] when `n` is negative. The
/// count is never clamped to zero.
pub fn try_taking<A>(n: i64) -> Result<Taking<A>> {
    usize::try_from(n).map(taking).map_err(|_| {
        TransduceError::invalid_argument(format!("take count must be non-negative, got {n}"))
    })
}

impl<A> Taking<A> {
    /// The configured bound.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.n
    }
}

impl<A> Transducer<A, A> for Taking<A> {
    type Output<R> = Taken<R, A>;

    fn apply<R>(&self, downstream: R) -> Self::Output<R> {
        Taken {
            remaining: self.n,
            downstream,
            _element: PhantomData,
        }
    }
}

impl<A> Clone for Taking<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Taking<A> {}

impl<A> fmt::Debug for Taking<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Taking").field("n", &self.n).finish()
    }
}

/// Reducer produced by applying a [`Taking`]; owns its own counter.
pub struct Taken<R, A> {
    remaining: usize,
    downstream: R,
    _element: PhantomData<fn(A) -> A>,
}

impl<R, A> Taken<R, A> {
    /// How many more elements this reducer will accept.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<Acc, A, R> Reducer<Acc, A> for Taken<R, A>
where
    R: Reducer<Acc, A>,
{
    fn step(&mut self, acc: Acc, item: A) -> Result<Step<Acc>> {
        if self.remaining == 0 {
            return Ok(Step::Done(acc));
        }

        self.remaining -= 1;
        let step = self.downstream.step(acc, item)?;

        if step.is_done() || self.remaining == 0 {
            self.remaining = 0;
            Ok(step.into_done())
        } else {
            Ok(step)
        }
    }
}

impl<R: fmt::Debug, A> fmt::Debug for Taken<R, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Taken")
            .field("remaining", &self.remaining)
            .field("downstream", &self.downstream)
            .finish()
    }
}
