// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filtering transducer: forwards only the elements matching a predicate.

use transduce_core::{Reducer, Result, Step, Transducer};

/// Transducer returned by [`filtering`].
#[derive(Debug, Clone, Copy)]
pub struct Filtering<P> {
    predicate: P,
}

/// Keeps the elements for which `predicate` returns `true`.
///
/// Rejected elements never reach the downstream reducer; the accumulator is
/// returned unchanged with [`Step::Continue`]. A termination signal can
/// therefore only come from downstream, and only for accepted elements.
/// Once downstream has signalled [`Step::Done`], every later element returns
/// `Done` without evaluating the predicate.
///
/// # Examples
///
/// ```rust
/// use transduce_core::{transduce, Append};
/// use transduce_ops::filtering;
///
/// let finite: Vec<f64> = transduce(
///     vec![1.0, 2.0, 3.0, f64::INFINITY],
///     filtering(|x: &f64| x.is_finite()),
///     Append,
///     Vec::new(),
/// )
/// .unwrap();
/// assert_eq!(finite, vec![1.0, 2.0, 3.0]);
/// ```
pub fn filtering<A, P>(predicate: P) -> Filtering<P>
where
    P: FnMut(&A) -> bool + Clone,
{
    Filtering { predicate }
}

impl<A, P> Transducer<A, A> for Filtering<P>
where
    P: FnMut(&A) -> bool + Clone,
{
    type Output<R> = Filtered<P, R>;

    fn apply<R>(&self, downstream: R) -> Self::Output<R> {
        Filtered {
            predicate: self.predicate.clone(),
            downstream,
            finished: false,
        }
    }
}

/// Reducer produced by applying a [`Filtering`].
#[derive(Debug, Clone)]
pub struct Filtered<P, R> {
    predicate: P,
    downstream: R,
    finished: bool,
}

impl<Acc, A, P, R> Reducer<Acc, A> for Filtered<P, R>
where
    P: FnMut(&A) -> bool,
    R: Reducer<Acc, A>,
{
    fn step(&mut self, acc: Acc, item: A) -> Result<Step<Acc>> {
        if self.finished {
            return Ok(Step::Done(acc));
        }
        if !(self.predicate)(&item) {
            return Ok(Step::Continue(acc));
        }
        let step = self.downstream.step(acc, item)?;
        self.finished = step.is_done();
        Ok(step)
    }
}
