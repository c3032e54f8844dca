// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fallible filtering transducer.

use transduce_core::{Reducer, Result, Step, Transducer};

/// Transducer returned by [`try_filtering`].
#[derive(Debug, Clone, Copy)]
pub struct TryFiltering<P> {
    predicate: P,
}

/// Keeps the elements for which `predicate` returns `Ok(true)`.
///
/// An `Err` from the predicate aborts the reduction.
pub fn try_filtering<A, P>(predicate: P) -> TryFiltering<P>
where
    P: FnMut(&A) -> Result<bool> + Clone,
{
    TryFiltering { predicate }
}

impl<A, P> Transducer<A, A> for TryFiltering<P>
where
    P: FnMut(&A) -> Result<bool> + Clone,
{
    type Output<R> = TryFiltered<P, R>;

    fn apply<R>(&self, downstream: R) -> Self::Output<R> {
        TryFiltered {
            predicate: self.predicate.clone(),
            downstream,
            finished: false,
        }
    }
}

/// Reducer produced by applying a [`TryFiltering`].
#[derive(Debug, Clone)]
pub struct TryFiltered<P, R> {
    predicate: P,
    downstream: R,
    finished: bool,
}

impl<Acc, A, P, R> Reducer<Acc, A> for TryFiltered<P, R>
where
    P: FnMut(&A) -> Result<bool>,
    R: Reducer<Acc, A>,
{
    fn step(&mut self, acc: Acc, item: A) -> Result<Step<Acc>> {
        if self.finished {
            return Ok(Step::Done(acc));
        }
        if !(self.predicate)(&item)? {
            return Ok(Step::Continue(acc));
        }
        let step = self.downstream.step(acc, item)?;
        self.finished = step.is_done();
        Ok(step)
    }
}
