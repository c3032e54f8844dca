// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Inspecting transducer for side-effect observation without modifying elements.

use transduce_core::{Reducer, Result, Step, Transducer};

/// Transducer returned by [`inspecting`].
#[derive(Debug, Clone, Copy)]
pub struct Inspecting<F> {
    f: F,
}

/// Calls `f` with a reference to each element, then forwards it unchanged.
///
/// Useful for debugging or metrics. Placed after a `filtering` stage it only
/// sees accepted elements; placed first it sees every element the driver pulls.
pub fn inspecting<A, F>(f: F) -> Inspecting<F>
where
    F: FnMut(&A) + Clone,
{
    Inspecting { f }
}

impl<A, F> Transducer<A, A> for Inspecting<F>
where
    F: FnMut(&A) + Clone,
{
    type Output<R> = Inspected<F, R>;

    fn apply<R>(&self, downstream: R) -> Self::Output<R> {
        Inspected {
            f: self.f.clone(),
            downstream,
        }
    }
}

/// Reducer produced by applying an [`Inspecting`].
#[derive(Debug, Clone)]
pub struct Inspected<F, R> {
    f: F,
    downstream: R,
}

impl<Acc, A, F, R> Reducer<Acc, A> for Inspected<F, R>
where
    F: FnMut(&A),
    R: Reducer<Acc, A>,
{
    fn step(&mut self, acc: Acc, item: A) -> Result<Step<Acc>> {
        (self.f)(&item);
        self.downstream.step(acc, item)
    }
}
