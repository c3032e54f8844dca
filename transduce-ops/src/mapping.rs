// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Mapping transducer: transforms each element before it reaches the downstream reducer.

use transduce_core::{Reducer, Result, Step, Transducer};

/// Transducer returned by [`mapping`].
#[derive(Debug, Clone, Copy)]
pub struct Mapping<F> {
    f: F,
}

/// Transforms every element with `f` before passing it downstream.
///
/// For `f: A -> B` this is a `Transducer<A, B>`: it turns a reducer of `B`
/// into a reducer of `A`. `f` is called exactly once per element, then the
/// downstream reducer is called with the result. The termination signal of
/// the downstream reducer is passed back unchanged.
///
/// `f` must be `Clone` because each [`apply`](Transducer::apply) gets its own copy.
///
/// # Examples
///
/// ```rust
/// use transduce_core::{transduce, Append};
/// use transduce_ops::mapping;
///
/// let out: Vec<i32> = transduce(vec![1, 2, 3], mapping(|x: i32| x * x), Append, Vec::new()).unwrap();
/// assert_eq!(out, vec![1, 4, 9]);
/// ```
pub fn mapping<A, B, F>(f: F) -> Mapping<F>
where
    F: FnMut(A) -> B + Clone,
{
    Mapping { f }
}

impl<A, B, F> Transducer<A, B> for Mapping<F>
where
    F: FnMut(A) -> B + Clone,
{
    type Output<R> = Mapped<F, R>;

    fn apply<R>(&self, downstream: R) -> Self::Output<R> {
        Mapped {
            f: self.f.clone(),
            downstream,
        }
    }
}

/// Reducer produced by applying a [`Mapping`].
#[derive(Debug, Clone)]
pub struct Mapped<F, R> {
    f: F,
    downstream: R,
}

impl<Acc, A, B, F, R> Reducer<Acc, A> for Mapped<F, R>
where
    F: FnMut(A) -> B,
    R: Reducer<Acc, B>,
{
    fn step(&mut self, acc: Acc, item: A) -> Result<Step<Acc>> {
        let mapped = (self.f)(item);
        self.downstream.step(acc, mapped)
    }
}
