// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Taking-while transducer: forwards elements until a predicate first fails.

use transduce_core::{Reducer, Result, Step, Transducer};

/// Transducer returned by [`taking_while`].
#[derive(Debug, Clone, Copy)]
pub struct TakingWhile<P> {
    predicate: P,
}

/// Forwards elements while `predicate` holds.
///
/// The first element failing the predicate is dropped and the reducer
/// signals [`Step::Done`]; the predicate is never evaluated again for that
/// reducer instance.
///
/// # Examples
///
/// ```rust
/// use transduce_core::{transduce, Sum};
/// use transduce_ops::taking_while;
///
/// let total = transduce(1.., taking_while(|x: &u64| *x <= 4), Sum, 0).unwrap();
/// assert_eq!(total, 10);
/// ```
pub fn taking_while<A, P>(predicate: P) -> TakingWhile<P>
where
    P: FnMut(&A) -> bool + Clone,
{
    TakingWhile { predicate }
}

impl<A, P> Transducer<A, A> for TakingWhile<P>
where
    P: FnMut(&A) -> bool + Clone,
{
    type Output<R> = TakenWhile<P, R>;

    fn apply<R>(&self, downstream: R) -> Self::Output<R> {
        TakenWhile {
            predicate: self.predicate.clone(),
            downstream,
            finished: false,
        }
    }
}

/// Reducer produced by applying a [`TakingWhile`].
#[derive(Debug, Clone)]
pub struct TakenWhile<P, R> {
    predicate: P,
    downstream: R,
    finished: bool,
}

impl<Acc, A, P, R> Reducer<Acc, A> for TakenWhile<P, R>
where
    P: FnMut(&A) -> bool,
    R: Reducer<Acc, A>,
{
    fn step(&mut self, acc: Acc, item: A) -> Result<Step<Acc>> {
        if self.finished || !(self.predicate)(&item) {
            self.finished = true;
            return Ok(Step::Done(acc));
        }
        self.downstream.step(acc, item)
    }
}
