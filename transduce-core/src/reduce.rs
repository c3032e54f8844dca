// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The synchronous reduce driver.

use crate::reducer::Reducer;
use crate::step::Step;
use crate::transducer::Transducer;
use transduce_error::Result;

/// Folds `source` into `init` with `reducer`, in a single pass.
///
/// # Behavior
///
/// - `reducer` is called exactly once per consumed element, in source order
/// - After each call the returned [`Step`] is inspected: on `Done` the driver
///   returns immediately and never pulls another element from `source`
/// - On `Err` the fold is aborted and the error is returned; no partial
///   accumulator escapes
/// - An empty source returns `init` unchanged
///
/// Because elements are pulled one at a time, `source` may be an unbounded
/// iterator as long as the pipeline terminates.
///
/// # Errors
///
/// Returns the first error produced by `reducer`.
///
/// # Examples
///
/// ```rust
/// use transduce_core::{reduce, Sum};
///
/// assert_eq!(reduce(1..=4, 0, Sum).unwrap(), 10);
/// assert_eq!(reduce(Vec::<i32>::new(), 7, Sum).unwrap(), 7);
/// ```
pub fn reduce<I, Acc, R>(source: I, init: Acc, mut reducer: R) -> Result<Acc>
where
    I: IntoIterator,
    R: Reducer<Acc, I::Item>,
{
    let mut acc = init;
    let mut consumed = 0usize;

    for item in source {
        consumed += 1;
        match reducer.step(acc, item) {
            Ok(Step::Continue(next)) => acc = next,
            Ok(Step::Done(done)) => {
                crate::debug!("reduce short-circuited after {consumed} elements");
                return Ok(done);
            }
            Err(e) => {
                crate::debug!("reduce aborted at element {consumed}: {e}");
                return Err(e);
            }
        }
    }

    crate::trace!("reduce exhausted source after {consumed} elements");
    Ok(acc)
}

/// Applies `xform` to `reducer` and folds `source` with the result.
///
/// Shorthand for `reduce(source, init, xform.apply(reducer))`.
///
/// # Errors
///
/// Returns the first error produced by the composed reducer.
pub fn transduce<I, B, T, R, Acc>(source: I, xform: T, reducer: R, init: Acc) -> Result<Acc>
where
    I: IntoIterator,
    T: Transducer<I::Item, B>,
    <T as Transducer<I::Item, B>>::Output<R>: Reducer<Acc, I::Item>,
{
    reduce(source, init, xform.apply(reducer))
}
