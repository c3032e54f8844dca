// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use futures::{pin_mut, Stream, StreamExt};
use transduce_core::{Reducer, Step, Transducer};
use transduce_error::Result;

/// Folds an async `stream` into `init` with `reducer`.
///
/// The stream is polled for the next element only after the previous step
/// returned [`Step::Continue`]. On [`Step::Done`] the future resolves at once
/// and the stream is dropped without being polled again.
///
/// # Errors
///
/// Returns the first error produced by `reducer`.
///
/// # Examples
///
/// ```rust
/// use futures::stream;
/// use transduce_core::Sum;
/// use transduce_stream::reduce_stream;
///
/// # async fn example() {
/// let total = reduce_stream(stream::iter(vec![1, 2, 3]), 0, Sum).await.unwrap();
/// assert_eq!(total, 6);
/// # }
/// ```
pub async fn reduce_stream<S, Acc, R>(stream: S, init: Acc, mut reducer: R) -> Result<Acc>
where
    S: Stream,
    R: Reducer<Acc, S::Item>,
{
    pin_mut!(stream);
    let mut acc = init;
    let mut consumed = 0usize;

    while let Some(item) = stream.next().await {
        consumed += 1;
        match reducer.step(acc, item) {
            Ok(Step::Continue(next)) => acc = next,
            Ok(Step::Done(done)) => {
                transduce_core::debug!("reduce_stream short-circuited after {consumed} elements");
                return Ok(done);
            }
            Err(e) => {
                transduce_core::debug!("reduce_stream aborted at element {consumed}: {e}");
                return Err(e);
            }
        }
    }

    transduce_core::trace!("reduce_stream exhausted source after {consumed} elements");
    Ok(acc)
}

/// Extension trait running a transducer pipeline over any [`Stream`].
pub trait TransduceStreamExt: Stream + Sized {
    /// Applies `xform` to `reducer` and folds the stream with the result.
    ///
    /// Shorthand for `reduce_stream(self, init, xform.apply(reducer))`.
    fn transduce<B, T, R, Acc>(
        self,
        xform: T,
        reducer: R,
        init: Acc,
    ) -> impl Future<Output = Result<Acc>>
    where
        T: Transducer<Self::Item, B>,
        <T as Transducer<Self::Item, B>>::Output<R>: Reducer<Acc, Self::Item>,
    {
        reduce_stream(self, init, xform.apply(reducer))
    }
}

impl<S> TransduceStreamExt for S where S: Stream {}
