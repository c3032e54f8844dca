// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The reducer abstraction and the base reducers pipelines usually end in.

use crate::step::Step;
use core::ops::Add;
use transduce_error::Result;

/// Combines an accumulator with one element.
///
/// A reducer is invoked once per element, in source order, and hands the
/// accumulator back wrapped in a [`Step`]. Returning `Err` aborts the fold;
/// the driver propagates the error instead of a partial accumulator.
///
/// `&mut self` exists for reducers that must remember something between
/// calls, such as how many elements a bounded take has already accepted.
/// That state belongs to one reducer value and is never shared.
///
/// # Examples
///
/// ```rust
/// use transduce_core::{reduce, Append};
///
/// let out: Vec<i32> = reduce(vec![1, 2, 3], Vec::new(), Append).unwrap();
/// assert_eq!(out, vec![1, 2, 3]);
/// ```
pub trait Reducer<Acc, A> {
    /// Folds `item` into `acc`.
    ///
    /// # Errors
    ///
    /// Returns an error when a user-supplied function in the pipeline fails.
    fn step(&mut self, acc: Acc, item: A) -> Result<Step<Acc>>;
}

impl<Acc, A, R> Reducer<Acc, A> for &mut R
where
    R: Reducer<Acc, A> + ?Sized,
{
    fn step(&mut self, acc: Acc, item: A) -> Result<Step<Acc>> {
        (**self).step(acc, item)
    }
}

/// Appends each element to any accumulator implementing [`Extend`].
///
/// This is the "append to an ordered sequence" reducer: `Vec`, `VecDeque`,
/// `String` (for `char`s) and friends all work.
#[derive(Debug, Clone, Copy, Default)]
pub struct Append;

impl<Acc, A> Reducer<Acc, A> for Append
where
    Acc: Extend<A>,
{
    fn step(&mut self, mut acc: Acc, item: A) -> Result<Step<Acc>> {
        acc.extend(core::iter::once(item));
        Ok(Step::Continue(acc))
    }
}

/// Adds each element to a running total.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl<A> Reducer<A, A> for Sum
where
    A: Add<Output = A>,
{
    fn step(&mut self, acc: A, item: A) -> Result<Step<A>> {
        Ok(Step::Continue(acc + item))
    }
}

/// Counts the elements that reach it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

impl<A> Reducer<usize, A> for Count {
    fn step(&mut self, acc: usize, _item: A) -> Result<Step<usize>> {
        Ok(Step::Continue(acc + 1))
    }
}

/// A reducer built from a plain `(Acc, A) -> Acc` function. See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

/// Lifts a combining function into a [`Reducer`] that never terminates early.
///
/// # Examples
///
/// ```rust
/// use transduce_core::{from_fn, reduce};
///
/// let max = reduce(vec![3, 9, 4], i32::MIN, from_fn(|acc: i32, x: i32| acc.max(x))).unwrap();
/// assert_eq!(max, 9);
/// ```
pub fn from_fn<Acc, A, F>(f: F) -> FromFn<F>
where
    F: FnMut(Acc, A) -> Acc,
{
    FromFn { f }
}

impl<Acc, A, F> Reducer<Acc, A> for FromFn<F>
where
    F: FnMut(Acc, A) -> Acc,
{
    fn step(&mut self, acc: Acc, item: A) -> Result<Step<Acc>> {
        Ok(Step::Continue((self.f)(acc, item)))
    }
}

/// A reducer built from a fallible combining function. See [`try_from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct TryFromFn<F> {
    f: F,
}

/// Lifts a fallible combining function into a [`Reducer`].
///
/// The first `Err` aborts the fold.
pub fn try_from_fn<Acc, A, F>(f: F) -> TryFromFn<F>
where
    F: FnMut(Acc, A) -> Result<Acc>,
{
    TryFromFn { f }
}

impl<Acc, A, F> Reducer<Acc, A> for TryFromFn<F>
where
    F: FnMut(Acc, A) -> Result<Acc>,
{
    fn step(&mut self, acc: Acc, item: A) -> Result<Step<Acc>> {
        (self.f)(acc, item).map(Step::Continue)
    }
}
