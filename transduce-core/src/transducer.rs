// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The transducer abstraction and its composition law.
//!
//! A transducer takes a reducer that consumes `B` and wraps it into a
//! reducer that consumes `A`. The direction is the reverse of the element
//! transformation it describes: `mapping(f)` with `f: A -> B` is a
//! `Transducer<A, B>` because the wrapped reducer sits downstream of `f`.
//!
//! # Reading order
//!
//! `compose(t1, t2).apply(r)` is `t1.apply(t2.apply(r))`. The first
//! transducer named is the outermost wrapper, so it sees every element
//! first, exactly like a left-to-right pipe:
//!
//! ```text
//! square.then(incr).then(take(10))   ==>   square( incr( take10( append ) ) )
//! element ──> square ──> incr ──> take10 ──> append
//! ```

use core::fmt;
use core::marker::PhantomData;

/// Converts a reducer of `B` into a reducer of `A`.
///
/// The accumulator type is not part of the trait: [`Self::Output`] is a
/// reducer for every accumulator the downstream reducer supports, so one
/// transducer can feed a `Vec`, a sum or any other base reducer.
///
/// `apply` borrows the transducer. Every call builds an independent reducer
/// with its own private state, so one transducer value can back any number
/// of pipelines.
pub trait Transducer<A, B> {
    /// The reducer produced by wrapping a downstream reducer `R`.
    type Output<R>;

    /// Wraps `downstream`, yielding a reducer that accepts `A`.
    fn apply<R>(&self, downstream: R) -> Self::Output<R>;
}

impl<A, B, T> Transducer<A, B> for &T
where
    T: Transducer<A, B> + ?Sized,
{
    type Output<R> = <T as Transducer<A, B>>::Output<R>;

    fn apply<R>(&self, downstream: R) -> Self::Output<R> {
        (**self).apply(downstream)
    }
}

/// The identity transducer: returns the downstream reducer unchanged.
pub struct Identity<A> {
    _element: PhantomData<fn(A) -> A>,
}

/// Creates the identity element of transducer composition.
#[must_use]
pub const fn identity<A>() -> Identity<A> {
    Identity {
        _element: PhantomData,
    }
}

impl<A> Transducer<A, A> for Identity<A> {
    type Output<R> = R;

    fn apply<R>(&self, downstream: R) -> Self::Output<R> {
        downstream
    }
}

impl<A> Clone for Identity<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Identity<A> {}

impl<A> fmt::Debug for Identity<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

/// Two transducers applied in sequence. See [`compose`].
///
/// `B` is the element type passed from `first` to `second`.
pub struct Compose<T1, T2, B> {
    first: T1,
    second: T2,
    _mid: PhantomData<fn(B) -> B>,
}

/// Composes `first` (which sees elements first) with `second`.
///
/// `compose(t1, t2).apply(r) == t1.apply(t2.apply(r))`. Composition is
/// associative, has [`identity`] as its neutral element, and is not
/// commutative: `compose(filter, take)` and `compose(take, filter)` stop at
/// different points.
pub fn compose<A, B, X, T1, T2>(first: T1, second: T2) -> Compose<T1, T2, B>
where
    T1: Transducer<A, B>,
    T2: Transducer<B, X>,
{
    Compose {
        first,
        second,
        _mid: PhantomData,
    }
}

impl<A, B, X, T1, T2> Transducer<A, X> for Compose<T1, T2, B>
where
    T1: Transducer<A, B>,
    T2: Transducer<B, X>,
{
    type Output<R> = <T1 as Transducer<A, B>>::Output<<T2 as Transducer<B, X>>::Output<R>>;

    fn apply<R>(&self, downstream: R) -> Self::Output<R> {
        self.first.apply(self.second.apply(downstream))
    }
}

impl<T1: Clone, T2: Clone, B> Clone for Compose<T1, T2, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _mid: PhantomData,
        }
    }
}

impl<T1: fmt::Debug, T2: fmt::Debug, B> fmt::Debug for Compose<T1, T2, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Extension trait providing left-to-right pipeline construction.
pub trait TransducerExt<A, B>: Transducer<A, B> + Sized {
    /// Appends `next` after `self`: `self` sees each element first.
    ///
    /// `a.then(b).then(c)` is `compose(compose(a, b), c)`.
    fn then<X, T>(self, next: T) -> Compose<Self, T, B>
    where
        T: Transducer<B, X>,
    {
        compose(self, next)
    }
}

impl<A, B, T> TransducerExt<A, B> for T where T: Transducer<A, B> {}
