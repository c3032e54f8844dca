// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core abstractions for single-pass, allocation-free reduction pipelines.
//!
//! - [`Reducer`]: combines an accumulator with one element, returning a [`Step`]
//! - [`Step`]: the accumulator plus a continue/stop flag
//! - [`reduce`]: drives a reducer over a source, stopping at the first [`Step::Done`]
//! - [`Transducer`]: turns a reducer of `B` into a reducer of `A`
//! - [`Compose`] / [`TransducerExt::then`]: left-to-right pipeline construction

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[doc(hidden)]
pub mod logging;
pub mod reduce;
pub mod reducer;
pub mod step;
pub mod transducer;

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing as __tracing;

pub use self::reduce::{reduce, transduce};
pub use self::reducer::{from_fn, try_from_fn, Append, Count, FromFn, Reducer, Sum, TryFromFn};
pub use self::step::Step;
pub use self::transducer::{compose, identity, Compose, Identity, Transducer, TransducerExt};
pub use transduce_error::{Result, TransduceError};
