// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Driving transducer pipelines from asynchronous sources.
//!
//! Reducers and transducers are synchronous; only the source is async here.
//! [`reduce_stream`] awaits one element at a time and hands it to the reducer,
//! with the same contract as [`transduce_core::reduce`]: one step per element,
//! no poll after a termination signal, and the first error aborts the fold.
//!
//! A termination signal therefore doubles as cancellation: a pipeline ending
//! in `taking(n)` completes even when the stream itself never ends.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod reduce_stream;

pub use reduce_stream::{reduce_stream, TransduceStreamExt};
