// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Transduce
//!
//! Composable transformations over sequential data, fused into a single pass.
//!
//! ## Overview
//!
//! Chaining `map`, `filter` and `take` over a collection usually means one
//! traversal and one intermediate collection per stage. A transducer instead
//! describes a stage as a transformation of the *reducer* that will consume
//! its output. Composing stages composes reducer transformations, so the
//! whole chain collapses into one reducer that processes the source once,
//! with no intermediate collections, and can stop early.
//!
//! The stages know nothing about what is being built: the same pipeline can
//! append into a `Vec`, add into a sum, or feed any other [`Reducer`].
//!
//! ## Quick Start
//!
//! ```rust
//! use transduce::prelude::*;
//!
//! let xform = mapping(|n: u64| n * n)
//!     .then(filtering(|n: &u64| n % 2 == 1))
//!     .then(taking(3));
//!
//! let odd_squares: Vec<u64> = transduce(1.., &xform, Append, Vec::new()).unwrap();
//! let total = transduce(1.., &xform, Sum, 0).unwrap();
//!
//! assert_eq!(odd_squares, vec![1, 9, 25]);
//! assert_eq!(total, 35);
//! ```
//!
//! ## Composition order
//!
//! `a.then(b)` is `compose(a, b)`, and `compose(a, b).apply(r)` is
//! `a.apply(b.apply(r))`. The first stage named is the outermost wrapper,
//! so it is the first to see each element. Pipelines read left to right in
//! the order elements flow.
//!
//! ## Early termination
//!
//! Every reducer call returns a [`Step`]. `Step::Done` tells the driver to
//! stop; [`reduce`] never pulls another element after it, which makes
//! unbounded sources safe as long as something like [`taking`] bounds them.
//!
//! ## Errors
//!
//! Reduction is infallible on its own. [`try_mapping`], [`try_filtering`]
//! and [`try_from_fn`] accept user functions returning [`Result`]; the first
//! `Err` aborts the fold and is returned by the driver.

pub use transduce_core::{
    compose, from_fn, identity, reduce, transduce, try_from_fn, Append, Compose, Count, FromFn,
    Identity, Reducer, Step, Sum, Transducer, TransducerExt, TryFromFn,
};
pub use transduce_error::{IntoTransduceError, Result, ResultExt, TransduceError};
pub use transduce_ops::{
    filtering, inspecting, mapping, skipping, taking, taking_while, try_filtering, try_mapping,
    try_taking, Filtering, Inspecting, Mapping, Skipping, Taking, TakingWhile, TryFiltering,
    TryMapping,
};

#[cfg(feature = "stream")]
pub use transduce_stream::{reduce_stream, TransduceStreamExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use transduce_core::{
        compose, identity, reduce, transduce, Append, Count, Reducer, Step, Sum, Transducer,
        TransducerExt,
    };
    pub use transduce_error::{Result, TransduceError};
    pub use transduce_ops::{
        filtering, inspecting, mapping, skipping, taking, taking_while, try_filtering,
        try_mapping, try_taking,
    };

    #[cfg(feature = "stream")]
    pub use transduce_stream::TransduceStreamExt;
}
