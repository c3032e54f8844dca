// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the transduce workspace.
//!
//! This crate is for development and testing only. It deliberately depends
//! on nothing but `transduce-error`, so every crate in the workspace can use
//! it as a dev-dependency without pulling in a second copy of itself.
//!
//! # Key Types
//!
//! ## `CallCounter`
//!
//! Wraps a function so every invocation is counted. Used to check that a
//! fused pipeline evaluates each stage at most once per visited element:
//!
//! ```rust
//! use transduce_test_utils::CallCounter;
//!
//! let calls = CallCounter::new();
//! let mut double = calls.counting(|x: i32| x * 2);
//!
//! assert_eq!(double(4), 8);
//! assert_eq!(calls.count(), 1);
//! ```
//!
//! ## Numeric fixtures
//!
//! `square`, `incr`, `is_prime` and `is_twin_prime` reproduce the twin-prime
//! search scenario used throughout the integration tests.
//!
//! # Module Organization
//!
//! - `counter` - `CallCounter` instrumentation
//! - `numbers` - numeric helpers and expected scenario outputs
//! - `error_injection` - functions that fail on chosen inputs

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod counter;
pub mod error_injection;
pub mod numbers;

pub use counter::CallCounter;
pub use error_injection::{fails_on, rejects, FixtureError};
pub use numbers::{incr, is_even, is_prime, is_twin_prime, square, FIRST_TEN_TWIN_PRIME_SQUARES};
