// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! User functions that fail on a chosen input.
//!
//! These stand in for mapping functions and predicates that report errors,
//! so tests can check that a fold aborts on the first failure.

use transduce_error::{Result, TransduceError};

/// The error raised by the fixtures in this module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fixture rejected element {0}")]
pub struct FixtureError(pub u64);

/// An identity mapping that fails on `bad`.
pub fn fails_on(bad: u64) -> impl FnMut(u64) -> Result<u64> + Clone {
    move |x| {
        if x == bad {
            Err(TransduceError::user_error(FixtureError(x)))
        } else {
            Ok(x)
        }
    }
}

/// A predicate that accepts everything but fails on `bad`.
pub fn rejects(bad: u64) -> impl FnMut(&u64) -> Result<bool> + Clone {
    move |x: &u64| {
        if *x == bad {
            Err(TransduceError::user_error(FixtureError(*x)))
        } else {
            Ok(true)
        }
    }
}
