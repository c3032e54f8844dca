// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Invocation counting for instrumented pipeline stages.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A shared call counter.
///
/// Clones share the same count, so a counter can be moved into any number
/// of wrapped functions and read back from the test body.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded calls so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Records one call.
    pub fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Wraps a by-value function, counting every call.
    pub fn counting<A, B, F>(&self, mut f: F) -> impl FnMut(A) -> B + Clone
    where
        F: FnMut(A) -> B + Clone,
    {
        let counter = self.clone();
        move |x| {
            counter.record();
            f(x)
        }
    }

    /// Wraps a predicate, counting every call.
    pub fn counting_predicate<A, P>(&self, mut p: P) -> impl FnMut(&A) -> bool + Clone
    where
        P: FnMut(&A) -> bool + Clone,
    {
        let counter = self.clone();
        move |x: &A| {
            counter.record();
            p(x)
        }
    }
}
