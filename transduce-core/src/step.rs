// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// The result of one reducer call: the new accumulator and whether the
/// reducer accepts further elements.
///
/// `Done` is the termination signal. A driver that observes it stops pulling
/// from the source and returns the carried accumulator. Once a reducer has
/// returned `Done` it keeps returning `Done` for any further calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Step<Acc> {
    /// Keep feeding elements
    Continue(Acc),
    /// Stop; no further elements will be accepted
    Done(Acc),
}

impl<Acc> Step<Acc> {
    /// Returns `true` if this is `Done`.
    pub const fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }

    /// Returns `true` if this is `Continue`.
    pub const fn is_continue(&self) -> bool {
        matches!(self, Step::Continue(_))
    }

    /// Discards the flag and returns the accumulator.
    pub fn into_inner(self) -> Acc {
        match self {
            Step::Continue(acc) | Step::Done(acc) => acc,
        }
    }

    /// Borrows the accumulator.
    pub const fn get(&self) -> &Acc {
        match self {
            Step::Continue(acc) | Step::Done(acc) => acc,
        }
    }

    /// Raises the termination signal, keeping the accumulator.
    pub fn into_done(self) -> Self {
        Step::Done(self.into_inner())
    }

    /// Maps the accumulator, preserving the flag.
    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(Acc) -> U,
    {
        match self {
            Step::Continue(acc) => Step::Continue(f(acc)),
            Step::Done(acc) => Step::Done(f(acc)),
        }
    }
}

impl<Acc> From<Step<Acc>> for core::ops::ControlFlow<Acc, Acc> {
    fn from(step: Step<Acc>) -> Self {
        match step {
            Step::Continue(acc) => core::ops::ControlFlow::Continue(acc),
            Step::Done(acc) => core::ops::ControlFlow::Break(acc),
        }
    }
}
