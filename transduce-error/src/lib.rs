// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the transduce library
//!
//! Reduction itself never fails. Failures come from two places: building a
//! transducer with an invalid argument, and user-supplied functions that
//! report an error while a fold is running. Both surface as [`TransduceError`].
//!
//! # Examples
//!
//! ```
//! use transduce_error::{Result, TransduceError};
//!
//! fn take_count(n: i64) -> Result<usize> {
//!     usize::try_from(n).map_err(|_| TransduceError::invalid_argument("negative take count"))
//! }
//!
//! assert!(take_count(-1).is_err());
//! ```

/// Root error type for all transduce operations
#[derive(Debug, thiserror::Error)]
pub enum TransduceError {
    /// A transducer constructor was called with an argument outside its domain
    ///
    /// Raised at construction time, before any element is processed.
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        /// Which argument was rejected and why
        context: String,
    },

    /// A reducer step failed
    ///
    /// Produced when context is attached to a user error while the fold
    /// is being aborted.
    #[error("Reduction step failed: {context}")]
    StepFailed {
        /// Description of the failing step
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided mapping functions, predicates
    /// and base reducers.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TransduceError {
    /// Create an invalid argument error with the given context
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Create a step failure with the given context
    pub fn step_failed(context: impl Into<String>) -> Self {
        Self::StepFailed {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error originated in user-supplied code
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::UserError(_) | Self::StepFailed { .. })
    }

    /// Check if this error was raised while building a pipeline
    #[must_use]
    pub const fn is_construction_error(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Specialized Result type for transduce operations
///
/// # Examples
///
/// ```
/// use transduce_error::Result;
///
/// fn sum(xs: &[i32]) -> Result<i32> {
///     Ok(xs.iter().sum())
/// }
/// ```
pub type Result<T> = std::result::Result<T, TransduceError>;

/// Extension trait for converting errors into `TransduceError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`, so
/// fallible user functions can hand their own errors to the fold.
pub trait IntoTransduceError {
    /// Convert this error into a `TransduceError` with additional context
    fn into_transduce_error(self, context: &str) -> TransduceError;

    /// Convert this error into a `TransduceError` without additional context
    fn into_transduce(self) -> TransduceError
    where
        Self: Sized,
    {
        self.into_transduce_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoTransduceError for E {
    fn into_transduce_error(self, context: &str) -> TransduceError {
        if context.is_empty() {
            TransduceError::user_error(self)
        } else {
            TransduceError::step_failed(format!("{context}: {self}"))
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(TransduceError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(TransduceError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<TransduceError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        let context = context.into();
        self.with_context(|| context)
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e.into() {
            TransduceError::UserError(inner) => TransduceError::StepFailed {
                context: format!("{}: {inner}", f()),
            },
            other => other,
        })
    }
}
