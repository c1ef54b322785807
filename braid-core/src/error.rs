// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the braid combination engine.
//!
//! Every failure that reaches an [`Observer`](crate::Observer) is a [`BraidError`].
//! Errors are terminal: they are delivered once through `on_error`, never retried,
//! and cause the operator that observed them to cancel its sibling subscriptions.
//!
//! # Examples
//!
//! ```
//! use braid_core::{BraidError, Result};
//!
//! fn connect() -> Result<()> {
//!     Err(BraidError::stream_error("sensor offline"))
//! }
//!
//! assert!(connect().is_err());
//! ```

/// Root error type for all braid operations.
#[derive(Debug, thiserror::Error)]
pub enum BraidError {
    /// A source stream signalled a failure.
    ///
    /// This is the general upstream error: sources create it when they fail and
    /// operators forward it unchanged.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Custom error from user code.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A combiner or window selector panicked while being invoked.
    ///
    /// The panic is caught at the operator boundary and surfaced like any
    /// upstream error.
    #[error("Selector error in {operator}: {context}")]
    SelectorError {
        /// Operator whose selector failed
        operator: &'static str,
        /// Panic message, when one could be recovered
        context: String,
    },
}

impl BraidError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a selector error for `operator`
    pub fn selector_error(operator: &'static str, context: impl Into<String>) -> Self {
        Self::SelectorError {
            operator,
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns `true` if the error came from a user-supplied selector or combiner.
    #[must_use]
    pub const fn is_selector_error(&self) -> bool {
        matches!(self, Self::SelectorError { .. })
    }
}

/// Specialized Result type for braid operations.
pub type Result<T> = std::result::Result<T, BraidError>;

/// Extension trait for converting foreign errors into `BraidError`.
pub trait IntoBraidError {
    /// Convert this error into a `BraidError` with additional context
    fn into_braid_error(self, context: &str) -> BraidError;

    /// Convert this error into a `BraidError` without additional context
    fn into_braid(self) -> BraidError
    where
        Self: Sized,
    {
        self.into_braid_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoBraidError for E {
    fn into_braid_error(self, context: &str) -> BraidError {
        if context.is_empty() {
            BraidError::user_error(self)
        } else {
            BraidError::stream_error(format!("{context}: {self}"))
        }
    }
}

impl Clone for BraidError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // Boxed user errors cannot be cloned; keep their message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
            Self::SelectorError { operator, context } => Self::SelectorError {
                operator: *operator,
                context: context.clone(),
            },
        }
    }
}
