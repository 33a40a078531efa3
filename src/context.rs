//! Errors that carry a trail of context messages.
//!
//! A failure deep inside a pipeline is often meaningless on its own
//! ("connection refused"). [`ContextError`] keeps the original error and
//! collects one message per layer it passes through, innermost first.
//!
//! ```
//! use tributary::ContextError;
//!
//! let err = ContextError::new("file not found")
//!     .context("reading config file")
//!     .context("initializing application");
//!
//! assert_eq!(err.inner(), &"file not found");
//! assert_eq!(
//!     err.to_string(),
//!     "Error: file not found\n  -> reading config file\n  -> initializing application"
//! );
//! ```
//!
//! On effects, use [`EffectContext::context`](crate::effect::EffectContext::context)
//! and [`EffectContextChain::context_chain`](crate::effect::EffectContextChain::context_chain):
//!
//! ```
//! use tributary::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let effect = fail::<i32, _, ()>("database error")
//!     .context("querying user table")
//!     .context_chain("loading user profile");
//!
//! let err = effect.run(&()).await.unwrap_err();
//! assert_eq!(err.context_trail(), &["querying user table", "loading user profile"]);
//! # });
//! ```

use std::error::Error as StdError;
use std::fmt;

/// An error plus the context messages added while it propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextError<E> {
    error: E,
    context: Vec<String>,
}

impl<E> ContextError<E> {
    /// Wrap `error` with an empty trail.
    pub fn new(error: E) -> Self {
        ContextError {
            error,
            context: Vec::new(),
        }
    }

    /// Append a context message to the trail.
    pub fn context(mut self, msg: impl Into<String>) -> Self {
        self.context.push(msg.into());
        self
    }

    /// The wrapped error.
    pub fn inner(&self) -> &E {
        &self.error
    }

    /// Unwrap, dropping the trail.
    pub fn into_inner(self) -> E {
        self.error
    }

    /// Context messages, innermost first.
    pub fn context_trail(&self) -> &[String] {
        &self.context
    }

    /// Transform the wrapped error, keeping the trail.
    pub fn map<E2>(self, f: impl FnOnce(E) -> E2) -> ContextError<E2> {
        ContextError {
            error: f(self.error),
            context: self.context,
        }
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;
        for ctx in &self.context {
            write!(f, "\n  -> {}", ctx)?;
        }
        Ok(())
    }
}

impl<E: StdError + 'static> StdError for ContextError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}
