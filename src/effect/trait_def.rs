//! Effect trait definition - the core abstraction.
//!
//! An `Effect` is a description of a computation that:
//! - Produces a value of type `Output` on success
//! - May fail with an error of type `Error`
//! - Reads an environment of type `Env`
//!
//! # Re-running
//!
//! `run` borrows the effect. Every call builds a brand new future, so the
//! same effect value can be run any number of times and each run performs
//! its work again. Nothing is cached between runs:
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use tributary::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = calls.clone();
//! let effect = from_io::<_, String, (), _>(move || counter.fetch_add(1, Ordering::SeqCst));
//!
//! assert_eq!(effect.run(&()).await, Ok(0));
//! assert_eq!(effect.run(&()).await, Ok(1));
//! assert_eq!(calls.load(Ordering::SeqCst), 2);
//! # });
//! ```
//!
//! # Environment
//!
//! The environment is only ever borrowed. Combinators pass the same
//! reference down to every sub-effect and never look inside it.

use std::future::Future;

/// The core Effect trait.
///
/// Combinators return concrete types (like `Future` and `Iterator`); use
/// [`EffectExt::boxed`](crate::effect::EffectExt::boxed) when type erasure
/// is needed.
///
/// # Type Parameters
///
/// * `Output` - The success type produced by this effect
/// * `Error` - The error type that may be produced
/// * `Env` - The environment type required to run this effect
///
/// # Example
///
/// ```rust,ignore
/// use tributary::effect::prelude::*;
///
/// fn fetch_user(id: u64) -> impl Effect<Output = User, Error = DbError, Env = AppEnv> {
///     asks(|env: &AppEnv| env.db.clone())
///         .and_then(move |db| from_task_result(move || db.clone().fetch_user(id)))
/// }
/// ```
pub trait Effect: Send + Sync {
    /// The success type produced by this effect.
    type Output: Send;

    /// The error type that may be produced.
    type Error: Send;

    /// The environment type required to run this effect.
    type Env: Send + Sync;

    /// Start one execution of this effect against `env`.
    ///
    /// No work happens until the returned future is polled. The future
    /// resolves to `Ok(output)` on success or `Err(error)` on failure.
    fn run(&self, env: &Self::Env)
        -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}
