//! Bracket pattern for safe resource management.
//!
//! [`bracket`] acquires a resource, uses it, and releases it. Once the
//! acquisition succeeded the release runs exactly once, whatever the use
//! step did, and it is told how the use step ended.
//!
//! | acquire | use | release | result |
//! |---|---|---|---|
//! | `Err(a)` | not called | not called | `Err(a)` |
//! | `Ok` | `Ok(b)` | `Ok` | `Ok(b)` |
//! | `Ok` | `Ok(b)` | `Err(r)` | `Err(r)` |
//! | `Ok` | `Err(u)` | `Ok` | `Err(u)` |
//! | `Ok` | `Err(u)` | `Err(r)` | `Err(u)`, `r` is logged |
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use tributary::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let release_log = log.clone();
//!
//! let effect = bracket(
//!     succeed::<_, String, ()>("conn-1".to_string()),
//!     |conn: &String| succeed(format!("rows from {}", conn)),
//!     move |conn: String, outcome: &Result<String, String>| {
//!         release_log
//!             .lock()
//!             .unwrap()
//!             .push(format!("closed {} after ok={}", conn, outcome.is_ok()));
//!         succeed(())
//!     },
//! );
//!
//! assert_eq!(effect.run(&()).await, Ok("rows from conn-1".to_string()));
//! assert_eq!(*log.lock().unwrap(), vec!["closed conn-1 after ok=true"]);
//! # });
//! ```

use crate::effect::trait_def::Effect;

/// Acquire / use / release. See [`bracket`].
pub struct Bracket<Acquire, Use, Release> {
    acquire: Acquire,
    use_fn: Use,
    release: Release,
}

impl<Acquire, Use, Release> std::fmt::Debug for Bracket<Acquire, Use, Release> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bracket")
            .field("acquire", &"<effect>")
            .field("use_fn", &"<function>")
            .field("release", &"<function>")
            .finish()
    }
}

impl<Acquire, Use, Release> Bracket<Acquire, Use, Release> {
    /// Create a new Bracket.
    pub fn new(acquire: Acquire, use_fn: Use, release: Release) -> Self {
        Bracket {
            acquire,
            use_fn,
            release,
        }
    }
}

impl<Acquire, Use, Release, UseEffect, RelEffect> Effect for Bracket<Acquire, Use, Release>
where
    Acquire: Effect,
    Acquire::Error: std::fmt::Debug,
    Use: Fn(&Acquire::Output) -> UseEffect + Send + Sync,
    UseEffect: Effect<Error = Acquire::Error, Env = Acquire::Env>,
    Release: Fn(Acquire::Output, &Result<UseEffect::Output, Acquire::Error>) -> RelEffect
        + Send
        + Sync,
    RelEffect: Effect<Output = (), Error = Acquire::Error, Env = Acquire::Env>,
{
    type Output = UseEffect::Output;
    type Error = Acquire::Error;
    type Env = Acquire::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let resource = self.acquire.run(env).await?;

        let usage = (self.use_fn)(&resource);
        let outcome = usage.run(env).await;

        let release = (self.release)(resource, &outcome);
        let released = release.run(env).await;

        match (outcome, released) {
            (outcome, Ok(())) => outcome,
            (Ok(_), Err(release_error)) => Err(release_error),
            (Err(use_error), Err(release_error)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(?release_error, "resource release failed after use failure");
                #[cfg(not(feature = "tracing"))]
                let _ = release_error;
                Err(use_error)
            }
        }
    }
}

/// Acquire a resource, use it, and always release it.
///
/// - `acquire` produces the resource;
/// - `use_fn` borrows it and returns the effect that does the work;
/// - `release` takes ownership of the resource together with the use
///   outcome and returns the cleanup effect.
///
/// A failed release replaces a successful use result. When both fail the
/// use failure is returned and the release failure is reported through
/// `tracing::warn!` (with the `tracing` feature).
pub fn bracket<Acquire, Use, Release, UseEffect, RelEffect>(
    acquire: Acquire,
    use_fn: Use,
    release: Release,
) -> Bracket<Acquire, Use, Release>
where
    Acquire: Effect,
    Acquire::Error: std::fmt::Debug,
    Use: Fn(&Acquire::Output) -> UseEffect + Send + Sync,
    UseEffect: Effect<Error = Acquire::Error, Env = Acquire::Env>,
    Release: Fn(Acquire::Output, &Result<UseEffect::Output, Acquire::Error>) -> RelEffect
        + Send
        + Sync,
    RelEffect: Effect<Output = (), Error = Acquire::Error, Env = Acquire::Env>,
{
    Bracket::new(acquire, use_fn, release)
}
