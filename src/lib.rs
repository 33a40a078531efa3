//! # Tributary
//!
//! Environment-dependent, asynchronous, failable effects.
//!
//! An [`Effect`] is a value describing a computation that reads a shared
//! environment, runs asynchronously, and ends in `Ok(output)` or
//! `Err(error)`. Effects compose in two ways:
//!
//! - **sequentially** (`and_then`, `bind`, `alt`, `bracket`,
//!   `traverse_seq`): each step starts after the previous one finished and
//!   the first failure stops the chain;
//! - **concurrently** (`zip`, `ap`, `attach`, `traverse`): independent
//!   branches are in flight together and every branch runs to completion.
//!
//! Failures are fail-fast by default. Accumulating every failure is opt-in
//! through [`effect::Validation`].
//!
//! ## Quick Example
//!
//! ```rust
//! use tributary::effect::prelude::*;
//!
//! struct Env {
//!     base_url: String,
//! }
//!
//! fn fetch(path: &'static str) -> impl Effect<Output = String, Error = String, Env = Env> {
//!     asks(move |env: &Env| format!("{}/{}", env.base_url, path))
//! }
//!
//! # tokio_test::block_on(async {
//! let env = Env { base_url: "https://api.test".to_string() };
//!
//! let page = fetch("user")
//!     .zip(fetch("settings"))
//!     .map(|(user, settings)| format!("{} + {}", user, settings));
//!
//! assert_eq!(
//!     page.run(&env).await,
//!     Ok("https://api.test/user + https://api.test/settings".to_string())
//! );
//! # });
//! ```
//!
//! ## Features
//!
//! - `tracing`: span instrumentation for effects, and diagnostics for
//!   suppressed release failures and early-stopped sequential traversals.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod context;
pub mod effect;
pub mod monoid;
pub mod semigroup;
pub mod testing;

// Re-exports
pub use context::ContextError;
pub use effect::{BoxedEffect, Effect, EffectContext, EffectExt};
pub use monoid::Monoid;
pub use semigroup::Semigroup;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::context::ContextError;
    pub use crate::effect::prelude::*;
    pub use crate::monoid::Monoid;
    pub use crate::semigroup::Semigroup;
}
