//! Testing utilities for code built on effects.
//!
//! - [`MockEnv`] builds layered test environments.
//! - [`CallCounter`] is a shared counter for asserting how often side
//!   effects ran.
//! - [`assert_success!`](crate::assert_success),
//!   [`assert_failure!`](crate::assert_failure) and
//!   [`assert_failure_eq!`](crate::assert_failure_eq) check run outcomes.
//!
//! # Examples
//!
//! ```rust
//! use tributary::effect::prelude::*;
//! use tributary::testing::{CallCounter, MockEnv};
//! use tributary::{assert_failure_eq, assert_success};
//!
//! struct Config { retries: u32 }
//!
//! # tokio_test::block_on(async {
//! let env = MockEnv::new().with(|| Config { retries: 3 }).build();
//! let counter = CallCounter::new();
//! let c = counter.clone();
//!
//! let effect = asks::<_, String, ((), Config), _>(|(_, cfg)| cfg.retries)
//!     .and_then_first(move |_| {
//!         let c = c.clone();
//!         from_io(move || c.hit())
//!     });
//!
//! assert_success!(effect.run(&env).await);
//! assert_eq!(counter.count(), 1);
//!
//! let failing = fail::<u32, _, ((), Config)>("boom".to_string());
//! assert_failure_eq!(failing.run(&env).await, "boom".to_string());
//! # });
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Builder for creating test environments.
///
/// Each call to `with()` adds a new component to the environment, creating
/// a nested tuple structure.
///
/// # Example
///
/// ```rust
/// use tributary::testing::MockEnv;
///
/// struct Config {
///     debug: bool,
/// }
///
/// struct Database {
///     url: String,
/// }
///
/// let env = MockEnv::new()
///     .with(|| Config { debug: true })
///     .with(|| Database { url: "test://localhost".to_string() })
///     .build();
///
/// // env is now (((), Config), Database)
/// let ((_, config), db) = env;
/// assert_eq!(config.debug, true);
/// assert_eq!(db.url, "test://localhost");
/// ```
#[derive(Debug)]
pub struct MockEnv<Env> {
    env: Env,
}

impl MockEnv<()> {
    /// Create a new empty mock environment.
    pub fn new() -> Self {
        Self { env: () }
    }
}

impl Default for MockEnv<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Env> MockEnv<Env> {
    /// Add a new component to the environment.
    ///
    /// The component is created by calling the provided function.
    pub fn with<F, T>(self, f: F) -> MockEnv<(Env, T)>
    where
        F: FnOnce() -> T,
    {
        MockEnv {
            env: (self.env, f()),
        }
    }

    /// Build the final environment.
    pub fn build(self) -> Env {
        self.env
    }
}

/// Shared counter for side-effect assertions.
///
/// Clones share the same count, so one clone can move into an effect's
/// closure while the test keeps another.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    /// A counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call. Returns the count before this call.
    pub fn hit(&self) -> usize {
        self.calls.fetch_add(1, Ordering::SeqCst)
    }

    /// Calls recorded so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Assert that an outcome is a success.
///
/// Evaluates to the success value, and panics with the error otherwise.
///
/// # Example
///
/// ```rust
/// use tributary::assert_success;
///
/// let outcome: Result<i32, String> = Ok(42);
/// assert_eq!(assert_success!(outcome), 42);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            Ok(value) => value,
            Err(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is a failure.
///
/// Evaluates to the error, and panics with the value otherwise.
///
/// # Example
///
/// ```rust
/// use tributary::assert_failure;
///
/// let outcome: Result<i32, String> = Err("error".to_string());
/// assert_eq!(assert_failure!(outcome), "error");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            Err(e) => e,
            Ok(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an outcome is a failure equal to `expected`.
///
/// # Example
///
/// ```rust
/// use tributary::assert_failure_eq;
///
/// let outcome: Result<i32, Vec<&str>> = Err(vec!["error1", "error2"]);
/// assert_failure_eq!(outcome, vec!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_failure_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            Err(error) => {
                assert_eq!(error, $expected);
            }
            Ok(v) => {
                panic!(
                    "Expected Failure {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}
