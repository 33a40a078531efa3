//! Environment-free constructors: async producers and synchronous thunks.
//!
//! - [`FromTask`] / [`FailTask`] lift an async producer into the success or
//!   failure channel.
//! - [`FromTaskResult`] lifts an async producer of a `Result`.
//! - [`FromIo`] / [`FailIo`] lift a synchronous thunk, called on every run.
//!
//! None of these look at the environment.

use std::future::Future;
use std::marker::PhantomData;

use crate::effect::trait_def::Effect;

macro_rules! debug_fn_struct {
    ($name:ident) => {
        impl<F, P> std::fmt::Debug for $name<F, P> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("f", &"<function>")
                    .finish()
            }
        }

        impl<F, P> $name<F, P> {
            /// Wrap the producer.
            pub fn new(f: F) -> Self {
                $name {
                    f,
                    _phantom: PhantomData,
                }
            }
        }
    };
}

/// Async producer lifted into the success channel.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = from_task::<_, String, (), _, _>(|| async { 42 });
/// assert_eq!(effect.run(&()).await, Ok(42));
/// # });
/// ```
pub struct FromTask<F, P> {
    f: F,
    _phantom: PhantomData<fn() -> P>,
}

debug_fn_struct!(FromTask);

impl<F, Fut, T, E, Env> Effect for FromTask<F, (E, Env)>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = T> + Send,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(&self, _env: &Env) -> Result<T, E> {
        Ok((self.f)().await)
    }
}

/// Async producer lifted into the failure channel.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = fail_task::<i32, _, (), _, _>(|| async { "timeout".to_string() });
/// assert_eq!(effect.run(&()).await, Err("timeout".to_string()));
/// # });
/// ```
pub struct FailTask<F, P> {
    f: F,
    _phantom: PhantomData<fn() -> P>,
}

debug_fn_struct!(FailTask);

impl<F, Fut, T, E, Env> Effect for FailTask<F, (T, Env)>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = E> + Send,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(&self, _env: &Env) -> Result<T, E> {
        Err((self.f)().await)
    }
}

/// Async producer of a `Result`, ignoring the environment.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = from_task_result::<_, _, (), _, _>(|| async { "7".parse::<i32>() });
/// assert_eq!(effect.run(&()).await, Ok(7));
/// # });
/// ```
pub struct FromTaskResult<F, P> {
    f: F,
    _phantom: PhantomData<fn() -> P>,
}

debug_fn_struct!(FromTaskResult);

impl<F, Fut, T, E, Env> Effect for FromTaskResult<F, Env>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    fn run(&self, _env: &Env) -> impl Future<Output = Result<T, E>> + Send {
        (self.f)()
    }
}

/// Synchronous thunk lifted into the success channel.
///
/// The thunk runs on every run of the effect, never at construction.
pub struct FromIo<F, P> {
    f: F,
    _phantom: PhantomData<fn() -> P>,
}

debug_fn_struct!(FromIo);

impl<F, T, E, Env> Effect for FromIo<F, (E, Env)>
where
    F: Fn() -> T + Send + Sync,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(&self, _env: &Env) -> Result<T, E> {
        Ok((self.f)())
    }
}

/// Synchronous thunk lifted into the failure channel.
pub struct FailIo<F, P> {
    f: F,
    _phantom: PhantomData<fn() -> P>,
}

debug_fn_struct!(FailIo);

impl<F, T, E, Env> Effect for FailIo<F, (T, Env)>
where
    F: Fn() -> E + Send + Sync,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(&self, _env: &Env) -> Result<T, E> {
        Err((self.f)())
    }
}
