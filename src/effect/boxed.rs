//! BoxedEffect - type-erased effect for opt-in boxing.
//!
//! Use `BoxedEffect` when you need to:
//! - Store different effect types in a collection
//! - Return different effects from match arms
//! - Create recursive effect functions
//!
//! The environment is still only borrowed; boxing costs one allocation for
//! the effect and one per run for the future.

use std::future::Future;
use std::pin::Pin;

use crate::effect::trait_def::Effect;

/// A boxed future that is Send.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Object-safe view of an effect.
trait ErasedEffect<T, E, Env>: Send + Sync {
    fn run_erased<'a>(&'a self, env: &'a Env) -> BoxFuture<'a, Result<T, E>>;
}

impl<Eff: Effect> ErasedEffect<Eff::Output, Eff::Error, Eff::Env> for Eff {
    fn run_erased<'a>(&'a self, env: &'a Eff::Env) -> BoxFuture<'a, Result<Eff::Output, Eff::Error>> {
        Box::pin(self.run(env))
    }
}

/// A type-erased effect.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// fn countdown(n: i32) -> BoxedEffect<i32, String, ()> {
///     if n <= 0 {
///         succeed(0).boxed()
///     } else {
///         succeed(n)
///             .and_then(move |x| countdown(x - 1).map(move |sum| x + sum))
///             .boxed()
///     }
/// }
///
/// # tokio_test::block_on(async {
/// assert_eq!(countdown(4).run(&()).await, Ok(10));
///
/// let effects: Vec<BoxedEffect<i32, String, ()>> = vec![
///     succeed(1).boxed(),
///     succeed(2).map(|x| x * 2).boxed(),
/// ];
/// assert_eq!(sequence(effects).run(&()).await, Ok(vec![1, 4]));
/// # });
/// ```
pub struct BoxedEffect<T, E, Env> {
    inner: Box<dyn ErasedEffect<T, E, Env>>,
}

impl<T, E, Env> std::fmt::Debug for BoxedEffect<T, E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedEffect")
            .field("inner", &"<effect>")
            .finish()
    }
}

impl<T, E, Env> BoxedEffect<T, E, Env> {
    /// Create a boxed effect from any effect.
    pub fn new<Eff>(effect: Eff) -> Self
    where
        Eff: Effect<Output = T, Error = E, Env = Env> + 'static,
    {
        BoxedEffect {
            inner: Box::new(effect),
        }
    }
}

impl<T, E, Env> Effect for BoxedEffect<T, E, Env>
where
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(&self, env: &Env) -> Result<T, E> {
        self.inner.run_erased(env).await
    }
}
