//! Reader pattern types for environment access.
//!
//! - `Ask` - Get the entire environment (cloned)
//! - `Asks` - Succeed with a value computed from the environment
//! - `FailReader` - Fail with an error computed from the environment
//! - `FromAsyncReader` / `FailAsyncReader` - Async, non-failing readers lifted
//!   into the success or failure channel
//! - `Local` - Run an effect against a derived environment

use std::future::Future;
use std::marker::PhantomData;

use crate::effect::trait_def::Effect;

/// Get the entire environment (cloned).
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Env { value: i32 }
///
/// # tokio_test::block_on(async {
/// let effect = ask::<String, Env>();
/// assert_eq!(effect.run(&Env { value: 42 }).await, Ok(Env { value: 42 }));
/// # });
/// ```
pub struct Ask<E, Env> {
    _phantom: PhantomData<fn() -> (E, Env)>,
}

impl<E, Env> std::fmt::Debug for Ask<E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ask").finish()
    }
}

impl<E, Env> Ask<E, Env> {
    /// Create a new Ask effect.
    pub fn new() -> Self {
        Ask {
            _phantom: PhantomData,
        }
    }
}

impl<E, Env> Default for Ask<E, Env> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, Env> Effect for Ask<E, Env>
where
    E: Send,
    Env: Clone + Send + Sync,
{
    type Output = Env;
    type Error = E;
    type Env = Env;

    async fn run(&self, env: &Env) -> Result<Env, E> {
        Ok(env.clone())
    }
}

/// Succeed with a value read from the environment.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// struct Env { value: i32 }
///
/// # tokio_test::block_on(async {
/// let effect = asks::<_, String, _, _>(|env: &Env| env.value * 2);
/// assert_eq!(effect.run(&Env { value: 21 }).await, Ok(42));
/// # });
/// ```
pub struct Asks<F, E, Env> {
    pub(crate) f: F,
    _phantom: PhantomData<fn() -> (E, Env)>,
}

impl<F, E, Env> std::fmt::Debug for Asks<F, E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Asks").field("f", &"<function>").finish()
    }
}

impl<F, E, Env> Asks<F, E, Env> {
    /// Create a new Asks effect.
    pub fn new(f: F) -> Self {
        Asks {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, U, E, Env> Effect for Asks<F, E, Env>
where
    F: Fn(&Env) -> U + Send + Sync,
    U: Send,
    E: Send,
    Env: Send + Sync,
{
    type Output = U;
    type Error = E;
    type Env = Env;

    async fn run(&self, env: &Env) -> Result<U, E> {
        Ok((self.f)(env))
    }
}

/// Fail with an error read from the environment.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// struct Env { region: &'static str }
///
/// # tokio_test::block_on(async {
/// let effect = fail_reader::<i32, _, _, _>(|env: &Env| format!("{} is offline", env.region));
/// assert_eq!(
///     effect.run(&Env { region: "eu-west" }).await,
///     Err("eu-west is offline".to_string())
/// );
/// # });
/// ```
pub struct FailReader<F, T, Env> {
    f: F,
    _phantom: PhantomData<fn() -> (T, Env)>,
}

impl<F, T, Env> std::fmt::Debug for FailReader<F, T, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FailReader")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F, T, Env> FailReader<F, T, Env> {
    /// Create a new FailReader effect.
    pub fn new(f: F) -> Self {
        FailReader {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, T, E, Env> Effect for FailReader<F, T, Env>
where
    F: Fn(&Env) -> E + Send + Sync,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(&self, env: &Env) -> Result<T, E> {
        Err((self.f)(env))
    }
}

/// Async, non-failing reader lifted into the success channel.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// struct Env { base: u32 }
///
/// # tokio_test::block_on(async {
/// let effect = from_async_reader::<_, String, _, _, _>(|env: &Env| {
///     let base = env.base;
///     async move { base + 1 }
/// });
/// assert_eq!(effect.run(&Env { base: 41 }).await, Ok(42));
/// # });
/// ```
pub struct FromAsyncReader<F, E, Env> {
    f: F,
    _phantom: PhantomData<fn() -> (E, Env)>,
}

impl<F, E, Env> std::fmt::Debug for FromAsyncReader<F, E, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromAsyncReader")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F, E, Env> FromAsyncReader<F, E, Env> {
    /// Create a new FromAsyncReader effect.
    pub fn new(f: F) -> Self {
        FromAsyncReader {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, Fut, T, E, Env> Effect for FromAsyncReader<F, E, Env>
where
    F: Fn(&Env) -> Fut + Send + Sync,
    Fut: Future<Output = T> + Send,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(&self, env: &Env) -> Result<T, E> {
        Ok((self.f)(env).await)
    }
}

/// Async, non-failing reader lifted into the failure channel.
pub struct FailAsyncReader<F, T, Env> {
    f: F,
    _phantom: PhantomData<fn() -> (T, Env)>,
}

impl<F, T, Env> std::fmt::Debug for FailAsyncReader<F, T, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FailAsyncReader")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F, T, Env> FailAsyncReader<F, T, Env> {
    /// Create a new FailAsyncReader effect.
    pub fn new(f: F) -> Self {
        FailAsyncReader {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, Fut, T, E, Env> Effect for FailAsyncReader<F, T, Env>
where
    F: Fn(&Env) -> Fut + Send + Sync,
    Fut: Future<Output = E> + Send,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(&self, env: &Env) -> Result<T, E> {
        Err((self.f)(env).await)
    }
}

/// Run an effect with a derived environment.
///
/// The derivation runs once per run; the inner effect only ever sees the
/// derived value.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// struct OuterEnv { multiplier: i32 }
/// struct InnerEnv { value: i32 }
///
/// # tokio_test::block_on(async {
/// let inner_effect = asks::<_, String, InnerEnv, _>(|env| env.value);
/// let effect = local(
///     |outer: &OuterEnv| InnerEnv { value: 21 * outer.multiplier },
///     inner_effect,
/// );
///
/// assert_eq!(effect.run(&OuterEnv { multiplier: 2 }).await, Ok(42));
/// # });
/// ```
pub struct Local<Inner, F, Env2> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
    pub(crate) _phantom: PhantomData<fn() -> Env2>,
}

impl<Inner, F, Env2> std::fmt::Debug for Local<Inner, F, Env2> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Local")
            .field("inner", &"<effect>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, Env2> Local<Inner, F, Env2> {
    /// Create a new Local effect.
    pub fn new(inner: Inner, f: F) -> Self {
        Local {
            inner,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<Inner, F, Env2> Effect for Local<Inner, F, Env2>
where
    Inner: Effect,
    F: Fn(&Env2) -> Inner::Env + Send + Sync,
    Env2: Send + Sync,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Env2;

    async fn run(&self, env: &Env2) -> Result<Self::Output, Self::Error> {
        let inner_env = (self.f)(env);
        self.inner.run(&inner_env).await
    }
}
