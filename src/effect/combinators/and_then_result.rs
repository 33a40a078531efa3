//! Chain a plain `Result` or an async result-producing function.

use std::future::Future;

use crate::effect::trait_def::Effect;

/// Chains a synchronous, failable step onto an effect.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = succeed::<_, String, ()>("42")
///     .and_then_result(|s| s.parse::<i32>().map_err(|e| e.to_string()));
/// assert_eq!(effect.run(&()).await, Ok(42));
/// # });
/// ```
pub struct AndThenResult<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for AndThenResult<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndThenResult")
            .field("inner", &"<effect>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, U> Effect for AndThenResult<Inner, F>
where
    Inner: Effect,
    F: Fn(Inner::Output) -> Result<U, Inner::Error> + Send + Sync,
    U: Send,
{
    type Output = U;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<U, Self::Error> {
        self.inner.run(env).await.and_then(&self.f)
    }
}

/// Chains an async, failable step that does not need the environment.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = succeed::<_, String, ()>(20)
///     .and_then_async(|n| async move { Ok::<_, String>(n + 22) });
/// assert_eq!(effect.run(&()).await, Ok(42));
/// # });
/// ```
pub struct AndThenAsync<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for AndThenAsync<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndThenAsync")
            .field("inner", &"<effect>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, Fut, U> Effect for AndThenAsync<Inner, F>
where
    Inner: Effect,
    F: Fn(Inner::Output) -> Fut + Send + Sync,
    Fut: Future<Output = Result<U, Inner::Error>> + Send,
    U: Send,
{
    type Output = U;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<U, Self::Error> {
        let value = self.inner.run(env).await?;
        (self.f)(value).await
    }
}
