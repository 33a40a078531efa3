//! Bimap and Swap - act on both channels at once.

use crate::effect::trait_def::Effect;

/// Bimap combinator - maps the failure with `on_err` and the success with
/// `on_ok`. Exactly one of the two is called per run.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let ok = succeed::<_, i32, ()>(2).bimap(|e| e.to_string(), |x| x + 1);
/// assert_eq!(ok.run(&()).await, Ok(3));
///
/// let err = fail::<i32, _, ()>(7).bimap(|e| e.to_string(), |x| x + 1);
/// assert_eq!(err.run(&()).await, Err("7".to_string()));
/// # });
/// ```
pub struct Bimap<Inner, G, F> {
    pub(crate) inner: Inner,
    pub(crate) on_err: G,
    pub(crate) on_ok: F,
}

impl<Inner, G, F> std::fmt::Debug for Bimap<Inner, G, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bimap")
            .field("inner", &"<effect>")
            .field("on_err", &"<function>")
            .field("on_ok", &"<function>")
            .finish()
    }
}

impl<Inner, G, F, E2, U> Effect for Bimap<Inner, G, F>
where
    Inner: Effect,
    G: Fn(Inner::Error) -> E2 + Send + Sync,
    F: Fn(Inner::Output) -> U + Send + Sync,
    E2: Send,
    U: Send,
{
    type Output = U;
    type Error = E2;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<U, E2> {
        match self.inner.run(env).await {
            Ok(value) => Ok((self.on_ok)(value)),
            Err(error) => Err((self.on_err)(error)),
        }
    }
}

/// Swap combinator - a success becomes a failure and vice versa.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = fail::<i32, _, ()>("missing").swap();
/// assert_eq!(effect.run(&()).await, Ok("missing"));
/// # });
/// ```
pub struct Swap<Inner> {
    pub(crate) inner: Inner,
}

impl<Inner> std::fmt::Debug for Swap<Inner> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Swap").field("inner", &"<effect>").finish()
    }
}

impl<Inner: Effect> Effect for Swap<Inner> {
    type Output = Inner::Error;
    type Error = Inner::Output;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Inner::Error, Inner::Output> {
        match self.inner.run(env).await {
            Ok(value) => Err(value),
            Err(error) => Ok(error),
        }
    }
}
