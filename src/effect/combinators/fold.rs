//! Elimination: Fold and GetOrElse turn a failable effect into one that
//! cannot fail.
//!
//! Handlers return effects with `Error = Infallible`, so the resulting
//! effect is infallible too. Await it with
//! [`InfallibleExt::run_infallible`](crate::effect::InfallibleExt::run_infallible).

use std::convert::Infallible;

use crate::effect::trait_def::Effect;

/// Fold combinator - dispatch on the outcome of the inner effect.
///
/// The inner effect runs exactly once per run; then exactly one handler is
/// called and its effect run against the same environment.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = fail::<i32, _, ()>("nope").fold(
///     |e| succeed(format!("failed: {}", e)),
///     |n| succeed(format!("got {}", n)),
/// );
/// assert_eq!(effect.run_infallible(&()).await, "failed: nope");
/// # });
/// ```
pub struct Fold<Inner, G, F> {
    pub(crate) inner: Inner,
    pub(crate) on_failure: G,
    pub(crate) on_success: F,
}

impl<Inner, G, F> std::fmt::Debug for Fold<Inner, G, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fold")
            .field("inner", &"<effect>")
            .field("on_failure", &"<function>")
            .field("on_success", &"<function>")
            .finish()
    }
}

impl<Inner, G, F, H1, H2> Effect for Fold<Inner, G, F>
where
    Inner: Effect,
    G: Fn(Inner::Error) -> H1 + Send + Sync,
    F: Fn(Inner::Output) -> H2 + Send + Sync,
    H1: Effect<Error = Infallible, Env = Inner::Env>,
    H2: Effect<Output = H1::Output, Error = Infallible, Env = Inner::Env>,
{
    type Output = H1::Output;
    type Error = Infallible;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Infallible> {
        match self.inner.run(env).await {
            Ok(value) => {
                let handler = (self.on_success)(value);
                handler.run(env).await
            }
            Err(error) => {
                let handler = (self.on_failure)(error);
                handler.run(env).await
            }
        }
    }
}

/// GetOrElse combinator - recover a failure into a success value.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// struct Env { default_port: u16 }
///
/// # tokio_test::block_on(async {
/// let effect = fail::<u16, _, Env>("PORT unset")
///     .get_or_else(|_| asks(|env: &Env| env.default_port));
/// assert_eq!(effect.run_infallible(&Env { default_port: 8080 }).await, 8080);
/// # });
/// ```
pub struct GetOrElse<Inner, G> {
    pub(crate) inner: Inner,
    pub(crate) on_failure: G,
}

impl<Inner, G> std::fmt::Debug for GetOrElse<Inner, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetOrElse")
            .field("inner", &"<effect>")
            .field("on_failure", &"<function>")
            .finish()
    }
}

impl<Inner, G, H> Effect for GetOrElse<Inner, G>
where
    Inner: Effect,
    G: Fn(Inner::Error) -> H + Send + Sync,
    H: Effect<Output = Inner::Output, Error = Infallible, Env = Inner::Env>,
{
    type Output = Inner::Output;
    type Error = Infallible;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Infallible> {
        match self.inner.run(env).await {
            Ok(value) => Ok(value),
            Err(error) => {
                let recovery = (self.on_failure)(error);
                recovery.run(env).await
            }
        }
    }
}
