//! AndThen combinator - chains dependent effects.

use crate::effect::trait_def::Effect;

/// AndThen combinator - chains dependent effects.
///
/// Runs the inner effect; only on success calls `f` with the value and runs
/// the effect it returns against the same environment. A failure
/// short-circuits and `f` is never called.
///
/// The error type of the chained effect must match the error type
/// of the original effect. Use `map_err` to convert error types
/// before chaining.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// struct Env { n: i32 }
///
/// # tokio_test::block_on(async {
/// let effect = asks::<_, String, Env, _>(|env| env.n)
///     .and_then(|x| succeed(x * 2));
/// assert_eq!(effect.run(&Env { n: 21 }).await, Ok(42));
/// # });
/// ```
pub struct AndThen<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for AndThen<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndThen")
            .field("inner", &"<effect>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, E2> Effect for AndThen<Inner, F>
where
    Inner: Effect,
    E2: Effect<Error = Inner::Error, Env = Inner::Env>,
    F: Fn(Inner::Output) -> E2 + Send + Sync,
{
    type Output = E2::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let value = self.inner.run(env).await?;
        let next = (self.f)(value);
        next.run(env).await
    }
}

/// Flatten - runs an effect that produces an effect, then runs the result.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let nested = succeed::<_, String, ()>(succeed::<_, String, ()>(5));
/// assert_eq!(nested.flatten().run(&()).await, Ok(5));
/// # });
/// ```
pub struct Flatten<Inner> {
    pub(crate) inner: Inner,
}

impl<Inner> std::fmt::Debug for Flatten<Inner> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flatten").field("inner", &"<effect>").finish()
    }
}

impl<Inner> Effect for Flatten<Inner>
where
    Inner: Effect,
    Inner::Output: Effect<Error = Inner::Error, Env = Inner::Env>,
{
    type Output = <Inner::Output as Effect>::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let next = self.inner.run(env).await?;
        next.run(env).await
    }
}
