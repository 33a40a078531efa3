//! Fallback combinators: Alt, OrElse, FilterOrElse.

use crate::effect::trait_def::Effect;

/// Alt combinator - try an alternative when the first effect fails.
///
/// `second` is a thunk: it is only called, and its effect only built and
/// run, when the first effect fails. The alternative sees the same
/// environment and its outcome becomes the result.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let primary = fail::<i32, _, ()>("primary down");
/// let effect = primary.alt(|| succeed::<_, String, ()>(42));
/// assert_eq!(effect.run(&()).await, Ok(42));
/// # });
/// ```
pub struct Alt<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) second: F,
}

impl<Inner, F> std::fmt::Debug for Alt<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alt")
            .field("inner", &"<effect>")
            .field("second", &"<thunk>")
            .finish()
    }
}

impl<Inner, F, E2> Effect for Alt<Inner, F>
where
    Inner: Effect,
    F: Fn() -> E2 + Send + Sync,
    E2: Effect<Output = Inner::Output, Env = Inner::Env>,
{
    type Output = Inner::Output;
    type Error = E2::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, E2::Error> {
        match self.inner.run(env).await {
            Ok(value) => Ok(value),
            Err(_) => {
                let alternative = (self.second)();
                alternative.run(env).await
            }
        }
    }
}

/// OrElse combinator - recover from a failure with an effect built from it.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = fail::<usize, _, ()>("not cached")
///     .or_else(|e: &str| succeed::<_, String, ()>(e.len()));
/// assert_eq!(effect.run(&()).await, Ok(10));
/// # });
/// ```
pub struct OrElse<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for OrElse<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrElse")
            .field("inner", &"<effect>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, E2> Effect for OrElse<Inner, F>
where
    Inner: Effect,
    F: Fn(Inner::Error) -> E2 + Send + Sync,
    E2: Effect<Output = Inner::Output, Env = Inner::Env>,
{
    type Output = Inner::Output;
    type Error = E2::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, E2::Error> {
        match self.inner.run(env).await {
            Ok(value) => Ok(value),
            Err(error) => {
                let recovery = (self.f)(error);
                recovery.run(env).await
            }
        }
    }
}

/// FilterOrElse combinator - fail a success that does not satisfy a predicate.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = succeed::<_, String, ()>(17)
///     .filter_or_else(|age| *age >= 18, |age| format!("{} is under 18", age));
/// assert_eq!(effect.run(&()).await, Err("17 is under 18".to_string()));
/// # });
/// ```
pub struct FilterOrElse<Inner, P, F> {
    pub(crate) inner: Inner,
    pub(crate) predicate: P,
    pub(crate) on_false: F,
}

impl<Inner, P, F> std::fmt::Debug for FilterOrElse<Inner, P, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterOrElse")
            .field("inner", &"<effect>")
            .field("predicate", &"<function>")
            .field("on_false", &"<function>")
            .finish()
    }
}

impl<Inner, P, F> Effect for FilterOrElse<Inner, P, F>
where
    Inner: Effect,
    P: Fn(&Inner::Output) -> bool + Send + Sync,
    F: Fn(Inner::Output) -> Inner::Error + Send + Sync,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let value = self.inner.run(env).await?;
        if (self.predicate)(&value) {
            Ok(value)
        } else {
            Err((self.on_false)(value))
        }
    }
}

/// Alternative that keeps every failure.
///
/// Built by [`Validation::alt`](crate::effect::instances::Validation::alt).
/// Like [`Alt`] the second effect is only built when the first fails; when
/// both fail the two errors are merged with the combining operation.
pub struct ValidationAlt<Inner, F, C> {
    pub(crate) inner: Inner,
    pub(crate) second: F,
    pub(crate) combine: C,
}

impl<Inner, F, C> std::fmt::Debug for ValidationAlt<Inner, F, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationAlt")
            .field("inner", &"<effect>")
            .field("second", &"<thunk>")
            .field("combine", &"<function>")
            .finish()
    }
}

impl<Inner, F, C, E2> Effect for ValidationAlt<Inner, F, C>
where
    Inner: Effect,
    F: Fn() -> E2 + Send + Sync,
    E2: Effect<Output = Inner::Output, Error = Inner::Error, Env = Inner::Env>,
    C: Fn(Inner::Error, Inner::Error) -> Inner::Error + Send + Sync,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let first = match self.inner.run(env).await {
            Ok(value) => return Ok(value),
            Err(error) => error,
        };
        let alternative = (self.second)();
        alternative
            .run(env)
            .await
            .map_err(|second| (self.combine)(first, second))
    }
}
