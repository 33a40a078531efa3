//! AndThenFirst combinator - sequence a dependent effect, keep the first value.

use crate::effect::trait_def::Effect;

/// Runs `f(&value)` after the inner effect succeeds and keeps `value`.
///
/// A failure from the follow-up effect fails the whole. Useful for
/// audit writes, cache fills, and other steps whose result is irrelevant.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = succeed::<_, String, ()>(7).and_then_first(|n| succeed(*n * 100));
/// assert_eq!(effect.run(&()).await, Ok(7));
///
/// let failing = succeed::<_, String, ()>(7).and_then_first(|_| fail::<(), _, _>("audit down".to_string()));
/// assert_eq!(failing.run(&()).await, Err("audit down".to_string()));
/// # });
/// ```
pub struct AndThenFirst<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for AndThenFirst<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndThenFirst")
            .field("inner", &"<effect>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, E2> Effect for AndThenFirst<Inner, F>
where
    Inner: Effect,
    E2: Effect<Error = Inner::Error, Env = Inner::Env>,
    F: Fn(&Inner::Output) -> E2 + Send + Sync,
{
    type Output = Inner::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let value = self.inner.run(env).await?;
        let follow_up = (self.f)(&value);
        follow_up.run(env).await?;
        Ok(value)
    }
}
