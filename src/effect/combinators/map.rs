//! Map combinator - transforms the success value of an effect.

use crate::effect::trait_def::Effect;

/// Map combinator - transforms the success value.
///
/// Zero-cost: the struct stores only the inner effect and the
/// transformation. A failure passes through and `f` is never called.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = succeed::<_, String, ()>(21).map(|x| x * 2);
/// assert_eq!(effect.run(&()).await, Ok(42));
/// # });
/// ```
pub struct Map<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Map<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &"<effect>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, U> Effect for Map<Inner, F>
where
    Inner: Effect,
    F: Fn(Inner::Output) -> U + Send + Sync,
    U: Send,
{
    type Output = U;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<U, Self::Error> {
        self.inner.run(env).await.map(&self.f)
    }
}
