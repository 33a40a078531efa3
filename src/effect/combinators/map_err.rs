//! MapErr combinator - transforms the error value of an effect.

use crate::effect::trait_def::Effect;

/// MapErr combinator - transforms the error value.
///
/// This is also how two effects with different error types are brought
/// together before chaining:
///
/// ```rust,ignore
/// load_config()                              // Error = io::Error
///     .map_err(AppError::from)               // Error = AppError
///     .and_then(|cfg| connect(cfg))          // Error = AppError
/// ```
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = fail::<i32, _, ()>("error")
///     .map_err(|e: &str| format!("wrapped: {}", e));
/// assert_eq!(effect.run(&()).await, Err("wrapped: error".to_string()));
/// # });
/// ```
pub struct MapErr<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for MapErr<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapErr")
            .field("inner", &"<effect>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, E2> Effect for MapErr<Inner, F>
where
    Inner: Effect,
    F: Fn(Inner::Error) -> E2 + Send + Sync,
    E2: Send,
{
    type Output = Inner::Output;
    type Error = E2;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, E2> {
        self.inner.run(env).await.map_err(&self.f)
    }
}
