//! Fail - an effect that always fails with a stored error.

use std::marker::PhantomData;

use crate::effect::trait_def::Effect;

/// An error wrapped as an Effect.
///
/// The error is cloned on every run.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = fail::<i32, _, ()>("error".to_string());
/// assert_eq!(effect.run(&()).await, Err("error".to_string()));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct Fail<T, E, Env> {
    error: E,
    _phantom: PhantomData<fn() -> (T, Env)>,
}

impl<T, E, Env> Fail<T, E, Env> {
    /// Create a new Fail effect from an error.
    pub fn new(error: E) -> Self {
        Fail {
            error,
            _phantom: PhantomData,
        }
    }
}

impl<T, E, Env> Effect for Fail<T, E, Env>
where
    T: Send,
    E: Clone + Send + Sync,
    Env: Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(&self, _env: &Self::Env) -> Result<T, E> {
        Err(self.error.clone())
    }
}
