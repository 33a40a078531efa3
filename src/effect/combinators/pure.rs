//! Succeed - an effect that always succeeds with a stored value.

use std::marker::PhantomData;

use crate::effect::trait_def::Effect;

/// A value wrapped as an Effect.
///
/// The value is cloned on every run, so the effect can be run repeatedly.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = succeed::<_, String, ()>(42);
/// assert_eq!(effect.run(&()).await, Ok(42));
/// assert_eq!(effect.run(&()).await, Ok(42));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct Succeed<T, E, Env> {
    value: T,
    _phantom: PhantomData<fn() -> (E, Env)>,
}

impl<T, E, Env> Succeed<T, E, Env> {
    /// Create a new Succeed effect from a value.
    pub fn new(value: T) -> Self {
        Succeed {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<T, E, Env> Effect for Succeed<T, E, Env>
where
    T: Clone + Send + Sync,
    E: Send,
    Env: Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(&self, _env: &Self::Env) -> Result<T, E> {
        Ok(self.value.clone())
    }
}
