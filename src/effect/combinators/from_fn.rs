//! FromFn - effect from a synchronous, environment-dependent function.

use std::marker::PhantomData;

use crate::effect::trait_def::Effect;

/// Effect from a synchronous function of the environment.
///
/// The function is called once per run.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// struct Env { value: i32 }
///
/// # tokio_test::block_on(async {
/// let effect = from_fn(|env: &Env| Ok::<_, String>(env.value * 2));
/// assert_eq!(effect.run(&Env { value: 21 }).await, Ok(42));
/// # });
/// ```
pub struct FromFn<F, Env> {
    pub(crate) f: F,
    pub(crate) _phantom: PhantomData<fn() -> Env>,
}

impl<F, Env> std::fmt::Debug for FromFn<F, Env> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<F, Env> FromFn<F, Env> {
    /// Create a new FromFn effect.
    pub fn new(f: F) -> Self {
        FromFn {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, T, E, Env> Effect for FromFn<F, Env>
where
    F: Fn(&Env) -> Result<T, E> + Send + Sync,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    type Output = T;
    type Error = E;
    type Env = Env;

    async fn run(&self, env: &Env) -> Result<T, E> {
        (self.f)(env)
    }
}
