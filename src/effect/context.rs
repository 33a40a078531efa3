//! Error context for effect chains.
//!
//! `.context(msg)` wraps the error of an effect in a [`ContextError`];
//! `.context_chain(msg)` adds further layers once it is wrapped. The
//! message is attached on every failing run.

use crate::context::ContextError;
use crate::effect::combinators::MapErr;
use crate::effect::ext::EffectExt;
use crate::effect::trait_def::Effect;

/// Extension trait for adding context to Effect errors.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = fail::<i32, _, ()>("connection refused")
///     .context("connecting to database");
///
/// let err = effect.run(&()).await.unwrap_err();
/// assert_eq!(err.inner(), &"connection refused");
/// assert_eq!(err.context_trail(), &["connecting to database"]);
/// # });
/// ```
pub trait EffectContext: Effect {
    /// Wrap any error from this effect in a `ContextError` carrying `msg`.
    #[allow(clippy::type_complexity)]
    fn context(
        self,
        msg: impl Into<String>,
    ) -> MapErr<Self, impl Fn(Self::Error) -> ContextError<Self::Error> + Send + Sync>
    where
        Self: Sized,
    {
        let msg = msg.into();
        self.map_err(move |err| ContextError::new(err).context(msg.clone()))
    }
}

impl<E: Effect> EffectContext for E {}

/// Extension trait for chaining context on effects that already have ContextError.
pub trait EffectContextChain<T, E, Env>:
    Effect<Output = T, Error = ContextError<E>, Env = Env>
{
    /// Add another layer of context.
    fn context_chain(
        self,
        msg: impl Into<String>,
    ) -> MapErr<Self, impl Fn(ContextError<E>) -> ContextError<E> + Send + Sync>
    where
        Self: Sized,
        E: Send,
    {
        let msg = msg.into();
        self.map_err(move |err| err.context(msg.clone()))
    }
}

impl<Eff, T, E, Env> EffectContextChain<T, E, Env> for Eff where
    Eff: Effect<Output = T, Error = ContextError<E>, Env = Env>
{
}
