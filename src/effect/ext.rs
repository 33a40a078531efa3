//! Extension traits providing combinator methods for all Effects.
//!
//! `EffectExt` is implemented for every type that implements `Effect`.
//! `InfallibleExt` adds `run_infallible` for effects that cannot fail.

use std::convert::Infallible;
use std::future::Future;
use std::marker::PhantomData;

use crate::effect::boxed::BoxedEffect;
use crate::effect::combinators::{
    Alt, AndThen, AndThenAsync, AndThenFirst, AndThenResult, Append, Bimap, Bind, FilterOrElse,
    Flatten, Fold, GetOrElse, Map, MapErr, OrElse, Swap, ZipWith,
};
use crate::effect::instances::Par;
use crate::effect::reader::Local;
use crate::effect::trait_def::Effect;

/// Extension trait providing combinator methods for all Effects.
///
/// This trait is automatically implemented for all types that implement `Effect`.
/// You don't need to implement this trait yourself.
///
/// Two-effect combinators (`zip`, `zip_with`, `ap`, `ap_first`,
/// `ap_second`, `attach`) run both sides concurrently and keep the left
/// failure when both fail. For other policies see
/// [`instances`](crate::effect::instances).
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = succeed::<_, String, ()>(21)
///     .map(|x| x * 2)
///     .and_then(|x| succeed(x + 1))
///     .map_err(|e| format!("Error: {}", e));
///
/// assert_eq!(effect.run(&()).await, Ok(43));
/// # });
/// ```
pub trait EffectExt: Effect {
    /// Transform the success value.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U + Send + Sync,
        U: Send,
    {
        Map { inner: self, f }
    }

    /// Transform the error value.
    ///
    /// Useful for converting error types to enable chaining with `and_then`.
    fn map_err<E2, F>(self, f: F) -> MapErr<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Error) -> E2 + Send + Sync,
        E2: Send,
    {
        MapErr { inner: self, f }
    }

    /// Transform whichever channel the outcome lands in.
    fn bimap<E2, U, G, F>(self, on_err: G, on_ok: F) -> Bimap<Self, G, F>
    where
        Self: Sized,
        G: Fn(Self::Error) -> E2 + Send + Sync,
        F: Fn(Self::Output) -> U + Send + Sync,
        E2: Send,
        U: Send,
    {
        Bimap {
            inner: self,
            on_err,
            on_ok,
        }
    }

    /// Exchange the success and failure channels.
    fn swap(self) -> Swap<Self>
    where
        Self: Sized,
    {
        Swap { inner: self }
    }

    /// Chain a dependent effect.
    ///
    /// If this effect succeeds, apply the function to produce the next effect.
    /// If this effect fails, propagate the error; `f` is not called.
    ///
    /// The chained effect must have the same error type. Use `map_err`
    /// to convert error types before chaining.
    fn and_then<E2, F>(self, f: F) -> AndThen<Self, F>
    where
        Self: Sized,
        E2: Effect<Error = Self::Error, Env = Self::Env>,
        F: Fn(Self::Output) -> E2 + Send + Sync,
    {
        AndThen { inner: self, f }
    }

    /// Run an effect produced by this one.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Output: Effect<Error = Self::Error, Env = Self::Env>,
    {
        Flatten { inner: self }
    }

    /// Run a dependent effect for its outcome only and keep this value.
    fn and_then_first<E2, F>(self, f: F) -> AndThenFirst<Self, F>
    where
        Self: Sized,
        E2: Effect<Error = Self::Error, Env = Self::Env>,
        F: Fn(&Self::Output) -> E2 + Send + Sync,
    {
        AndThenFirst { inner: self, f }
    }

    /// Chain a synchronous step that can fail.
    fn and_then_result<U, F>(self, f: F) -> AndThenResult<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Result<U, Self::Error> + Send + Sync,
        U: Send,
    {
        AndThenResult { inner: self, f }
    }

    /// Chain an async step that can fail and does not need the environment.
    fn and_then_async<U, Fut, F>(self, f: F) -> AndThenAsync<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Fut + Send + Sync,
        Fut: Future<Output = Result<U, Self::Error>> + Send,
        U: Send,
    {
        AndThenAsync { inner: self, f }
    }

    /// Combine with an independent effect using `f`.
    fn zip_with<R, U, F>(self, other: R, f: F) -> ZipWith<Self, R, F, Par>
    where
        Self: Sized,
        R: Effect<Error = Self::Error, Env = Self::Env>,
        F: Fn(Self::Output, R::Output) -> U + Send + Sync,
        U: Send,
    {
        ZipWith::new(self, other, f, Par)
    }

    /// Pair with an independent effect.
    ///
    /// ```rust
    /// use tributary::effect::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = succeed::<_, String, ()>(1).zip(succeed("one"));
    /// assert_eq!(effect.run(&()).await, Ok((1, "one")));
    /// # });
    /// ```
    #[allow(clippy::type_complexity)]
    fn zip<R>(self, other: R) -> ZipWith<Self, R, fn(Self::Output, R::Output) -> (Self::Output, R::Output), Par>
    where
        Self: Sized,
        R: Effect<Error = Self::Error, Env = Self::Env>,
    {
        let f: fn(Self::Output, R::Output) -> (Self::Output, R::Output) = |a, b| (a, b);
        ZipWith::new(self, other, f, Par)
    }

    /// Apply the function this effect produces to the value of `arg`.
    ///
    /// Both effects run concurrently; see the trait docs for failures.
    ///
    /// ```rust
    /// use tributary::effect::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let double = succeed::<_, String, ()>(|x: i32| x * 2);
    /// assert_eq!(double.ap(succeed(21)).run(&()).await, Ok(42));
    /// # });
    /// ```
    #[allow(clippy::type_complexity)]
    fn ap<R, B>(self, arg: R) -> ZipWith<Self, R, fn(Self::Output, R::Output) -> B, Par>
    where
        Self: Sized,
        Self::Output: FnOnce(R::Output) -> B,
        R: Effect<Error = Self::Error, Env = Self::Env>,
        B: Send,
    {
        let f: fn(Self::Output, R::Output) -> B = |g, a| g(a);
        ZipWith::new(self, arg, f, Par)
    }

    /// Run both concurrently and keep this value.
    #[allow(clippy::type_complexity)]
    fn ap_first<R>(self, other: R) -> ZipWith<Self, R, fn(Self::Output, R::Output) -> Self::Output, Par>
    where
        Self: Sized,
        R: Effect<Error = Self::Error, Env = Self::Env>,
    {
        let f: fn(Self::Output, R::Output) -> Self::Output = |a, _| a;
        ZipWith::new(self, other, f, Par)
    }

    /// Run both concurrently and keep the other value.
    #[allow(clippy::type_complexity)]
    fn ap_second<R>(self, other: R) -> ZipWith<Self, R, fn(Self::Output, R::Output) -> R::Output, Par>
    where
        Self: Sized,
        R: Effect<Error = Self::Error, Env = Self::Env>,
    {
        let f: fn(Self::Output, R::Output) -> R::Output = |_, b| b;
        ZipWith::new(self, other, f, Par)
    }

    /// On failure, run the effect built by `second` instead.
    ///
    /// `second` is not called when this effect succeeds.
    fn alt<E2, F>(self, second: F) -> Alt<Self, F>
    where
        Self: Sized,
        E2: Effect<Output = Self::Output, Env = Self::Env>,
        F: Fn() -> E2 + Send + Sync,
    {
        Alt {
            inner: self,
            second,
        }
    }

    /// Recover from an error.
    ///
    /// If this effect fails, apply the recovery function to produce a new effect.
    /// If this effect succeeds, the value passes through unchanged.
    fn or_else<E2, F>(self, f: F) -> OrElse<Self, F>
    where
        Self: Sized,
        E2: Effect<Output = Self::Output, Env = Self::Env>,
        F: Fn(Self::Error) -> E2 + Send + Sync,
    {
        OrElse { inner: self, f }
    }

    /// Fail with `on_false(value)` when the value does not satisfy `predicate`.
    fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> FilterOrElse<Self, P, F>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool + Send + Sync,
        F: Fn(Self::Output) -> Self::Error + Send + Sync,
    {
        FilterOrElse {
            inner: self,
            predicate,
            on_false,
        }
    }

    /// Handle both outcomes, producing an effect that cannot fail.
    fn fold<H1, H2, G, F>(self, on_failure: G, on_success: F) -> Fold<Self, G, F>
    where
        Self: Sized,
        G: Fn(Self::Error) -> H1 + Send + Sync,
        F: Fn(Self::Output) -> H2 + Send + Sync,
        H1: Effect<Error = Infallible, Env = Self::Env>,
        H2: Effect<Output = H1::Output, Error = Infallible, Env = Self::Env>,
    {
        Fold {
            inner: self,
            on_failure,
            on_success,
        }
    }

    /// Replace a failure with the value of an infallible recovery effect.
    fn get_or_else<H, G>(self, on_failure: G) -> GetOrElse<Self, G>
    where
        Self: Sized,
        G: Fn(Self::Error) -> H + Send + Sync,
        H: Effect<Output = Self::Output, Error = Infallible, Env = Self::Env>,
    {
        GetOrElse {
            inner: self,
            on_failure,
        }
    }

    /// Run this effect with an environment derived from an outer one.
    fn local<Env2, F>(self, f: F) -> Local<Self, F, Env2>
    where
        Self: Sized,
        F: Fn(&Env2) -> Self::Env + Send + Sync,
        Env2: Send + Sync,
    {
        Local {
            inner: self,
            f,
            _phantom: PhantomData,
        }
    }

    /// Start an accumulation from this effect's value.
    #[allow(clippy::type_complexity)]
    fn tupled(self) -> Map<Self, fn(Self::Output) -> (Self::Output,)>
    where
        Self: Sized,
    {
        let f: fn(Self::Output) -> (Self::Output,) = |a| (a,);
        Map { inner: self, f }
    }

    /// Append the value of a dependent effect to the accumulated tuple.
    ///
    /// Runs after the accumulation so far succeeded; `f` sees every value
    /// gathered up to this point.
    fn bind<E2, F>(self, f: F) -> Bind<Self, F>
    where
        Self: Sized,
        Self::Output: Append<E2::Output>,
        E2: Effect<Error = Self::Error, Env = Self::Env>,
        F: Fn(&Self::Output) -> E2 + Send + Sync,
    {
        Bind { inner: self, f }
    }

    /// Append the value of an independent effect to the accumulated tuple.
    ///
    /// `other` runs concurrently with the accumulation so far.
    #[allow(clippy::type_complexity)]
    fn attach<R>(
        self,
        other: R,
    ) -> ZipWith<Self, R, fn(Self::Output, R::Output) -> <Self::Output as Append<R::Output>>::Output, Par>
    where
        Self: Sized,
        Self::Output: Append<R::Output>,
        R: Effect<Error = Self::Error, Env = Self::Env>,
    {
        let f: fn(Self::Output, R::Output) -> <Self::Output as Append<R::Output>>::Output =
            |acc, value| acc.append(value);
        ZipWith::new(self, other, f, Par)
    }

    /// Convert the accumulated tuple into a named record.
    #[allow(clippy::type_complexity)]
    fn finish<R>(self) -> Map<Self, fn(Self::Output) -> R>
    where
        Self: Sized,
        R: From<Self::Output> + Send,
    {
        let f: fn(Self::Output) -> R = <R as From<Self::Output>>::from;
        Map { inner: self, f }
    }

    /// Erase the concrete type.
    ///
    /// Use for collections of different effects, match arms with
    /// different combinators, and recursion.
    fn boxed(self) -> BoxedEffect<Self::Output, Self::Error, Self::Env>
    where
        Self: Sized + 'static,
    {
        BoxedEffect::new(self)
    }
}

impl<E: Effect> EffectExt for E {}

/// Run an effect that cannot fail and get its value directly.
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = fail::<i32, _, ()>("offline").get_or_else(|_| succeed(0));
/// assert_eq!(effect.run_infallible(&()).await, 0);
/// # });
/// ```
pub trait InfallibleExt: Effect<Error = Infallible> {
    /// Run against `env` and return the value.
    fn run_infallible(&self, env: &Self::Env) -> impl Future<Output = Self::Output> + Send {
        async move {
            match self.run(env).await {
                Ok(value) => value,
                Err(never) => match never {},
            }
        }
    }
}

impl<E: Effect<Error = Infallible>> InfallibleExt for E {}
