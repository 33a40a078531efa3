//! Combination policies and the instances built on them.
//!
//! Every way of putting two independent effects together is the same
//! operation with a different [`ApplyPolicy`]:
//!
//! | Policy | Branches | Both fail |
//! |---|---|---|
//! | [`Par`] | run together | first (left) error |
//! | [`Seq`] | right runs only after left succeeded | n/a |
//! | [`Validation`] | run together | errors merged |
//!
//! The `EffectExt` methods (`zip`, `ap`, `attach`, ...) use [`Par`].
//! Accumulating failures is opt-in through a [`Validation`] value:
//!
//! ```rust
//! use tributary::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let v = Validation::semigroup();
//! let effect = v.zip(
//!     fail::<i32, _, ()>(vec!["e1"]),
//!     fail::<i32, _, ()>(vec!["e2"]),
//! );
//! assert_eq!(effect.run(&()).await, Err(vec!["e1", "e2"]));
//! # });
//! ```

use crate::effect::combinators::{FirstSuccess, Succeed, ValidationAlt, ZipWith};
use crate::effect::traverse::{Traverse, Unindexed};
use crate::effect::trait_def::Effect;
use crate::monoid::Monoid;
use crate::semigroup::Semigroup;

/// How two independent branches are run and what happens when both fail.
pub trait ApplyPolicy<E>: Send + Sync {
    /// Run the right branch only after the left one succeeded.
    fn sequential(&self) -> bool {
        false
    }

    /// Decide the error when both branches failed.
    fn merge(&self, first: E, second: E) -> E;
}

/// Concurrent, fail-fast. The left failure wins when both fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Par;

impl<E> ApplyPolicy<E> for Par {
    fn merge(&self, first: E, _second: E) -> E {
        first
    }
}

/// Strictly sequential. The right branch never starts after a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Seq;

impl<E> ApplyPolicy<E> for Seq {
    fn sequential(&self) -> bool {
        true
    }

    fn merge(&self, first: E, _second: E) -> E {
        first
    }
}

/// Concurrent, accumulating. Both failures are merged with `combine`,
/// which must be associative.
#[derive(Clone, Copy)]
pub struct Validation<C> {
    combine: C,
}

impl<C> std::fmt::Debug for Validation<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validation")
            .field("combine", &"<function>")
            .finish()
    }
}

impl<C> Validation<C> {
    /// Accumulate failures with `combine`.
    pub fn new(combine: C) -> Self {
        Validation { combine }
    }

    /// Alternative that merges both failures when both branches fail.
    ///
    /// `second` is only called when `first` fails.
    ///
    /// ```rust
    /// use tributary::effect::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let v = Validation::new(|a: String, b: String| format!("{}; {}", a, b));
    /// let effect = v.alt(
    ///     fail::<u16, _, ()>("no env var".to_string()),
    ///     || fail::<u16, _, ()>("no config file".to_string()),
    /// );
    /// assert_eq!(effect.run(&()).await, Err("no env var; no config file".to_string()));
    /// # });
    /// ```
    pub fn alt<L, F, E2>(&self, first: L, second: F) -> ValidationAlt<L, F, C>
    where
        C: Clone + Fn(L::Error, L::Error) -> L::Error + Send + Sync,
        L: Effect,
        F: Fn() -> E2 + Send + Sync,
        E2: Effect<Output = L::Output, Error = L::Error, Env = L::Env>,
    {
        ValidationAlt {
            inner: first,
            second,
            combine: self.combine.clone(),
        }
    }

    /// Concurrent traversal that reports every failure, merged in input
    /// order.
    pub fn traverse<A, I, F, Eff>(&self, items: I, f: F) -> Traverse<A, Unindexed<F>, Self>
    where
        C: Clone + Fn(Eff::Error, Eff::Error) -> Eff::Error + Send + Sync,
        I: IntoIterator<Item = A>,
        A: Clone + Send + Sync,
        F: Fn(A) -> Eff + Send + Sync,
        Eff: Effect,
    {
        Traverse::new(items.into_iter().collect(), Unindexed(f), self.clone())
    }
}

impl<E: Semigroup> Validation<fn(E, E) -> E> {
    /// Accumulate failures with the error type's [`Semigroup`].
    pub fn semigroup() -> Self {
        Validation::new(<E as Semigroup>::combine)
    }
}

impl<E, C> ApplyPolicy<E> for Validation<C>
where
    C: Fn(E, E) -> E + Send + Sync,
{
    fn merge(&self, first: E, second: E) -> E {
        (self.combine)(first, second)
    }
}

/// Combination operations shared by every policy.
///
/// Implemented for every `Clone` [`ApplyPolicy`]; each method returns a
/// [`ZipWith`] carrying a copy of the policy.
pub trait Applicative<E>: ApplyPolicy<E> + Clone + Sized {
    /// Combine both values with `f`.
    fn zip_with<L, R, F, U>(&self, left: L, right: R, f: F) -> ZipWith<L, R, F, Self>
    where
        L: Effect<Error = E>,
        R: Effect<Error = E, Env = L::Env>,
        F: Fn(L::Output, R::Output) -> U + Send + Sync,
    {
        ZipWith::new(left, right, f, self.clone())
    }

    /// Pair both values.
    #[allow(clippy::type_complexity)]
    fn zip<L, R>(
        &self,
        left: L,
        right: R,
    ) -> ZipWith<L, R, fn(L::Output, R::Output) -> (L::Output, R::Output), Self>
    where
        L: Effect<Error = E>,
        R: Effect<Error = E, Env = L::Env>,
    {
        let f: fn(L::Output, R::Output) -> (L::Output, R::Output) = |a, b| (a, b);
        ZipWith::new(left, right, f, self.clone())
    }

    /// Apply the function produced by `func` to the value produced by `arg`.
    #[allow(clippy::type_complexity)]
    fn ap<L, R, B>(&self, func: L, arg: R) -> ZipWith<L, R, fn(L::Output, R::Output) -> B, Self>
    where
        L: Effect<Error = E>,
        L::Output: FnOnce(R::Output) -> B,
        R: Effect<Error = E, Env = L::Env>,
    {
        let f: fn(L::Output, R::Output) -> B = |g, a| g(a);
        ZipWith::new(func, arg, f, self.clone())
    }

    /// Keep the left value.
    #[allow(clippy::type_complexity)]
    fn ap_first<L, R>(&self, left: L, right: R) -> ZipWith<L, R, fn(L::Output, R::Output) -> L::Output, Self>
    where
        L: Effect<Error = E>,
        R: Effect<Error = E, Env = L::Env>,
    {
        let f: fn(L::Output, R::Output) -> L::Output = |a, _| a;
        ZipWith::new(left, right, f, self.clone())
    }

    /// Keep the right value.
    #[allow(clippy::type_complexity)]
    fn ap_second<L, R>(&self, left: L, right: R) -> ZipWith<L, R, fn(L::Output, R::Output) -> R::Output, Self>
    where
        L: Effect<Error = E>,
        R: Effect<Error = E, Env = L::Env>,
    {
        let f: fn(L::Output, R::Output) -> R::Output = |_, b| b;
        ZipWith::new(left, right, f, self.clone())
    }
}

impl<E, P: ApplyPolicy<E> + Clone> Applicative<E> for P {}

/// Run both effects concurrently and combine two successes with their
/// [`Semigroup`]. The left failure wins.
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = apply_concat(
///     succeed::<_, String, ()>(vec![1, 2]),
///     succeed(vec![3]),
/// );
/// assert_eq!(effect.run(&()).await, Ok(vec![1, 2, 3]));
/// # });
/// ```
#[allow(clippy::type_complexity)]
pub fn apply_concat<L, R>(left: L, right: R) -> ZipWith<L, R, fn(L::Output, L::Output) -> L::Output, Par>
where
    L: Effect,
    L::Output: Semigroup,
    R: Effect<Output = L::Output, Error = L::Error, Env = L::Env>,
{
    let f: fn(L::Output, L::Output) -> L::Output = <L::Output as Semigroup>::combine;
    ZipWith::new(left, right, f, Par)
}

/// The identity for [`apply_concat`]: succeed with [`Monoid::empty`].
pub fn apply_empty<M, E, Env>() -> Succeed<M, E, Env>
where
    M: Monoid,
{
    Succeed::new(M::empty())
}

/// Run both effects concurrently and prefer whichever succeeded.
///
/// See [`FirstSuccess`] for the full table.
pub fn first_success<L, R>(left: L, right: R) -> FirstSuccess<L, R>
where
    L: Effect,
    L::Output: Semigroup,
    R: Effect<Output = L::Output, Error = L::Error, Env = L::Env>,
{
    FirstSuccess { left, right }
}
