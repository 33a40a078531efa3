//! Structured accumulation: grow a tuple of results one step at a time.
//!
//! An accumulation starts from [`begin`](crate::effect::begin) (the empty
//! tuple) or from [`tupled`](crate::effect::EffectExt::tupled) on an
//! existing effect. Each step appends one value:
//!
//! - `bind(f)` is dependent and sequential: `f` sees everything gathered so
//!   far and returns the next effect;
//! - `attach(effect)` is independent: the effect runs concurrently with the
//!   accumulation so far.
//!
//! `finish::<R>()` converts the final tuple into a named record through
//! `R: From<(..)>`.
//!
//! # Example
//!
//! ```rust
//! use tributary::effect::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Profile { id: u32, name: String, posts: usize }
//!
//! impl From<(u32, String, usize)> for Profile {
//!     fn from((id, name, posts): (u32, String, usize)) -> Self {
//!         Profile { id, name, posts }
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let profile = begin::<String, ()>()
//!     .bind(|_| succeed(7u32))
//!     .bind(|&(id,)| succeed(format!("user-{}", id)))
//!     .attach(succeed(3usize))
//!     .finish::<Profile>();
//!
//! assert_eq!(
//!     profile.run(&()).await,
//!     Ok(Profile { id: 7, name: "user-7".to_string(), posts: 3 })
//! );
//! # });
//! ```

use crate::effect::trait_def::Effect;

/// Append one element to the end of a tuple.
pub trait Append<B> {
    /// The tuple with `B` added at the end.
    type Output;

    /// Append `value`.
    fn append(self, value: B) -> Self::Output;
}

impl<B> Append<B> for () {
    type Output = (B,);

    fn append(self, value: B) -> (B,) {
        (value,)
    }
}

macro_rules! impl_append_tuple {
    ($($T:ident),+) => {
        impl<$($T,)+ B> Append<B> for ($($T,)+) {
            type Output = ($($T,)+ B);

            #[allow(non_snake_case)]
            fn append(self, value: B) -> Self::Output {
                let ($($T,)+) = self;
                ($($T,)+ value)
            }
        }
    };
}

impl_append_tuple!(T1);
impl_append_tuple!(T1, T2);
impl_append_tuple!(T1, T2, T3);
impl_append_tuple!(T1, T2, T3, T4);
impl_append_tuple!(T1, T2, T3, T4, T5);
impl_append_tuple!(T1, T2, T3, T4, T5, T6);
impl_append_tuple!(T1, T2, T3, T4, T5, T6, T7);
impl_append_tuple!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_append_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_append_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_append_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);

/// Bind combinator - a dependent accumulation step.
pub struct Bind<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Bind<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bind")
            .field("inner", &"<effect>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, E2> Effect for Bind<Inner, F>
where
    Inner: Effect,
    Inner::Output: Append<E2::Output>,
    <Inner::Output as Append<E2::Output>>::Output: Send,
    E2: Effect<Error = Inner::Error, Env = Inner::Env>,
    F: Fn(&Inner::Output) -> E2 + Send + Sync,
{
    type Output = <Inner::Output as Append<E2::Output>>::Output;
    type Error = Inner::Error;
    type Env = Inner::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let acc = self.inner.run(env).await?;
        let next = (self.f)(&acc);
        let value = next.run(env).await?;
        Ok(acc.append(value))
    }
}
