//! Constructor functions for creating effects.
//!
//! These functions provide ergonomic ways to create effects without
//! directly constructing the combinator types. Building an effect never
//! does any work; everything happens when it is run.

use std::future::Future;

use crate::effect::combinators::{
    Fail, FailIo, FailTask, FromAsync, FromFn, FromIo, FromResult, FromTask, FromTaskResult,
    Succeed,
};
use crate::effect::reader::{Ask, Asks, FailAsyncReader, FailReader, FromAsyncReader, Local};
use crate::effect::trait_def::Effect;

/// Create an effect that succeeds with the given value.
///
/// The value is cloned on every run.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = succeed::<_, String, ()>(42);
/// assert_eq!(effect.run(&()).await, Ok(42));
/// # });
/// ```
pub fn succeed<T, E, Env>(value: T) -> Succeed<T, E, Env>
where
    T: Clone + Send + Sync,
    E: Send,
    Env: Send + Sync,
{
    Succeed::new(value)
}

/// Create an effect that fails with the given error.
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
pub fn fail<T, E, Env>(error: E) -> Fail<T, E, Env>
where
    T: Send,
    E: Clone + Send + Sync,
    Env: Send + Sync,
{
    Fail::new(error)
}

/// Lift an async producer into the success channel.
pub fn from_task<T, E, Env, F, Fut>(f: F) -> FromTask<F, (E, Env)>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = T> + Send,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    FromTask::new(f)
}

/// Lift an async producer into the failure channel.
pub fn fail_task<T, E, Env, F, Fut>(f: F) -> FailTask<F, (T, Env)>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = E> + Send,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    FailTask::new(f)
}

/// Lift an async producer of a `Result`.
pub fn from_task_result<T, E, Env, F, Fut>(f: F) -> FromTaskResult<F, Env>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    FromTaskResult::new(f)
}

/// Lift a synchronous thunk into the success channel. Called on every run.
pub fn from_io<T, E, Env, F>(f: F) -> FromIo<F, (E, Env)>
where
    F: Fn() -> T + Send + Sync,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    FromIo::new(f)
}

/// Lift a synchronous thunk into the failure channel. Called on every run.
pub fn fail_io<T, E, Env, F>(f: F) -> FailIo<F, (T, Env)>
where
    F: Fn() -> E + Send + Sync,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    FailIo::new(f)
}

/// Succeed with a value computed from the environment.
///
/// Same as [`asks`].
pub fn from_reader<U, E, Env, F>(f: F) -> Asks<F, E, Env>
where
    F: Fn(&Env) -> U + Send + Sync,
    U: Send,
    E: Send,
    Env: Send + Sync,
{
    Asks::new(f)
}

/// Fail with an error computed from the environment.
pub fn fail_reader<T, E, Env, F>(f: F) -> FailReader<F, T, Env>
where
    F: Fn(&Env) -> E + Send + Sync,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    FailReader::new(f)
}

/// Succeed with the value of an async, non-failing environment reader.
pub fn from_async_reader<T, E, Env, F, Fut>(f: F) -> FromAsyncReader<F, E, Env>
where
    F: Fn(&Env) -> Fut + Send + Sync,
    Fut: Future<Output = T> + Send,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    FromAsyncReader::new(f)
}

/// Fail with the value of an async, non-failing environment reader.
pub fn fail_async_reader<T, E, Env, F, Fut>(f: F) -> FailAsyncReader<F, T, Env>
where
    F: Fn(&Env) -> Fut + Send + Sync,
    Fut: Future<Output = E> + Send,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    FailAsyncReader::new(f)
}

/// Create an effect from a synchronous function of the environment.
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
pub fn from_fn<T, E, Env, F>(f: F) -> FromFn<F, Env>
where
    F: Fn(&Env) -> Result<T, E> + Send + Sync,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    FromFn::new(f)
}

/// Create an effect from an async function of the environment.
///
/// The most general constructor: every other one can be written with it.
/// The returned future must not borrow the environment; copy out what it
/// needs first.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// struct Env { value: i32 }
///
/// # tokio_test::block_on(async {
/// let effect = from_async(|env: &Env| {
///     let value = env.value;
///     async move { Ok::<_, String>(value * 2) }
/// });
/// assert_eq!(effect.run(&Env { value: 21 }).await, Ok(42));
/// # });
/// ```
pub fn from_async<T, E, Env, F, Fut>(f: F) -> FromAsync<F, Env>
where
    F: Fn(&Env) -> Fut + Send + Sync,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
    Env: Send + Sync,
{
    FromAsync::new(f)
}

/// Lift an existing `Result`. It is cloned on every run.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = from_result::<_, _, ()>(Ok::<_, String>(42));
/// assert_eq!(effect.run(&()).await, Ok(42));
/// # });
/// ```
pub fn from_result<T, E, Env>(result: Result<T, E>) -> FromResult<T, E, Env>
where
    T: Clone + Send + Sync,
    E: Clone + Send + Sync,
    Env: Send + Sync,
{
    FromResult::new(result)
}

/// Lift an `Option`, failing with `on_absent()` when it is `None`.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let missing = from_option::<i32, _, (), _>(None, || "not found".to_string());
/// assert_eq!(missing.run(&()).await, Err("not found".to_string()));
/// # });
/// ```
pub fn from_option<T, E, Env, F>(option: Option<T>, on_absent: F) -> FromResult<T, E, Env>
where
    T: Clone + Send + Sync,
    E: Clone + Send + Sync,
    Env: Send + Sync,
    F: FnOnce() -> E,
{
    FromResult::new(option.ok_or_else(on_absent))
}

/// Succeed with `value` if it satisfies `predicate`, otherwise fail with
/// `on_false(value)`.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = from_predicate::<_, _, (), _, _>(-3, |n: &i32| *n >= 0, |n| format!("{} is negative", n));
/// assert_eq!(effect.run(&()).await, Err("-3 is negative".to_string()));
/// # });
/// ```
pub fn from_predicate<T, E, Env, P, F>(value: T, predicate: P, on_false: F) -> FromResult<T, E, Env>
where
    T: Clone + Send + Sync,
    E: Clone + Send + Sync,
    Env: Send + Sync,
    P: FnOnce(&T) -> bool,
    F: FnOnce(T) -> E,
{
    let result = if predicate(&value) {
        Ok(value)
    } else {
        Err(on_false(value))
    };
    FromResult::new(result)
}

/// Narrow `value` with `refine`, failing with `on_false` on the value it
/// hands back.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let port = from_refinement::<_, _, _, (), _, _>(
///     8080i64,
///     |n| u16::try_from(n).map_err(|_| n),
///     |n| format!("{} is not a port", n),
/// );
/// assert_eq!(port.run(&()).await, Ok(8080u16));
/// # });
/// ```
pub fn from_refinement<A, B, E, Env, R, F>(value: A, refine: R, on_false: F) -> FromResult<B, E, Env>
where
    B: Clone + Send + Sync,
    E: Clone + Send + Sync,
    Env: Send + Sync,
    R: FnOnce(A) -> Result<B, A>,
    F: FnOnce(A) -> E,
{
    FromResult::new(refine(value).map_err(on_false))
}

/// Get the entire environment (cloned).
pub fn ask<E, Env>() -> Ask<E, Env>
where
    E: Send,
    Env: Clone + Send + Sync,
{
    Ask::new()
}

/// Succeed with a value computed from the environment.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// struct Env { n: i32 }
///
/// # tokio_test::block_on(async {
/// let effect = asks::<_, String, Env, _>(|env| env.n).and_then(|x| succeed(x * 2));
/// assert_eq!(effect.run(&Env { n: 21 }).await, Ok(42));
/// # });
/// ```
pub fn asks<U, E, Env, F>(f: F) -> Asks<F, E, Env>
where
    F: Fn(&Env) -> U + Send + Sync,
    U: Send,
    E: Send,
    Env: Send + Sync,
{
    Asks::new(f)
}

/// Run `effect` against the environment derived by `f`.
pub fn local<Inner, F, Env2>(f: F, effect: Inner) -> Local<Inner, F, Env2>
where
    Inner: Effect,
    F: Fn(&Env2) -> Inner::Env + Send + Sync,
    Env2: Send + Sync,
{
    Local::new(effect, f)
}

/// The empty accumulation: succeed with `()`.
///
/// Grow it with [`bind`](crate::effect::EffectExt::bind) and
/// [`attach`](crate::effect::EffectExt::attach).
pub fn begin<E, Env>() -> Succeed<(), E, Env>
where
    E: Send,
    Env: Send + Sync,
{
    Succeed::new(())
}
