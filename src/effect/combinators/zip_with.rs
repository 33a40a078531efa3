//! ZipWith combinator - runs two independent effects and combines their
//! values.
//!
//! This one struct backs `zip`, `zip_with`, `ap`, `ap_first`, `ap_second`,
//! `attach` and `apply_concat`. The [`ApplyPolicy`] it carries decides
//! whether the two branches run together or one after the other, and what
//! happens when both fail.

use crate::effect::instances::ApplyPolicy;
use crate::effect::trait_def::Effect;

/// Run `left` and `right` under `policy`.
///
/// Concurrent policies poll both futures together with `futures::join!`
/// and wait for both, so neither branch is abandoned when the other fails.
/// A sequential policy runs `right` only after `left` succeeded.
pub(crate) async fn run_both<P, L, R>(
    policy: &P,
    left: &L,
    right: &R,
    env: &L::Env,
) -> Result<(L::Output, R::Output), L::Error>
where
    L: Effect,
    R: Effect<Error = L::Error, Env = L::Env>,
    P: ApplyPolicy<L::Error>,
{
    if policy.sequential() {
        let a = left.run(env).await?;
        let b = right.run(env).await?;
        return Ok((a, b));
    }

    let (a, b) = futures::join!(left.run(env), right.run(env));
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(first), Err(second)) => Err(policy.merge(first, second)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
    }
}

/// ZipWith combinator - combine two independent effects with a function.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let effect = succeed::<_, String, ()>(2)
///     .zip_with(succeed(3), |a, b| a * b);
/// assert_eq!(effect.run(&()).await, Ok(6));
/// # });
/// ```
pub struct ZipWith<L, R, F, P> {
    pub(crate) left: L,
    pub(crate) right: R,
    pub(crate) f: F,
    pub(crate) policy: P,
}

impl<L, R, F, P> ZipWith<L, R, F, P> {
    /// Combine `left` and `right` with `f` under `policy`.
    pub fn new(left: L, right: R, f: F, policy: P) -> Self {
        ZipWith {
            left,
            right,
            f,
            policy,
        }
    }
}

impl<L, R, F, P: std::fmt::Debug> std::fmt::Debug for ZipWith<L, R, F, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipWith")
            .field("left", &"<effect>")
            .field("right", &"<effect>")
            .field("f", &"<function>")
            .field("policy", &self.policy)
            .finish()
    }
}

impl<L, R, F, P, U> Effect for ZipWith<L, R, F, P>
where
    L: Effect,
    R: Effect<Error = L::Error, Env = L::Env>,
    F: Fn(L::Output, R::Output) -> U + Send + Sync,
    P: ApplyPolicy<L::Error>,
    U: Send,
{
    type Output = U;
    type Error = L::Error;
    type Env = L::Env;

    async fn run(&self, env: &Self::Env) -> Result<U, Self::Error> {
        let (a, b) = run_both(&self.policy, &self.left, &self.right, env).await?;
        Ok((self.f)(a, b))
    }
}
