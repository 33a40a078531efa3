//! FirstSuccess combinator - the semigroup that prefers whichever branch
//! succeeded.

use crate::effect::trait_def::Effect;
use crate::semigroup::Semigroup;

/// Runs both effects concurrently and keeps the successes.
///
/// - both succeed: the two values are combined, left first;
/// - one succeeds: its value wins over the other branch's failure;
/// - both fail: the left failure is kept.
///
/// # Example
///
/// ```rust
/// use tributary::effect::prelude::*;
///
/// # tokio_test::block_on(async {
/// let mirrors = first_success(
///     fail::<Vec<&str>, _, ()>("mirror-a timed out"),
///     succeed(vec!["pkg-1.0.tar.gz"]),
/// );
/// assert_eq!(mirrors.run(&()).await, Ok(vec!["pkg-1.0.tar.gz"]));
/// # });
/// ```
pub struct FirstSuccess<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> std::fmt::Debug for FirstSuccess<L, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirstSuccess")
            .field("left", &"<effect>")
            .field("right", &"<effect>")
            .finish()
    }
}

impl<L, R> Effect for FirstSuccess<L, R>
where
    L: Effect,
    L::Output: Semigroup,
    R: Effect<Output = L::Output, Error = L::Error, Env = L::Env>,
{
    type Output = L::Output;
    type Error = L::Error;
    type Env = L::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        let (a, b) = futures::join!(self.left.run(env), self.right.run(env));
        match (a, b) {
            (Ok(a), Ok(b)) => Ok(a.combine(b)),
            (Ok(a), Err(_)) => Ok(a),
            (Err(_), Ok(b)) => Ok(b),
            (Err(first), Err(_)) => Err(first),
        }
    }
}
