//! Traversal: run one effect per element and collect the values.
//!
//! | Function | Element effects | On failure |
//! |---|---|---|
//! | [`traverse`], [`sequence`] | all in flight together | every element still runs; first failure in input order is returned |
//! | [`traverse_seq`], [`sequence_seq`] | one at a time, in input order | stop; later elements are never built |
//!
//! The `_with_index` variants also pass the element's position.
//! [`Validation::traverse`](crate::effect::instances::Validation::traverse)
//! is the concurrent variant that merges every failure.
//!
//! # Example
//!
//! ```rust
//! use tributary::effect::prelude::*;
//!
//! struct Env { base_url: String }
//!
//! # tokio_test::block_on(async {
//! let urls = traverse(vec!["a", "b"], |path| {
//!     asks::<_, String, Env, _>(move |env| format!("{}/{}", env.base_url, path))
//! });
//! let env = Env { base_url: "https://example.com".to_string() };
//! assert_eq!(
//!     urls.run(&env).await,
//!     Ok(vec!["https://example.com/a".to_string(), "https://example.com/b".to_string()])
//! );
//! # });
//! ```

use futures::future::join_all;

use crate::effect::instances::{ApplyPolicy, Par, Seq};
use crate::effect::trait_def::Effect;

/// Builds the effect for one element.
pub trait ElementEffect<A>: Send + Sync {
    /// The effect built per element.
    type Effect: Effect;

    /// Build the effect for `item` at position `index`.
    fn build(&self, index: usize, item: A) -> Self::Effect;
}

/// Element function that ignores the position.
#[derive(Clone, Copy)]
pub struct Unindexed<F>(pub F);

impl<F> std::fmt::Debug for Unindexed<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Unindexed").field(&"<function>").finish()
    }
}

/// Element function that receives the position first.
#[derive(Clone, Copy)]
pub struct Indexed<F>(pub F);

impl<F> std::fmt::Debug for Indexed<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Indexed").field(&"<function>").finish()
    }
}

impl<A, F, Eff> ElementEffect<A> for Unindexed<F>
where
    F: Fn(A) -> Eff + Send + Sync,
    Eff: Effect,
{
    type Effect = Eff;

    fn build(&self, _index: usize, item: A) -> Eff {
        (self.0)(item)
    }
}

impl<A, F, Eff> ElementEffect<A> for Indexed<F>
where
    F: Fn(usize, A) -> Eff + Send + Sync,
    Eff: Effect,
{
    type Effect = Eff;

    fn build(&self, index: usize, item: A) -> Eff {
        (self.0)(index, item)
    }
}

/// Traversal of owned items. The items are cloned on every run.
pub struct Traverse<A, G, P> {
    items: Vec<A>,
    build: G,
    policy: P,
}

impl<A, G, P> Traverse<A, G, P> {
    pub(crate) fn new(items: Vec<A>, build: G, policy: P) -> Self {
        Traverse {
            items,
            build,
            policy,
        }
    }
}

impl<A, G, P: std::fmt::Debug> std::fmt::Debug for Traverse<A, G, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Traverse")
            .field("len", &self.items.len())
            .field("build", &"<function>")
            .field("policy", &self.policy)
            .finish()
    }
}

impl<A, G, P, Eff> Effect for Traverse<A, G, P>
where
    A: Clone + Send + Sync,
    G: ElementEffect<A, Effect = Eff>,
    Eff: Effect,
    P: ApplyPolicy<Eff::Error>,
{
    type Output = Vec<Eff::Output>;
    type Error = Eff::Error;
    type Env = Eff::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        if self.policy.sequential() {
            let mut values = Vec::with_capacity(self.items.len());
            for (index, item) in self.items.iter().enumerate() {
                let effect = self.build.build(index, item.clone());
                match effect.run(env).await {
                    Ok(value) => values.push(value),
                    Err(error) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(index, "sequential traversal stopped at failing element");
                        return Err(error);
                    }
                }
            }
            return Ok(values);
        }

        let mut effects = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            effects.push(self.build.build(index, item.clone()));
        }
        collect_concurrent(&self.policy, &effects, env).await
    }
}

/// Traversal of effects that already exist.
pub struct Sequence<Eff, P> {
    effects: Vec<Eff>,
    policy: P,
}

impl<Eff, P: std::fmt::Debug> std::fmt::Debug for Sequence<Eff, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence")
            .field("len", &self.effects.len())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<Eff, P> Effect for Sequence<Eff, P>
where
    Eff: Effect,
    P: ApplyPolicy<Eff::Error>,
{
    type Output = Vec<Eff::Output>;
    type Error = Eff::Error;
    type Env = Eff::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        if self.policy.sequential() {
            let mut values = Vec::with_capacity(self.effects.len());
            for (index, effect) in self.effects.iter().enumerate() {
                match effect.run(env).await {
                    Ok(value) => values.push(value),
                    Err(error) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(index, "sequential traversal stopped at failing element");
                        #[cfg(not(feature = "tracing"))]
                        let _ = index;
                        return Err(error);
                    }
                }
            }
            return Ok(values);
        }

        collect_concurrent(&self.policy, &self.effects, env).await
    }
}

/// Run every effect at once and gather the outcomes in input order.
/// Failures are folded left to right with the policy's merge.
async fn collect_concurrent<P, Eff>(
    policy: &P,
    effects: &[Eff],
    env: &Eff::Env,
) -> Result<Vec<Eff::Output>, Eff::Error>
where
    Eff: Effect,
    P: ApplyPolicy<Eff::Error>,
{
    let mut runs = Vec::with_capacity(effects.len());
    for effect in effects {
        runs.push(effect.run(env));
    }
    let outcomes = join_all(runs).await;

    let mut values = Vec::with_capacity(outcomes.len());
    let mut failure: Option<Eff::Error> = None;
    for outcome in outcomes {
        match outcome {
            Ok(value) => {
                if failure.is_none() {
                    values.push(value);
                }
            }
            Err(error) => {
                failure = Some(match failure.take() {
                    None => error,
                    Some(previous) => policy.merge(previous, error),
                });
            }
        }
    }

    match failure {
        Some(error) => Err(error),
        None => Ok(values),
    }
}

/// Run `f` for every item concurrently.
///
/// Every element's effect is built and started before any is awaited.
/// Succeeds with the values in input order; otherwise fails with the first
/// failure in input order.
pub fn traverse<A, I, F, Eff>(items: I, f: F) -> Traverse<A, Unindexed<F>, Par>
where
    I: IntoIterator<Item = A>,
    A: Clone + Send + Sync,
    F: Fn(A) -> Eff + Send + Sync,
    Eff: Effect,
{
    Traverse::new(items.into_iter().collect(), Unindexed(f), Par)
}

/// [`traverse`] with the element position passed to `f`.
pub fn traverse_with_index<A, I, F, Eff>(items: I, f: F) -> Traverse<A, Indexed<F>, Par>
where
    I: IntoIterator<Item = A>,
    A: Clone + Send + Sync,
    F: Fn(usize, A) -> Eff + Send + Sync,
    Eff: Effect,
{
    Traverse::new(items.into_iter().collect(), Indexed(f), Par)
}

/// Run `f` for every item, one at a time, in input order.
///
/// Element `i` is built only after element `i - 1` succeeded; the first
/// failure ends the traversal.
pub fn traverse_seq<A, I, F, Eff>(items: I, f: F) -> Traverse<A, Unindexed<F>, Seq>
where
    I: IntoIterator<Item = A>,
    A: Clone + Send + Sync,
    F: Fn(A) -> Eff + Send + Sync,
    Eff: Effect,
{
    Traverse::new(items.into_iter().collect(), Unindexed(f), Seq)
}

/// [`traverse_seq`] with the element position passed to `f`.
pub fn traverse_seq_with_index<A, I, F, Eff>(items: I, f: F) -> Traverse<A, Indexed<F>, Seq>
where
    I: IntoIterator<Item = A>,
    A: Clone + Send + Sync,
    F: Fn(usize, A) -> Eff + Send + Sync,
    Eff: Effect,
{
    Traverse::new(items.into_iter().collect(), Indexed(f), Seq)
}

/// Run all effects concurrently and collect their values.
pub fn sequence<Eff, I>(effects: I) -> Sequence<Eff, Par>
where
    I: IntoIterator<Item = Eff>,
    Eff: Effect,
{
    Sequence {
        effects: effects.into_iter().collect(),
        policy: Par,
    }
}

/// Run the effects one at a time, stopping at the first failure.
pub fn sequence_seq<Eff, I>(effects: I) -> Sequence<Eff, Seq>
where
    I: IntoIterator<Item = Eff>,
    Eff: Effect,
{
    Sequence {
        effects: effects.into_iter().collect(),
        policy: Seq,
    }
}
