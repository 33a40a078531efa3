//! Tracing support for effects.
//!
//! This module provides the `Instrument` combinator and `instrument` method
//! for wrapping effects in tracing spans. Only compiled with the `tracing`
//! feature.

use crate::effect::trait_def::Effect;

/// An effect wrapped in a tracing span.
///
/// Created by [`EffectTracingExt::instrument`]. Every run enters the span.
#[derive(Debug)]
pub struct Instrument<E> {
    pub(crate) inner: E,
    pub(crate) span: tracing::Span,
}

impl<E> Effect for Instrument<E>
where
    E: Effect,
{
    type Output = E::Output;
    type Error = E::Error;
    type Env = E::Env;

    async fn run(&self, env: &Self::Env) -> Result<Self::Output, Self::Error> {
        use tracing::Instrument as _;
        self.inner.run(env).instrument(self.span.clone()).await
    }
}

/// Extension trait for adding tracing instrumentation to effects.
pub trait EffectTracingExt: Effect {
    /// Wrap this effect in a tracing span.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tributary::effect::prelude::*;
    /// use tracing::info_span;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = succeed::<_, String, ()>(42).instrument(info_span!("answer"));
    /// assert_eq!(effect.run(&()).await, Ok(42));
    /// # });
    /// ```
    fn instrument(self, span: tracing::Span) -> Instrument<Self>
    where
        Self: Sized,
    {
        Instrument { inner: self, span }
    }
}

impl<E: Effect> EffectTracingExt for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::prelude::*;
    use tracing_test::traced_test;

    #[tokio::test]
    async fn instrument_returns_value() {
        let effect = succeed::<_, String, ()>(42).instrument(tracing::info_span!("test_span"));
        assert_eq!(effect.run(&()).await, Ok(42));
    }

    #[tokio::test]
    async fn error_in_span_propagates() {
        let effect =
            fail::<i32, _, ()>("oops".to_string()).instrument(tracing::info_span!("failing"));
        assert_eq!(effect.run(&()).await, Err("oops".to_string()));
    }

    #[tokio::test]
    async fn nested_spans_compose() {
        let effect = succeed::<_, String, ()>(5)
            .instrument(tracing::debug_span!("step1"))
            .map(|x| x * 2)
            .and_then(|x| succeed(x + 10).instrument(tracing::debug_span!("step2")));
        assert_eq!(effect.run(&()).await, Ok(20));
    }

    #[tokio::test]
    #[traced_test]
    async fn events_inside_are_recorded_in_span() {
        let effect = from_io::<_, String, (), _>(|| tracing::info!("loading widgets"))
            .instrument(tracing::info_span!("widget_load"));
        effect.run(&()).await.unwrap();
        assert!(logs_contain("widget_load"));
        assert!(logs_contain("loading widgets"));
    }

    #[tokio::test]
    #[traced_test]
    async fn suppressed_release_failure_is_warned() {
        let effect = bracket(
            succeed::<_, String, ()>(1),
            |_: &i32| fail::<i32, _, ()>("use failed".to_string()),
            |_: i32, _: &Result<i32, String>| fail::<(), _, ()>("release failed".to_string()),
        );
        assert_eq!(effect.run(&()).await, Err("use failed".to_string()));
        assert!(logs_contain("resource release failed"));
        assert!(logs_contain("release failed"));
    }

    #[tokio::test]
    #[traced_test]
    async fn sequential_traversal_logs_stop_index() {
        let effect = traverse_seq(vec![1, 2, 3], |n| {
            from_result::<_, _, ()>(if n == 2 { Err("boom".to_string()) } else { Ok(n) })
        });
        assert_eq!(effect.run(&()).await, Err("boom".to_string()));
        assert!(logs_contain("index=1"));
    }
}
