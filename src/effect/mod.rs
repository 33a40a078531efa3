//! Environment-dependent, asynchronous, failable effects.
//!
//! An [`Effect`] describes a computation that reads an environment, runs
//! asynchronously, and ends in a typed success or failure. Building one
//! does nothing; calling [`run`](Effect::run) starts a fresh execution, and
//! the same effect can be run again.
//!
//! # Zero-Cost by Default
//!
//! Every combinator returns a concrete struct, so a pipeline is one nested
//! value with no heap allocation:
//!
//! ```rust
//! use tributary::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let effect = succeed::<_, String, ()>(42)
//!     .map(|x| x + 1)               // Map<Succeed<...>, ...>
//!     .and_then(|x| succeed(x * 2)) // AndThen<Map<...>, ...>
//!     .map(|x| x.to_string());      // Map<AndThen<...>, ...>
//!
//! assert_eq!(effect.run(&()).await, Ok("86".to_string()));
//! # });
//! ```
//!
//! Use [`EffectExt::boxed`] when type erasure is needed: collections of
//! different effects, match arms, and recursion.
//!
//! # Sequential and concurrent composition
//!
//! `and_then`, `bind`, `alt`, `bracket` and `traverse_seq` run one step
//! after another and stop at the first failure. `zip`, `ap`, `attach`,
//! `traverse` and `sequence` put their branches in flight together and
//! wait for all of them, so a failure in one branch never stops the work
//! of another. See [`instances`] for the policies behind this.
//!
//! # Environment
//!
//! The environment is passed by reference and never cloned, except by
//! [`ask`], which hands out an owned copy. Keep shared resources behind
//! `Arc` in the environment and copy them out in readers:
//!
//! ```rust,ignore
//! struct AppEnv {
//!     db: Arc<DatabasePool>,
//!     config: Arc<Config>,
//! }
//! ```

pub mod boxed;
pub mod bracket;
pub mod combinators;
pub mod constructors;
pub mod context;
pub mod ext;
pub mod instances;
pub mod prelude;
pub mod reader;
#[cfg(feature = "tracing")]
pub mod tracing;
mod trait_def;
pub mod traverse;

pub use trait_def::Effect;

pub use ext::{EffectExt, InfallibleExt};

pub use boxed::{BoxFuture, BoxedEffect};

pub use combinators::{
    Alt, AndThen, AndThenAsync, AndThenFirst, AndThenResult, Append, Bimap, Bind, Fail, FailIo,
    FailTask, FilterOrElse, FirstSuccess, Flatten, Fold, FromAsync, FromFn, FromIo, FromResult,
    FromTask, FromTaskResult, GetOrElse, Map, MapErr, OrElse, Succeed, Swap, ValidationAlt,
    ZipWith,
};

pub use reader::{Ask, Asks, FailAsyncReader, FailReader, FromAsyncReader, Local};

pub use bracket::{bracket, Bracket};

pub use constructors::{
    ask, asks, begin, fail, fail_async_reader, fail_io, fail_reader, fail_task, from_async,
    from_async_reader, from_fn, from_io, from_option, from_predicate, from_reader,
    from_refinement, from_result, from_task, from_task_result, local, succeed,
};

pub use instances::{
    apply_concat, apply_empty, first_success, Applicative, ApplyPolicy, Par, Seq, Validation,
};

pub use traverse::{
    sequence, sequence_seq, traverse, traverse_seq, traverse_seq_with_index, traverse_with_index,
    ElementEffect, Indexed, Sequence, Traverse, Unindexed,
};

pub use context::{EffectContext, EffectContextChain};

#[cfg(feature = "tracing")]
pub use self::tracing::{EffectTracingExt, Instrument};

#[cfg(test)]
mod tests;
