//! Prelude module for convenient imports.
//!
//! ```rust
//! use tributary::effect::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let effect = succeed::<_, String, ()>(42)
//!     .map(|x| x * 2)
//!     .and_then(|x| succeed(x + 1));
//!
//! assert_eq!(effect.run(&()).await, Ok(85));
//! # });
//! ```
//!
//! The prelude exports the traits, every constructor, the combination
//! policies and traversal functions, `bracket`, and `BoxedEffect`. The
//! combinator structs stay in [`combinators`](crate::effect::combinators)
//! for the rare signature that needs to name them.

// Traits
pub use crate::effect::context::{EffectContext, EffectContextChain};
pub use crate::effect::ext::{EffectExt, InfallibleExt};
pub use crate::effect::instances::{Applicative, ApplyPolicy};
pub use crate::effect::trait_def::Effect;

// Boxed Effect
pub use crate::effect::boxed::{BoxFuture, BoxedEffect};

// Constructors
pub use crate::effect::constructors::{
    ask, asks, begin, fail, fail_async_reader, fail_io, fail_reader, fail_task, from_async,
    from_async_reader, from_fn, from_io, from_option, from_predicate, from_reader,
    from_refinement, from_result, from_task, from_task_result, local, succeed,
};

// Policies and instances
pub use crate::effect::instances::{apply_concat, apply_empty, first_success, Par, Seq, Validation};

// Resource safety
pub use crate::effect::bracket::bracket;

// Traversal
pub use crate::effect::traverse::{
    sequence, sequence_seq, traverse, traverse_seq, traverse_seq_with_index, traverse_with_index,
};

// Tracing (when tracing feature is enabled)
#[cfg(feature = "tracing")]
pub use crate::effect::tracing::EffectTracingExt;
