//! Zero-cost combinator types for effect composition.
//!
//! This module contains concrete types returned by effect constructors and
//! combinators. They don't allocate on the heap and can be optimized by
//! the compiler.
//!
//! Most users won't need to work with these types directly. Instead,
//! use the free constructors and the methods on `EffectExt`, which return
//! these types behind `impl Effect<...>`.

mod alt;
mod and_then;
mod and_then_first;
mod and_then_result;
mod bimap;
mod bind;
mod fail;
mod first_success;
mod fold;
mod from_async;
mod from_fn;
mod from_result;
mod map;
mod map_err;
mod pure;
mod task;
mod zip_with;

pub use alt::{Alt, FilterOrElse, OrElse, ValidationAlt};
pub use and_then::{AndThen, Flatten};
pub use and_then_first::AndThenFirst;
pub use and_then_result::{AndThenAsync, AndThenResult};
pub use bimap::{Bimap, Swap};
pub use bind::{Append, Bind};
pub use fail::Fail;
pub use first_success::FirstSuccess;
pub use fold::{Fold, GetOrElse};
pub use from_async::FromAsync;
pub use from_fn::FromFn;
pub use from_result::FromResult;
pub use map::Map;
pub use map_err::MapErr;
pub use pure::Succeed;
pub use task::{FailIo, FailTask, FromIo, FromTask, FromTaskResult};
pub use zip_with::ZipWith;

