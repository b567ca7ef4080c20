//! Layer 0: value shapes.
//!
//! A cast source arrives in one of a handful of shapes: a shared or exclusive
//! reference, a raw pointer, an owning handle, or an optional wrapper around
//! any of these. The traits here answer the three questions the cast layer
//! asks about a shape:
//!
//! - can it be absent, and is it present right now? ([`ValueShape`])
//! - what does a failed nullable cast return? ([`Nullable`])
//! - how is ownership moved into a handle of another type? ([`OwningHandle`])
//!
//! ```text
//! &T, &mut T      -> ValueShape (never absent)
//! Option<S>       -> ValueShape (absent = None), Nullable
//! *const T, *mut T -> Nullable (absent = null), see cast::raw
//! Box/Rc/Arc<T>   -> OwningHandle
//! ```
//!
//! Plain by-value objects are cast through a reference to them.

mod nullable;
#[cfg(feature = "alloc")]
mod owning;
mod value;

pub use nullable::{failure_sentinel, Nullable};
#[cfg(feature = "alloc")]
pub use owning::OwningHandle;
pub use value::{is_nullable, ValueShape};
