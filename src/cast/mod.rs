//! Layer 3: the cast orchestrator.
//!
//! Every entry point reduces to two questions asked of the source shape
//! through [`CastIsPossible`] and [`CastInfo`]: is the target kind a match,
//! and how is the source turned into the target's shape.
//!
//! | Operation | Mismatch | Absent source |
//! |-----------|----------|---------------|
//! | [`isa`], [`isa_any`] | `false` | fatal |
//! | [`isa_and_present`], [`isa_any_and_present`] | `false` | `false` |
//! | [`check_cast`] | fatal | fatal |
//! | [`check_cast_if_present`] | fatal | `None` |
//! | [`try_cast`] | `None` | fatal |
//! | [`try_cast_if_present`] | `None` | `None` |
//! | [`check_cast_or_null`], [`try_cast_or_null`] | as the `_if_present` forms | `None` |
//! | `owning_try_cast` | `Err(handle)` | n/a |
//! | `owning_try_cast_if_present` | `None`, slot untouched | `None` |
//!
//! [`raw`] repeats the table for raw pointers, and [`CastExt`] offers the same
//! operations as methods.

mod checked;
mod dynamic;
mod ext;
mod info;
mod isa;
#[cfg(feature = "alloc")]
mod owning;
pub mod raw;

pub use checked::{check_cast, check_cast_if_present, check_cast_or_null};
pub use dynamic::{try_cast, try_cast_if_present, try_cast_or_null};
pub use ext::CastExt;
pub use info::{CastInfo, CastIsPossible, CastIsPossibleAny};
pub use isa::{isa, isa_and_present, isa_any, isa_any_and_present};
#[cfg(feature = "alloc")]
pub use owning::{owning_check_cast, owning_try_cast, owning_try_cast_if_present};
