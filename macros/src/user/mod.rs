//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Rtti)]` | on struct/enum | Extensible identity registration |

pub mod rtti;

pub use rtti::expand_derive_rtti;
