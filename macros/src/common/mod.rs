// Common utilities for derive input
//
// - attr: `#[rtti(...)]` attribute parsing

mod attr;

pub use attr::*;
