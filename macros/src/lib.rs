//! Procedural macros for the tola-cast type-identity registry
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Rtti)]` | struct/enum | Join an extensible hierarchy |
//! | `#[rtti(base)]` | field | Mark an embedded base sub-object |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Rtti)]
//! struct Container { capacity: usize }
//!
//! #[derive(Rtti)]
//! struct Node { value: i32 }
//!
//! #[derive(Rtti)]
//! struct Tree {
//!     #[rtti(base)]
//!     container: Container,
//!     #[rtti(base)]
//!     node: Node,
//!     depth: u32,
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-Facing Macros (user/)
// =============================================================================

/// Register a type in the extensible identity registry.
///
/// Generates a static identity record, `StaticType`, `Object`, `Classof<B>`
/// and `Downcast<B>` for every `B: Object` view, and `Simplify`.
///
/// Fields marked `#[rtti(base)]` are the type's bases. Their types must
/// derive `Rtti` themselves. A type without bases derives directly from the
/// root `dyn Object`.
///
/// Generic types are rejected: a single identity record cannot stand for
/// every instantiation.
#[proc_macro_derive(Rtti, attributes(rtti))]
pub fn derive_rtti(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_rtti(input).into()
}
