#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: Box/Rc/Arc shapes and owning casts in no_std

//! # tola-cast
//!
//! `isa` / `check_cast` / `try_cast` over closed and open type hierarchies,
//! without language RTTI.
//!
//! ## Architecture
//!
//! A cast asks two things of its source: *what entity does this value
//! designate* (shape and simplification) and *is that entity of the target
//! kind* (the `classof` registry). The answers compose into a small set of
//! operations that differ only in how they treat a mismatch and an absent
//! value.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Shapes                                                  |
//! |  - ValueShape (&T, &mut T, Option<S>), Nullable, OwningHandle     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Simplification                                          |
//! |  - Simplify / SimplifyMut, simple_type!                           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Type identity                                           |
//! |  - Classof, Downcast                                              |
//! |  - kind_hierarchy! (tag enums), TypeToken + Object (extensible)   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Cast orchestrator                                       |
//! |  - isa, check_cast, try_cast, *_if_present, owning_*, raw::*      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4: Adapters                                                |
//! |  - IsaPred, TryCastTo, ... and pred_* / op_* closures             |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Hierarchies
//!
//! - **Tag enums**: the base trait returns a discriminant, leaves compare
//!   equal to it and intermediate groups cover a contiguous range. Declared
//!   with [`kind_hierarchy!`].
//! - **Extensible**: each type owns a static identity record listing its
//!   bases, several if it likes. Declared with `#[derive(Rtti)]` and
//!   `#[rtti(base)]` on the embedded base fields.
//!
//! ## Failure
//!
//! Violated preconditions (a `check_cast` on the wrong kind, an absent value
//! given to a non-nullable operation) are logged at error level under the
//! `tola_cast` target and then panic. They are checked in every build
//! profile.
//!
//! ## Quick Start
//!
//! ```
//! use tola_cast::prelude::*;
//!
//! #[derive(Clone, Copy, PartialEq, PartialOrd)]
//! enum ShapeKind { Circle, Square }
//!
//! trait Shape { fn kind(&self) -> ShapeKind; }
//!
//! struct Circle { radius: u32 }
//! struct Square { side: u32 }
//!
//! impl Shape for Circle { fn kind(&self) -> ShapeKind { ShapeKind::Circle } }
//! impl Shape for Square { fn kind(&self) -> ShapeKind { ShapeKind::Square } }
//!
//! tola_cast::kind_hierarchy! {
//!     dyn Shape => ShapeKind, |shape| shape.kind();
//!     unsafe Circle => ShapeKind::Circle;
//!     unsafe Square => ShapeKind::Square;
//! }
//!
//! let shapes: [&dyn Shape; 2] = [&Circle { radius: 3 }, &Square { side: 2 }];
//! assert!(isa::<Circle>(shapes[0]));
//! assert_eq!(try_cast::<Square, _>(shapes[1]).map(|s| s.side), Some(2));
//! assert!(shapes[1].try_cast::<Circle>().is_none());
//! assert_eq!(check_cast::<Circle, _>(shapes[0]).radius, 3);
//! ```

// Allow `::tola_cast` to work inside the crate itself
extern crate self as tola_cast;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the adapter macros
pub use paste;

// =============================================================================
// Failure reporting
// =============================================================================
pub mod failure;

// =============================================================================
// Layer 0: Shapes
// =============================================================================
pub mod shape;

// =============================================================================
// Layer 1: Simplification
// =============================================================================
pub mod simplify;

// =============================================================================
// Layer 2: Type identity
// =============================================================================
pub mod rtti;

// =============================================================================
// Layer 3: Cast orchestrator
// =============================================================================
pub mod cast;

// =============================================================================
// Layer 4: Adapters
// =============================================================================
pub mod predicates;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use cast::{
    check_cast, check_cast_if_present, check_cast_or_null, isa, isa_and_present, isa_any,
    isa_any_and_present, try_cast, try_cast_if_present, try_cast_or_null, CastExt, CastInfo,
    CastIsPossible, CastIsPossibleAny,
};
#[cfg(feature = "alloc")]
pub use cast::{owning_check_cast, owning_try_cast, owning_try_cast_if_present};
pub use failure::CastError;
pub use rtti::{Classof, Downcast, Object, ObjectExt, StaticType, TypeInfo, TypeToken};
pub use simplify::{Simplify, SimplifyMut};

// Re-export proc-macros
pub use macros::Rtti;

// =============================================================================
// Declarative Macro Bridge for #[derive(Rtti)]
// =============================================================================
//
// #[derive(Rtti)] only collects the type name and its base fields. The
// impls are written here so that module_path!() names the deriving module
// and $crate resolves to this crate.

/// Internal macro bridge - DO NOT USE DIRECTLY.
/// Use #[derive(Rtti)] instead.
#[macro_export]
#[doc(hidden)]
macro_rules! __impl_rtti {
    (@emit $ty:ident [$($info:expr),+] [$($member:tt)*]) => {
        const _: () = {
            static INFO: $crate::TypeInfo = $crate::TypeInfo::new(
                concat!(module_path!(), "::", stringify!($ty)),
                &[$($info),+],
            );

            impl $crate::StaticType for $ty {
                #[inline]
                fn type_info() -> &'static $crate::TypeInfo {
                    &INFO
                }
            }

            unsafe impl $crate::Object for $ty {
                #[inline]
                fn dynamic_type(&self) -> $crate::TypeToken {
                    <Self as $crate::StaticType>::type_token()
                }

                fn find_ref(
                    &self,
                    token: $crate::TypeToken,
                ) -> ::core::option::Option<::core::ptr::NonNull<()>> {
                    if token == <Self as $crate::StaticType>::type_token() {
                        return ::core::option::Option::Some(::core::ptr::NonNull::from(self).cast());
                    }
                    $(
                        if let ::core::option::Option::Some(found) =
                            $crate::Object::find_ref(&self.$member, token)
                        {
                            return ::core::option::Option::Some(found);
                        }
                    )*
                    ::core::option::Option::None
                }

                fn find_mut(
                    &mut self,
                    token: $crate::TypeToken,
                ) -> ::core::option::Option<::core::ptr::NonNull<()>> {
                    if token == <Self as $crate::StaticType>::type_token() {
                        return ::core::option::Option::Some(::core::ptr::NonNull::from(self).cast());
                    }
                    $(
                        if let ::core::option::Option::Some(found) =
                            $crate::Object::find_mut(&mut self.$member, token)
                        {
                            return ::core::option::Option::Some(found);
                        }
                    )*
                    ::core::option::Option::None
                }
            }

            impl<__B: ?Sized + $crate::Object> $crate::Classof<__B> for $ty {
                #[inline]
                fn classof(base: &__B) -> bool {
                    $crate::Object::is_a(base, <Self as $crate::StaticType>::type_token())
                }
            }

            unsafe impl<__B: ?Sized + $crate::Object> $crate::Downcast<__B> for $ty {
                #[inline]
                unsafe fn downcast_ref(base: &__B) -> &Self {
                    // SAFETY: forwarded to the caller.
                    unsafe { $crate::rtti::project_ref::<Self, __B>(base) }
                }

                #[inline]
                unsafe fn downcast_mut(base: &mut __B) -> &mut Self {
                    // SAFETY: forwarded to the caller.
                    unsafe { $crate::rtti::project_mut::<Self, __B>(base) }
                }

                #[inline]
                fn is_exact(base: &__B) -> bool {
                    $crate::Object::dynamic_type(base) == <Self as $crate::StaticType>::type_token()
                }
            }

            $crate::simple_type!($ty);
        };
    };
    ($ty:ident;) => {
        $crate::__impl_rtti!(@emit $ty [<dyn $crate::Object as $crate::StaticType>::type_info] []);
    };
    ($ty:ident; $($member:tt : $base:ty),+ $(,)?) => {
        $crate::__impl_rtti!(@emit $ty [$(<$base as $crate::StaticType>::type_info),+] [$($member)+]);
    };
}

/// Common items for casting.
pub mod prelude {
    pub use crate::cast::{
        check_cast, check_cast_if_present, isa, isa_and_present, isa_any, isa_any_and_present,
        try_cast, try_cast_if_present, CastExt,
    };
    #[cfg(feature = "alloc")]
    pub use crate::cast::{owning_check_cast, owning_try_cast, owning_try_cast_if_present};
    pub use crate::predicates::{
        op_check_cast, op_check_cast_if_present, op_static_cast, op_try_cast,
        op_try_cast_if_present, pred_isa, pred_isa_and_present, pred_isa_any,
        pred_isa_any_and_present,
    };
    pub use crate::rtti::{Classof, Downcast, Object, ObjectExt, StaticType, TypeToken};
    pub use macros::Rtti;
}
