//! Layer 4: predicate and conversion adapters.
//!
//! Each cast operation is also available as a zero-sized, copyable value so it
//! can be handed to code expecting a callable: iterator adaptors, sort keys,
//! lookup tables.
//!
//! ```text
//! IsaPred<T>              pred_isa::<T, _>()                  -> bool
//! IsaAnyPred<(A, B)>      pred_isa_any::<(A, B), _>()         -> bool
//! IsaAndPresentPred<T>    pred_isa_and_present::<T, _>()      -> bool
//! StaticCastTo<T>         op_static_cast::<T, _>()            -> T
//! CheckCastTo<T>          op_check_cast::<T, _>()             -> &T / &mut T
//! TryCastTo<T>            op_try_cast::<T, _>()               -> Option<..>
//! CheckCastIfPresentTo<T> op_check_cast_if_present::<T, _>()  -> Option<..>
//! TryCastIfPresentTo<T>   op_try_cast_if_present::<T, _>()    -> Option<..>
//! ```
//!
//! Predicate closures take `&S` so they fit `Iterator::filter` directly:
//!
//! ```ignore
//! let circles = shapes.iter().copied().filter(pred_isa::<Circle, _>()).count();
//! let radii: Vec<_> = shapes
//!     .iter()
//!     .copied()
//!     .filter_map(op_try_cast::<Circle, _>())
//!     .map(|c| c.radius)
//!     .collect();
//! ```

use core::fmt;
use core::marker::PhantomData;

use crate::cast::{CastExt, CastInfo, CastIsPossible, CastIsPossibleAny};

macro_rules! define_adapter {
    // Predicate: `fn(S) -> bool`, closure form over `&S`.
    (
        $(#[$doc:meta])*
        pred $Name:ident => $op:ident : $Bound:ident [$($Unsized:tt)*]
    ) => {
        $crate::paste::paste! {
            $(#[$doc])*
            pub struct $Name<To: $($Unsized)*>(PhantomData<fn(&To)>);

            impl<To: $($Unsized)*> $Name<To> {
                pub const NEW: Self = Self(PhantomData);

                #[inline(always)]
                #[track_caller]
                pub fn call<S: $Bound<To>>(&self, value: S) -> bool {
                    <S as CastExt>::$op::<To>(value)
                }
            }

            define_adapter!(@common $Name [$($Unsized)*]);

            #[doc = concat!("Closure form of [`", stringify!($Name), "`] over borrowed values.")]
            #[inline(always)]
            pub fn [<pred_ $op>]<To: $($Unsized)*, S: $Bound<To> + Copy>() -> impl Fn(&S) -> bool + Copy {
                |value: &S| <S as CastExt>::$op::<To>(*value)
            }
        }
    };

    // Conversion: `fn(S) -> $Ret`.
    (
        $(#[$doc:meta])*
        op $Name:ident => $op:ident -> $Ret:ty
    ) => {
        $crate::paste::paste! {
            $(#[$doc])*
            pub struct $Name<To>(PhantomData<fn(&To)>);

            impl<To> $Name<To> {
                pub const NEW: Self = Self(PhantomData);

                #[inline(always)]
                #[track_caller]
                pub fn call<S: CastInfo<To>>(&self, value: S) -> $Ret {
                    <S as CastExt>::$op::<To>(value)
                }
            }

            define_adapter!(@common $Name []);

            #[doc = concat!("Closure form of [`", stringify!($Name), "`].")]
            #[inline(always)]
            pub fn [<op_ $op>]<To, S: CastInfo<To>>() -> impl Fn(S) -> $Ret + Copy {
                |value: S| <S as CastExt>::$op::<To>(value)
            }
        }
    };

    // Derives would bound `To` itself, so these are spelled out.
    (@common $Name:ident [$($Unsized:tt)*]) => {
        impl<To: $($Unsized)*> Clone for $Name<To> {
            #[inline(always)]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<To: $($Unsized)*> Copy for $Name<To> {}

        impl<To: $($Unsized)*> Default for $Name<To> {
            #[inline(always)]
            fn default() -> Self {
                Self::NEW
            }
        }

        impl<To: $($Unsized)*> fmt::Debug for $Name<To> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($Name), core::any::type_name::<To>())
            }
        }
    };
}

define_adapter!(
    /// Predicate form of [`isa`](crate::isa).
    pred IsaPred => isa : CastIsPossible [?Sized]
);

define_adapter!(
    /// Predicate form of [`isa_any`](crate::isa_any) over a tuple of kinds.
    pred IsaAnyPred => isa_any : CastIsPossibleAny []
);

define_adapter!(
    /// Predicate form of [`isa_and_present`](crate::isa_and_present).
    pred IsaAndPresentPred => isa_and_present : CastIsPossible [?Sized]
);

define_adapter!(
    /// Predicate form of [`isa_any_and_present`](crate::isa_any_and_present).
    pred IsaAnyAndPresentPred => isa_any_and_present : CastIsPossibleAny []
);

define_adapter!(
    /// Functor form of [`check_cast`](crate::check_cast).
    op CheckCastTo => check_cast -> <S as CastInfo<To>>::Output
);

define_adapter!(
    /// Functor form of [`try_cast`](crate::try_cast).
    op TryCastTo => try_cast -> Option<<S as CastInfo<To>>::Output>
);

define_adapter!(
    /// Functor form of [`check_cast_if_present`](crate::check_cast_if_present).
    op CheckCastIfPresentTo => check_cast_if_present -> Option<<S as CastInfo<To>>::Output>
);

define_adapter!(
    /// Functor form of [`try_cast_if_present`](crate::try_cast_if_present).
    op TryCastIfPresentTo => try_cast_if_present -> Option<<S as CastInfo<To>>::Output>
);

/// Plain value conversion through [`Into`], with no kind test.
pub struct StaticCastTo<To>(PhantomData<fn(&To)>);

impl<To> StaticCastTo<To> {
    pub const NEW: Self = Self(PhantomData);

    #[inline(always)]
    pub fn call<S: Into<To>>(&self, value: S) -> To {
        value.into()
    }
}

define_adapter!(@common StaticCastTo []);

/// Closure form of [`StaticCastTo`].
#[inline(always)]
pub fn op_static_cast<To, S: Into<To>>() -> impl Fn(S) -> To + Copy {
    |value: S| value.into()
}
