//! Layer 1: simplification.
//!
//! Casting works on *simple* types: the entity a value ultimately designates.
//! A `&&Box<dyn Shape>` and a `&dyn Shape` both simplify to `dyn Shape`, so a
//! single `Classof<dyn Shape>` answers for every wrapping.
//!
//! # Rules
//!
//! ```text
//! &T, &mut T          -> T::Simple          (strip one layer, recurse)
//! Box<T>, Rc<T>, Arc<T> -> T::Simple          (checks look through handles)
//! entity (simple_type!) -> Self               (fixed point)
//! ```
//!
//! Constness propagates by construction: only exclusive layers (`&mut T`,
//! `Box<T>`) implement [`SimplifyMut`]. A chain with any shared layer in it
//! yields a shared view, so `&&mut T` can only produce `&T::Simple`.

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, rc::Rc};
#[cfg(all(feature = "alloc", target_has_atomic = "ptr"))]
use alloc::sync::Arc;

/// Strip wrapping down to the entity a value designates.
pub trait Simplify {
    type Simple: ?Sized;

    fn simplify(&self) -> &Self::Simple;
}

/// Exclusive access to the simplified entity.
pub trait SimplifyMut: Simplify {
    fn simplify_mut(&mut self) -> &mut Self::Simple;
}

impl<T: ?Sized + Simplify> Simplify for &T {
    type Simple = T::Simple;

    #[inline(always)]
    fn simplify(&self) -> &T::Simple {
        T::simplify(self)
    }
}

impl<T: ?Sized + Simplify> Simplify for &mut T {
    type Simple = T::Simple;

    #[inline(always)]
    fn simplify(&self) -> &T::Simple {
        T::simplify(self)
    }
}

impl<T: ?Sized + SimplifyMut> SimplifyMut for &mut T {
    #[inline(always)]
    fn simplify_mut(&mut self) -> &mut T::Simple {
        T::simplify_mut(self)
    }
}

#[cfg(feature = "alloc")]
impl<T: ?Sized + Simplify> Simplify for Box<T> {
    type Simple = T::Simple;

    #[inline(always)]
    fn simplify(&self) -> &T::Simple {
        T::simplify(self)
    }
}

#[cfg(feature = "alloc")]
impl<T: ?Sized + SimplifyMut> SimplifyMut for Box<T> {
    #[inline(always)]
    fn simplify_mut(&mut self) -> &mut T::Simple {
        T::simplify_mut(self)
    }
}

#[cfg(feature = "alloc")]
impl<T: ?Sized + Simplify> Simplify for Rc<T> {
    type Simple = T::Simple;

    #[inline(always)]
    fn simplify(&self) -> &T::Simple {
        T::simplify(self)
    }
}

#[cfg(all(feature = "alloc", target_has_atomic = "ptr"))]
impl<T: ?Sized + Simplify> Simplify for Arc<T> {
    type Simple = T::Simple;

    #[inline(always)]
    fn simplify(&self) -> &T::Simple {
        T::simplify(self)
    }
}

/// Declare entity types as fixed points of [`Simplify`] and [`SimplifyMut`].
///
/// Trait objects are written with a leading `dyn` and get an impl for every
/// object lifetime.
///
/// ```ignore
/// tola_cast::simple_type!(dyn Shape, Circle, Rectangle);
/// ```
#[macro_export]
macro_rules! simple_type {
    () => {};
    (dyn $tr:path $(, $($rest:tt)*)?) => {
        impl<'__x> $crate::Simplify for dyn $tr + '__x {
            type Simple = Self;

            #[inline(always)]
            fn simplify(&self) -> &Self {
                self
            }
        }

        impl<'__x> $crate::SimplifyMut for dyn $tr + '__x {
            #[inline(always)]
            fn simplify_mut(&mut self) -> &mut Self {
                self
            }
        }

        $crate::simple_type!($($($rest)*)?);
    };
    ($ty:ty $(, $($rest:tt)*)?) => {
        impl $crate::Simplify for $ty {
            type Simple = Self;

            #[inline(always)]
            fn simplify(&self) -> &Self {
                self
            }
        }

        impl $crate::SimplifyMut for $ty {
            #[inline(always)]
            fn simplify_mut(&mut self) -> &mut Self {
                self
            }
        }

        $crate::simple_type!($($($rest)*)?);
    };
}
