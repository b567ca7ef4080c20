//! Raw-pointer entry points.
//!
//! Raw pointers are nullable: null is the absent value and the failure
//! sentinel. Every function here dereferences its argument, so each is
//! `unsafe`.
//!
//! # Safety
//!
//! A non-null argument must point to a live, properly aligned value that
//! stays valid (and, for `*mut`, unaliased) while the result is in use.

use super::{checked, dynamic, isa as query};
use crate::failure;
use crate::rtti::{Classof, Downcast};
use crate::shape::Nullable;
use crate::simplify::{Simplify, SimplifyMut};

/// Raw-pointer [`isa`](crate::isa). Null is a fatal failure.
///
/// # Safety
///
/// See the [module documentation](self).
#[track_caller]
pub unsafe fn isa<To, B>(ptr: *const B) -> bool
where
    To: ?Sized + Classof<B::Simple>,
    B: ?Sized + Simplify,
{
    // SAFETY: forwarded to the caller.
    match unsafe { ptr.as_ref() } {
        Some(value) => query::isa::<To>(value),
        None => failure::absent::<To, *const B>("raw::isa"),
    }
}

/// Raw-pointer [`isa_and_present`](crate::isa_and_present).
///
/// # Safety
///
/// See the [module documentation](self).
pub unsafe fn isa_and_present<To, B>(ptr: *const B) -> bool
where
    To: ?Sized + Classof<B::Simple>,
    B: ?Sized + Simplify,
{
    // SAFETY: forwarded to the caller.
    query::isa_and_present::<To>(unsafe { ptr.as_ref() })
}

/// Raw-pointer [`check_cast`](crate::check_cast).
///
/// # Safety
///
/// See the [module documentation](self).
#[track_caller]
pub unsafe fn check_cast<To, B>(ptr: *const B) -> *const To
where
    To: Downcast<B::Simple>,
    B: ?Sized + Simplify,
{
    // SAFETY: forwarded to the caller.
    match unsafe { ptr.as_ref() } {
        Some(value) => checked::check_cast::<To, &B>(value) as *const To,
        None => failure::absent::<To, *const B>("raw::check_cast"),
    }
}

/// Exclusive [`check_cast`].
///
/// # Safety
///
/// See the [module documentation](self).
#[track_caller]
pub unsafe fn check_cast_mut<To, B>(ptr: *mut B) -> *mut To
where
    To: Downcast<B::Simple>,
    B: ?Sized + SimplifyMut,
{
    // SAFETY: forwarded to the caller.
    match unsafe { ptr.as_mut() } {
        Some(value) => checked::check_cast::<To, &mut B>(value) as *mut To,
        None => failure::absent::<To, *mut B>("raw::check_cast_mut"),
    }
}

/// Raw-pointer [`check_cast_if_present`](crate::check_cast_if_present).
///
/// # Safety
///
/// See the [module documentation](self).
#[track_caller]
pub unsafe fn check_cast_if_present<To, B>(ptr: *const B) -> *const To
where
    To: Downcast<B::Simple>,
    B: ?Sized + Simplify,
{
    // SAFETY: forwarded to the caller.
    let value = unsafe { ptr.as_ref() };
    to_const(checked::check_cast_if_present::<To, Option<&B>>(value))
}

/// Exclusive [`check_cast_if_present`].
///
/// # Safety
///
/// See the [module documentation](self).
#[track_caller]
pub unsafe fn check_cast_if_present_mut<To, B>(ptr: *mut B) -> *mut To
where
    To: Downcast<B::Simple>,
    B: ?Sized + SimplifyMut,
{
    // SAFETY: forwarded to the caller.
    let value = unsafe { ptr.as_mut() };
    to_mut(checked::check_cast_if_present::<To, Option<&mut B>>(value))
}

/// Raw-pointer [`try_cast`](crate::try_cast). Null is a fatal failure.
///
/// # Safety
///
/// See the [module documentation](self).
#[track_caller]
pub unsafe fn try_cast<To, B>(ptr: *const B) -> *const To
where
    To: Downcast<B::Simple>,
    B: ?Sized + Simplify,
{
    // SAFETY: forwarded to the caller.
    match unsafe { ptr.as_ref() } {
        Some(value) => to_const(dynamic::try_cast::<To, &B>(value)),
        None => failure::absent::<To, *const B>("raw::try_cast"),
    }
}

/// Exclusive [`try_cast`].
///
/// # Safety
///
/// See the [module documentation](self).
#[track_caller]
pub unsafe fn try_cast_mut<To, B>(ptr: *mut B) -> *mut To
where
    To: Downcast<B::Simple>,
    B: ?Sized + SimplifyMut,
{
    // SAFETY: forwarded to the caller.
    match unsafe { ptr.as_mut() } {
        Some(value) => to_mut(dynamic::try_cast::<To, &mut B>(value)),
        None => failure::absent::<To, *mut B>("raw::try_cast_mut"),
    }
}

/// Raw-pointer [`try_cast_if_present`](crate::try_cast_if_present).
///
/// # Safety
///
/// See the [module documentation](self).
pub unsafe fn try_cast_if_present<To, B>(ptr: *const B) -> *const To
where
    To: Downcast<B::Simple>,
    B: ?Sized + Simplify,
{
    // SAFETY: forwarded to the caller.
    let value = unsafe { ptr.as_ref() };
    to_const(dynamic::try_cast_if_present::<To, Option<&B>>(value))
}

/// Exclusive [`try_cast_if_present`].
///
/// # Safety
///
/// See the [module documentation](self).
pub unsafe fn try_cast_if_present_mut<To, B>(ptr: *mut B) -> *mut To
where
    To: Downcast<B::Simple>,
    B: ?Sized + SimplifyMut,
{
    // SAFETY: forwarded to the caller.
    let value = unsafe { ptr.as_mut() };
    to_mut(dynamic::try_cast_if_present::<To, Option<&mut B>>(value))
}

#[inline(always)]
fn to_const<T>(cast: Option<&T>) -> *const T {
    cast.map_or_else(Nullable::null, |cast| cast as *const T)
}

#[inline(always)]
fn to_mut<T>(cast: Option<&mut T>) -> *mut T {
    cast.map_or_else(Nullable::null, |cast| cast as *mut T)
}
