//! Per-shape dispatch.

use crate::failure;
use crate::rtti::{Classof, Downcast};
use crate::shape::ValueShape;
use crate::simplify::{Simplify, SimplifyMut};

/// Whether a source value designates a `To`.
pub trait CastIsPossible<To: ?Sized>: ValueShape {
    fn is_possible(&self) -> bool;
}

/// Conversion of a source value into the target's shape.
pub trait CastInfo<To>: CastIsPossible<To> {
    /// `&To` for shared sources, `&mut To` for exclusive ones, and the same
    /// wrapped in the source's optional layer.
    type Output;

    /// # Safety
    ///
    /// `is_possible` must hold for this value.
    unsafe fn do_cast(self) -> Self::Output;
}

impl<'a, S, To> CastIsPossible<To> for &'a S
where
    S: ?Sized + Simplify,
    To: ?Sized + Classof<S::Simple>,
{
    #[inline(always)]
    fn is_possible(&self) -> bool {
        To::classof(<S as Simplify>::simplify(*self))
    }
}

impl<'a, S, To> CastIsPossible<To> for &'a mut S
where
    S: ?Sized + Simplify,
    To: ?Sized + Classof<S::Simple>,
{
    #[inline(always)]
    fn is_possible(&self) -> bool {
        To::classof(<S as Simplify>::simplify(&**self))
    }
}

impl<X, To> CastIsPossible<To> for Option<X>
where
    X: CastIsPossible<To>,
    To: ?Sized,
{
    #[track_caller]
    fn is_possible(&self) -> bool {
        match self {
            Some(inner) => <X as CastIsPossible<To>>::is_possible(inner),
            None => failure::absent::<To, Self>("isa"),
        }
    }
}

impl<'a, S, To> CastInfo<To> for &'a S
where
    S: ?Sized + Simplify,
    To: Downcast<S::Simple> + 'a,
{
    type Output = &'a To;

    #[inline(always)]
    unsafe fn do_cast(self) -> &'a To {
        // SAFETY: the caller checked `classof`.
        unsafe { To::downcast_ref(<S as Simplify>::simplify(self)) }
    }
}

impl<'a, S, To> CastInfo<To> for &'a mut S
where
    S: ?Sized + SimplifyMut,
    To: Downcast<S::Simple> + 'a,
{
    type Output = &'a mut To;

    #[inline(always)]
    unsafe fn do_cast(self) -> &'a mut To {
        // SAFETY: the caller checked `classof`.
        unsafe { To::downcast_mut(<S as SimplifyMut>::simplify_mut(self)) }
    }
}

impl<X, To> CastInfo<To> for Option<X>
where
    X: CastInfo<To>,
{
    type Output = <X as CastInfo<To>>::Output;

    #[inline]
    #[track_caller]
    unsafe fn do_cast(self) -> Self::Output {
        // SAFETY: `is_possible` held, which requires presence.
        unsafe { <X as CastInfo<To>>::do_cast(self.into_inner()) }
    }
}

/// Whether a source value designates any kind in the tuple `L`.
///
/// Kinds are tested left to right and the first match stops the walk.
pub trait CastIsPossibleAny<L>: ValueShape {
    fn is_any_possible(&self) -> bool;
}

macro_rules! impl_cast_is_possible_any {
    ($($T:ident),+) => {
        impl<S, $($T),+> CastIsPossibleAny<($($T,)+)> for S
        where
            $(S: CastIsPossible<$T>,)+
        {
            #[inline]
            fn is_any_possible(&self) -> bool {
                $(<S as CastIsPossible<$T>>::is_possible(self))||+
            }
        }
    };
}

// The empty list matches nothing.
impl<S: ValueShape> CastIsPossibleAny<()> for S {
    #[inline(always)]
    fn is_any_possible(&self) -> bool {
        false
    }
}

impl_cast_is_possible_any!(A);
impl_cast_is_possible_any!(A, B);
impl_cast_is_possible_any!(A, B, C);
impl_cast_is_possible_any!(A, B, C, D);
impl_cast_is_possible_any!(A, B, C, D, E);
impl_cast_is_possible_any!(A, B, C, D, E, F);
impl_cast_is_possible_any!(A, B, C, D, E, F, G);
impl_cast_is_possible_any!(A, B, C, D, E, F, G, H);
