use super::info::{CastInfo, CastIsPossible, CastIsPossibleAny};
use super::{checked, dynamic, isa as query};
use crate::shape::ValueShape;

/// Method-call form of the cast operations, available on every value shape.
///
/// ```ignore
/// if let Some(circle) = shape.try_cast::<Circle>() {
///     assert!(circle.radius > 0);
/// }
/// ```
pub trait CastExt: ValueShape {
    #[inline]
    #[track_caller]
    fn isa<To: ?Sized>(self) -> bool
    where
        Self: CastIsPossible<To>,
    {
        query::isa::<To>(self)
    }

    #[inline]
    #[track_caller]
    fn isa_any<L>(self) -> bool
    where
        Self: CastIsPossibleAny<L>,
    {
        query::isa_any::<L>(self)
    }

    #[inline]
    fn isa_and_present<To: ?Sized>(self) -> bool
    where
        Self: CastIsPossible<To>,
    {
        query::isa_and_present::<To>(self)
    }

    #[inline]
    fn isa_any_and_present<L>(self) -> bool
    where
        Self: CastIsPossibleAny<L>,
    {
        query::isa_any_and_present::<L>(self)
    }

    #[inline]
    #[track_caller]
    fn check_cast<To>(self) -> <Self as CastInfo<To>>::Output
    where
        Self: CastInfo<To>,
    {
        checked::check_cast::<To, Self>(self)
    }

    #[inline]
    #[track_caller]
    fn check_cast_if_present<To>(self) -> Option<<Self as CastInfo<To>>::Output>
    where
        Self: CastInfo<To>,
    {
        checked::check_cast_if_present::<To, Self>(self)
    }

    #[inline]
    #[track_caller]
    fn try_cast<To>(self) -> Option<<Self as CastInfo<To>>::Output>
    where
        Self: CastInfo<To>,
    {
        dynamic::try_cast::<To, Self>(self)
    }

    #[inline]
    fn try_cast_if_present<To>(self) -> Option<<Self as CastInfo<To>>::Output>
    where
        Self: CastInfo<To>,
    {
        dynamic::try_cast_if_present::<To, Self>(self)
    }
}

impl<S: ValueShape> CastExt for S {}
