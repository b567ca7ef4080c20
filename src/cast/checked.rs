use super::info::{CastInfo, CastIsPossible};
use crate::failure;
use crate::shape::ValueShape;

/// Cast that the caller asserts will succeed.
///
/// A value of another kind, or an absent optional, is a fatal failure.
#[inline]
#[track_caller]
pub fn check_cast<To, S: CastInfo<To>>(value: S) -> <S as CastInfo<To>>::Output {
    if !ValueShape::is_present(&value) {
        failure::absent::<To, S>("check_cast");
    }
    if !<S as CastIsPossible<To>>::is_possible(&value) {
        failure::incompatible::<To, S>("check_cast");
    }
    // SAFETY: the kind was just checked.
    unsafe { <S as CastInfo<To>>::do_cast(value) }
}

/// [`check_cast`] that lets absence through as `None`.
#[inline]
#[track_caller]
pub fn check_cast_if_present<To, S: CastInfo<To>>(value: S) -> Option<<S as CastInfo<To>>::Output> {
    if !ValueShape::is_present(&value) {
        return None;
    }
    if !<S as CastIsPossible<To>>::is_possible(&value) {
        failure::incompatible::<To, S>("check_cast_if_present");
    }
    // SAFETY: present and of the right kind.
    Some(unsafe { <S as CastInfo<To>>::do_cast(value) })
}

/// Alias of [`check_cast_if_present`].
#[inline(always)]
#[track_caller]
pub fn check_cast_or_null<To, S: CastInfo<To>>(value: S) -> Option<<S as CastInfo<To>>::Output> {
    check_cast_if_present::<To, S>(value)
}
