use super::info::{CastInfo, CastIsPossible};
use crate::failure;
use crate::shape::ValueShape;

/// Cast that reports a kind mismatch as `None`.
///
/// The value must be present: an absent optional is a fatal failure. Use
/// [`try_cast_if_present`] when absence is expected.
#[inline]
#[track_caller]
pub fn try_cast<To, S: CastInfo<To>>(value: S) -> Option<<S as CastInfo<To>>::Output> {
    if !ValueShape::is_present(&value) {
        failure::absent::<To, S>("try_cast");
    }
    if <S as CastIsPossible<To>>::is_possible(&value) {
        // SAFETY: the kind was just checked.
        Some(unsafe { <S as CastInfo<To>>::do_cast(value) })
    } else {
        None
    }
}

/// [`try_cast`] that also maps absence to `None`.
#[inline]
pub fn try_cast_if_present<To, S: CastInfo<To>>(value: S) -> Option<<S as CastInfo<To>>::Output> {
    if !ValueShape::is_present(&value) {
        return None;
    }
    try_cast::<To, S>(value)
}

/// Alias of [`try_cast_if_present`].
#[inline(always)]
pub fn try_cast_or_null<To, S: CastInfo<To>>(value: S) -> Option<<S as CastInfo<To>>::Output> {
    try_cast_if_present::<To, S>(value)
}
