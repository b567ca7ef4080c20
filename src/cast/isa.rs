use super::info::{CastIsPossible, CastIsPossibleAny};
use crate::shape::ValueShape;

/// Whether `value` designates a `To`.
///
/// The value must be present: an absent optional is a fatal failure. Use
/// [`isa_and_present`] when absence is expected.
#[inline]
#[track_caller]
pub fn isa<To: ?Sized>(value: impl CastIsPossible<To>) -> bool {
    CastIsPossible::<To>::is_possible(&value)
}

/// Whether `value` designates any of the kinds in the tuple `L`.
///
/// ```ignore
/// isa_any::<(Rectangle, Triangle)>(shape)
/// ```
#[inline]
#[track_caller]
pub fn isa_any<L>(value: impl CastIsPossibleAny<L>) -> bool {
    CastIsPossibleAny::<L>::is_any_possible(&value)
}

/// Like [`isa`], but an absent value is simply not a `To`.
#[inline]
pub fn isa_and_present<To: ?Sized>(value: impl CastIsPossible<To>) -> bool {
    ValueShape::is_present(&value) && CastIsPossible::<To>::is_possible(&value)
}

/// Like [`isa_any`], but an absent value matches nothing.
#[inline]
pub fn isa_any_and_present<L>(value: impl CastIsPossibleAny<L>) -> bool {
    ValueShape::is_present(&value) && CastIsPossibleAny::<L>::is_any_possible(&value)
}
