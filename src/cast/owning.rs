//! Ownership-transferring casts.
//!
//! A handle can only be re-owned under the type its payload was created with,
//! so these casts match the exact dynamic type. A `Box<dyn Object>` holding a
//! `Tree` can become a `Box<Tree>`, never a `Box<Node>`, even though the tree
//! *is a* node.
//!
//! On a mismatch the source handle is handed back unchanged: nothing is
//! dropped and nothing moves.

use core::any::type_name;

use crate::failure::{self, LOG_TARGET};
use crate::rtti::Downcast;
use crate::shape::OwningHandle;

/// Move `handle` into a handle typed as `To`, or give it back.
///
/// ```ignore
/// let shape: Box<dyn Shape> = Box::new(Circle { radius: 2 });
/// let circle: Box<Circle> = owning_try_cast::<Circle, _>(shape).ok().unwrap();
/// ```
pub fn owning_try_cast<To, H>(handle: H) -> Result<H::Retyped<To>, H>
where
    H: OwningHandle,
    To: Downcast<H::Payload>,
{
    if To::is_exact(handle.payload()) {
        log::trace!(
            target: LOG_TARGET,
            "owning cast {} -> {}",
            type_name::<H::Payload>(),
            type_name::<To>()
        );
        // SAFETY: the payload's concrete type is exactly `To`.
        Ok(unsafe { handle.retype::<To>() })
    } else {
        log::trace!(
            target: LOG_TARGET,
            "owning cast {} -> {} declined, source kept",
            type_name::<H::Payload>(),
            type_name::<To>()
        );
        Err(handle)
    }
}

/// Take the handle out of `slot` if it is present and holds a `To`.
///
/// The slot is emptied only when the cast succeeds.
pub fn owning_try_cast_if_present<To, H>(slot: &mut Option<H>) -> Option<H::Retyped<To>>
where
    H: OwningHandle,
    To: Downcast<H::Payload>,
{
    if !To::is_exact(slot.as_ref()?.payload()) {
        return None;
    }
    owning_try_cast::<To, H>(slot.take()?).ok()
}

/// [`owning_try_cast`] that the caller asserts will succeed.
///
/// On a mismatch the handle is released while the failure unwinds.
#[track_caller]
pub fn owning_check_cast<To, H>(handle: H) -> H::Retyped<To>
where
    H: OwningHandle,
    To: Downcast<H::Payload>,
{
    match owning_try_cast::<To, H>(handle) {
        Ok(cast) => cast,
        Err(_) => failure::incompatible::<To, H>("owning_check_cast"),
    }
}
