use alloc::boxed::Box;
use alloc::rc::Rc;
#[cfg(target_has_atomic = "ptr")]
use alloc::sync::Arc;

/// Smart pointers whose resource can be re-owned under a more specific type.
///
/// # Safety contract of [`retype`](OwningHandle::retype)
///
/// The caller guarantees that the concrete type of the payload is exactly
/// `T`. The handle is then rebuilt from the same raw pointer, so the resource
/// is neither copied nor dropped.
pub trait OwningHandle: Sized {
    /// The (possibly unsized) type the handle currently owns.
    type Payload: ?Sized;

    /// The same handle kind owning a `T`.
    type Retyped<T>;

    /// Borrow the payload without moving ownership.
    fn payload(&self) -> &Self::Payload;

    /// Move the resource into a handle typed as `T`.
    ///
    /// # Safety
    ///
    /// The payload's concrete type must be exactly `T`.
    unsafe fn retype<T>(self) -> Self::Retyped<T>;
}

impl<P: ?Sized> OwningHandle for Box<P> {
    type Payload = P;
    type Retyped<T> = Box<T>;

    #[inline(always)]
    fn payload(&self) -> &P {
        self
    }

    #[inline]
    unsafe fn retype<T>(self) -> Box<T> {
        let raw = Box::into_raw(self).cast::<T>();
        // SAFETY: the caller guarantees the allocation holds exactly a `T`.
        unsafe { Box::from_raw(raw) }
    }
}

impl<P: ?Sized> OwningHandle for Rc<P> {
    type Payload = P;
    type Retyped<T> = Rc<T>;

    #[inline(always)]
    fn payload(&self) -> &P {
        self
    }

    #[inline]
    unsafe fn retype<T>(self) -> Rc<T> {
        let raw = Rc::into_raw(self).cast::<T>();
        // SAFETY: same allocation, and the payload is exactly a `T`.
        unsafe { Rc::from_raw(raw) }
    }
}

#[cfg(target_has_atomic = "ptr")]
impl<P: ?Sized> OwningHandle for Arc<P> {
    type Payload = P;
    type Retyped<T> = Arc<T>;

    #[inline(always)]
    fn payload(&self) -> &P {
        self
    }

    #[inline]
    unsafe fn retype<T>(self) -> Arc<T> {
        let raw = Arc::into_raw(self).cast::<T>();
        // SAFETY: same allocation, and the payload is exactly a `T`.
        unsafe { Arc::from_raw(raw) }
    }
}
