use core::ptr;

/// Shapes with a distinguished "nothing" value.
///
/// Failed casts into a nullable shape return that value instead of failing.
pub trait Nullable: Sized {
    fn null() -> Self;
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline(always)]
    fn null() -> Self {
        None
    }

    #[inline(always)]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T> Nullable for *const T {
    #[inline(always)]
    fn null() -> Self {
        ptr::null()
    }

    #[inline(always)]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T> Nullable for *mut T {
    #[inline(always)]
    fn null() -> Self {
        ptr::null_mut()
    }

    #[inline(always)]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

/// The value a failed cast produces for the nullable shape `N`.
#[inline(always)]
pub fn failure_sentinel<N: Nullable>() -> N {
    N::null()
}
