/// Membership test of a target kind against a base-typed value.
///
/// `Self` is the target. It may be a concrete type, an unsized view such as
/// `dyn Object`, or a marker standing for a group of kinds.
pub trait Classof<Base: ?Sized> {
    fn classof(base: &Base) -> bool;
}

/// Targets a base-typed value can be turned into once `classof` holds.
///
/// # Safety
///
/// The provided methods reinterpret the base pointer as `Self`. Keep them only
/// when `classof(base)` implies that the concrete type behind `base` is
/// exactly `Self` (leaves of a tag-enum hierarchy). Types that embed their
/// bases as fields must override both methods to project instead, and must
/// override [`is_exact`](Downcast::is_exact).
pub unsafe trait Downcast<Base: ?Sized>: Classof<Base> + Sized {
    /// # Safety
    ///
    /// `Self::classof(base)` must be true.
    #[inline(always)]
    unsafe fn downcast_ref(base: &Base) -> &Self {
        // SAFETY: upheld by the implementor and the caller.
        unsafe { &*(base as *const Base).cast::<Self>() }
    }

    /// # Safety
    ///
    /// `Self::classof(base)` must be true.
    #[inline(always)]
    unsafe fn downcast_mut(base: &mut Base) -> &mut Self {
        // SAFETY: upheld by the implementor and the caller.
        unsafe { &mut *(base as *mut Base).cast::<Self>() }
    }

    /// Whether the concrete type behind `base` is `Self` itself and not a
    /// type deriving from it. Owning casts require this.
    #[inline(always)]
    fn is_exact(base: &Base) -> bool {
        Self::classof(base)
    }
}
