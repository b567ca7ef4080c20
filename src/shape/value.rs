use crate::failure;

/// How a cast source reports presence and exposes what it wraps.
pub trait ValueShape: Sized {
    /// Whether values of this shape can be absent.
    const NULLABLE: bool;

    /// What remains once a present value is unwrapped.
    type Inner;

    fn is_present(&self) -> bool;

    /// Unwrap a present value.
    ///
    /// Unwrapping an absent optional is a fatal failure.
    fn into_inner(self) -> Self::Inner;
}

impl<'a, T: ?Sized> ValueShape for &'a T {
    const NULLABLE: bool = false;
    type Inner = &'a T;

    #[inline(always)]
    fn is_present(&self) -> bool {
        true
    }

    #[inline(always)]
    fn into_inner(self) -> &'a T {
        self
    }
}

impl<'a, T: ?Sized> ValueShape for &'a mut T {
    const NULLABLE: bool = false;
    type Inner = &'a mut T;

    #[inline(always)]
    fn is_present(&self) -> bool {
        true
    }

    #[inline(always)]
    fn into_inner(self) -> &'a mut T {
        self
    }
}

impl<X> ValueShape for Option<X> {
    const NULLABLE: bool = true;
    type Inner = X;

    #[inline(always)]
    fn is_present(&self) -> bool {
        self.is_some()
    }

    #[track_caller]
    fn into_inner(self) -> X {
        match self {
            Some(inner) => inner,
            None => failure::absent::<X, Self>("into_inner"),
        }
    }
}

/// Whether the shape `S` admits an absent value.
#[inline(always)]
pub const fn is_nullable<S: ValueShape>() -> bool {
    S::NULLABLE
}
