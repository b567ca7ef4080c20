//! Tag-enum hierarchies.
//!
//! The base type carries a discriminant. A leaf kind is recognised by
//! equality, and an intermediate group by a contiguous discriminant range, so
//! every membership test is O(1).
//!
//! ```ignore
//! pub struct Polygon; // marker for the Rectangle..=Triangle group
//!
//! tola_cast::kind_hierarchy! {
//!     dyn Shape => ShapeKind, |shape| shape.kind();
//!     unsafe Circle => ShapeKind::Circle;
//!     unsafe Rectangle => ShapeKind::Rectangle;
//!     unsafe Triangle => ShapeKind::Triangle;
//!     Polygon => ShapeKind::Rectangle..=ShapeKind::Triangle;
//! }
//! ```
//!
//! Leaves are written `unsafe` because they also get a reinterpreting
//! [`Downcast`](super::Downcast): the author promises that every value whose
//! tag equals the leaf's discriminant really is that leaf type. Groups only
//! get [`Classof`](super::Classof) and serve as `isa` targets.

/// A base type exposing its kind discriminant.
pub trait Tagged {
    type Tag: Copy + PartialOrd;

    fn tag(&self) -> Self::Tag;
}

/// Register a tag-enum hierarchy rooted at a trait object.
///
/// The first line names the base, its tag type and how to read the tag. Each
/// following line is either an `unsafe` leaf with its discriminant or a group
/// marker with an inclusive discriminant range.
///
/// ```ignore
/// tola_cast::kind_hierarchy! {
///     dyn Shape => ShapeKind, |shape| shape.kind();
///     unsafe Circle => ShapeKind::Circle;
///     Polygon => ShapeKind::Rectangle..=ShapeKind::Triangle;
/// }
/// ```
#[macro_export]
macro_rules! kind_hierarchy {
    (
        dyn $base:path => $tag:ty, |$this:ident| $get:expr;
        $($members:tt)*
    ) => {
        $crate::simple_type!(dyn $base);

        impl<'__x> $crate::rtti::Tagged for dyn $base + '__x {
            type Tag = $tag;

            #[inline]
            fn tag(&self) -> $tag {
                let $this = self;
                $get
            }
        }

        $crate::kind_hierarchy!(@members [$base] $($members)*);
    };

    (@members [$base:path]) => {};

    (@members [$base:path] unsafe $leaf:ty => $value:expr; $($rest:tt)*) => {
        impl<'__x> $crate::Classof<dyn $base + '__x> for $leaf {
            #[inline]
            fn classof(base: &(dyn $base + '__x)) -> bool {
                $crate::rtti::Tagged::tag(base) == $value
            }
        }

        unsafe impl<'__x> $crate::Downcast<dyn $base + '__x> for $leaf {}

        impl $crate::Classof<$leaf> for $leaf {
            #[inline(always)]
            fn classof(_: &$leaf) -> bool {
                true
            }
        }

        unsafe impl $crate::Downcast<$leaf> for $leaf {}

        $crate::simple_type!($leaf);

        $crate::kind_hierarchy!(@members [$base] $($rest)*);
    };

    (@members [$base:path] $group:ty => $range:expr; $($rest:tt)*) => {
        impl<'__x> $crate::Classof<dyn $base + '__x> for $group {
            #[inline]
            fn classof(base: &(dyn $base + '__x)) -> bool {
                ($range).contains(&$crate::rtti::Tagged::tag(base))
            }
        }

        $crate::kind_hierarchy!(@members [$base] $($rest)*);
    };
}
