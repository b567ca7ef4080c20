//! Extensible identity hierarchies.
//!
//! A type joins by implementing [`Object`], normally through
//! `#[derive(Rtti)]`. Bases are fields marked `#[rtti(base)]`, and a type may
//! have several. Trait-object views such as `dyn ContainerLike: Object` act
//! as base pointers: any target can be tested and reached through them.
//!
//! ```text
//!            dyn Object (root)
//!             /          \
//!        Container       Node
//!         /     \       /    \
//!       List     Tree ---   Element
//! ```

use core::ptr::NonNull;

use super::{Classof, StaticType, TypeInfo, TypeToken};
use crate::failure::{self, CastError};

/// Root of every extensible hierarchy.
///
/// # Safety
///
/// `find_ref` and `find_mut` must return either `None` or a pointer to a
/// live value whose type is the one `token` identifies, borrowed from `self`.
/// `dynamic_type` must report the concrete type of `self`.
pub unsafe trait Object {
    /// Identity of the concrete type behind this value.
    fn dynamic_type(&self) -> TypeToken;

    /// Whether this value is of the type `token`, or of a type deriving from it.
    #[inline]
    fn is_a(&self, token: TypeToken) -> bool {
        self.dynamic_type().derives_from(token)
    }

    /// Locate the sub-object of type `token` (possibly `self`).
    fn find_ref(&self, token: TypeToken) -> Option<NonNull<()>>;

    /// Exclusive counterpart of [`find_ref`](Object::find_ref).
    fn find_mut(&mut self, token: TypeToken) -> Option<NonNull<()>>;
}

static OBJECT_INFO: TypeInfo = TypeInfo::new("tola_cast::Object", &[]);

impl StaticType for dyn Object {
    #[inline]
    fn type_info() -> &'static TypeInfo {
        &OBJECT_INFO
    }
}

crate::simple_type!(dyn Object);

// Every participant derives from the root.
impl<B: ?Sized + Object> Classof<B> for dyn Object {
    #[inline(always)]
    fn classof(_: &B) -> bool {
        true
    }
}

/// Typed queries on any [`Object`], including `dyn` views of it.
pub trait ObjectExt: Object {
    #[inline]
    fn is_a_type<T: ?Sized + StaticType>(&self) -> bool {
        self.is_a(T::type_token())
    }

    #[inline]
    fn dynamic_type_name(&self) -> &'static str {
        self.dynamic_type().name()
    }
}

impl<O: ?Sized + Object> ObjectExt for O {}

/// Reach the `T` sub-object of `base`.
///
/// # Safety
///
/// The returned reference aliases `base`. `T` must be a type `base` derives
/// from, which `T::classof(base)` establishes.
#[track_caller]
pub unsafe fn project_ref<T: StaticType, B: ?Sized + Object>(base: &B) -> &T {
    match base.find_ref(T::type_token()) {
        // SAFETY: `find_ref` returns pointers to live `T` values inside `base`.
        Some(found) => unsafe { found.cast::<T>().as_ref() },
        None => failure::fatal(CastError::missing_base::<T>(base.dynamic_type().name())),
    }
}

/// Exclusive counterpart of [`project_ref`].
///
/// # Safety
///
/// Same as [`project_ref`].
#[track_caller]
pub unsafe fn project_mut<T: StaticType, B: ?Sized + Object>(base: &mut B) -> &mut T {
    let from = base.dynamic_type().name();
    match base.find_mut(T::type_token()) {
        // SAFETY: `find_mut` returns pointers derived from the exclusive borrow.
        Some(found) => unsafe { found.cast::<T>().as_mut() },
        None => failure::fatal(CastError::missing_base::<T>(from)),
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[derive(Rtti)]
    struct Engine {
        power: u32,
    }

    #[derive(Rtti)]
    struct Wheels(u8);

    #[derive(Rtti)]
    struct Car {
        #[rtti(base)]
        engine: Engine,
        #[rtti(base)]
        wheels: Wheels,
        seats: u8,
    }

    #[test]
    fn test_dynamic_type_matches_static() {
        let car = Car { engine: Engine { power: 90 }, wheels: Wheels(4), seats: 5 };
        assert_eq!(car.dynamic_type(), Car::type_token());
        assert_eq!(car.dynamic_type_name(), concat!(module_path!(), "::Car"));
        assert_eq!(car.seats, 5);
    }

    #[test]
    fn test_is_a_through_every_base() {
        let car = Car { engine: Engine { power: 90 }, wheels: Wheels(4), seats: 5 };
        let object: &dyn Object = &car;
        assert!(object.is_a_type::<Car>());
        assert!(object.is_a_type::<Engine>());
        assert!(object.is_a_type::<Wheels>());
        assert!(object.is_a_type::<dyn Object>());

        let engine: &dyn Object = &car.engine;
        assert!(!engine.is_a_type::<Car>());
        assert!(!engine.is_a_type::<Wheels>());
    }

    #[test]
    fn test_projection_reaches_embedded_base() {
        let mut car = Car { engine: Engine { power: 90 }, wheels: Wheels(4), seats: 5 };
        let object: &mut dyn Object = &mut car;
        // SAFETY: a Car embeds a Wheels.
        let wheels = unsafe { super::project_mut::<Wheels, _>(object) };
        wheels.0 = 3;
        assert_eq!(car.wheels.0, 3);

        // SAFETY: a Car embeds an Engine.
        let engine = unsafe { super::project_ref::<Engine, _>(&car) };
        assert_eq!(engine.power, 90);
        assert!(core::ptr::eq(engine, &car.engine));
    }

    #[test]
    #[should_panic(expected = "embeds no such sub-object")]
    fn test_projection_without_base_is_fatal() {
        let engine = Engine { power: 1 };
        // SAFETY: never dereferenced, the lookup fails first.
        let _ = unsafe { super::project_ref::<Wheels, _>(&engine) };
    }
}
