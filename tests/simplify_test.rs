//! Simplification: wrappers strip to the designated entity, constness sticks.

mod common;

use std::rc::Rc;

use common::*;
use tola_cast::prelude::*;
use tola_cast::{Simplify, SimplifyMut};

fn kind_of<S: Simplify<Simple = Q> + ?Sized, Q: Shape + ?Sized>(value: &S) -> ShapeKind {
    value.simplify().kind()
}

#[test]
fn test_every_wrapping_reaches_the_entity() {
    let circle = Circle { radius: 1 };
    let shape: &dyn Shape = &circle;
    let boxed = common::rectangle(2, 3);
    let counted: Rc<dyn Shape> = Rc::new(Triangle { base: 2, height: 2 });

    assert_eq!(kind_of(&circle), ShapeKind::Circle);
    assert_eq!(kind_of(&shape), ShapeKind::Circle);
    assert_eq!(kind_of(&&shape), ShapeKind::Circle);
    assert_eq!(kind_of(&boxed), ShapeKind::Rectangle);
    assert_eq!(kind_of(&&boxed), ShapeKind::Rectangle);
    assert_eq!(kind_of(&counted), ShapeKind::Triangle);
}

#[test]
fn test_exclusive_chain_allows_mutation() {
    let mut circle = Circle { radius: 1 };
    let mut exclusive = &mut circle;
    let mut outer = &mut exclusive;
    (&mut outer).simplify_mut().radius = 4;
    assert_eq!(circle.radius, 4);
}

#[test]
fn test_boxed_entity_is_mutable_in_place() {
    let mut boxed = common::circle(1);
    if let Some(circle) = try_cast::<Circle, _>(&mut boxed) {
        circle.radius = 10;
    }
    assert_eq!(boxed.area(), 300);
}

#[test]
fn test_shared_layer_yields_shared_result() {
    let mut circle = Circle { radius: 2 };
    let exclusive: &mut Circle = &mut circle;
    let shared: &&mut Circle = &exclusive;
    // `&&mut Circle` casts to `&Circle`, never `&mut Circle`.
    let cast: &Circle = check_cast::<Circle, _>(shared);
    assert_eq!(cast.radius, 2);
}
