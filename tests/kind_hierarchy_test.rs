//! Tag-enum hierarchies: leaf equality and contiguous group ranges.

mod common;

use common::*;
use tola_cast::prelude::*;
use tola_cast::rtti::Tagged;

#[test]
fn test_base_exposes_tag() {
    let shapes = [common::circle(1), common::rectangle(1, 2), common::triangle(3, 4)];
    let tags: Vec<ShapeKind> = shapes.iter().map(|s| Tagged::tag(&**s)).collect();
    assert_eq!(
        tags,
        [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Triangle]
    );
}

#[test]
fn test_leaf_classof() {
    let circle = common::circle(1);
    assert!(<Circle as Classof<dyn Shape>>::classof(&*circle));
    assert!(!<Rectangle as Classof<dyn Shape>>::classof(&*circle));
    assert!(!<Triangle as Classof<dyn Shape>>::classof(&*circle));
}

#[test]
fn test_group_covers_its_range_only() {
    assert!(!isa::<Polygon>(&*common::circle(1)));
    assert!(isa::<Polygon>(&*common::rectangle(1, 1)));
    assert!(isa::<Polygon>(&*common::triangle(1, 1)));
}

#[test]
fn test_leaf_source_is_reflexive() {
    let rect = Rectangle { width: 2, height: 5 };
    assert!(isa::<Rectangle>(&rect));
    assert_eq!(check_cast::<Rectangle, _>(&rect).height, 5);
}

#[test]
fn test_downcast_reads_leaf_fields() {
    let shape = common::triangle(6, 4);
    let triangle = check_cast::<Triangle, _>(&*shape);
    assert_eq!((triangle.base, triangle.height), (6, 4));
    assert_eq!(triangle.area(), shape.area());
}
