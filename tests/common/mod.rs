//! Hierarchies shared by the integration tests.
//!
//! - `Shape`: tag-enum hierarchy with a `Polygon` range group.
//! - `Node` / `Container` / `Element` / `List` / `Tree`: extensible
//!   hierarchy, `Tree` deriving from both `Container` and `Node`.
#![allow(dead_code)]

use tola_cast::prelude::*;

// =============================================================================
// Tag-enum hierarchy
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Triangle,
}

pub trait Shape {
    fn kind(&self) -> ShapeKind;
    fn area(&self) -> i32;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub base: i32,
    pub height: i32,
}

/// Group marker: every polygon kind.
pub struct Polygon;

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
    fn area(&self) -> i32 {
        3 * self.radius * self.radius
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }
    fn area(&self) -> i32 {
        self.width * self.height
    }
}

impl Shape for Triangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }
    fn area(&self) -> i32 {
        self.base * self.height / 2
    }
}

tola_cast::kind_hierarchy! {
    dyn Shape => ShapeKind, |shape| shape.kind();
    unsafe Circle => ShapeKind::Circle;
    unsafe Rectangle => ShapeKind::Rectangle;
    unsafe Triangle => ShapeKind::Triangle;
    Polygon => ShapeKind::Rectangle..=ShapeKind::Triangle;
}

pub fn circle(radius: i32) -> Box<dyn Shape> {
    Box::new(Circle { radius })
}

pub fn rectangle(width: i32, height: i32) -> Box<dyn Shape> {
    Box::new(Rectangle { width, height })
}

pub fn triangle(base: i32, height: i32) -> Box<dyn Shape> {
    Box::new(Triangle { base, height })
}

// =============================================================================
// Extensible hierarchy
// =============================================================================

#[derive(Debug, Rtti)]
pub struct Node {
    pub value: i32,
}

#[derive(Debug, Rtti)]
pub struct Container {
    pub capacity: i32,
}

#[derive(Debug, Rtti)]
pub struct Element {
    #[rtti(base)]
    pub node: Node,
    pub index: i32,
}

#[derive(Debug, Rtti)]
pub struct List {
    #[rtti(base)]
    pub container: Container,
    pub count: i32,
}

#[derive(Debug, Rtti)]
pub struct Tree {
    #[rtti(base)]
    pub container: Container,
    #[rtti(base)]
    pub node: Node,
    pub depth: i32,
}

/// Base-pointer view shared by every container kind.
pub trait ContainerLike: Object {
    fn capacity(&self) -> i32;
}

/// Base-pointer view shared by every node kind.
pub trait NodeLike: Object {
    fn value(&self) -> i32;
}

impl ContainerLike for Container {
    fn capacity(&self) -> i32 {
        self.capacity
    }
}

impl ContainerLike for List {
    fn capacity(&self) -> i32 {
        self.container.capacity
    }
}

impl ContainerLike for Tree {
    fn capacity(&self) -> i32 {
        self.container.capacity
    }
}

impl NodeLike for Node {
    fn value(&self) -> i32 {
        self.value
    }
}

impl NodeLike for Element {
    fn value(&self) -> i32 {
        self.node.value
    }
}

impl NodeLike for Tree {
    fn value(&self) -> i32 {
        self.node.value
    }
}

tola_cast::simple_type!(dyn ContainerLike, dyn NodeLike);

pub fn tree(capacity: i32, value: i32, depth: i32) -> Tree {
    Tree {
        container: Container { capacity },
        node: Node { value },
        depth,
    }
}
