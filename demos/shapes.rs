//! Shape Hierarchy Demonstration
//!
//! Walks a heterogeneous collection of shapes, queries it with predicates and
//! cast adapters, then moves the circles out into their own typed storage.
//!
//! Run with `RUST_LOG=tola_cast=trace` to see owning casts logged.

use tola_cast::prelude::*;

// --- Hierarchy ---

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
enum ShapeKind {
    Circle,
    Square,
    Rectangle,
}

trait Shape {
    fn kind(&self) -> ShapeKind;
    fn area(&self) -> f64;
}

#[derive(Debug)]
struct Circle {
    radius: f64,
}

#[derive(Debug)]
struct Square {
    side: f64,
}

#[derive(Debug)]
struct Rectangle {
    width: f64,
    height: f64,
}

/// Every shape with four right angles.
struct Quad;

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Shape for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

tola_cast::kind_hierarchy! {
    dyn Shape => ShapeKind, |shape| shape.kind();
    unsafe Circle => ShapeKind::Circle;
    unsafe Square => ShapeKind::Square;
    unsafe Rectangle => ShapeKind::Rectangle;
    Quad => ShapeKind::Square..=ShapeKind::Rectangle;
}

// =============================================================================
// Queries
// =============================================================================

fn describe(shape: &dyn Shape) -> String {
    if let Some(circle) = try_cast::<Circle, _>(shape) {
        format!("circle r={}", circle.radius)
    } else if let Some(square) = shape.try_cast::<Square>() {
        format!("square s={}", square.side)
    } else {
        let rect = check_cast::<Rectangle, _>(shape);
        format!("rectangle {}x{}", rect.width, rect.height)
    }
}

fn main() {
    env_logger::init();

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle { radius: 1.0 }),
        Box::new(Square { side: 2.0 }),
        Box::new(Rectangle { width: 2.0, height: 3.0 }),
        Box::new(Circle { radius: 0.5 }),
    ];

    println!("=== Describe ===");
    for shape in &shapes {
        println!("  {:<16} area {:.2}", describe(&**shape), shape.area());
    }

    let views: Vec<&dyn Shape> = shapes.iter().map(|shape| &**shape).collect();

    println!("\n=== Predicates ===");
    let quads = views.iter().filter(pred_isa::<Quad, _>()).count();
    let round_or_square = views
        .iter()
        .filter(pred_isa_any::<(Circle, Square), _>())
        .count();
    println!("  quads:            {quads}");
    println!("  circle or square: {round_or_square}");

    println!("\n=== Adapters ===");
    let radii: Vec<f64> = views
        .iter()
        .copied()
        .filter_map(op_try_cast::<Circle, _>())
        .map(|circle| circle.radius)
        .collect();
    println!("  circle radii: {radii:?}");

    println!("\n=== Owning casts ===");
    let mut circles: Vec<Box<Circle>> = Vec::new();
    let mut rest: Vec<Box<dyn Shape>> = Vec::new();
    for shape in shapes {
        match owning_try_cast::<Circle, _>(shape) {
            Ok(circle) => circles.push(circle),
            Err(shape) => rest.push(shape),
        }
    }
    println!("  moved {} circles, kept {} others", circles.len(), rest.len());
    for circle in &circles {
        println!("  {circle:?}");
    }
}
