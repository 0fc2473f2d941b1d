//! Schematic layout: node placement and branch routing.
//!
//! Layout is a fixed two-row scheme: every node except ground sits on a
//! single upper row, ordered by id, and the ground node (the largest id)
//! sits centered below. [`place_nodes`] assigns the coordinates;
//! [`route`] then turns each element into a drawable path — a straight
//! broken line for co-linear node pairs, an L-shaped run for diagonal ones —
//! with perpendicular offsets separating parallel branches.
//!
//! Both passes are pure functions of their inputs and recompute every
//! derived structure from the circuit each time.

mod nodes;
mod router;

pub use nodes::{place_nodes, NodePositions, NODE_SPACING, UPPER_ROW_Y};
pub use router::{
    route, RoutedElement, Wire, ELEMENT_GAP, OFFSET_STEP, ROW_EPSILON, SPAN_OFFSET, STUB_EPSILON,
};

/// A 2D point in schematic coordinates (y grows upward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between this point and another.
    pub fn midpoint(&self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}
