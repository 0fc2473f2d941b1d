//! Branch routing: paths, offsets and symbol placement.

use std::f64::consts::FRAC_PI_2;

use super::nodes::NodePositions;
use super::Point;
use crate::circuit::{Circuit, Element, ElementKind};

/// Base vertical offset for spanning branches (same-row, non-adjacent ids).
pub const SPAN_OFFSET: f64 = 2.0;
/// Perpendicular distance between parallel branches of one group.
pub const OFFSET_STEP: f64 = 2.0;
/// Half-width of the gap left in a wire for the element symbol.
pub const ELEMENT_GAP: f64 = 0.7;
/// Below this, a coordinate delta counts as co-linear.
pub const ROW_EPSILON: f64 = 0.1;
/// Offsets smaller than this draw no connector stubs.
pub const STUB_EPSILON: f64 = 0.01;

/// A straight wire segment of a routed path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wire {
    pub from: Point,
    pub to: Point,
}

impl Wire {
    fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// An element resolved to drawable geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedElement {
    /// Element kind, selects the symbol
    pub kind: ElementKind,
    /// Schematic label (`R2`, `U1`, ...)
    pub label: String,
    /// Displayed value, if any
    pub value: Option<f64>,
    /// Symbol midpoint
    pub midpoint: Point,
    /// Symbol rotation in radians, 0 = along +x
    pub angle: f64,
    /// Wire segments of the path, broken around the symbol
    pub wires: Vec<Wire>,
}

/// Route every element of the circuit against the given node positions.
///
/// Elements are processed per branch group (unordered node pair). Within a
/// group the direction vector runs from the lower to the higher node id, and
/// each element gets a perpendicular offset centering the group around the
/// direct node-to-node line. Same-row pairs whose ids differ by more than
/// one are lifted above the row by [`SPAN_OFFSET`] to keep bridges visually
/// distinct from adjacent-node connections.
///
/// Pure function of its inputs: routing the same circuit and positions twice
/// yields the same sequence. Elements connecting a node to itself are
/// skipped but still occupy their slot in the group's offset fan.
pub fn route(circuit: &Circuit, positions: &NodePositions) -> Vec<RoutedElement> {
    let mut routed = Vec::with_capacity(circuit.elements.len());

    for (pair, group) in circuit.branch_groups() {
        let (Some(p1), Some(p2)) = (positions.get(pair.lo()), positions.get(pair.hi())) else {
            continue;
        };
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;

        let spanning = dy.abs() < ROW_EPSILON && pair.lo().distance(pair.hi()) > 1;
        let base_offset = if spanning { SPAN_OFFSET } else { 0.0 };
        let count = group.len();

        for (index, element) in group.into_iter().enumerate() {
            let fan = (index as f64 - (count as f64 - 1.0) / 2.0) * OFFSET_STEP;
            let offset = base_offset + fan;

            let path = if dx.abs() > ROW_EPSILON && dy.abs() > ROW_EPSILON {
                Some(route_rectangular(element, p1, p2, offset))
            } else {
                route_straight(element, p1, p2, dx, dy, offset)
            };
            routed.extend(path);
        }
    }

    routed
}

/// L-shaped path for a diagonal node pair.
///
/// Runs horizontally from the first node to `x = p1.x + offset`, vertically
/// down to the second node's row (broken at the midpoint for the symbol),
/// then horizontally into the second node. The symbol sits on the vertical
/// run, pointing down.
fn route_rectangular(element: &Element, p1: Point, p2: Point, offset: f64) -> RoutedElement {
    let leg_x = p1.x + offset;
    let corner_top = Point::new(leg_x, p1.y);
    let corner_bottom = Point::new(leg_x, p2.y);
    let midpoint = Point::new(leg_x, (p1.y + p2.y) / 2.0);

    let wires = vec![
        Wire::new(p1, corner_top),
        Wire::new(corner_top, Point::new(leg_x, midpoint.y - ELEMENT_GAP)),
        Wire::new(Point::new(leg_x, midpoint.y + ELEMENT_GAP), corner_bottom),
        Wire::new(corner_bottom, p2),
    ];

    RoutedElement {
        kind: element.kind,
        label: element.label(),
        value: element.value,
        midpoint,
        angle: -FRAC_PI_2,
        wires,
    }
}

/// Straight path for a co-linear node pair, shifted by the perpendicular
/// offset and broken at its midpoint. Non-zero offsets get connector stubs
/// from each node to the shifted line. Returns `None` for zero-length pairs.
fn route_straight(
    element: &Element,
    p1: Point,
    p2: Point,
    dx: f64,
    dy: f64,
    offset: f64,
) -> Option<RoutedElement> {
    let length = dx.hypot(dy);
    if length == 0.0 {
        return None;
    }

    let (ux, uy) = (dx / length, dy / length);
    let (px, py) = (-uy, ux);

    let a = Point::new(p1.x + px * offset, p1.y + py * offset);
    let b = Point::new(p2.x + px * offset, p2.y + py * offset);
    let midpoint = a.midpoint(b);

    let mut wires = vec![
        Wire::new(
            a,
            Point::new(midpoint.x - ux * ELEMENT_GAP, midpoint.y - uy * ELEMENT_GAP),
        ),
        Wire::new(
            Point::new(midpoint.x + ux * ELEMENT_GAP, midpoint.y + uy * ELEMENT_GAP),
            b,
        ),
    ];
    if offset.abs() > STUB_EPSILON {
        wires.push(Wire::new(p1, a));
        wires.push(Wire::new(p2, b));
    }

    Some(RoutedElement {
        kind: element.kind,
        label: element.label(),
        value: element.value,
        midpoint,
        angle: dy.atan2(dx),
        wires,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{ElementId, NodeId};
    use crate::layout::{place_nodes, NODE_SPACING, UPPER_ROW_Y};
    use approx::assert_relative_eq;

    fn element(id: u8, n1: u8, n2: u8) -> Element {
        Element {
            id: ElementId(id),
            node1: NodeId(n1),
            node2: NodeId(n2),
            kind: ElementKind::Resistor,
            value: Some(1.0),
        }
    }

    fn routed(elements: Vec<Element>) -> Vec<RoutedElement> {
        let circuit = Circuit::from_elements(elements);
        let positions = place_nodes(&circuit).unwrap();
        route(&circuit, &positions)
    }

    #[test]
    fn vertical_pair_routes_straight_down() {
        // Nodes {1, 2}: node 1 above, ground 2 directly below.
        let routes = routed(vec![element(1, 1, 2)]);
        assert_eq!(routes.len(), 1);

        let r = &routes[0];
        assert_eq!(r.wires.len(), 2);
        assert_relative_eq!(r.midpoint.x, 0.0);
        assert_relative_eq!(r.midpoint.y, UPPER_ROW_Y / 2.0);
        assert_relative_eq!(r.angle, -FRAC_PI_2);
    }

    #[test]
    fn parallel_offsets_are_symmetric() {
        let routes = routed(vec![element(1, 1, 2), element(2, 1, 2), element(3, 2, 1)]);
        assert_eq!(routes.len(), 3);

        // The direct line runs along x = 0; perpendicular offsets must
        // cancel around it.
        let sum: f64 = routes.iter().map(|r| r.midpoint.x).sum();
        assert_relative_eq!(sum, 0.0, epsilon = 1e-12);

        // Offset branches carry connector stubs, centered ones do not.
        for r in &routes {
            if r.midpoint.x.abs() > STUB_EPSILON {
                assert_eq!(r.wires.len(), 4);
            } else {
                assert_eq!(r.wires.len(), 2);
            }
        }
    }

    #[test]
    fn non_adjacent_same_row_pair_is_lifted_above_the_row() {
        // Nodes {1, 2, 3, 4}: uppers 1..=3 on one row, ground 4 below.
        // Pair (1, 3) skips node 2, so it must bridge above the row.
        let routes = routed(vec![
            element(1, 1, 3),
            element(2, 1, 2),
            element(3, 3, 4),
        ]);

        let bridge = routes.iter().find(|r| r.label == "R1").unwrap();
        assert_relative_eq!(bridge.midpoint.y, UPPER_ROW_Y + SPAN_OFFSET);
        assert_relative_eq!(bridge.midpoint.x, NODE_SPACING);
        assert_relative_eq!(bridge.angle, 0.0);
        assert_eq!(bridge.wires.len(), 4);

        // The adjacent pair (1, 2) stays on the row.
        let adjacent = routes.iter().find(|r| r.label == "R2").unwrap();
        assert_relative_eq!(adjacent.midpoint.y, UPPER_ROW_Y);
        assert_eq!(adjacent.wires.len(), 2);
    }

    #[test]
    fn diagonal_pair_routes_as_an_l_path() {
        // Nodes {1, 2, 3, 4}: pair (1, 4) connects corner to corner.
        let routes = routed(vec![
            element(1, 1, 4),
            element(2, 1, 2),
            element(3, 2, 3),
        ]);

        let diag = routes.iter().find(|r| r.label == "R1").unwrap();
        assert_eq!(diag.wires.len(), 4);
        assert_relative_eq!(diag.angle, -FRAC_PI_2);
        // Symbol sits on the vertical leg at x = p1.x + offset = 0.
        assert_relative_eq!(diag.midpoint.x, 0.0);
        assert_relative_eq!(diag.midpoint.y, UPPER_ROW_Y / 2.0);

        // The leg is broken by the element gap.
        let above_gap = diag
            .wires
            .iter()
            .find(|w| (w.to.y - (diag.midpoint.y - ELEMENT_GAP)).abs() < 1e-9);
        assert!(above_gap.is_some());
    }

    #[test]
    fn routing_is_idempotent() {
        let circuit = Circuit::from_elements(vec![
            element(1, 1, 4),
            element(2, 1, 2),
            element(3, 2, 4),
            element(4, 1, 2),
        ]);
        let positions = place_nodes(&circuit).unwrap();
        assert_eq!(route(&circuit, &positions), route(&circuit, &positions));
    }

    #[test]
    fn self_loops_route_to_nothing() {
        let routes = routed(vec![element(1, 3, 3)]);
        assert!(routes.is_empty());
    }

    #[test]
    fn grouping_follows_unordered_pairs() {
        // Declared in both directions; still one group of two with
        // symmetric offsets.
        let routes = routed(vec![element(1, 1, 2), element(2, 2, 1)]);
        assert_eq!(routes.len(), 2);
        assert_relative_eq!(routes[0].midpoint.x + routes[1].midpoint.x, 0.0);
    }
}
