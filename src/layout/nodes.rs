//! Two-row node placement.

use std::collections::BTreeMap;

use super::Point;
use crate::circuit::{Circuit, NodeId};
use crate::error::{NetsketchError, Result};

/// Horizontal spacing between consecutive upper-row nodes.
pub const NODE_SPACING: f64 = 6.0;
/// Vertical position of the upper row; ground sits at 0.
pub const UPPER_ROW_Y: f64 = 6.0;

/// Computed node coordinates plus the designated ground node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePositions {
    positions: BTreeMap<NodeId, Point>,
    ground: NodeId,
}

impl NodePositions {
    /// Position of a node, if it exists in the circuit.
    pub fn get(&self, node: NodeId) -> Option<Point> {
        self.positions.get(&node).copied()
    }

    /// The ground node (largest id in the circuit).
    pub fn ground(&self) -> NodeId {
        self.ground
    }

    /// Iterate nodes and positions in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Point)> + '_ {
        self.positions.iter().map(|(node, pos)| (*node, *pos))
    }

    /// Number of placed nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no nodes were placed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Assign 2D coordinates to every node of the circuit.
///
/// The node with the largest id becomes ground and is placed at y = 0,
/// horizontally centered under the upper row. All remaining nodes are laid
/// out left to right in ascending id order at [`UPPER_ROW_Y`], spaced
/// [`NODE_SPACING`] apart.
///
/// This is intentionally not a general graph layout: it assumes one
/// ground-like node and makes no attempt to minimize crossings.
pub fn place_nodes(circuit: &Circuit) -> Result<NodePositions> {
    let nodes = circuit.nodes();
    let Some(ground) = nodes.iter().next_back().copied() else {
        return Err(NetsketchError::EmptyCircuit);
    };

    let mut positions = BTreeMap::new();
    let mut upper_count = 0usize;
    for node in nodes.iter().filter(|&&n| n != ground) {
        positions.insert(
            *node,
            Point::new(upper_count as f64 * NODE_SPACING, UPPER_ROW_Y),
        );
        upper_count += 1;
    }

    let ground_x = if upper_count > 0 {
        (upper_count - 1) as f64 * NODE_SPACING / 2.0
    } else {
        0.0
    };
    positions.insert(ground, Point::new(ground_x, 0.0));

    Ok(NodePositions { positions, ground })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{Element, ElementId, ElementKind};
    use approx::assert_relative_eq;

    fn element(id: u8, n1: u8, n2: u8) -> Element {
        Element {
            id: ElementId(id),
            node1: NodeId(n1),
            node2: NodeId(n2),
            kind: ElementKind::Resistor,
            value: None,
        }
    }

    #[test]
    fn largest_node_becomes_ground_at_row_zero() {
        let circuit = Circuit::from_elements(vec![element(1, 1, 4), element(2, 1, 2)]);
        let layout = place_nodes(&circuit).unwrap();

        assert_eq!(layout.ground(), NodeId(4));
        let ground = layout.get(NodeId(4)).unwrap();
        assert_relative_eq!(ground.y, 0.0);

        for (_, pos) in layout.iter().filter(|(n, _)| *n != NodeId(4)) {
            assert_relative_eq!(pos.y, UPPER_ROW_Y, epsilon = 1e-12);
        }
    }

    #[test]
    fn upper_nodes_run_left_to_right_in_id_order() {
        let circuit = Circuit::from_elements(vec![
            element(1, 1, 2),
            element(2, 2, 3),
            element(3, 3, 5),
        ]);
        let layout = place_nodes(&circuit).unwrap();

        assert_relative_eq!(layout.get(NodeId(1)).unwrap().x, 0.0);
        assert_relative_eq!(layout.get(NodeId(2)).unwrap().x, NODE_SPACING);
        assert_relative_eq!(layout.get(NodeId(3)).unwrap().x, 2.0 * NODE_SPACING);
    }

    #[test]
    fn ground_is_centered_under_the_upper_row() {
        let circuit = Circuit::from_elements(vec![element(1, 1, 2), element(2, 2, 3)]);
        let layout = place_nodes(&circuit).unwrap();

        // Two upper nodes at x = 0 and 6; ground centered at 3.
        let ground = layout.get(layout.ground()).unwrap();
        assert_relative_eq!(ground.x, NODE_SPACING / 2.0);
    }

    #[test]
    fn single_node_circuit_places_ground_at_origin() {
        let circuit = Circuit::from_elements(vec![element(1, 3, 3)]);
        let layout = place_nodes(&circuit).unwrap();

        assert_eq!(layout.len(), 1);
        assert_eq!(layout.get(NodeId(3)), Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn empty_circuit_is_an_error() {
        let circuit = Circuit::default();
        assert!(matches!(
            place_nodes(&circuit),
            Err(NetsketchError::EmptyCircuit)
        ));
    }
}
