//! Circuit container and derived topology views.

use std::collections::{BTreeMap, BTreeSet};

use super::element::Element;
use super::types::NodeId;

/// An unordered pair of node ids, stored sorted.
///
/// Keys the parallel-branch grouping: two elements belong to the same group
/// exactly when their node pairs compare equal as sets, independent of the
/// direction they were declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodePair {
    lo: NodeId,
    hi: NodeId,
}

impl NodePair {
    /// Build a normalized pair from endpoints in any order.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The smaller node id.
    pub fn lo(&self) -> NodeId {
        self.lo
    }

    /// The larger node id.
    pub fn hi(&self) -> NodeId {
        self.hi
    }

    /// Whether both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.lo == self.hi
    }
}

/// The parsed netlist: an ordered sequence of elements.
///
/// The node set and branch grouping are recomputed from the element list on
/// every call rather than cached, so they can never drift out of sync with
/// the elements.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    /// All elements in parse order
    pub elements: Vec<Element>,
}

impl Circuit {
    /// Create a circuit from parsed elements.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// The set of distinct node ids referenced by any element.
    pub fn nodes(&self) -> BTreeSet<NodeId> {
        let mut nodes = BTreeSet::new();
        for el in &self.elements {
            nodes.insert(el.node1);
            nodes.insert(el.node2);
        }
        nodes
    }

    /// Group elements by unordered node pair (parallel branches).
    ///
    /// Within a group, elements keep their parse order; groups iterate in
    /// node-pair order so downstream routing is deterministic.
    pub fn branch_groups(&self) -> BTreeMap<NodePair, Vec<&Element>> {
        let mut groups: BTreeMap<NodePair, Vec<&Element>> = BTreeMap::new();
        for el in &self.elements {
            groups
                .entry(NodePair::new(el.node1, el.node2))
                .or_default()
                .push(el);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::{ElementId, ElementKind};

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
    fn node_set_is_union_of_endpoints() {
        let circuit = Circuit::from_elements(vec![element(1, 1, 4), element(2, 1, 2)]);
        let nodes: Vec<u8> = circuit.nodes().into_iter().map(|n| n.0).collect();
        assert_eq!(nodes, vec![1, 2, 4]);
    }

    #[test]
    fn grouping_ignores_declared_direction() {
        let circuit = Circuit::from_elements(vec![
            element(1, 1, 2),
            element(2, 2, 1),
            element(3, 1, 4),
        ]);
        let groups = circuit.branch_groups();
        assert_eq!(groups.len(), 2);

        let pair = NodePair::new(NodeId(2), NodeId(1));
        assert_eq!(pair.lo(), NodeId(1));
        let group = &groups[&pair];
        assert_eq!(group.len(), 2);
        // Parse order is preserved inside the group.
        assert_eq!(group[0].id, ElementId(1));
        assert_eq!(group[1].id, ElementId(2));
    }

    #[test]
    fn self_loop_pairs_are_detected() {
        assert!(NodePair::new(NodeId(3), NodeId(3)).is_self_loop());
        assert!(!NodePair::new(NodeId(3), NodeId(4)).is_self_loop());
    }
}
