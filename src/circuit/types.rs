//! Core identifier types for circuit representation.

use std::fmt;

/// A unique identifier for a node in the circuit.
///
/// The netlist grammar encodes node ids as single decimal digits, so the
/// value is always in 0..=9. The node with the largest id in a circuit is
/// treated as the ground node by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u8);

impl NodeId {
    /// Absolute id distance to another node. Used by the router to decide
    /// whether two same-row nodes are adjacent.
    pub fn distance(&self, other: NodeId) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A per-element identifier from the netlist.
///
/// Single decimal digit in the grammar. Ids are carried through to the
/// schematic labels (`R2`, `L3`, ...) and are not required to be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u8);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
