//! Rendering: the symbol-drawing capability and the schematic driver.
//!
//! The layout core never draws anything itself. [`draw_schematic`] runs
//! placement and routing, then hands geometry to a [`SymbolRenderer`] — one
//! method per element kind plus wires and node markers — so any graphics
//! backend can be plugged in. The crate ships [`SvgRenderer`].

mod svg;

pub use svg::SvgRenderer;

use crate::circuit::{Circuit, ElementKind, NodeId};
use crate::error::Result;
use crate::layout::{place_nodes, route, Point, RoutedElement};

/// Per-element drawing contract: resolved midpoint, rotation, label and
/// value for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// Symbol midpoint
    pub at: Point,
    /// Rotation in radians, 0 = along +x
    pub angle: f64,
    /// Schematic label (`R2`, `U1`, ...)
    pub label: String,
    /// Value in the element's natural unit, if specified
    pub value: Option<f64>,
}

/// Drawing capability required from a graphics backend.
pub trait SymbolRenderer {
    /// Draw a wire segment.
    fn wire(&mut self, from: Point, to: Point) -> Result<()>;

    /// Draw a node marker with its circled id label.
    fn node(&mut self, id: NodeId, at: Point) -> Result<()>;

    /// Draw a resistor symbol.
    fn resistor(&mut self, symbol: &Symbol) -> Result<()>;

    /// Draw an inductor symbol.
    fn inductor(&mut self, symbol: &Symbol) -> Result<()>;

    /// Draw a capacitor symbol.
    fn capacitor(&mut self, symbol: &Symbol) -> Result<()>;

    /// Draw a voltage source symbol.
    fn voltage_source(&mut self, symbol: &Symbol) -> Result<()>;

    /// Draw a current source symbol.
    fn current_source(&mut self, symbol: &Symbol) -> Result<()>;
}

/// Lay out, route and draw the whole circuit.
///
/// Draw order: wires first, then element symbols, then node markers on top.
pub fn draw_schematic<R: SymbolRenderer>(circuit: &Circuit, renderer: &mut R) -> Result<()> {
    let positions = place_nodes(circuit)?;
    let routes = route(circuit, &positions);

    for routed in &routes {
        for wire in &routed.wires {
            renderer.wire(wire.from, wire.to)?;
        }
    }
    for routed in &routes {
        draw_symbol(routed, renderer)?;
    }
    for (node, at) in positions.iter() {
        renderer.node(node, at)?;
    }

    Ok(())
}

fn draw_symbol<R: SymbolRenderer>(routed: &RoutedElement, renderer: &mut R) -> Result<()> {
    let symbol = Symbol {
        at: routed.midpoint,
        angle: routed.angle,
        label: routed.label.clone(),
        value: routed.value,
    };
    match routed.kind {
        ElementKind::Resistor => renderer.resistor(&symbol),
        ElementKind::Inductor => renderer.inductor(&symbol),
        ElementKind::Capacitor => renderer.capacitor(&symbol),
        ElementKind::VoltageSource => renderer.voltage_source(&symbol),
        ElementKind::CurrentSource => renderer.current_source(&symbol),
    }
}
