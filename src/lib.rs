//! # Netsketch
//!
//! A schematic diagram renderer for compact circuit netlists.
//!
//! This library provides:
//! - A lenient single-line grammar for describing circuit elements and the
//!   nodes they connect
//! - A two-row node placement and geometric branch routing engine
//! - A backend-agnostic symbol drawing contract, with an SVG backend
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`netlist`] - Scanner and parser for the netlist grammar
//! - [`circuit`] - Element and circuit model, classification, grouping
//! - [`layout`] - Node placement and branch routing
//! - [`render`] - Symbol renderer trait and the SVG backend
//!
//! ## Usage
//!
//! ```no_run
//! use netsketch::{draw_schematic, netlist, SvgRenderer};
//!
//! let report = netlist::parse("114-ИН=2;212-R2=2;324-L3=2");
//! let circuit = report.into_circuit()?;
//!
//! let mut svg = SvgRenderer::new();
//! draw_schematic(&circuit, &mut svg)?;
//! std::fs::write("schematic.svg", svg.finish()).unwrap();
//! # Ok::<(), netsketch::NetsketchError>(())
//! ```
//!
//! ## Layout Method
//!
//! Placement is a fixed two-row scheme: the node with the largest id is
//! ground, centered at the bottom; all other nodes sit on one upper row in
//! id order. The router then resolves each element to a midpoint, rotation
//! and wire path:
//!
//! 1. Elements sharing an unordered node pair form a parallel group and fan
//!    out symmetrically with perpendicular offsets
//! 2. Same-row pairs with non-adjacent ids are lifted above the row as
//!    bridges
//! 3. Diagonal pairs route as L-shaped runs with the symbol on the vertical
//!    leg; everything else is a straight broken line
//!
//! Parsing never rejects input outright: bad segments are skipped with
//! diagnostics and only an input yielding no elements at all is an error.

pub mod circuit;
pub mod error;
pub mod layout;
pub mod netlist;
pub mod render;

// Re-export main types for convenience
pub use circuit::{Circuit, Element, ElementKind};
pub use error::{NetsketchError, Result};
pub use render::{draw_schematic, SvgRenderer, SymbolRenderer};
