//! Parser for the compact netlist grammar.
//!
//! A netlist is a single human-typed line describing circuit elements and
//! the nodes they connect.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist   = element { ';' element } [';']
//! element   = triple [separator] type ['=' value]
//! triple    = digit digit digit          ; element id, node1, node2
//! separator = '-'                        ; optional, whitespace tolerant
//! type      = free-form token            ; classified, never rejected
//! value     = floating point number
//! ```
//!
//! A segment's type and value regions end at the next `;`, the end of the
//! line, or the start of the next triple, so explicit separators are
//! optional: `"534-R5=2"` and `"534 - R5 = 2"` parse identically.
//!
//! # Type tokens
//!
//! | Contains | Kind |
//! |----------|------|
//! | `ИН` or `U` | Voltage source |
//! | `ИТ` or `I` | Current source |
//! | `R` | Resistor |
//! | `L` | Inductor |
//! | `C` | Capacitor |
//! | anything else | Resistor (fallback) |
//!
//! Matching is case-insensitive and evaluated in the order above, first
//! match wins.
//!
//! # Leniency
//!
//! The grammar never rejects a line outright: malformed segments are skipped
//! with a diagnostic, unparseable values default to `0`, and unknown type
//! tokens degrade to resistors. Only an input producing no elements at all
//! is reported as a failure.
//!
//! # Example
//!
//! ```text
//! 114 - ИН и = 2; 212 - R2 = 2; 324 - L3 = 2
//! ```

mod lexer;
mod parser;

pub use lexer::{Scanner, Segment};
pub use parser::{parse, Diagnostic, NetlistParse, SegmentOutcome};
