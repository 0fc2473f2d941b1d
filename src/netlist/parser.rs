//! Per-segment parsing and the aggregated parse report.

use thiserror::Error;

use super::lexer::{Scanner, Segment};
use crate::circuit::{Circuit, Element, ElementId, ElementKind, NodeId};
use crate::error::{NetsketchError, Result};

/// A recoverable problem found while parsing one segment.
///
/// Diagnostics never abort the parse; they are collected in the report and
/// logged at warn level as they occur.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    /// Segment had a triple but no type token before `=`/`;`/end/next triple.
    #[error("skipped segment at offset {offset}: no type token")]
    MissingType { offset: usize },

    /// Triple contained a character that is not a decimal digit.
    #[error("skipped segment at offset {offset}: malformed triple '{triple}'")]
    MalformedTriple { offset: usize, triple: String },

    /// The `=` clause was present but did not parse as a number.
    #[error("element {label}: unparseable value '{text}', defaulting to 0")]
    BadValue { label: String, text: String },
}

/// Outcome of parsing a single segment.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentOutcome {
    /// Segment produced an element (possibly with a value diagnostic).
    Parsed(Element),
    /// Segment was skipped; the diagnostic says why.
    Skipped(Diagnostic),
}

/// Aggregated result of parsing a netlist line.
///
/// Parsing is best-effort: bad segments are skipped, bad values default to
/// zero, and only a report with no elements at all counts as failure.
#[derive(Debug, Clone, Default)]
pub struct NetlistParse {
    /// Successfully parsed elements, in input order
    pub elements: Vec<Element>,
    /// Number of segments found in the input
    pub attempted: usize,
    /// Problems encountered along the way
    pub diagnostics: Vec<Diagnostic>,
}

impl NetlistParse {
    /// Number of segments that produced an element.
    pub fn recognized(&self) -> usize {
        self.elements.len()
    }

    /// The parse succeeded overall iff at least one element was produced.
    pub fn is_success(&self) -> bool {
        !self.elements.is_empty()
    }

    /// Convert into a [`Circuit`], failing when nothing was recognized.
    pub fn into_circuit(self) -> Result<Circuit> {
        if self.elements.is_empty() {
            return Err(NetsketchError::EmptyNetlist {
                attempted: self.attempted,
            });
        }
        Ok(Circuit::from_elements(self.elements))
    }
}

/// Parse a netlist line into elements plus diagnostics.
pub fn parse(input: &str) -> NetlistParse {
    let mut report = NetlistParse::default();

    for segment in Scanner::new(input) {
        report.attempted += 1;
        match parse_segment(&segment, &mut report.diagnostics) {
            SegmentOutcome::Parsed(element) => report.elements.push(element),
            SegmentOutcome::Skipped(diagnostic) => {
                log::warn!("{diagnostic}");
                report.diagnostics.push(diagnostic);
            }
        }
    }

    report
}

/// Interpret one raw segment.
///
/// Value problems are pushed straight into `diagnostics` because the element
/// is still created; skip-level problems travel in the returned outcome.
fn parse_segment(segment: &Segment<'_>, diagnostics: &mut Vec<Diagnostic>) -> SegmentOutcome {
    let Some((id, node1, node2)) = parse_triple(segment.triple) else {
        return SegmentOutcome::Skipped(Diagnostic::MalformedTriple {
            offset: segment.offset,
            triple: segment.triple.to_string(),
        });
    };

    let kind_token = segment.kind_text.trim();
    if kind_token.is_empty() {
        return SegmentOutcome::Skipped(Diagnostic::MissingType {
            offset: segment.offset,
        });
    }
    let kind = ElementKind::classify(kind_token);

    let element = Element {
        id: ElementId(id),
        node1: NodeId(node1),
        node2: NodeId(node2),
        kind,
        value: None,
    };

    let value = segment.value_text.map(|raw| {
        raw.trim().parse::<f64>().unwrap_or_else(|_| {
            let diagnostic = Diagnostic::BadValue {
                label: element.label(),
                text: raw.trim().to_string(),
            };
            log::warn!("{diagnostic}");
            diagnostics.push(diagnostic);
            0.0
        })
    });

    SegmentOutcome::Parsed(Element { value, ..element })
}

/// Split a triple into (id, node1, node2) digits.
fn parse_triple(triple: &str) -> Option<(u8, u8, u8)> {
    let mut digits = triple.chars().map(|ch| ch.to_digit(10));
    let id = digits.next()??;
    let node1 = digits.next()??;
    let node2 = digits.next()??;
    Some((id as u8, node1 as u8, node2 as u8))
}
