//! Circuit elements and their classification.

use std::fmt;

use super::types::{ElementId, NodeId};

/// Element kinds supported by the netlist grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Resistor
    Resistor,
    /// Inductor
    Inductor,
    /// Capacitor
    Capacitor,
    /// Voltage source
    VoltageSource,
    /// Current source
    CurrentSource,
}

/// A single classification rule: the token matches if it contains any of the
/// needles (after uppercasing).
struct Rule {
    needles: &'static [&'static str],
    kind: ElementKind,
}

/// Ordered classification table, first match wins.
///
/// Source abbreviations are accepted in both Cyrillic ("ИН" voltage source,
/// "ИТ" current source) and Latin (`U`, `I`) spellings; the source rules
/// rank above the passive-element letters so that a token like "CURL" still
/// reads as a voltage source.
const CLASSIFIER_RULES: &[Rule] = &[
    Rule {
        needles: &["ИН", "U"],
        kind: ElementKind::VoltageSource,
    },
    Rule {
        needles: &["ИТ", "I"],
        kind: ElementKind::CurrentSource,
    },
    Rule {
        needles: &["R"],
        kind: ElementKind::Resistor,
    },
    Rule {
        needles: &["L"],
        kind: ElementKind::Inductor,
    },
    Rule {
        needles: &["C"],
        kind: ElementKind::Capacitor,
    },
];

impl ElementKind {
    /// Classify a free-form type token.
    ///
    /// Total and case-insensitive: every input resolves to a kind, and a
    /// token matching no rule degrades to [`ElementKind::Resistor`] rather
    /// than failing. The grammar prefers drawing something over rejecting
    /// the line.
    pub fn classify(token: &str) -> Self {
        let upper = token.to_uppercase();
        for rule in CLASSIFIER_RULES {
            if rule.needles.iter().any(|needle| upper.contains(needle)) {
                return rule.kind;
            }
        }
        ElementKind::Resistor
    }

    /// Schematic letter used in element labels.
    pub fn letter(&self) -> char {
        match self {
            ElementKind::Resistor => 'R',
            ElementKind::Inductor => 'L',
            ElementKind::Capacitor => 'C',
            ElementKind::VoltageSource => 'U',
            ElementKind::CurrentSource => 'I',
        }
    }

    /// Unit suffix appended to the displayed value.
    pub fn unit(&self) -> &'static str {
        match self {
            ElementKind::Resistor => "Ω",
            ElementKind::Inductor => "H",
            ElementKind::Capacitor => "F",
            ElementKind::VoltageSource => "V",
            ElementKind::CurrentSource => "A",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One netlist entry: an element connecting a pair of nodes.
///
/// Created once during parsing and immutable thereafter. `value` is `None`
/// when the netlist gave no `=` clause, which is distinct from `Some(0.0)`
/// (a value that failed to parse).
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element identifier from the netlist
    pub id: ElementId,
    /// First connected node
    pub node1: NodeId,
    /// Second connected node
    pub node2: NodeId,
    /// Element kind
    pub kind: ElementKind,
    /// Magnitude in the element's natural unit, if specified
    pub value: Option<f64>,
}

impl Element {
    /// Schematic label, e.g. `R2` or `U1`.
    pub fn label(&self) -> String {
        format!("{}{}", self.kind.letter(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ИН и", ElementKind::VoltageSource)]
    #[case("ин", ElementKind::VoltageSource)]
    #[case("U2", ElementKind::VoltageSource)]
    #[case("ИТ і6", ElementKind::CurrentSource)]
    #[case("i4", ElementKind::CurrentSource)]
    #[case("R2", ElementKind::Resistor)]
    #[case("r5", ElementKind::Resistor)]
    #[case("L3", ElementKind::Inductor)]
    #[case("C1", ElementKind::Capacitor)]
    fn classifies_known_tokens(#[case] token: &str, #[case] expected: ElementKind) {
        assert_eq!(ElementKind::classify(token), expected);
    }

    #[rstest]
    #[case("X", ElementKind::Resistor)]
    #[case("", ElementKind::Resistor)]
    #[case("42", ElementKind::Resistor)]
    fn unknown_tokens_default_to_resistor(#[case] token: &str, #[case] expected: ElementKind) {
        assert_eq!(ElementKind::classify(token), expected);
    }

    #[test]
    fn source_rules_outrank_passive_letters() {
        // Contains C, U, R and L, but the voltage-source rule is checked first.
        assert_eq!(ElementKind::classify("CURL"), ElementKind::VoltageSource);
        // Contains I and R; current source wins.
        assert_eq!(ElementKind::classify("IR"), ElementKind::CurrentSource);
    }

    #[test]
    fn labels_combine_letter_and_id() {
        let el = Element {
            id: ElementId(2),
            node1: NodeId(1),
            node2: NodeId(2),
            kind: ElementKind::Resistor,
            value: Some(2.0),
        };
        assert_eq!(el.label(), "R2");
    }
}
