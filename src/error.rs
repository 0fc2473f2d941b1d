//! Error types for the netsketch schematic renderer.
//!
//! This module provides a unified error type [`NetsketchError`] covering the
//! failures that abort a run. Per-segment parse problems are deliberately not
//! errors; they are recovered locally and reported as
//! [`Diagnostic`](crate::netlist::Diagnostic) values in the parse report.

use thiserror::Error;

/// Result type alias using [`NetsketchError`].
pub type Result<T> = std::result::Result<T, NetsketchError>;

/// Unified error type for all netsketch operations.
#[derive(Error, Debug)]
pub enum NetsketchError {
    /// The netlist input produced no elements at all.
    #[error("no elements recognized in netlist input ({attempted} segment(s) attempted)")]
    EmptyNetlist { attempted: usize },

    /// Layout was requested for a circuit without elements.
    #[error("circuit has no elements to lay out")]
    EmptyCircuit,

    /// Error writing the rendered schematic
    #[error("failed to write schematic '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error reading the netlist input
    #[error("failed to read netlist input: {source}")]
    ReadError {
        #[source]
        source: std::io::Error,
    },

    /// Error emitting into a render buffer
    #[error("render output error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl NetsketchError {
    /// Create a schematic write error.
    pub fn write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }
}
