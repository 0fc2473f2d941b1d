//! Netsketch - Circuit Schematic Renderer
//!
//! Parses a compact netlist line and renders it as an SVG schematic.
//!
//! # Usage
//!
//! ```bash
//! netsketch "114-ИН=2;212-R2=2;324-L3=2" -o schematic.svg
//! ```
//!
//! Run without arguments for an interactive prompt.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use netsketch::{
    error::{NetsketchError, Result},
    netlist, render, SvgRenderer,
};

/// Circuit schematic renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Netlist line, e.g. "114-ИН=2;212-R2=2". Read from stdin when omitted.
    #[arg(value_name = "NETLIST")]
    netlist: Option<String>,

    /// Output SVG file
    #[arg(short, long, default_value = "schematic.svg")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let input = match args.netlist {
        Some(line) => line,
        None => prompt()?,
    };

    // Parse the netlist
    let report = netlist::parse(&input);
    println!(
        "Recognized {} of {} element(s)",
        report.recognized(),
        report.attempted
    );

    // Build the circuit; a parse with no elements at all aborts here
    let circuit = report.into_circuit()?;

    // Render
    let mut svg = SvgRenderer::new();
    render::draw_schematic(&circuit, &mut svg)?;

    std::fs::write(&args.output, svg.finish())
        .map_err(|e| NetsketchError::write(args.output.display().to_string(), e))?;
    println!("Wrote {}", args.output.display());

    Ok(())
}

/// Interactive prompt: banner, format reminder, one line of input.
fn prompt() -> Result<String> {
    println!("=== Circuit schematic renderer ===");
    println!("Describe the circuit, elements separated by semicolons.");
    println!("Format: [id][node1][node2] - type = value");
    println!("Example: 114 - ИН и = 2; 212 - R2 = 2; 324 - L3 = 2");
    print!("\n> ");
    std::io::stdout()
        .flush()
        .map_err(|e| NetsketchError::ReadError { source: e })?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| NetsketchError::ReadError { source: e })?;
    Ok(line)
}
