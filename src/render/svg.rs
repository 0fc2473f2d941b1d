//! SVG backend for the symbol renderer.

use std::fmt::Write as _;

use super::{Symbol, SymbolRenderer};
use crate::circuit::{ElementKind, NodeId};
use crate::error::Result;
use crate::layout::Point;

/// Pixels per schematic unit.
const SCALE: f64 = 40.0;
/// Wire and outline stroke width in pixels.
const STROKE: f64 = 2.5;
/// Margin around the drawing, in schematic units.
const MARGIN: f64 = 1.5;

/// Source circle radius in schematic units.
const SOURCE_RADIUS: f64 = 0.5;
/// Resistor body size in schematic units.
const RESISTOR_W: f64 = 1.0;
const RESISTOR_H: f64 = 0.4;
/// Capacitor plate gap and height in schematic units.
const PLATE_GAP: f64 = 0.2;
const PLATE_H: f64 = 0.6;
/// Inductor loop width and height in schematic units; four loops per symbol.
const LOOP_W: f64 = 0.25;
const LOOP_H: f64 = 0.4;
const LOOP_COUNT: usize = 4;
/// Perpendicular distance from symbol midpoint to its text.
const TEXT_OFFSET: f64 = 0.6;
const SOURCE_TEXT_OFFSET: f64 = 0.8;

/// Collects SVG primitives into a string buffer.
///
/// Schematic coordinates have y growing upward; the renderer flips to SVG
/// screen coordinates at draw time and tracks the bounding box so
/// [`finish`](SvgRenderer::finish) can emit a tight viewBox.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    body: String,
    bounds: Option<[f64; 4]>,
}

impl SvgRenderer {
    /// Create an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish rendering and emit the complete SVG document.
    pub fn finish(self) -> String {
        let [min_x, min_y, max_x, max_y] = self.bounds.unwrap_or([0.0, 0.0, SCALE, SCALE]);
        let pad = MARGIN * SCALE;
        let (x, y) = (min_x - pad, min_y - pad);
        let (w, h) = (max_x - min_x + 2.0 * pad, max_y - min_y + 2.0 * pad);
        format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                "\n",
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.1} {:.1} {:.1} {:.1}" "#,
                r#"font-family="sans-serif">"#,
                "\n",
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="white"/>"#,
                "\n{}</svg>\n"
            ),
            x, y, w, h, x, y, w, h, self.body
        )
    }

    /// Screen coordinates of a schematic point.
    fn screen(&self, p: Point) -> (f64, f64) {
        (p.x * SCALE, -p.y * SCALE)
    }

    /// Grow the bounding box to cover a screen-space point with padding.
    fn cover(&mut self, sx: f64, sy: f64, pad: f64) {
        let bounds = self.bounds.get_or_insert([sx, sy, sx, sy]);
        bounds[0] = bounds[0].min(sx - pad);
        bounds[1] = bounds[1].min(sy - pad);
        bounds[2] = bounds[2].max(sx + pad);
        bounds[3] = bounds[3].max(sy + pad);
    }

    /// Open a group translated to the symbol midpoint and rotated to its
    /// axis. Must be paired with [`close_group`](Self::close_group).
    fn open_group(&mut self, symbol: &Symbol) -> Result<()> {
        let (sx, sy) = self.screen(symbol.at);
        self.cover(sx, sy, 1.2 * SCALE);
        writeln!(
            self.body,
            r#"<g transform="translate({sx:.2} {sy:.2}) rotate({:.2})">"#,
            -symbol.angle.to_degrees()
        )?;
        Ok(())
    }

    fn close_group(&mut self) -> Result<()> {
        writeln!(self.body, "</g>")?;
        Ok(())
    }

    /// Label above and value below the symbol, perpendicular to its axis.
    ///
    /// Text is never rotated with the symbol; it is placed in schematic
    /// space so vertical elements read left to right too.
    fn text(&mut self, symbol: &Symbol, kind: ElementKind, offset: f64) -> Result<()> {
        let (dx, dy) = (-symbol.angle.sin() * offset, symbol.angle.cos() * offset);
        let label_at = Point::new(symbol.at.x + dx, symbol.at.y + dy);
        let (lx, ly) = self.screen(label_at);
        writeln!(
            self.body,
            r#"<text x="{lx:.2}" y="{ly:.2}" text-anchor="middle" font-size="13" font-weight="bold">{}</text>"#,
            symbol.label
        )?;

        if let Some(value) = symbol.value {
            let value_at = Point::new(symbol.at.x - dx, symbol.at.y - dy);
            let (vx, vy) = self.screen(value_at);
            writeln!(
                self.body,
                r#"<text x="{vx:.2}" y="{vy:.2}" text-anchor="middle" dominant-baseline="hanging" font-size="11" fill="blue">{value}{}</text>"#,
                kind.unit()
            )?;
        }
        Ok(())
    }

    /// Circle body shared by both source symbols.
    fn source_circle(&mut self) -> Result<()> {
        writeln!(
            self.body,
            r#"<circle cx="0" cy="0" r="{:.1}" fill="white" stroke="black" stroke-width="{STROKE}"/>"#,
            SOURCE_RADIUS * SCALE
        )?;
        Ok(())
    }
}

impl SymbolRenderer for SvgRenderer {
    fn wire(&mut self, from: Point, to: Point) -> Result<()> {
        let (x1, y1) = self.screen(from);
        let (x2, y2) = self.screen(to);
        self.cover(x1, y1, 0.0);
        self.cover(x2, y2, 0.0);
        writeln!(
            self.body,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="black" stroke-width="{STROKE}" stroke-linecap="round"/>"#
        )?;
        Ok(())
    }

    fn node(&mut self, id: NodeId, at: Point) -> Result<()> {
        let (sx, sy) = self.screen(at);
        self.cover(sx, sy, 1.0 * SCALE);
        writeln!(
            self.body,
            r#"<circle cx="{sx:.2}" cy="{sy:.2}" r="{:.1}" fill="black"/>"#,
            0.18 * SCALE
        )?;

        // Circled id label up and to the left of the marker.
        let (lx, ly) = (sx - 0.6 * SCALE, sy - 0.6 * SCALE);
        writeln!(
            self.body,
            r#"<circle cx="{lx:.2}" cy="{ly:.2}" r="{:.1}" fill="white" stroke="red" stroke-width="{STROKE}"/>"#,
            0.3 * SCALE
        )?;
        writeln!(
            self.body,
            r#"<text x="{lx:.2}" y="{ly:.2}" text-anchor="middle" dominant-baseline="central" font-size="12" font-weight="bold" fill="red">{id}</text>"#
        )?;
        Ok(())
    }

    fn resistor(&mut self, symbol: &Symbol) -> Result<()> {
        self.open_group(symbol)?;
        writeln!(
            self.body,
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="2" fill="white" stroke="black" stroke-width="{STROKE}"/>"#,
            -RESISTOR_W / 2.0 * SCALE,
            -RESISTOR_H / 2.0 * SCALE,
            RESISTOR_W * SCALE,
            RESISTOR_H * SCALE
        )?;
        self.close_group()?;
        self.text(symbol, ElementKind::Resistor, TEXT_OFFSET)
    }

    fn inductor(&mut self, symbol: &Symbol) -> Result<()> {
        self.open_group(symbol)?;
        // Four upper semicircle loops along the axis.
        let rx = LOOP_W / 2.0 * SCALE;
        let ry = LOOP_H / 2.0 * SCALE;
        let start = -(LOOP_COUNT as f64) * LOOP_W / 2.0 * SCALE;
        let mut path = format!("M {start:.1} 0");
        for i in 0..LOOP_COUNT {
            let end = start + (i + 1) as f64 * LOOP_W * SCALE;
            write!(path, " A {rx:.1} {ry:.1} 0 0 1 {end:.1} 0")?;
        }
        writeln!(
            self.body,
            r#"<path d="{path}" fill="none" stroke="black" stroke-width="{STROKE}"/>"#
        )?;
        self.close_group()?;
        self.text(symbol, ElementKind::Inductor, TEXT_OFFSET)
    }

    fn capacitor(&mut self, symbol: &Symbol) -> Result<()> {
        self.open_group(symbol)?;
        let half_gap = PLATE_GAP / 2.0 * SCALE;
        let half_plate = PLATE_H / 2.0 * SCALE;
        for x in [-half_gap, half_gap] {
            writeln!(
                self.body,
                r#"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="black" stroke-width="3"/>"#,
                -half_plate, half_plate
            )?;
        }
        self.close_group()?;
        self.text(symbol, ElementKind::Capacitor, TEXT_OFFSET)
    }

    fn voltage_source(&mut self, symbol: &Symbol) -> Result<()> {
        self.open_group(symbol)?;
        self.source_circle()?;
        let arm = 0.18 * SCALE;
        writeln!(
            self.body,
            r#"<path d="M {:.1} 0 H {arm:.1} M 0 {:.1} V {arm:.1}" stroke="black" stroke-width="{STROKE}"/>"#,
            -arm, -arm
        )?;
        self.close_group()?;
        self.text(symbol, ElementKind::VoltageSource, SOURCE_TEXT_OFFSET)
    }

    fn current_source(&mut self, symbol: &Symbol) -> Result<()> {
        self.open_group(symbol)?;
        self.source_circle()?;
        // Arrow along the symbol axis.
        let tip = 0.28 * SCALE;
        let barb = 0.1 * SCALE;
        writeln!(
            self.body,
            r#"<path d="M {:.1} 0 H {tip:.1} M {:.1} {:.1} L {tip:.1} 0 L {:.1} {barb:.1}" fill="none" stroke="black" stroke-width="{STROKE}"/>"#,
            -tip,
            tip - barb,
            -barb,
            tip - barb
        )?;
        self.close_group()?;
        self.text(symbol, ElementKind::CurrentSource, SOURCE_TEXT_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlist;
    use crate::render::draw_schematic;

    fn render(input: &str) -> String {
        let circuit = netlist::parse(input).into_circuit().unwrap();
        let mut svg = SvgRenderer::new();
        draw_schematic(&circuit, &mut svg).unwrap();
        svg.finish()
    }

    #[test]
    fn renders_the_three_element_example() {
        let svg = render("114-ИН=2;212-R2=2;324-L3=2");

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("viewBox"));
        // Element labels and values with unit suffixes.
        for needle in ["U1", "R2", "L3", "2V", "2Ω", "2H"] {
            assert!(svg.contains(needle), "missing {needle}");
        }
        // Node markers for all four nodes.
        for node in ["1", "2", "3", "4"] {
            assert!(svg.contains(&format!(">{node}</text>")), "missing node {node}");
        }
    }

    #[test]
    fn elements_without_values_render_labels_only() {
        let svg = render("112-C1");
        assert!(svg.contains("C1"));
        assert!(!svg.contains("fill=\"blue\""));
    }

    #[test]
    fn empty_renderer_still_produces_a_document() {
        let svg = SvgRenderer::new().finish();
        assert!(svg.contains("<svg"));
        assert!(svg.ends_with("</svg>\n"));
    }
}
