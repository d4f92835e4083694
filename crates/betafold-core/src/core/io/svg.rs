//! SVG serialization of the renderer outputs.
//!
//! All writers emit a standalone `<svg>` document and never consult global state, so the same
//! inputs always produce byte-identical output.

use crate::core::models::color::Color;
use crate::core::models::drawing::{DrawInstruction, RibbonBand};
use crate::core::models::geometry::{Outline, ShapeGeometry, TopologyLayout};
use crate::core::models::structure::SecondaryStructure;
use std::io::{self, Write};

/// Paint settings for the topology diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyStyle {
    pub background_start: Color,
    pub background_end: Color,
    pub background_radius: f64,
    pub helix_fill: Color,
    pub helix_opacity: f64,
    pub sheet_fill: Color,
    pub sheet_opacity: f64,
    pub coil_stroke: Color,
    pub coil_stroke_width: f64,
    pub label_fill: Color,
    pub coil_label_fill: Color,
    pub font_size: f64,
    pub font_weight: u16,
}

impl Default for TopologyStyle {
    fn default() -> Self {
        Self {
            background_start: Color::rgb(0x0b, 0x12, 0x20),
            background_end: Color::rgb(0x0a, 0x0a, 0x0a),
            background_radius: 8.0,
            helix_fill: Color::rgb(0xe8, 0x79, 0xf9),
            helix_opacity: 0.9,
            sheet_fill: Color::rgb(0x34, 0xd3, 0x99),
            sheet_opacity: 0.95,
            coil_stroke: Color::rgb(0x94, 0xa3, 0xb8),
            coil_stroke_width: 3.0,
            label_fill: Color::rgb(0x0b, 0x0b, 0x0b),
            coil_label_fill: Color::rgb(0xcb, 0xd5, 0xe1),
            font_size: 12.0,
            font_weight: 600,
        }
    }
}

pub fn write_topology(
    layout: &TopologyLayout,
    style: &TopologyStyle,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" role="img" aria-label="2D topology diagram">"#,
        layout.total_width, layout.height
    )?;
    writeln!(
        writer,
        r#"  <defs><linearGradient id="bgGrad" x1="0" x2="1"><stop offset="0%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></linearGradient></defs>"#,
        style.background_start, style.background_end
    )?;
    writeln!(
        writer,
        r#"  <rect x="0" y="0" width="100%" height="100%" fill="url(#bgGrad)" rx="{}"/>"#,
        style.background_radius
    )?;
    writeln!(writer, "  <g>")?;
    for shape in &layout.shapes {
        write_shape(shape, style, writer)?;
    }
    writeln!(writer, "  </g>")?;
    writeln!(writer, "</svg>")
}

fn write_shape(
    shape: &ShapeGeometry,
    style: &TopologyStyle,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer, "    <g>")?;
    match &shape.outline {
        Outline::RoundedRect { corner_radius } => writeln!(
            writer,
            r#"      <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" opacity="{}"/>"#,
            shape.x,
            shape.y,
            shape.width,
            shape.height,
            corner_radius,
            style.helix_fill,
            style.helix_opacity
        )?,
        Outline::Arrow { points } => {
            let points = points
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                writer,
                r#"      <polygon points="{}" fill="{}" opacity="{}"/>"#,
                points, style.sheet_fill, style.sheet_opacity
            )?
        }
        Outline::Wave { start, curves } => {
            let mut d = format!("M {} {}", start.x, start.y);
            for curve in curves {
                d.push_str(&format!(
                    " C {} {}, {} {}, {} {}",
                    curve.control1.x,
                    curve.control1.y,
                    curve.control2.x,
                    curve.control2.y,
                    curve.end.x,
                    curve.end.y
                ));
            }
            writeln!(
                writer,
                r#"      <path d="{}" stroke="{}" stroke-width="{}" fill="none"/>"#,
                d, style.coil_stroke, style.coil_stroke_width
            )?
        }
    }
    let label_fill = match shape.kind {
        SecondaryStructure::Coil => style.coil_label_fill,
        _ => style.label_fill,
    };
    writeln!(
        writer,
        r#"      <text x="{}" y="{}" text-anchor="middle" font-size="{}" fill="{}" font-weight="{}">{}</text>"#,
        shape.label_anchor.x,
        shape.label_anchor.y,
        style.font_size,
        label_fill,
        style.font_weight,
        escape(&shape.label)
    )?;
    writeln!(writer, "    </g>")
}

/// Writes the ribbon as a `width`×`height` strip of adjacent rectangles.
pub fn write_ribbon(
    bands: &[RibbonBand],
    width: f64,
    height: f64,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" role="img" aria-label="Secondary structure ribbon">"#
    )?;
    for band in bands {
        writeln!(
            writer,
            r#"  <rect x="{}" y="0" width="{}" height="{}" fill="{}"><title>{}</title></rect>"#,
            band.offset_percent / 100.0 * width,
            band.width_percent / 100.0 * width,
            height,
            band.color,
            band.symbol
        )?;
    }
    writeln!(writer, "</svg>")
}

/// Plays raster instructions onto an SVG surface of side `size`.
pub fn write_contact_map(
    instructions: &[DrawInstruction],
    size: f64,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" role="img" aria-label="Contact map">"#
    )?;
    for instruction in instructions {
        match instruction {
            DrawInstruction::Background {
                width,
                height,
                color,
            } => writeln!(
                writer,
                r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="{color}"/>"#
            )?,
            DrawInstruction::GridLine {
                from,
                to,
                color,
                line_width,
            }
            | DrawInstruction::Diagonal {
                from,
                to,
                color,
                line_width,
            } => writeln!(
                writer,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                from.x, from.y, to.x, to.y, color, line_width
            )?,
            DrawInstruction::Dot { x, y, size, color } => writeln!(
                writer,
                r#"  <rect x="{x}" y="{y}" width="{size}" height="{size}" fill="{color}"/>"#
            )?,
        }
    }
    writeln!(writer, "</svg>")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
