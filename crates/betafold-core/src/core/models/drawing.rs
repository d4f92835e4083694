use super::color::Color;
use nalgebra::Point2;
use serde::Serialize;

/// One drawing operation against a square pixel surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum DrawInstruction {
    Background {
        width: f64,
        height: f64,
        color: Color,
    },
    GridLine {
        from: Point2<f64>,
        to: Point2<f64>,
        color: Color,
        line_width: f64,
    },
    Dot {
        x: f64,
        y: f64,
        size: f64,
        color: Color,
    },
    Diagonal {
        from: Point2<f64>,
        to: Point2<f64>,
        color: Color,
        line_width: f64,
    },
}

/// A single residue's slice of the structure ribbon, positioned in percent of the full strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RibbonBand {
    pub symbol: char,
    pub offset_percent: f64,
    pub width_percent: f64,
    pub color: Color,
}
