use super::structure::SecondaryStructure;
use nalgebra::Point2;
use serde::Serialize;

/// One cubic Bézier piece of a path, starting where the previous piece ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicBezier {
    pub control1: Point2<f64>,
    pub control2: Point2<f64>,
    pub end: Point2<f64>,
}

/// The drawable outline of a topology shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Outline {
    /// Filled rectangle spanning the shape bounds with rounded corners.
    RoundedRect { corner_radius: f64 },
    /// Filled polygon: body corners, the trailing tip, then back along the bottom edge.
    Arrow { points: [Point2<f64>; 5] },
    /// Stroked, unfilled path.
    Wave {
        start: Point2<f64>,
        curves: Vec<CubicBezier>,
    },
}

/// Absolute render geometry for a single topology segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeGeometry {
    pub kind: SecondaryStructure,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub label_anchor: Point2<f64>, // Horizontal center and text baseline
    pub outline: Outline,
}

/// A complete single-lane topology diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyLayout {
    pub shapes: Vec<ShapeGeometry>,
    pub total_width: f64,
    pub height: f64,
}
