use super::config::LayoutConfig;
use crate::core::models::geometry::{CubicBezier, Outline, ShapeGeometry, TopologyLayout};
use crate::core::models::segment::TopologySegment;
use crate::core::models::structure::SecondaryStructure;
use nalgebra::Point2;
use tracing::instrument;

/// Places topology segments left to right on a single horizontal lane.
pub struct TopologyLayoutEngine<'a> {
    config: &'a LayoutConfig,
}

impl<'a> TopologyLayoutEngine<'a> {
    pub fn new(config: &'a LayoutConfig) -> Self {
        Self { config }
    }

    /// Lays out `segments` in order; the i-th shape belongs to the i-th segment.
    #[instrument(level = "debug", skip_all, name = "topology_layout", fields(segments = segments.len()))]
    pub fn layout(&self, segments: &[TopologySegment], lane_height: f64) -> TopologyLayout {
        let lane_y = lane_height / 2.0;
        let mut cursor = self.config.left_padding;

        let shapes = segments
            .iter()
            .map(|segment| {
                let width = self.segment_width(segment);
                let shape = self.place(segment, cursor, width, lane_y);
                cursor += width + self.config.gap;
                shape
            })
            .collect();

        TopologyLayout {
            shapes,
            total_width: self
                .config
                .min_total_width
                .max(cursor + self.config.right_padding),
            height: lane_height,
        }
    }

    pub fn segment_width(&self, segment: &TopologySegment) -> f64 {
        self.config
            .min_width
            .max(segment.length as f64 * self.config.unit_width)
    }

    fn place(&self, segment: &TopologySegment, x: f64, width: f64, lane_y: f64) -> ShapeGeometry {
        let center_x = x + width / 2.0;
        let (y, height, outline, label_y) = match segment.kind {
            SecondaryStructure::Helix => {
                let height = self.config.helix_height;
                (
                    lane_y - height / 2.0,
                    height,
                    Outline::RoundedRect {
                        corner_radius: height / 2.0,
                    },
                    lane_y + self.config.label_baseline_offset,
                )
            }
            SecondaryStructure::Sheet => {
                let height = self.config.sheet_height;
                (
                    lane_y - height / 2.0,
                    height,
                    self.arrow(x, width, lane_y),
                    lane_y + self.config.label_baseline_offset,
                )
            }
            SecondaryStructure::Coil => {
                let amplitude = self.config.coil_amplitude;
                (
                    lane_y - amplitude,
                    2.0 * amplitude,
                    self.wave(x, width, lane_y),
                    lane_y - self.config.coil_label_offset,
                )
            }
        };

        ShapeGeometry {
            kind: segment.kind,
            x,
            y,
            width,
            height,
            label: segment.label.clone(),
            label_anchor: Point2::new(center_x, label_y),
            outline,
        }
    }

    fn arrow(&self, x: f64, width: f64, lane_y: f64) -> Outline {
        let head = self
            .config
            .arrow_head_max_width
            .min(self.config.arrow_head_ratio * width);
        let body = width - head;
        let half = self.config.sheet_height / 2.0;
        let (top, bottom) = (lane_y - half, lane_y + half);

        Outline::Arrow {
            points: [
                Point2::new(x, top),
                Point2::new(x + body, top),
                Point2::new(x + width, lane_y),
                Point2::new(x + body, bottom),
                Point2::new(x, bottom),
            ],
        }
    }

    fn wave(&self, x: f64, width: f64, lane_y: f64) -> Outline {
        let count = self
            .config
            .min_coil_waves
            .max((width / self.config.coil_wavelength).floor() as usize);
        let dx = width / count as f64;
        let amplitude = self.config.coil_amplitude;

        let curves = (0..count)
            .map(|i| {
                let from = x + i as f64 * dx;
                CubicBezier {
                    control1: Point2::new(from + dx / 3.0, lane_y - amplitude),
                    control2: Point2::new(from + 2.0 * dx / 3.0, lane_y + amplitude),
                    end: Point2::new(from + dx, lane_y),
                }
            })
            .collect();

        Outline::Wave {
            start: Point2::new(x, lane_y),
            curves,
        }
    }
}
