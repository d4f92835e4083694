use super::config::RasterConfig;
use crate::core::models::contact::ContactMatrix;
pub use crate::core::models::drawing::DrawInstruction;
use nalgebra::Point2;
use tracing::instrument;

/// Turns a contact matrix into an ordered list of draw instructions.
///
/// Output order is always background, grid lines, dots, diagonal.
pub struct ContactRasterRenderer<'a> {
    config: &'a RasterConfig,
}

impl<'a> ContactRasterRenderer<'a> {
    pub fn new(config: &'a RasterConfig) -> Self {
        Self { config }
    }

    /// Renders with the configured canvas and dot size.
    pub fn render_default(&self, matrix: Option<&ContactMatrix>) -> Vec<DrawInstruction> {
        self.render(matrix, self.config.canvas_size, self.config.dot_size)
    }

    /// Returns an empty list for an absent or zero-sized matrix.
    #[instrument(level = "debug", skip_all, name = "contact_raster")]
    pub fn render(
        &self,
        matrix: Option<&ContactMatrix>,
        canvas_size: f64,
        dot_size: f64,
    ) -> Vec<DrawInstruction> {
        let Some(matrix) = matrix.filter(|m| !m.is_empty()) else {
            return Vec::new();
        };
        let n = matrix.size();
        let scale = canvas_size / n as f64;
        let palette = &self.config.palette;
        let line_width = self.config.line_width;

        let mut instructions = Vec::with_capacity(matrix.contact_count() + 2 * n + 2);
        instructions.push(DrawInstruction::Background {
            width: canvas_size,
            height: canvas_size,
            color: palette.background,
        });

        let step = (n / self.config.grid_divisions.max(1)).max(1);
        for i in (0..=n).step_by(step) {
            let p = (i as f64 * scale).floor() + 0.5;
            instructions.push(DrawInstruction::GridLine {
                from: Point2::new(p, 0.0),
                to: Point2::new(p, canvas_size),
                color: palette.grid,
                line_width,
            });
            instructions.push(DrawInstruction::GridLine {
                from: Point2::new(0.0, p),
                to: Point2::new(canvas_size, p),
                color: palette.grid,
                line_width,
            });
        }

        instructions.extend(matrix.contacts().map(|(row, col)| DrawInstruction::Dot {
            x: col as f64 * scale,
            y: row as f64 * scale,
            size: dot_size,
            color: palette.dot,
        }));

        instructions.push(DrawInstruction::Diagonal {
            from: Point2::new(0.0, 0.0),
            to: Point2::new(canvas_size, canvas_size),
            color: palette.diagonal,
            line_width,
        });
        instructions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(instruction: &DrawInstruction) -> u8 {
        match instruction {
            DrawInstruction::Background { .. } => 0,
            DrawInstruction::GridLine { .. } => 1,
            DrawInstruction::Dot { .. } => 2,
            DrawInstruction::Diagonal { .. } => 3,
        }
    }

    fn dots(instructions: &[DrawInstruction]) -> Vec<(f64, f64)> {
        instructions
            .iter()
            .filter_map(|i| match i {
                DrawInstruction::Dot { x, y, .. } => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn single_contact_renders_one_dot_plus_grid_and_diagonal() {
        let config = RasterConfig::default();
        let matrix = ContactMatrix::from_rows(vec![
            vec![false, false, true],
            vec![false, false, false],
            vec![false, false, false],
        ])
        .unwrap();

        let out = ContactRasterRenderer::new(&config).render(Some(&matrix), 240.0, 2.0);

        assert_eq!(dots(&out), vec![(160.0, 0.0)]);
        // step max(1, 3/12) = 1, boundaries 0..=3, two lines each
        let grid = out.iter().filter(|i| rank(i) == 1).count();
        assert_eq!(grid, 8);
        assert_eq!(out.len(), 1 + 8 + 1 + 1);
        assert!(matches!(out.first(), Some(DrawInstruction::Background { .. })));
        assert!(matches!(out.last(), Some(DrawInstruction::Diagonal { .. })));
    }

    #[test]
    fn empty_or_absent_matrix_renders_nothing() {
        let config = RasterConfig::default();
        let renderer = ContactRasterRenderer::new(&config);
        assert!(renderer.render(None, 240.0, 2.0).is_empty());
        assert!(renderer.render(Some(&ContactMatrix::new(0)), 240.0, 2.0).is_empty());
    }

    #[test]
    fn instructions_follow_background_grid_dots_diagonal_order() {
        let config = RasterConfig::default();
        let mut matrix = ContactMatrix::new(30);
        for i in 0..30 {
            matrix.set(i, (i * 7) % 30, true);
        }
        let out = ContactRasterRenderer::new(&config).render_default(Some(&matrix));
        let ranks: Vec<_> = out.iter().map(rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
        assert_eq!(dots(&out).len(), 30);
    }

    #[test]
    fn grid_is_coarse_for_large_matrices() {
        let config = RasterConfig::default();
        let matrix = ContactMatrix::new(120);
        let out = ContactRasterRenderer::new(&config).render(Some(&matrix), 240.0, 2.0);
        // step 10, boundaries 0, 10, ..., 120
        let positions: Vec<_> = out
            .iter()
            .filter_map(|i| match i {
                DrawInstruction::GridLine { from, .. } if from.y == 0.0 => Some(from.x),
                _ => None,
            })
            .collect();
        assert_eq!(positions.len(), 13);
        assert_eq!(positions[0], 0.5);
        assert_eq!(positions[1], 20.5);
        assert_eq!(positions[12], 240.5);
    }

    #[test]
    fn dots_use_fractional_scale_and_requested_size() {
        let config = RasterConfig::default();
        let mut matrix = ContactMatrix::new(7);
        matrix.set(6, 1, true);
        let out = ContactRasterRenderer::new(&config).render(Some(&matrix), 70.0, 3.0);
        let dot = out.iter().find(|i| rank(i) == 2).unwrap();
        assert_eq!(
            *dot,
            DrawInstruction::Dot {
                x: 10.0,
                y: 60.0,
                size: 3.0,
                color: config.palette.dot,
            }
        );
    }

    #[test]
    fn asymmetric_matrices_are_plotted_as_given() {
        let config = RasterConfig::default();
        let matrix = ContactMatrix::from_rows(vec![vec![false, true], vec![false, false]]).unwrap();
        let out = ContactRasterRenderer::new(&config).render(Some(&matrix), 100.0, 2.0);
        assert_eq!(dots(&out), vec![(50.0, 0.0)]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let config = RasterConfig::default();
        let renderer = ContactRasterRenderer::new(&config);
        let mut matrix = ContactMatrix::new(5);
        matrix.set(1, 3, true);
        matrix.set(3, 1, true);
        assert_eq!(
            renderer.render(Some(&matrix), 240.0, 2.0),
            renderer.render(Some(&matrix), 240.0, 2.0)
        );
    }
}
