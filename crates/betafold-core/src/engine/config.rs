use crate::core::models::color::Color;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Unknown isoelectric model '{0}'. Expected 'heuristic' or 'titration'")]
    UnknownIsoelectricModel(String),
}

/// Smallest width any topology shape may be drawn with.
pub const MIN_SHAPE_WIDTH: f64 = 18.0;

/// Geometry constants of the single-lane topology diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub lane_height: f64,
    pub left_padding: f64,
    pub right_padding: f64,
    pub gap: f64,
    pub unit_width: f64,
    pub min_width: f64,
    pub min_total_width: f64,
    pub helix_height: f64,
    pub sheet_height: f64,
    pub arrow_head_max_width: f64,
    pub arrow_head_ratio: f64,
    pub coil_amplitude: f64,
    pub coil_wavelength: f64,
    pub min_coil_waves: usize,
    pub label_baseline_offset: f64,
    pub coil_label_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            lane_height: 100.0,
            left_padding: 12.0,
            right_padding: 12.0,
            gap: 16.0,
            unit_width: 8.0,
            min_width: MIN_SHAPE_WIDTH,
            min_total_width: 320.0,
            helix_height: 28.0,
            sheet_height: 24.0,
            arrow_head_max_width: 20.0,
            arrow_head_ratio: 0.35,
            coil_amplitude: 10.0,
            coil_wavelength: 18.0,
            min_coil_waves: 3,
            label_baseline_offset: 4.0,
            coil_label_offset: 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterPalette {
    pub background: Color,
    pub grid: Color,
    pub dot: Color,
    pub diagonal: Color,
}

impl Default for RasterPalette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x0b, 0x0b, 0x0f),
            grid: Color::rgba(255, 255, 255, 0.05),
            dot: Color::rgb(0x22, 0xd3, 0xee),
            diagonal: Color::rgba(255, 255, 255, 0.2),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RasterConfig {
    pub canvas_size: f64,
    pub dot_size: f64,
    pub grid_divisions: usize, // Approximate number of grid cells per axis
    pub line_width: f64,
    pub palette: RasterPalette,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            canvas_size: 240.0,
            dot_size: 2.0,
            grid_divisions: 12,
            line_width: 1.0,
            palette: RasterPalette::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonPalette {
    pub helix: Color,
    pub sheet: Color,
    pub other: Color,
}

impl Default for RibbonPalette {
    fn default() -> Self {
        Self {
            helix: Color::rgb(0xd9, 0x46, 0xef),
            sheet: Color::rgb(0x10, 0xb9, 0x81),
            other: Color::rgb(0x64, 0x74, 0x8b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IsoelectricModel {
    /// Placeholder draw from a uniform range.
    Heuristic { min: f64, max: f64 },
    /// Henderson-Hasselbalch net-charge bisection.
    Titration,
}

impl Default for IsoelectricModel {
    fn default() -> Self {
        Self::Heuristic { min: 4.5, max: 9.5 }
    }
}

impl FromStr for IsoelectricModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "heuristic" | "random" => Ok(Self::default()),
            "titration" | "henderson-hasselbalch" => Ok(Self::Titration),
            _ => Err(ConfigError::UnknownIsoelectricModel(s.to_string())),
        }
    }
}

impl fmt::Display for IsoelectricModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heuristic { .. } => write!(f, "heuristic"),
            Self::Titration => write!(f, "titration"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisConfig {
    pub isoelectric_model: IsoelectricModel,
    pub seed: Option<u64>,
}

/// Settings of the placeholder prediction source.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub seed: Option<u64>,
    pub contact_density: f64,
    pub min_confidence: f64,
    pub max_confidence: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            contact_density: 0.05,
            min_confidence: 60.0,
            max_confidence: 99.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineConfig {
    pub layout: LayoutConfig,
    pub raster: RasterConfig,
    pub ribbon: RibbonPalette,
    pub analysis: AnalysisConfig,
    pub generator: GeneratorConfig,
}

#[derive(Default)]
pub struct PipelineConfigBuilder {
    layout: Option<LayoutConfig>,
    raster: Option<RasterConfig>,
    lane_height: Option<f64>,
    unit_width: Option<f64>,
    canvas_size: Option<f64>,
    dot_size: Option<f64>,
    ribbon: Option<RibbonPalette>,
    isoelectric_model: Option<IsoelectricModel>,
    seed: Option<u64>,
    contact_density: Option<f64>,
}

impl PipelineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = Some(layout);
        self
    }
    pub fn raster(mut self, raster: RasterConfig) -> Self {
        self.raster = Some(raster);
        self
    }
    pub fn lane_height(mut self, height: f64) -> Self {
        self.lane_height = Some(height);
        self
    }
    pub fn unit_width(mut self, width: f64) -> Self {
        self.unit_width = Some(width);
        self
    }
    pub fn canvas_size(mut self, size: f64) -> Self {
        self.canvas_size = Some(size);
        self
    }
    pub fn dot_size(mut self, size: f64) -> Self {
        self.dot_size = Some(size);
        self
    }
    pub fn ribbon(mut self, palette: RibbonPalette) -> Self {
        self.ribbon = Some(palette);
        self
    }
    pub fn isoelectric_model(mut self, model: IsoelectricModel) -> Self {
        self.isoelectric_model = Some(model);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn contact_density(mut self, density: f64) -> Self {
        self.contact_density = Some(density);
        self
    }

    pub fn build(self) -> Result<PipelineConfig, ConfigError> {
        let mut layout = self.layout.unwrap_or_default();
        if let Some(height) = self.lane_height {
            layout.lane_height = height;
        }
        if let Some(width) = self.unit_width {
            layout.unit_width = width;
        }
        ensure_positive("lane_height", layout.lane_height)?;
        ensure_positive("unit_width", layout.unit_width)?;
        ensure_positive("min_total_width", layout.min_total_width)?;
        ensure_non_negative("gap", layout.gap)?;
        ensure_non_negative("left_padding", layout.left_padding)?;
        ensure_non_negative("right_padding", layout.right_padding)?;
        if !(layout.min_width >= MIN_SHAPE_WIDTH && layout.min_width.is_finite()) {
            return Err(ConfigError::InvalidParameter {
                name: "min_width",
                reason: format!(
                    "must be at least {MIN_SHAPE_WIDTH}, got {}",
                    layout.min_width
                ),
            });
        }

        let mut raster = self.raster.unwrap_or_default();
        if let Some(size) = self.canvas_size {
            raster.canvas_size = size;
        }
        if let Some(size) = self.dot_size {
            raster.dot_size = size;
        }
        ensure_positive("canvas_size", raster.canvas_size)?;
        ensure_positive("dot_size", raster.dot_size)?;
        ensure_positive("line_width", raster.line_width)?;
        if raster.grid_divisions == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "grid_divisions",
                reason: "must be at least 1".to_string(),
            });
        }

        let isoelectric_model = self.isoelectric_model.unwrap_or_default();
        if let IsoelectricModel::Heuristic { min, max } = isoelectric_model {
            if !(min < max && min.is_finite() && max.is_finite() && (max - min).is_finite()) {
                return Err(ConfigError::InvalidParameter {
                    name: "isoelectric_model",
                    reason: format!("heuristic range [{min}, {max}) must be finite and non-empty"),
                });
            }
        }

        let mut generator = GeneratorConfig {
            seed: self.seed,
            ..GeneratorConfig::default()
        };
        if let Some(density) = self.contact_density {
            if !(0.0..=1.0).contains(&density) {
                return Err(ConfigError::InvalidParameter {
                    name: "contact_density",
                    reason: format!("{density} is outside [0, 1]"),
                });
            }
            generator.contact_density = density;
        }

        Ok(PipelineConfig {
            layout,
            raster,
            ribbon: self.ribbon.unwrap_or_default(),
            analysis: AnalysisConfig {
                isoelectric_model,
                seed: self.seed,
            },
            generator,
        })
    }
}

fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            reason: format!("must be a non-negative number, got {value}"),
        })
    }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_without_overrides_yields_defaults() {
        let config = PipelineConfigBuilder::new().build().unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.layout.lane_height, 100.0);
        assert_eq!(config.raster.canvas_size, 240.0);
        assert_eq!(config.raster.dot_size, 2.0);
    }

    #[test]
    fn builder_applies_overrides() {
        let config = PipelineConfigBuilder::new()
            .lane_height(140.0)
            .unit_width(6.0)
            .canvas_size(480.0)
            .dot_size(3.0)
            .isoelectric_model(IsoelectricModel::Titration)
            .seed(7)
            .contact_density(0.1)
            .build()
            .unwrap();
        assert_eq!(config.layout.lane_height, 140.0);
        assert_eq!(config.layout.unit_width, 6.0);
        assert_eq!(config.raster.canvas_size, 480.0);
        assert_eq!(config.raster.dot_size, 3.0);
        assert_eq!(config.analysis.isoelectric_model, IsoelectricModel::Titration);
        assert_eq!(config.analysis.seed, Some(7));
        assert_eq!(config.generator.seed, Some(7));
        assert_eq!(config.generator.contact_density, 0.1);
    }

    #[test]
    fn builder_rejects_non_positive_geometry() {
        let err = PipelineConfigBuilder::new()
            .lane_height(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "lane_height",
                ..
            }
        ));

        let err = PipelineConfigBuilder::new()
            .dot_size(f64::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "dot_size",
                ..
            }
        ));
    }

    #[test]
    fn builder_rejects_density_outside_unit_interval() {
        let err = PipelineConfigBuilder::new()
            .contact_density(1.5)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "contact_density",
                ..
            }
        ));
    }

    #[test]
    fn builder_rejects_empty_heuristic_range() {
        let err = PipelineConfigBuilder::new()
            .isoelectric_model(IsoelectricModel::Heuristic { min: 7.0, max: 7.0 })
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "isoelectric_model",
                ..
            }
        ));
    }

    #[test]
    fn builder_rejects_unbounded_heuristic_ranges() {
        for (min, max) in [
            (f64::NEG_INFINITY, 9.5),
            (4.5, f64::INFINITY),
            (f64::NAN, 9.5),
            (-1e308, 1e308),
        ] {
            let err = PipelineConfigBuilder::new()
                .isoelectric_model(IsoelectricModel::Heuristic { min, max })
                .build()
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    ConfigError::InvalidParameter {
                        name: "isoelectric_model",
                        ..
                    }
                ),
                "accepted [{min}, {max})"
            );
        }
    }

    #[test]
    fn builder_rejects_invalid_layout_spacing() {
        let cases: [(&str, fn(&mut LayoutConfig)); 5] = [
            ("gap", |l| l.gap = f64::NAN),
            ("left_padding", |l| l.left_padding = -1.0),
            ("right_padding", |l| l.right_padding = f64::INFINITY),
            ("min_total_width", |l| l.min_total_width = 0.0),
            ("min_width", |l| l.min_width = 10.0),
        ];
        for (expected, mutate) in cases {
            let mut layout = LayoutConfig::default();
            mutate(&mut layout);
            let err = PipelineConfigBuilder::new().layout(layout).build().unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidParameter { name, .. } if name == expected),
                "expected {expected} to be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn builder_accepts_zero_gap_and_wider_floor() {
        let layout = LayoutConfig {
            gap: 0.0,
            left_padding: 0.0,
            min_width: 24.0,
            ..LayoutConfig::default()
        };
        let config = PipelineConfigBuilder::new().layout(layout).build().unwrap();
        assert_eq!(config.layout.gap, 0.0);
        assert_eq!(config.layout.min_width, 24.0);
    }

    #[test]
    fn isoelectric_model_parses_names_case_insensitively() {
        assert_eq!(
            "Titration".parse::<IsoelectricModel>().unwrap(),
            IsoelectricModel::Titration
        );
        assert_eq!(
            "heuristic".parse::<IsoelectricModel>().unwrap(),
            IsoelectricModel::default()
        );
        assert_eq!(
            "pka".parse::<IsoelectricModel>().unwrap_err(),
            ConfigError::UnknownIsoelectricModel("pka".to_string())
        );
    }

    #[test]
    fn isoelectric_model_display_round_trips() {
        for model in [IsoelectricModel::default(), IsoelectricModel::Titration] {
            assert_eq!(model.to_string().parse::<IsoelectricModel>().unwrap(), model);
        }
    }
}
