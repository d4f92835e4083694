use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::PipelineOverrides;
use crate::error::{CliError, Result};
use crate::utils::parser::{self, ParseError};
use betafold::core::models::color::Color;
use betafold::engine::config::{
    ConfigError, IsoelectricModel, LayoutConfig, PipelineConfigBuilder, RasterConfig,
    RibbonPalette,
};
use std::path::Path;
use tracing::debug;

/// Merges settings with precedence CLI flag > `--set` > config file > built-in defaults.
pub fn build_config(
    overrides: &PipelineOverrides,
    config_path: Option<&Path>,
    set_values: &[String],
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(path) = config_path {
        FileConfig::from_file(path)?
    } else {
        FileConfig::default()
    };
    let mut file_config = apply_set_values(file_config, set_values)?;

    let layout_file = file_config.layout.take().unwrap_or_default();
    let mut layout = LayoutConfig {
        lane_height: overrides
            .lane_height
            .or(layout_file.lane_height)
            .unwrap_or(defaults.lane_height),
        unit_width: overrides
            .unit_width
            .or(layout_file.unit_width)
            .unwrap_or(defaults.unit_width),
        ..LayoutConfig::default()
    };
    if let Some(gap) = layout_file.gap {
        layout.gap = gap;
    }
    if let Some(padding) = layout_file.left_padding {
        layout.left_padding = padding;
    }
    if let Some(padding) = layout_file.right_padding {
        layout.right_padding = padding;
    }
    if let Some(width) = layout_file.min_width {
        layout.min_width = width;
    }
    if let Some(width) = layout_file.min_total_width {
        layout.min_total_width = width;
    }

    let map_file = file_config.contact_map.take().unwrap_or_default();
    let mut raster = RasterConfig {
        canvas_size: overrides
            .canvas_size
            .or(map_file.canvas_size)
            .unwrap_or(defaults.canvas_size),
        dot_size: overrides
            .dot_size
            .or(map_file.dot_size)
            .unwrap_or(defaults.dot_size),
        ..RasterConfig::default()
    };
    if let Some(divisions) = map_file.grid_divisions {
        raster.grid_divisions = divisions;
    }
    if let Some(color) = map_file.dot_color.as_deref() {
        raster.palette.dot = parse_color("contact-map.dot-color", color)?;
    }

    let ribbon_file = file_config.ribbon.take().unwrap_or_default();
    let mut ribbon = RibbonPalette::default();
    if let Some(color) = ribbon_file.helix_color.as_deref() {
        ribbon.helix = parse_color("ribbon.helix-color", color)?;
    }
    if let Some(color) = ribbon_file.sheet_color.as_deref() {
        ribbon.sheet = parse_color("ribbon.sheet-color", color)?;
    }
    if let Some(color) = ribbon_file.other_color.as_deref() {
        ribbon.other = parse_color("ribbon.other-color", color)?;
    }

    let analysis_file = file_config.analysis.take().unwrap_or_default();
    let model_name = overrides
        .isoelectric_model
        .as_deref()
        .or(analysis_file.isoelectric_model.as_deref())
        .unwrap_or(defaults.isoelectric_model.as_str());
    let mut isoelectric_model: IsoelectricModel = model_name
        .parse()
        .map_err(|e: ConfigError| CliError::Config(e.to_string()))?;
    if let IsoelectricModel::Heuristic { min, max } = &mut isoelectric_model {
        if let Some(value) = analysis_file.isoelectric_min {
            *min = value;
        }
        if let Some(value) = analysis_file.isoelectric_max {
            *max = value;
        }
    }

    let generator_file = file_config.generator.take().unwrap_or_default();
    let seed = overrides.seed.or(generator_file.seed);
    let contact_density = overrides
        .contact_density
        .or(generator_file.contact_density)
        .unwrap_or(defaults.contact_density);

    let mut builder = PipelineConfigBuilder::new()
        .layout(layout)
        .raster(raster)
        .ribbon(ribbon)
        .isoelectric_model(isoelectric_model)
        .contact_density(contact_density);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let pipeline = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    debug!("Merged pipeline configuration: {:?}", pipeline);

    Ok(AppConfig {
        pipeline,
        ribbon_width: ribbon_file.width.unwrap_or(defaults.svg_ribbon_width),
        ribbon_height: ribbon_file.height.unwrap_or(defaults.svg_ribbon_height),
    })
}

fn parse_color(key: &str, value: &str) -> Result<Color> {
    value
        .parse()
        .map_err(|e| CliError::Config(format!("Invalid color for {}: {}", key, e)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    let to_config = |e: ParseError| CliError::Config(e.to_string());

    for kv_pair in set_values {
        let (key, value) = parser::parse_key_value(kv_pair).map_err(to_config)?;
        let float = || parser::parse_setting::<f64>(key, value, "float").map_err(to_config);
        let integer = || parser::parse_setting::<u64>(key, value, "integer").map_err(to_config);

        match key {
            "layout.lane-height" => {
                config.layout.get_or_insert_with(Default::default).lane_height = Some(float()?)
            }
            "layout.unit-width" => {
                config.layout.get_or_insert_with(Default::default).unit_width = Some(float()?)
            }
            "layout.gap" => config.layout.get_or_insert_with(Default::default).gap = Some(float()?),
            "layout.left-padding" => {
                config.layout.get_or_insert_with(Default::default).left_padding = Some(float()?)
            }
            "layout.right-padding" => {
                config.layout.get_or_insert_with(Default::default).right_padding = Some(float()?)
            }
            "layout.min-width" => {
                config.layout.get_or_insert_with(Default::default).min_width = Some(float()?)
            }
            "layout.min-total-width" => {
                config
                    .layout
                    .get_or_insert_with(Default::default)
                    .min_total_width = Some(float()?)
            }
            "contact-map.canvas-size" => {
                config
                    .contact_map
                    .get_or_insert_with(Default::default)
                    .canvas_size = Some(float()?)
            }
            "contact-map.dot-size" => {
                config.contact_map.get_or_insert_with(Default::default).dot_size = Some(float()?)
            }
            "contact-map.grid-divisions" => {
                config
                    .contact_map
                    .get_or_insert_with(Default::default)
                    .grid_divisions = Some(integer()? as usize)
            }
            "contact-map.dot-color" => {
                config.contact_map.get_or_insert_with(Default::default).dot_color =
                    Some(value.to_string())
            }
            "analysis.isoelectric-model" => {
                config
                    .analysis
                    .get_or_insert_with(Default::default)
                    .isoelectric_model = Some(value.to_string())
            }
            "analysis.isoelectric-min" => {
                config
                    .analysis
                    .get_or_insert_with(Default::default)
                    .isoelectric_min = Some(float()?)
            }
            "analysis.isoelectric-max" => {
                config
                    .analysis
                    .get_or_insert_with(Default::default)
                    .isoelectric_max = Some(float()?)
            }
            "generator.seed" => {
                config.generator.get_or_insert_with(Default::default).seed = Some(integer()?)
            }
            "generator.contact-density" => {
                config
                    .generator
                    .get_or_insert_with(Default::default)
                    .contact_density = Some(float()?)
            }
            "ribbon.width" => config.ribbon.get_or_insert_with(Default::default).width = Some(float()?),
            "ribbon.height" => {
                config.ribbon.get_or_insert_with(Default::default).height = Some(float()?)
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
