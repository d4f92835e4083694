use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileLayoutConfig {
    pub lane_height: Option<f64>,
    pub unit_width: Option<f64>,
    pub gap: Option<f64>,
    pub left_padding: Option<f64>,
    pub right_padding: Option<f64>,
    pub min_width: Option<f64>,
    pub min_total_width: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileContactMapConfig {
    pub canvas_size: Option<f64>,
    pub dot_size: Option<f64>,
    pub grid_divisions: Option<usize>,
    pub dot_color: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileAnalysisConfig {
    pub isoelectric_model: Option<String>,
    pub isoelectric_min: Option<f64>,
    pub isoelectric_max: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileGeneratorConfig {
    pub seed: Option<u64>,
    pub contact_density: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileRibbonConfig {
    pub helix_color: Option<String>,
    pub sheet_color: Option<String>,
    pub other_color: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub layout: Option<FileLayoutConfig>,
    pub contact_map: Option<FileContactMapConfig>,
    pub analysis: Option<FileAnalysisConfig>,
    pub generator: Option<FileGeneratorConfig>,
    pub ribbon: Option<FileRibbonConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
