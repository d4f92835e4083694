use betafold::engine::config::PipelineConfig;

/// Fully merged settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub pipeline: PipelineConfig,
    pub ribbon_width: f64,
    pub ribbon_height: f64,
}
