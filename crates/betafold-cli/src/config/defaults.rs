/// Built-in values used when neither the CLI, `--set`, nor the config file provide one.
pub struct DefaultsConfig {
    pub lane_height: f64,
    pub unit_width: f64,
    pub canvas_size: f64,
    pub dot_size: f64,
    pub isoelectric_model: String,
    pub contact_density: f64,
    pub svg_ribbon_width: f64,
    pub svg_ribbon_height: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            lane_height: 100.0,
            unit_width: 8.0,
            canvas_size: 240.0,
            dot_size: 2.0,
            isoelectric_model: "heuristic".to_string(),
            contact_density: 0.05,
            svg_ribbon_width: 480.0,
            svg_ribbon_height: 8.0,
        }
    }
}
