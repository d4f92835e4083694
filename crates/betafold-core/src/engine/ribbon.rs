use super::config::RibbonPalette;
use crate::core::models::color::Color;
pub use crate::core::models::drawing::RibbonBand;

/// Colors a label string at residue granularity; runs are not merged.
pub struct StructureRibbonRenderer<'a> {
    palette: &'a RibbonPalette,
}

impl<'a> StructureRibbonRenderer<'a> {
    pub fn new(palette: &'a RibbonPalette) -> Self {
        Self { palette }
    }

    pub fn color_for(&self, symbol: char) -> Color {
        match symbol {
            'H' => self.palette.helix,
            'E' => self.palette.sheet,
            _ => self.palette.other,
        }
    }

    pub fn render(&self, labels: &str) -> Vec<RibbonBand> {
        let count = labels.chars().count();
        if count == 0 {
            return Vec::new();
        }
        let width_percent = 100.0 / count as f64;
        labels
            .chars()
            .enumerate()
            .map(|(index, symbol)| RibbonBand {
                symbol,
                offset_percent: index as f64 * width_percent,
                width_percent,
                color: self.color_for(symbol),
            })
            .collect()
    }
}
