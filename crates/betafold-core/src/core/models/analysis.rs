use serde::Serialize;
use thiserror::Error;

/// A predicted domain over an inclusive, 1-based residue range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainAnnotation {
    pub label: String,
    pub start_residue: usize,
    pub end_residue: usize,
    pub confidence_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    #[serde(rename = "molecularWeightKDa")]
    pub molecular_weight_kda: f64,
    pub isoelectric_point: f64,
    pub domains: Vec<DomainAnnotation>,
}

impl AnalysisSummary {
    /// Molecular weight rounded to one decimal place, e.g. `"0.2 kDa"`.
    pub fn molecular_weight_display(&self) -> String {
        format!("{:.1} kDa", self.molecular_weight_kda)
    }
}

/// A non-fatal problem with the input that the caller must be told about.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DataQualityWarning {
    #[error("Unrecognized residue '{symbol}' at position {position} contributes no mass")]
    UnrecognizedResidue { symbol: char, position: usize },
}

/// The analyzer's output: the summary plus every warning raised while computing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub summary: AnalysisSummary,
    pub warnings: Vec<DataQualityWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn molecular_weight_display_rounds_to_one_decimal() {
        let summary = AnalysisSummary {
            molecular_weight_kda: 0.168155,
            isoelectric_point: 7.0,
            domains: Vec::new(),
        };
        assert_eq!(summary.molecular_weight_display(), "0.2 kDa");
    }

    #[test]
    fn warning_message_names_symbol_and_position() {
        let warning = DataQualityWarning::UnrecognizedResidue {
            symbol: 'X',
            position: 12,
        };
        assert_eq!(
            warning.to_string(),
            "Unrecognized residue 'X' at position 12 contributes no mass"
        );
    }
}
