use crate::core::io::fasta::DEFAULT_PROTEIN_NAME;
use crate::core::models::analysis::{AnalysisSummary, DataQualityWarning};
use crate::core::models::contact::ContactMatrix;
use crate::core::models::geometry::TopologyLayout;
use crate::core::models::segment::TopologySegment;
use crate::core::models::sequence::Sequence;
use crate::core::models::validation::ValidationError;
use crate::engine::analyzer::{DomainAnnotator, IsoelectricPointEstimator, SequenceAnalyzer};
use crate::engine::config::PipelineConfig;
use crate::engine::error::EngineError;
use crate::engine::generator::GeneratedPrediction;
use crate::engine::layout::TopologyLayoutEngine;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::raster::{ContactRasterRenderer, DrawInstruction};
use crate::engine::ribbon::{RibbonBand, StructureRibbonRenderer};
use crate::engine::segmenter;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Everything an external generator hands over for one protein.
#[derive(Debug, Clone, Default)]
pub struct PredictionInput {
    pub protein_name: Option<String>,
    pub raw_sequence: String,
    pub structure: String,
    pub contacts: Option<ContactMatrix>,
    pub confidence: Option<f64>,
}

impl PredictionInput {
    pub fn from_generated(
        protein_name: Option<String>,
        raw_sequence: impl Into<String>,
        prediction: GeneratedPrediction,
    ) -> Self {
        Self {
            protein_name,
            raw_sequence: raw_sequence.into(),
            structure: prediction.structure,
            contacts: Some(prediction.contacts),
            confidence: Some(prediction.confidence),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    pub protein_name: String,
    pub sequence: Sequence,
    pub structure: String,
    pub confidence: Option<f64>,
    pub segments: Vec<TopologySegment>,
    pub layout: TopologyLayout,
    pub analysis: AnalysisSummary,
    pub warnings: Vec<DataQualityWarning>,
    pub ribbon: Vec<RibbonBand>,
    pub contact_map: Vec<DrawInstruction>,
}

/// Validates `input` and derives every report product from it.
///
/// # Errors
///
/// Returns [`EngineError::Validation`] when the label string length differs from the cleaned
/// sequence length or contains a symbol outside `H`, `E`, `C`. Nothing is computed in that case.
#[instrument(skip_all, name = "prediction_workflow")]
pub fn run<I, D>(
    input: PredictionInput,
    config: &PipelineConfig,
    analyzer: &mut SequenceAnalyzer<I, D>,
    reporter: &ProgressReporter,
) -> Result<PredictionReport, EngineError>
where
    I: IsoelectricPointEstimator,
    D: DomainAnnotator,
{
    let PredictionInput {
        protein_name,
        raw_sequence,
        structure,
        contacts,
        confidence,
    } = input;
    let protein_name = protein_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROTEIN_NAME.to_string());
    let sequence = Sequence::clean(&raw_sequence);
    info!(protein = %protein_name, residues = sequence.len(), "Starting prediction report.");

    let labels = structure.chars().count();
    if labels != sequence.len() {
        return Err(ValidationError::LengthMismatch {
            sequence: sequence.len(),
            labels,
        }
        .into());
    }

    let segments = reporter.phase("Segmenting", || segmenter::segment(&structure))?;
    reporter.report(Progress::Message(format!("{} segments", segments.len())));

    if let Some(matrix) = contacts.as_ref() {
        if matrix.size() != sequence.len() {
            warn!(
                matrix = matrix.size(),
                residues = sequence.len(),
                "Contact matrix side differs from sequence length; plotting as given."
            );
        }
    }

    let analysis = reporter.phase("Analyzing", || analyzer.analyze(&sequence));

    let layout = reporter.phase("Laying out", || {
        TopologyLayoutEngine::new(&config.layout).layout(&segments, config.layout.lane_height)
    });

    let (ribbon, contact_map) = reporter.phase("Rendering", || {
        let ribbon = StructureRibbonRenderer::new(&config.ribbon).render(&structure);
        let contact_map =
            ContactRasterRenderer::new(&config.raster).render_default(contacts.as_ref());
        (ribbon, contact_map)
    });

    info!(
        segments = segments.len(),
        warnings = analysis.warnings.len(),
        total_width = layout.total_width,
        "Prediction report complete."
    );

    Ok(PredictionReport {
        protein_name,
        sequence,
        structure,
        confidence,
        segments,
        layout,
        analysis: analysis.summary,
        warnings: analysis.warnings,
        ribbon,
        contact_map,
    })
}
