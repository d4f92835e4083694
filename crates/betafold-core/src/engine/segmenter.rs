use crate::core::models::segment::TopologySegment;
use crate::core::models::structure::{SecondaryStructure, parse_labels};
use crate::core::models::validation::ValidationError;
use tracing::instrument;

/// Run-length accumulator with one closure counter per structure kind.
#[derive(Debug, Default)]
struct SegmentAccumulator {
    current_kind: Option<SecondaryStructure>,
    run_length: usize,
    counters: [usize; 3],
    segments: Vec<TopologySegment>,
}

impl SegmentAccumulator {
    fn push(&mut self, kind: SecondaryStructure) {
        if self.current_kind == Some(kind) {
            self.run_length += 1;
        } else {
            self.close_run();
            self.current_kind = Some(kind);
            self.run_length = 1;
        }
    }

    fn close_run(&mut self) {
        if let Some(kind) = self.current_kind.take() {
            let counter = &mut self.counters[kind.index()];
            *counter += 1;
            self.segments.push(TopologySegment::new(kind, self.run_length, *counter));
            self.run_length = 0;
        }
    }

    fn finish(mut self) -> Vec<TopologySegment> {
        self.close_run();
        self.segments
    }
}

/// Collapses a structure label string into ordered runs.
///
/// Ordinals count runs per kind in order of appearance, so `"HHEH"` yields `H1`, `E1`, `H2`.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownStructureSymbol`] for any symbol outside `H`, `E`, `C`.
/// No segments are returned in that case.
#[instrument(level = "debug", skip_all, fields(len = labels.len()))]
pub fn segment(labels: &str) -> Result<Vec<TopologySegment>, ValidationError> {
    let mut accumulator = SegmentAccumulator::default();
    for kind in parse_labels(labels)? {
        accumulator.push(kind);
    }
    Ok(accumulator.finish())
}
