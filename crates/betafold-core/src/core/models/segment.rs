use super::structure::SecondaryStructure;
use serde::Serialize;

/// A maximal run of identical secondary structure labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologySegment {
    pub kind: SecondaryStructure, // Structure class of the run
    pub length: usize,            // Number of residues in the run
    pub label: String,            // Display label, e.g. "H2" or "L1"
    pub ordinal: usize,           // 1-based count of runs of this kind so far
}

impl TopologySegment {
    pub fn new(kind: SecondaryStructure, length: usize, ordinal: usize) -> Self {
        Self {
            kind,
            length,
            label: format!("{}{}", kind.label_prefix(), ordinal),
            ordinal,
        }
    }
}
