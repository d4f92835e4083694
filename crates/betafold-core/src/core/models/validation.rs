use thiserror::Error;

/// A structural contract violation in the inputs of an operation.
///
/// Positions and rows are 1-based so messages line up with residue numbering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown structure symbol '{symbol}' at position {position}; expected one of H, E, C")]
    UnknownStructureSymbol { symbol: char, position: usize },

    #[error(
        "Structure label string has {labels} symbols but the sequence has {sequence} residues"
    )]
    LengthMismatch { sequence: usize, labels: usize },

    #[error("Contact matrix is not square: row {row} has {found} cells, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
}
