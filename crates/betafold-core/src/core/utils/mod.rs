//! Residue reference data shared by the analyzer's mass and charge models.

pub mod residues;
