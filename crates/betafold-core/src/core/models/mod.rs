//! # Core Models Module
//!
//! Data structures shared by every BetaFold component.
//!
//! ## Key Components
//!
//! - [`sequence`] - Cleaned residue sequences derived from raw FASTA-like text
//! - [`structure`] - The closed H/E/C secondary structure alphabet
//! - [`segment`] - Run-length topology segments with per-kind ordinals and labels
//! - [`contact`] - Square boolean contact matrices
//! - [`geometry`] - Absolute 2D shape geometry for topology diagrams
//! - [`drawing`] - Renderer output: raster draw instructions and ribbon bands
//! - [`color`] - RGBA colors used by the renderers
//! - [`analysis`] - Molecular weight, isoelectric point and domain annotations
//! - [`validation`] - Structural contract violations shared by all components
//!
//! ## Usage
//!
//! ```ignore
//! use betafold::core::models::sequence::Sequence;
//!
//! let sequence = Sequence::clean(">sp|P69905|HBA_HUMAN\nMVLSPADKTN\nVKAAWGKVGA");
//! assert_eq!(sequence.len(), 20);
//! ```

pub mod analysis;
pub mod color;
pub mod contact;
pub mod drawing;
pub mod geometry;
pub mod segment;
pub mod sequence;
pub mod structure;
pub mod validation;
