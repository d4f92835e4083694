//! Reading and writing the file formats around the BetaFold core.
//!
//! Sequences arrive as FASTA-like text and contact matrices as headerless CSV; both implement
//! the [`traits::DataFile`] interface. Renderer outputs can be written as standalone SVG
//! documents.

pub mod contacts;
pub mod fasta;
pub mod svg;
pub mod traits;
