//! # Core Module
//!
//! The foundation layer of BetaFold: immutable data models, residue reference data, and the
//! readers and writers that move those models in and out of files.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Sequences, structure labels, topology segments, contact
//!   matrices, layout geometry, colors, and analysis records
//! - **Reference Data** ([`utils`]) - Average residue masses and ionizable group pKa values
//! - **File I/O** ([`io`]) - FASTA-like sequence input, CSV contact matrices, SVG rendering
//!
//! Every model here is a value object: created per call, owned by the caller, and never mutated
//! in place by the engine.

pub mod io;
pub mod models;
pub mod utils;
