//! # BetaFold Core Library
//!
//! Deterministic post-processing for 2D protein structure reports: segmentation of secondary
//! structure label strings, topology diagram layout, contact-map rasterization, per-residue
//! structure ribbons, and descriptive sequence statistics.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so each concern can be tested in isolation.
//!
//! - **[`core`]: The Foundation.** Value-object data models (`Sequence`, `TopologySegment`,
//!   `ContactMatrix`, `AnalysisSummary`), residue reference tables, and file I/O for sequences,
//!   contact matrices and SVG output.
//!
//! - **[`engine`]: The Logic Core.** The five pure components (segmenter, sequence analyzer,
//!   topology layout engine, contact raster renderer, structure ribbon renderer), their
//!   configuration, pluggable estimation strategies, and the placeholder prediction source that
//!   stands in for an external structure generator.
//!
//! - **[`workflows`]: The Public API.** The prediction pipeline that validates a sequence and its
//!   structure labels together and assembles every derived product into one report.
//!
//! Structure prediction itself is out of scope: label strings and contact matrices are inputs.

pub mod core;
pub mod engine;
pub mod workflows;
