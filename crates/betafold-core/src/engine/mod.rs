//! # Engine Module
//!
//! The pure computational components of BetaFold and the configuration they run under.
//!
//! ## Overview
//!
//! Every component here is a synchronous function of its inputs. None of them performs I/O or
//! holds state between calls, so independent inputs can be processed in parallel freely.
//!
//! ## Architecture
//!
//! - **Segmenter** ([`segmenter`]) - Run-length encoding of a label string into topology segments
//! - **Sequence Analyzer** ([`analyzer`]) - Molecular weight plus pluggable isoelectric point and
//!   domain strategies
//! - **Topology Layout** ([`layout`]) - Absolute single-lane geometry for the topology diagram
//! - **Contact Raster** ([`raster`]) - Draw instructions for a contact matrix
//! - **Structure Ribbon** ([`ribbon`]) - Per-residue colored bands
//! - **Prediction Sources** ([`generator`]) - The external generator seam and its random placeholder
//! - **Configuration** ([`config`]) - Geometry constants, palettes and strategy selection
//! - **Progress Monitoring** ([`progress`]) - Phase events for interactive front ends
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping validation and input errors

pub mod analyzer;
pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod progress;
pub mod raster;
pub mod ribbon;
pub mod segmenter;
