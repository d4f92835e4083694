//! # Workflows Module
//!
//! High-level entry points that run the engine components end to end.
//!
//! ## Overview
//!
//! A workflow takes the inputs an external structure generator supplies, validates how they
//! pair up, and assembles every derived product into a single serializable report. Progress is
//! reported through [`crate::engine::progress::ProgressReporter`] so front ends can show phases.
//!
//! - **Prediction Workflow** ([`predict`]) - Segments, layout, statistics, ribbon and contact
//!   map for one protein.

pub mod predict;
