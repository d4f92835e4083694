pub mod analyze;
pub mod predict;
pub mod segment;
