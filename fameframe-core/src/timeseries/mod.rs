//! Period-table utilities used by the loader pipeline.
//!
//! - `normalize`: turn user date strings into period bounds
//! - `reconcile`: clamp requested bounds to what a store returned
//! - `tabulate`: build period indices and single-series tables
//! - `concat`: align tables on their period index
/// Side-by-side alignment and cross-source comparison.
pub mod concat;
/// Date-bound parsing and ordering checks.
pub mod normalize;
/// Native label conversion and range clamping.
pub mod reconcile;
/// Period index construction and series tabularization.
pub mod tabulate;
