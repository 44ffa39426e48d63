//! CCT: Camber Cost Toolkit
//!
//! A toolkit for process-based manufacturing cost modeling: given a
//! plain-text YAML scenario describing a multi-step production process,
//! compute per-unit cost breakdowns, cost-vs-volume sweeps, sensitivity
//! grids, and Monte Carlo distributions.

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod entities;
