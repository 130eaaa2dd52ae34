//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the per-day observation (`DayRecord`)
//! - the derived plot series (`CountrySeries`)
//! - the metric enum (`Metric`) shared by the renderers
//! - the run configuration (`RunConfig`)

pub mod types;

pub use types::*;
