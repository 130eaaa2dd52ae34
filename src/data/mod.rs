//! Remote dataset access.

pub mod timeseries;

pub use timeseries::*;
