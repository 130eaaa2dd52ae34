//! `covid-curves` library crate.
//!
//! The binary (`covid`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the fetcher and the renderers sit behind narrow seams that accept
//!   fixture data (no network and no real display needed in tests)

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod plot;
pub mod report;
pub mod series;
