//! Command-line parsing for the Covid-19 case-curve reporter.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! fetch/plot code: flags are translated into a [`RunConfig`](crate::domain::RunConfig)
//! once, and everything downstream takes that config explicitly.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "covid",
    version,
    about = "Fetch the Covid-19 time series for one country and chart it"
)]
pub struct Cli {
    /// Country to report on (display name from the dataset, e.g. "Netherlands").
    #[arg(short = 'c', long, default_value = "Netherlands")]
    pub country: String,

    /// Export the chart grid to an image file (png, bmp, jpg or svg by extension).
    #[arg(short = 'e', long)]
    pub export: Option<PathBuf>,

    /// Render the terminal charts (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal charts (the summary still prints).
    #[arg(long)]
    pub no_plot: bool,

    /// Terminal chart width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Terminal chart height (rows per panel).
    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// HTTP timeout for the dataset fetch (seconds).
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}
