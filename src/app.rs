//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the fetch -> build-series pipeline
//! - prints the summary and terminal charts
//! - writes the optional chart image

use clap::Parser;

use crate::cli::Cli;
use crate::domain::RunConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `covid` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = run_config_from_args(&cli);

    let run = pipeline::run_report(&config)?;

    print!(
        "{}",
        crate::report::format_summary(&config.country, &run.records, &run.series)
    );

    if config.plot {
        println!();
        print!(
            "{}",
            crate::plot::render_ascii_panels(&run.series, config.plot_width, config.plot_height)
        );
    }

    if let Some(path) = &config.export {
        crate::plot::write_chart(path, &config.country, &run.series)?;
        println!("Chart written to {}", path.display());
    }

    Ok(())
}

pub fn run_config_from_args(args: &Cli) -> RunConfig {
    RunConfig {
        country: args.country.clone(),
        export: args.export.clone(),
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        timeout_secs: args.timeout,
    }
}
