mod report;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use lpi_core::{REFERENCE_ITERATIONS, estimate_pi};

use crate::report::RunReport;

#[derive(Parser)]
#[command(name = "lpi", about = "Leibniz series π estimator")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let iterations = REFERENCE_ITERATIONS;
    tracing::debug!("summing {iterations} Leibniz terms");

    // Timer brackets the evaluation only; printing is outside it
    let start = Instant::now();
    let estimate = estimate_pi(iterations);
    let seconds = start.elapsed().as_secs_f64();

    let report = RunReport {
        estimate,
        iterations,
        seconds,
    };
    for line in report.lines() {
        println!("{line}");
    }

    Ok(())
}
