//! `duffbench`: time the three copy-and-increment kernels on the reference
//! profile and print one line per kernel.
//!
//! Results go to stdout; diagnostics go to stderr through `tracing`
//! (default level `warn`, override with `RUST_LOG`).

use std::process::ExitCode;

use duff_bench::BenchConfig;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = BenchConfig::reference();
    match duff_bench::run(&config, |sample| println!("{sample}")) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "benchmark aborted");
            ExitCode::FAILURE
        }
    }
}
