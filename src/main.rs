//! # `QuantumFlow`
//!
//! Thin entry point: parse the flags, run the application once, and exit
//! with status 1 if it fails.
//!
//! ## Usage
//!
//! ```sh
//! quantumflow --verbose --input in.txt --output out.txt
//! ```
//!
//! Unknown flags, including `--help`, are ignored.

use quantumflow::cli::parse_options;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let options = parse_options(std::env::args_os().skip(1));

    // Initialize tracing subscriber based on verbose flag
    let log_level = if options.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let outcome = quantumflow::run(options).await;

    // Failure mapping is covered through `Outcome` in tests/bootstrap_tests.rs;
    // the shipped application never fails, so no binary test reaches this.
    if let Some(diagnostic) = outcome.diagnostic() {
        eprintln!("{diagnostic}");
        std::process::exit(outcome.exit_code());
    }
}
