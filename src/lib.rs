//! `QuantumFlow` - command-line entry point for the QuantumFlow application
//!
//! This library parses the invocation flags, launches the application once
//! on a single-threaded runtime and maps its result to a process exit code.

pub mod app;
pub mod bootstrap;
pub mod cli;
pub mod error;

use app::{Application, QuantumFlow};
use bootstrap::{Outcome, run_application};
use cli::InvocationOptions;

/// Main entry point for the quantumflow library
pub async fn run(options: InvocationOptions) -> Outcome {
    run_application(options, QuantumFlow::new).await
}
