//! Bootstrap: build the application from the invocation options, run it
//! once and turn the result into an [`Outcome`]
//!
//! Nothing in here ends the process; `main` owns that.

pub mod outcome;

pub use outcome::*;

use crate::app::{AppConfig, Application};
use crate::cli::InvocationOptions;
use tracing::debug;

/// Construct the application with `build` and await its single `execute`
///
/// The options are consumed; only the [`AppConfig`] derived from them
/// reaches the application.
pub async fn run_application<A, F>(options: InvocationOptions, build: F) -> Outcome
where
    A: Application,
    F: FnOnce(AppConfig) -> A,
{
    debug!("Invocation options: {}", options.to_json());

    let app = build(AppConfig::from(&options));
    drop(options);

    let outcome = Outcome::from(app.execute().await);
    debug!("Application finished with exit code {}", outcome.exit_code());
    outcome
}
