//! Application seam
//!
//! The bootstrap only needs two things from an application: a way to build
//! it from an [`AppConfig`] and a single asynchronous `execute` call.

pub mod config;
pub mod flow;
pub mod mock;

pub use config::AppConfig;
pub use flow::QuantumFlow;
pub use mock::MockApplication;

use anyhow::Result;
use std::future::Future;

/// Contract between the bootstrap and the application it launches
///
/// # Implementations
/// - `QuantumFlow`: the application shipped with the binary
/// - `MockApplication`: scripted outcome for tests
pub trait Application: Sized {
    /// Build the application; never fails
    fn new(config: AppConfig) -> Self;

    /// Run the application to completion
    ///
    /// Resolves to `Ok(())` on success. Any error is fatal to the process.
    fn execute(&self) -> impl Future<Output = Result<()>>;
}
