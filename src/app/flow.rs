//! The QuantumFlow application

use crate::app::{AppConfig, Application};
use anyhow::Result;
use tracing::{debug, info};

/// Application launched by the `quantumflow` binary
#[derive(Debug, Clone)]
pub struct QuantumFlow {
    config: AppConfig,
}

impl QuantumFlow {
    /// Configuration this instance was built from
    #[must_use]
    #[inline]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl Application for QuantumFlow {
    #[inline]
    fn new(config: AppConfig) -> Self {
        return Self { config };
    }

    async fn execute(&self) -> Result<()> {
        info!("Starting QuantumFlow run...");
        debug!(verbose = self.config.verbose, "Application configuration");

        info!("QuantumFlow run complete");
        Ok(())
    }
}
