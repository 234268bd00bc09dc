//! Mock application for testing

use super::{AppConfig, Application};
use crate::error::FlowError;
use anyhow::Result;
use std::sync::{Arc, RwLock};

/// Scripted implementation of [`Application`] for tests
///
/// Clones share state, so a test can keep one handle, give a clone to the
/// bootstrap and inspect afterwards what the bootstrap did with it.
///
/// # Example
/// ```
/// use quantumflow::app::{AppConfig, MockApplication};
///
/// let probe = MockApplication::default().failing_with("boom");
/// let app = probe.clone().configured(AppConfig { verbose: true });
///
/// assert_eq!(probe.received_config(), Some(AppConfig { verbose: true }));
/// assert_eq!(app.execute_calls(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MockApplication {
    state: Arc<RwLock<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    config: Option<AppConfig>,
    failure: Option<String>,
    execute_calls: usize,
}

impl MockApplication {
    /// Make `execute` fail with the given message (builder pattern)
    #[must_use]
    pub fn failing_with<S: Into<String>>(self, message: S) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.failure = Some(message.into());
        }
        self
    }

    /// Record the configuration the application was built from
    #[must_use]
    pub fn configured(self, config: AppConfig) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.config = Some(config);
        }
        self
    }

    /// Configuration passed at construction, if any
    #[must_use]
    pub fn received_config(&self) -> Option<AppConfig> {
        self.state.read().ok().and_then(|state| state.config)
    }

    /// Number of times `execute` has been awaited
    #[must_use]
    pub fn execute_calls(&self) -> usize {
        self.state.read().map_or(0, |state| state.execute_calls)
    }
}

impl Application for MockApplication {
    fn new(config: AppConfig) -> Self {
        Self::default().configured(config)
    }

    async fn execute(&self) -> Result<()> {
        let failure = {
            let mut state = self
                .state
                .write()
                .map_err(|e| anyhow::anyhow!(e.to_string()))?;
            state.execute_calls += 1;
            state.failure.clone()
        };

        tokio::task::yield_now().await;

        match failure {
            Some(message) => Err(FlowError::execution(message).into()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_mock_succeeds() {
        let app = MockApplication::new(AppConfig::default());

        assert!(app.execute().await.is_ok());
        assert_eq!(app.execute_calls(), 1);
        assert_eq!(app.received_config(), Some(AppConfig::default()));
    }

    #[tokio::test]
    async fn test_failing_mock_reports_message() {
        let app = MockApplication::default().failing_with("boom");

        let err = app.execute().await.unwrap_err();

        assert!(err.to_string().contains("boom"));
        assert!(err.downcast_ref::<FlowError>().is_some());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let probe = MockApplication::default();
        let app = probe.clone();

        app.execute().await.unwrap();
        app.execute().await.unwrap();

        assert_eq!(probe.execute_calls(), 2);
    }
}
