//! Custom error types

use thiserror::Error;

/// Error raised by a QuantumFlow application while it runs
///
/// The bootstrap never inspects the variant: any failure coming out of
/// `execute` ends the process with status 1.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FlowError {
    /// Execution Error - the application run failed
    #[error("Execution failed: {message}")]
    Execution { message: String },
}

impl FlowError {
    /// Create an execution error
    #[inline]
    pub fn execution<S: Into<String>>(message: S) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }
}
