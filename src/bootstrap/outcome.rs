//! Terminal states of a run

use anyhow::Result;

/// Exit status for a successful run
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status for any failed run
pub const EXIT_FAILURE: i32 = 1;

/// How a run ended
#[derive(Debug)]
pub enum Outcome {
    /// `execute` resolved successfully
    Succeeded,
    /// `execute` failed with the contained error
    Failed(anyhow::Error),
}

impl Outcome {
    /// Process exit status for this outcome
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Succeeded => EXIT_SUCCESS,
            Self::Failed(_) => EXIT_FAILURE,
        }
    }

    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(*self, Self::Succeeded)
    }

    /// Text to write on stderr, with the full cause chain
    ///
    /// `None` for a successful run.
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Succeeded => None,
            Self::Failed(err) => Some(format!("{err:#}")),
        }
    }
}

impl From<Result<()>> for Outcome {
    #[inline]
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::Succeeded,
            Err(err) => Self::Failed(err),
        }
    }
}
