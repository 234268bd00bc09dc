//! Configuration handed to applications

use crate::cli::InvocationOptions;
use serde::Serialize;

/// Settings an application is constructed from
///
/// Only `verbose` crosses from the command line; `input` and `output`
/// stay with the invocation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub verbose: bool,
}

impl From<&InvocationOptions> for AppConfig {
    #[inline]
    fn from(options: &InvocationOptions) -> Self {
        return Self {
            verbose: options.verbose,
        };
    }
}
