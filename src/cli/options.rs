//! Options record built from the command line

use crate::cli::Args;
use serde::Serialize;

/// Options for a single invocation of the binary
///
/// Built once from the raw argument list and handed to the bootstrap by
/// value. `input` and `output` are carried verbatim and never validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvocationOptions {
    pub verbose: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl InvocationOptions {
    /// Render the options as a single-line JSON object for logging
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

impl From<Args> for InvocationOptions {
    #[inline]
    fn from(args: Args) -> Self {
        return Self {
            verbose: args.verbose,
            input: args.input,
            output: args.output,
        };
    }
}
