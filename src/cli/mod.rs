//! Command-line interface module
//!
//! Handles argument parsing into [`InvocationOptions`]

pub mod args;
pub mod options;

pub use args::*;
pub use options::*;
