//! Error handling module
//!
//! Defines the error type raised by the crate's own applications

pub mod types;

pub use types::*;
