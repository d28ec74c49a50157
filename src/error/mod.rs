//! Error handling module
//!
//! Defines the binder's error type with process exit codes

pub mod types;

pub use types::*;
