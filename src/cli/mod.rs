//! Command-line interface module
//!
//! Wrapper flags of the `optbind` binary and the bundled `greet` command

pub mod args;
pub mod greet;

pub use args::*;
pub use greet::*;
