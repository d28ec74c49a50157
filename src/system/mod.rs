//! System abstraction for process environment lookups
//!
//! Converters that depend on the environment (the working directory for path
//! resolution) go through this trait so they can be tested with `MockSystem`.

use std::io;
use std::path::PathBuf;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Trait for environment lookups needed by value converters
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::env`
/// - `MockSystem`: Test implementation with a fixed working directory
pub trait System {
    /// Get the current working directory
    fn current_dir(&self) -> io::Result<PathBuf>;
}
