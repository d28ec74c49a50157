//! Mock system implementation for testing

use super::System;
use std::io;
use std::path::{Path, PathBuf};

/// Fixed-environment implementation of System trait for testing
///
/// # Example
/// ```
/// use optbind::system::{MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new().with_current_dir("/work");
/// assert_eq!(system.current_dir().unwrap(), Path::new("/work"));
/// ```
#[derive(Debug, Clone)]
pub struct MockSystem {
    current_dir: Option<PathBuf>,
}

impl MockSystem {
    /// Create a new `MockSystem` rooted at `/`
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            current_dir: Some(PathBuf::from("/")),
        }
    }

    /// Set the current working directory (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_current_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Make `current_dir` fail, as when the working directory was removed
    #[must_use]
    #[inline]
    pub fn without_current_dir(mut self) -> Self {
        self.current_dir = None;
        self
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn current_dir(&self) -> io::Result<PathBuf> {
        self.current_dir
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "current directory is unavailable"))
    }
}
