//! Converters for parameter types without built-in coercion

use super::{Value, ValueType};
use crate::system::{RealSystem, System};
use crate::utils::path::absolutize;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Strategy turning a literal argument into a value of one [`ValueType`]
pub trait ValueConverter {
    /// Type this converter produces
    fn value_type(&self) -> ValueType;

    /// Convert the literal
    ///
    /// # Errors
    ///
    /// Returns an error if the literal cannot be represented as the target type
    fn convert(&self, literal: &str) -> Result<Value>;
}

/// Resolves a literal to an absolute path against the current directory
///
/// The literal is joined as written; `..` components are not folded.
#[derive(Debug, Clone)]
pub struct PathConverter<S: System = RealSystem> {
    system: S,
}

impl PathConverter<RealSystem> {
    /// Path converter for the real process environment
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self { system: RealSystem }
    }
}

impl Default for PathConverter<RealSystem> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<S: System> PathConverter<S> {
    /// Path converter resolving against the given system
    #[inline]
    pub const fn with_system(system: S) -> Self {
        Self { system }
    }
}

impl<S: System> ValueConverter for PathConverter<S> {
    #[inline]
    fn value_type(&self) -> ValueType {
        ValueType::Path
    }

    fn convert(&self, literal: &str) -> Result<Value> {
        let base = self
            .system
            .current_dir()
            .context("Failed to resolve the current directory")?;

        Ok(Value::Path(absolutize(Path::new(literal), &base)))
    }
}
