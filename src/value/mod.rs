//! Option values
//!
//! Literal arguments are coerced into a [`Value`] according to the
//! [`ValueType`] a handler declares, then handed back to the handler as a
//! concrete Rust type through [`Parameter`].

pub mod converter;

pub use converter::*;

use core::fmt;
use serde::Serialize;
use std::path::PathBuf;

/// Parameter type a handler may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ValueType {
    /// Literal used verbatim
    Text,
    /// Base-10 signed 32-bit integer
    Int,
    /// Base-10 signed 64-bit integer
    Long,
    /// `true` (any case) or false for anything else
    Bool,
    /// Filesystem path, requires a registered converter
    Path,
}

impl ValueType {
    /// Lowercase name used in messages and descriptions
    #[must_use]
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Int => "int",
            Self::Long => "long",
            Self::Bool => "bool",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for ValueType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A coerced option argument
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Value {
    Text(String),
    Int(i32),
    Long(i64),
    Bool(bool),
    Path(PathBuf),
}

impl Value {
    /// Runtime type of this value
    #[must_use]
    #[inline]
    pub const fn value_type(&self) -> ValueType {
        match *self {
            Self::Text(_) => ValueType::Text,
            Self::Int(_) => ValueType::Int,
            Self::Long(_) => ValueType::Long,
            Self::Bool(_) => ValueType::Bool,
            Self::Path(_) => ValueType::Path,
        }
    }
}

/// Rust types a handler can take as its single parameter
pub trait Parameter: Sized {
    /// Declared type used to coerce the literal
    const VALUE_TYPE: ValueType;

    /// Extract the concrete value, `None` when the runtime type differs
    fn from_value(value: Value) -> Option<Self>;
}

impl Parameter for String {
    const VALUE_TYPE: ValueType = ValueType::Text;

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Parameter for i32 {
    const VALUE_TYPE: ValueType = ValueType::Int;

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Int(number) => Some(number),
            _ => None,
        }
    }
}

impl Parameter for i64 {
    const VALUE_TYPE: ValueType = ValueType::Long;

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Long(number) => Some(number),
            _ => None,
        }
    }
}

impl Parameter for bool {
    const VALUE_TYPE: ValueType = ValueType::Bool;

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(flag) => Some(flag),
            _ => None,
        }
    }
}

impl Parameter for PathBuf {
    const VALUE_TYPE: ValueType = ValueType::Path;

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Path(path) => Some(path),
            _ => None,
        }
    }
}

/// Outcome of a handler: nothing, or an exit code
pub trait Outcome {
    /// The exit code this outcome carries, if any
    fn into_exit_code(self) -> Option<i32>;
}

impl Outcome for () {
    #[inline]
    fn into_exit_code(self) -> Option<i32> {
        None
    }
}

impl Outcome for i32 {
    #[inline]
    fn into_exit_code(self) -> Option<i32> {
        Some(self)
    }
}
