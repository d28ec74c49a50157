//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for option binding
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OptsError {
    /// Declaration Error - the command or one of its options is badly declared
    #[error("Invalid declaration: {message}")]
    Validation { message: String },

    /// Token matches neither the short nor the long option pattern
    #[error("Malformed argument: {token}")]
    MalformedArgument { token: String },

    /// Token names an option the command does not declare
    #[error("Unknown option: {token}")]
    UnknownOption { token: String },

    /// Option repeated without being declared `multiple`
    #[error("Duplicate option: {token}")]
    DuplicateOption { token: String },

    /// Option requires a value but is the last token
    #[error("Missing an argument for option {token}")]
    MissingArgument { token: String },

    /// Literal could not be coerced to the parameter type
    #[error("Invalid value '{value}' for option {token}: {reason}")]
    InvalidValue {
        token: String,
        value: String,
        reason: String,
    },

    /// Parameter type has neither built-in coercion nor a registered converter
    #[error("Unsupported argument type: {type_name}")]
    UnsupportedType { type_name: String },

    /// A handler received a value of the wrong runtime type
    #[error("Unsupported operation: {message}")]
    UnsupportedOperation { message: String },

    /// Command construction failed
    #[error("Failed to instantiate command '{command}'")]
    Instantiation {
        command: String,
        #[source]
        source: anyhow::Error,
    },

    /// A bound handler or the default action failed
    #[error("Invocation of {target} failed")]
    Invocation {
        target: String,
        #[source]
        source: anyhow::Error,
    },

    /// Usage rendering needs a parameter name that was not declared
    #[error("Option {option} is missing a parameter name")]
    MissingParameterName { option: String },
}

impl OptsError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Validation { .. } | Self::MissingParameterName { .. } => 1,
            Self::MalformedArgument { .. }
            | Self::UnknownOption { .. }
            | Self::DuplicateOption { .. }
            | Self::MissingArgument { .. }
            | Self::InvalidValue { .. }
            | Self::UnsupportedType { .. }
            | Self::UnsupportedOperation { .. } => 2,
            Self::Instantiation { .. } => 3,
            Self::Invocation { .. } => 4,
        }
    }

    /// Create a declaration validation error
    #[inline]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a malformed argument error
    #[inline]
    pub fn malformed<S: Into<String>>(token: S) -> Self {
        Self::MalformedArgument {
            token: token.into(),
        }
    }

    /// Create an unknown option error
    #[inline]
    pub fn unknown<S: Into<String>>(token: S) -> Self {
        Self::UnknownOption {
            token: token.into(),
        }
    }

    /// Create a duplicate option error
    #[inline]
    pub fn duplicate<S: Into<String>>(token: S) -> Self {
        Self::DuplicateOption {
            token: token.into(),
        }
    }

    /// Create a missing argument error
    #[inline]
    pub fn missing_argument<S: Into<String>>(token: S) -> Self {
        Self::MissingArgument {
            token: token.into(),
        }
    }

    /// Create an invalid value error
    #[inline]
    pub fn invalid_value<T, V, R>(token: T, value: V, reason: R) -> Self
    where
        T: Into<String>,
        V: Into<String>,
        R: ToString,
    {
        Self::InvalidValue {
            token: token.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an unsupported type error
    #[inline]
    pub fn unsupported_type<S: Into<String>>(type_name: S) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create an unsupported operation error
    #[inline]
    pub fn unsupported_operation<S: Into<String>>(message: S) -> Self {
        Self::UnsupportedOperation {
            message: message.into(),
        }
    }

    /// Create an invocation error
    #[inline]
    pub fn invocation<S: Into<String>>(target: S, source: anyhow::Error) -> Self {
        Self::Invocation {
            target: target.into(),
            source,
        }
    }

    /// Create a missing parameter name error
    #[inline]
    pub fn missing_parameter_name<S: Into<String>>(option: S) -> Self {
        Self::MissingParameterName {
            option: option.into(),
        }
    }
}
