//! Option declarations and their bound handlers

use crate::value::{Outcome, Parameter, Value, ValueType};
use serde::Serialize;

/// Static metadata for one option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionDecl {
    /// Single-character name, referenced as `-x`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,

    /// Long name, referenced as `--name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,

    pub description: String,

    /// May appear more than once in one argument vector
    pub multiple: bool,

    /// Firing this option ends replay with the handler's exit code
    pub exit: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<ParameterDecl>,
}

impl OptionDecl {
    /// Preferred way to refer to this option in messages: `--long`, else `-s`
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(long) = self.long.as_deref().filter(|long| !long.is_empty()) {
            return format!("--{long}");
        }

        match self.short {
            Some(short) => format!("-{short}"),
            None => String::new(),
        }
    }
}

/// The single parameter an option's handler takes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDecl {
    #[serde(rename = "type")]
    pub value_type: ValueType,

    /// Placeholder shown in usage, e.g. `COUNT`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Why a handler call did not produce an outcome
pub(crate) enum CallError {
    /// The argument's runtime type did not match the handler's parameter
    Mismatch {
        expected: Option<ValueType>,
        actual: Option<ValueType>,
    },
    /// The handler itself failed
    Failed(anyhow::Error),
}

type Call<C> = Box<dyn Fn(&mut C, Option<Value>) -> Result<Option<i32>, CallError>>;

/// A stored handler: parameter type (if any) and the closure to call
pub(crate) struct Handler<C> {
    pub(crate) value_type: Option<ValueType>,
    call: Call<C>,
}

impl<C> Handler<C> {
    /// Call the handler, returning the exit code it produced, if any
    pub(crate) fn call(&self, command: &mut C, argument: Option<Value>) -> Result<Option<i32>, CallError> {
        (self.call)(command, argument)
    }
}

/// Builder for one option declaration and its handler
pub struct OptionSpec<C> {
    pub(crate) short: Option<char>,
    pub(crate) long: Option<String>,
    pub(crate) description: String,
    pub(crate) multiple: bool,
    pub(crate) exit: bool,
    pub(crate) value_name: Option<String>,
    pub(crate) handler: Option<Handler<C>>,
}

impl<C: 'static> OptionSpec<C> {
    /// Start an empty option declaration
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            short: None,
            long: None,
            description: String::new(),
            multiple: false,
            exit: false,
            value_name: None,
            handler: None,
        }
    }

    /// Set the short name (`-x`)
    #[must_use]
    #[inline]
    pub fn short(mut self, name: char) -> Self {
        self.short = Some(name);
        self
    }

    /// Set the long name (`--name`)
    #[must_use]
    #[inline]
    pub fn long<S: Into<String>>(mut self, name: S) -> Self {
        self.long = Some(name.into());
        self
    }

    /// Set the description shown in usage
    #[must_use]
    #[inline]
    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    /// Allow the option to appear more than once
    #[must_use]
    #[inline]
    pub const fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Stop replay when this option fires, using the handler's result as exit code
    #[must_use]
    #[inline]
    pub const fn exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// Set the parameter placeholder shown in usage
    #[must_use]
    #[inline]
    pub fn value_name<S: Into<String>>(mut self, name: S) -> Self {
        self.value_name = Some(name.into());
        self
    }

    /// Bind a handler that takes no argument
    ///
    /// The handler returns `()` or an `i32` exit code.
    #[must_use]
    pub fn action<R, F>(mut self, handler: F) -> Self
    where
        R: Outcome,
        F: Fn(&mut C) -> anyhow::Result<R> + 'static,
    {
        self.handler = Some(Handler {
            value_type: None,
            call: Box::new(move |command, argument| {
                if let Some(value) = argument {
                    return Err(CallError::Mismatch {
                        expected: None,
                        actual: Some(value.value_type()),
                    });
                }
                handler(command)
                    .map(Outcome::into_exit_code)
                    .map_err(CallError::Failed)
            }),
        });
        self
    }

    /// Bind a handler that takes one argument of type `T`
    ///
    /// The literal following the option is coerced to `T` before the call.
    /// The handler returns `()` or an `i32` exit code.
    #[must_use]
    pub fn action_with<T, R, F>(mut self, handler: F) -> Self
    where
        T: Parameter,
        R: Outcome,
        F: Fn(&mut C, T) -> anyhow::Result<R> + 'static,
    {
        self.handler = Some(Handler {
            value_type: Some(T::VALUE_TYPE),
            call: Box::new(move |command, argument| {
                let actual = argument.as_ref().map(Value::value_type);
                let value = argument.and_then(T::from_value).ok_or(CallError::Mismatch {
                    expected: Some(T::VALUE_TYPE),
                    actual,
                })?;
                handler(command, value)
                    .map(Outcome::into_exit_code)
                    .map_err(CallError::Failed)
            }),
        });
        self
    }
}

impl<C: 'static> Default for OptionSpec<C> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<C> OptionSpec<C> {
    /// Split into static metadata and the bound handler
    pub(crate) fn into_parts(self) -> (OptionDecl, Option<String>, Option<Handler<C>>) {
        let parameter = self
            .handler
            .as_ref()
            .and_then(|handler| handler.value_type)
            .map(|value_type| ParameterDecl {
                value_type,
                name: self.value_name.clone(),
            });

        let decl = OptionDecl {
            short: self.short,
            long: self.long,
            description: self.description,
            multiple: self.multiple,
            exit: self.exit,
            parameter,
        };

        (decl, self.value_name, self.handler)
    }
}
