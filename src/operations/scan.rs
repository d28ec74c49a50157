//! Argument scanning: tokens to queued invocations

use crate::error::OptsError;
use crate::operations::registry::{OptionId, OptionRegistry};
use crate::value::{Value, ValueType};
use regex::Regex;
use tracing::{debug, trace};

const LONG_OPTION_PATTERN: &str = r"^--[a-zA-Z0-9].*$";

const SHORT_OPTION_PATTERN: &str = r"^-[a-zA-Z0-9]$";

/// How a token refers to an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionRef<'arg> {
    /// `--name`
    Long(&'arg str),
    /// `-x`
    Short(char),
}

/// Compiled shapes of long and short option tokens
#[derive(Debug, Clone)]
pub struct TokenPatterns {
    long: Regex,
    short: Regex,
}

impl TokenPatterns {
    /// Compile the option token patterns
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile
    pub fn new() -> Result<Self, OptsError> {
        Ok(Self {
            long: compile(LONG_OPTION_PATTERN)?,
            short: compile(SHORT_OPTION_PATTERN)?,
        })
    }

    /// Classify a token as a long or short option reference
    ///
    /// # Errors
    ///
    /// Returns an error if the token matches neither `--<alnum>...` nor `-<alnum>`
    pub fn classify<'arg>(&self, token: &'arg str) -> Result<OptionRef<'arg>, OptsError> {
        if self.long.is_match(token) {
            return Ok(OptionRef::Long(&token[2..]));
        }

        if self.short.is_match(token)
            && let Some(short) = token.chars().nth(1)
        {
            return Ok(OptionRef::Short(short));
        }

        Err(OptsError::malformed(token))
    }
}

fn compile(pattern: &str) -> Result<Regex, OptsError> {
    Regex::new(pattern)
        .map_err(|e| OptsError::validation(format!("Invalid option pattern {pattern}: {e}")))
}

/// Classify a single token with freshly compiled patterns
///
/// Scanning goes through the registry's own [`TokenPatterns`] instead.
///
/// # Errors
///
/// Returns an error if the token is not an option reference
#[inline]
pub fn classify(token: &str) -> Result<OptionRef<'_>, OptsError> {
    TokenPatterns::new()?.classify(token)
}

/// Arguments queued per option while scanning
///
/// Each entry is one future invocation: `None` for options without a
/// parameter, `Some(value)` otherwise. Entries keep argument order within an
/// option; replay walks options in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationQueue {
    calls: Vec<Vec<Option<Value>>>,
}

impl InvocationQueue {
    fn new(option_count: usize) -> Self {
        Self {
            calls: vec![Vec::new(); option_count],
        }
    }

    fn push(&mut self, id: OptionId, argument: Option<Value>) {
        self.calls[id.index()].push(argument);
    }

    /// Whether the option has at least one queued invocation
    #[must_use]
    #[inline]
    pub fn contains(&self, id: OptionId) -> bool {
        self.calls
            .get(id.index())
            .is_some_and(|calls| !calls.is_empty())
    }

    /// Queued arguments for one option, in argument order
    #[must_use]
    #[inline]
    pub fn calls(&self, id: OptionId) -> &[Option<Value>] {
        self.calls
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of queued invocations
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.calls.iter().map(Vec::len).sum()
    }

    /// Whether nothing was queued
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-option argument lists in declaration order
    pub(crate) fn into_calls(self) -> Vec<Vec<Option<Value>>> {
        self.calls
    }
}

impl<C> OptionRegistry<C> {
    /// Scan an argument vector into an invocation queue
    ///
    /// Nothing is invoked; a scan error leaves the command untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A token is not an option reference
    /// - A token names an undeclared option
    /// - A non-multiple option is repeated
    /// - An option needing a value is the last token
    /// - A value cannot be coerced to the parameter type
    pub fn scan<S: AsRef<str>>(&self, args: &[S]) -> Result<InvocationQueue, OptsError> {
        let mut queue = InvocationQueue::new(self.options.len());
        let mut tokens = args.iter().map(AsRef::as_ref);

        while let Some(token) = tokens.next() {
            let id = match self.patterns.classify(token)? {
                OptionRef::Long(name) => self.find_long(name),
                OptionRef::Short(name) => self.find_short(name),
            }
            .ok_or_else(|| OptsError::unknown(token))?;

            let option = &self.options[id.index()];
            if !option.decl.multiple && queue.contains(id) {
                return Err(OptsError::duplicate(token));
            }

            let argument = match option.handler.value_type {
                Some(value_type) => {
                    let literal = tokens
                        .next()
                        .ok_or_else(|| OptsError::missing_argument(token))?;
                    Some(self.coerce(token, literal, value_type)?)
                }
                None => None,
            };

            trace!("Queued {} with {:?}", option.decl.display_name(), argument);
            queue.push(id, argument);
        }

        debug!(
            "Scanned {} argument(s) into {} invocation(s) for '{}'",
            args.len(),
            queue.len(),
            self.name
        );

        Ok(queue)
    }

    /// Coerce a literal to the declared parameter type
    fn coerce(&self, token: &str, literal: &str, value_type: ValueType) -> Result<Value, OptsError> {
        match value_type {
            ValueType::Text => Ok(Value::Text(literal.to_owned())),
            ValueType::Int => literal
                .parse::<i32>()
                .map(Value::Int)
                .map_err(|e| OptsError::invalid_value(token, literal, e)),
            ValueType::Long => literal
                .parse::<i64>()
                .map(Value::Long)
                .map_err(|e| OptsError::invalid_value(token, literal, e)),
            // Anything but a case-insensitive "true" is false
            ValueType::Bool => Ok(Value::Bool(literal.eq_ignore_ascii_case("true"))),
            other => {
                let converter = self
                    .converters
                    .iter()
                    .find(|converter| converter.value_type() == other)
                    .ok_or_else(|| OptsError::unsupported_type(other.name()))?;

                let value = converter
                    .convert(literal)
                    .map_err(|e| OptsError::invalid_value(token, literal, format!("{e:#}")))?;

                if value.value_type() != other {
                    return Err(OptsError::unsupported_operation(format!(
                        "converter for {other} produced a {} value",
                        value.value_type()
                    )));
                }

                Ok(value)
            }
        }
    }
}
