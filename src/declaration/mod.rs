//! Command and option declarations
//!
//! A command type describes itself through [`Command::declare`], returning a
//! [`CommandSpec`] that lists its options in the order they should be replayed
//! and displayed.

pub mod option;
pub mod validation;

pub use option::*;

use crate::value::ValueConverter;
use anyhow::Result;

/// A type whose instances are configured by command-line options
///
/// # Example
/// ```
/// use optbind::{Command, CommandSpec, OptionSpec};
///
/// #[derive(Default)]
/// struct Hello {
///     name: String,
/// }
///
/// impl Command for Hello {
///     fn declare() -> CommandSpec<Self> {
///         CommandSpec::new("hello").option(
///             OptionSpec::new()
///                 .short('n')
///                 .long("name")
///                 .description("who to greet")
///                 .value_name("NAME")
///                 .action_with(|hello: &mut Self, name: String| {
///                     hello.name = name;
///                     Ok(())
///                 }),
///         )
///     }
///
///     fn instantiate() -> anyhow::Result<Self> {
///         Ok(Self::default())
///     }
/// }
///
/// let (hello, code) = optbind::execute::<Hello, _>(&["--name", "world"]).unwrap();
/// assert_eq!(hello.name, "world");
/// assert_eq!(code, 0);
/// ```
pub trait Command: Sized + 'static {
    /// Declarations for this command, rebuilt on every call
    fn declare() -> CommandSpec<Self>;

    /// Zero-argument constructor used once per execution
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be constructed
    fn instantiate() -> Result<Self>;

    /// Default action, run when no exit option fired
    ///
    /// # Errors
    ///
    /// Returns an error if the action fails
    #[inline]
    fn run(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Command-level declaration: display name, options and value converters
pub struct CommandSpec<C> {
    pub(crate) name: String,
    pub(crate) options: Vec<OptionSpec<C>>,
    pub(crate) converters: Vec<Box<dyn ValueConverter>>,
}

impl<C> CommandSpec<C> {
    /// Declare a command with the given display name
    #[inline]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            converters: Vec::new(),
        }
    }

    /// Add an option (builder pattern)
    #[must_use]
    #[inline]
    pub fn option(mut self, option: OptionSpec<C>) -> Self {
        self.options.push(option);
        self
    }

    /// Register a converter for a parameter type without built-in coercion
    #[must_use]
    #[inline]
    pub fn converter<V: ValueConverter + 'static>(mut self, converter: V) -> Self {
        self.converters.push(Box::new(converter));
        self
    }

    /// Display name of the command
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}
