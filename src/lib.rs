//! `optbind` - declarative command-line option binding
//!
//! A command type declares its options with [`OptionSpec`] builders, each
//! bound to a handler closure. [`execute`] scans an argument vector against
//! those declarations, coerces option values, replays the handlers on a fresh
//! command instance in declaration order and returns an exit code.
//! [`render_usage`] formats the matching help text.

pub mod cli;
pub mod declaration;
pub mod error;
pub mod operations;
pub mod system;
pub mod utils;
pub mod value;

pub use declaration::{Command, CommandSpec, OptionDecl, OptionSpec, ParameterDecl};
pub use error::OptsError;
pub use operations::{
    CommandDescription, InvocationQueue, OptionId, OptionRef, OptionRegistry, TokenPatterns,
    build_registry, classify, describe_json, execute, print_usage, render_usage,
};
pub use value::{Outcome, Parameter, PathConverter, Value, ValueConverter, ValueType};

use anyhow::Result;
use cli::{Args, Greet};

/// Run the bundled greet command with the forwarded arguments
///
/// Returns the process exit code chosen by the command.
///
/// # Errors
///
/// Returns an error if the arguments do not scan or a handler fails
#[inline]
pub fn run(args: &Args) -> Result<i32, OptsError> {
    let (_, exit_code) = execute::<Greet, _>(args.args.as_slice())?;
    Ok(exit_code)
}

/// Print the greet command's usage to standard error
///
/// # Errors
///
/// Returns an error if the greet command is badly declared
#[inline]
pub fn run_usage() -> Result<(), OptsError> {
    print_usage::<Greet>()
}

/// Print the greet command's declarations as JSON to standard output
///
/// # Errors
///
/// Returns an error if the description cannot be built or serialized
#[inline]
pub fn run_describe() -> Result<()> {
    let json = describe_json::<Greet>()?;

    // Output to stdout (not using logging)
    println!("{json}");

    Ok(())
}
