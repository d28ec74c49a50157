//! Command execution: scan, instantiate, replay

use crate::declaration::Command;
use crate::declaration::option::CallError;
use crate::error::OptsError;
use crate::operations::registry::{OptionRegistry, build_registry};
use tracing::debug;

/// Parse `args` for command `C`, invoke the matching handlers and run it
///
/// Returns the command instance and the exit code: the result of the first
/// exit option that fired, or 0 once the default action completed.
///
/// # Errors
///
/// Returns an error if:
/// - The command is badly declared
/// - The argument vector does not scan
/// - The command cannot be instantiated
/// - A handler or the default action fails
#[inline]
pub fn execute<C: Command, S: AsRef<str>>(args: &[S]) -> Result<(C, i32), OptsError> {
    build_registry::<C>()?.execute(args)
}

impl<C: Command> OptionRegistry<C> {
    /// Execute against an already built registry
    ///
    /// Handlers run grouped by declaration order, not argument order; within
    /// one option they run in argument order. Side effects of handlers that
    /// ran before a failure are kept.
    ///
    /// # Errors
    ///
    /// Same as [`execute`], except for declaration errors
    pub fn execute<S: AsRef<str>>(&self, args: &[S]) -> Result<(C, i32), OptsError> {
        let queue = self.scan(args)?;

        let mut command = C::instantiate().map_err(|source| OptsError::Instantiation {
            command: self.name.clone(),
            source,
        })?;

        for (option, calls) in self.options.iter().zip(queue.into_calls()) {
            for argument in calls {
                let outcome = option
                    .handler
                    .call(&mut command, argument)
                    .map_err(|err| match err {
                        CallError::Failed(source) => {
                            OptsError::invocation(option.decl.display_name(), source)
                        }
                        CallError::Mismatch { expected, actual } => {
                            OptsError::unsupported_operation(format!(
                                "{} expects {} but was given {}",
                                option.decl.display_name(),
                                expected.map_or("no value", |t| t.name()),
                                actual.map_or("no value", |t| t.name()),
                            ))
                        }
                    })?;

                if option.decl.exit {
                    let exit_code = outcome.unwrap_or(0);
                    debug!(
                        "Exit option {} fired with code {}",
                        option.decl.display_name(),
                        exit_code
                    );
                    return Ok((command, exit_code));
                }
            }
        }

        command
            .run()
            .map_err(|source| OptsError::invocation(format!("'{}' default action", self.name), source))?;

        Ok((command, 0))
    }
}
