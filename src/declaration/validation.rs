//! Declaration validation logic

use crate::declaration::OptionDecl;
use crate::error::OptsError;

/// Validate the command-level declaration
///
/// # Errors
///
/// Returns an error if the command has no display name
#[inline]
pub fn validate_command_name(name: &str) -> Result<(), OptsError> {
    if name.is_empty() {
        return Err(OptsError::validation(
            "command is missing its declaration: the display name is empty",
        ));
    }

    Ok(())
}

/// Validate a single option declaration in isolation
///
/// Name collisions are checked by the registry, which sees every option.
///
/// # Errors
///
/// Returns an error if:
/// - The option has neither a short nor a long name
/// - The short name is not one ASCII letter or digit
/// - The long name does not start with an ASCII letter or digit
/// - The description is empty
/// - A parameter name is declared on an option without a parameter
pub fn validate_option(
    decl: &OptionDecl,
    value_name: Option<&str>,
    index: usize,
) -> Result<(), OptsError> {
    let context = format!("Option #{}", index + 1);
    let long = decl.long.as_deref().filter(|long| !long.is_empty());

    if decl.short.is_none() && long.is_none() {
        return Err(OptsError::validation(format!(
            "{context}: an option needs a short or a long name"
        )));
    }

    let context = format!("{context} ({})", decl.display_name());

    if let Some(short) = decl.short
        && !short.is_ascii_alphanumeric()
    {
        return Err(OptsError::validation(format!(
            "{context}: short name '{short}' must be a single ASCII letter or digit"
        )));
    }

    if let Some(long) = long
        && !long.starts_with(|c: char| c.is_ascii_alphanumeric())
    {
        return Err(OptsError::validation(format!(
            "{context}: long name '{long}' must start with an ASCII letter or digit"
        )));
    }

    if decl.description.is_empty() {
        return Err(OptsError::validation(format!(
            "{context}: option is missing a description"
        )));
    }

    if decl.parameter.is_none() && value_name.is_some() {
        return Err(OptsError::validation(format!(
            "{context}: a parameter name is declared but the action takes no value"
        )));
    }

    Ok(())
}
