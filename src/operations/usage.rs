//! Usage text rendering

use crate::declaration::Command;
use crate::error::OptsError;
use crate::operations::registry::{OptionRegistry, build_registry};

/// Minimum width of the flags part before `-x` and `--long`
const SHORT_COLUMN_WIDTH: usize = 3;

/// Column where descriptions start
const DESCRIPTION_COLUMN: usize = 30;

/// Marker appended to parameter placeholders when repeatable options exist
const MULTIPLE_MARKER: &str = "[+]";

const MULTIPLE_FOOTNOTE: &str = "[+] marked option can be specified multiple times";

/// Render the usage text for command `C`
///
/// # Errors
///
/// Returns an error if:
/// - The command is badly declared
/// - A parameterized option has no parameter name
#[inline]
pub fn render_usage<C: Command>() -> Result<String, OptsError> {
    build_registry::<C>()?.usage()
}

/// Write the usage text for command `C` to standard error
///
/// # Errors
///
/// Same as [`render_usage`]
#[inline]
pub fn print_usage<C: Command>() -> Result<(), OptsError> {
    let usage = render_usage::<C>()?;
    eprintln!("{usage}");
    Ok(())
}

impl<C> OptionRegistry<C> {
    /// Render the usage text, options in declaration order
    ///
    /// ```text
    /// usage: greet [options]
    ///
    ///  -n --name NAME [+]           who to greet
    ///
    /// [+] marked option can be specified multiple times
    /// ```
    ///
    /// The `[+]` marker follows every parameter placeholder as soon as any
    /// option of the command is repeatable, not only repeatable ones.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameterized option has no parameter name
    pub fn usage(&self) -> Result<String, OptsError> {
        let mut usage = format!("usage: {}", self.name);
        if self.is_empty() {
            return Ok(usage);
        }

        let has_multiple = self.has_multiple();
        usage.push_str(" [options]\n");

        for decl in self.declarations() {
            let mut line = String::new();

            if let Some(short) = decl.short {
                line.push_str(&format!(" -{short}"));
            }
            pad_to(&mut line, SHORT_COLUMN_WIDTH);

            if let Some(long) = decl.long.as_deref().filter(|long| !long.is_empty()) {
                line.push_str(&format!(" --{long}"));
            }

            if let Some(parameter) = decl.parameter.as_ref() {
                let name = parameter
                    .name
                    .as_deref()
                    .ok_or_else(|| OptsError::missing_parameter_name(decl.display_name()))?;
                line.push_str(&format!(" {name}"));
                if has_multiple {
                    line.push_str(&format!(" {MULTIPLE_MARKER}"));
                }
            }

            pad_to(&mut line, DESCRIPTION_COLUMN);
            line.push_str(&decl.description);

            usage.push('\n');
            usage.push_str(&line);
        }

        if has_multiple {
            usage.push_str("\n\n");
            usage.push_str(MULTIPLE_FOOTNOTE);
        }

        Ok(usage)
    }
}

/// Pad `line` with spaces up to `width` characters
fn pad_to(line: &mut String, width: usize) {
    let len = line.chars().count();
    if len < width {
        line.extend(core::iter::repeat_n(' ', width - len));
    }
}
