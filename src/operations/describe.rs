//! Machine-readable command descriptions

use crate::declaration::{Command, OptionDecl};
use crate::operations::registry::{OptionRegistry, build_registry};
use anyhow::Result;
use serde::Serialize;

/// Serializable view of a command's declarations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescription {
    pub name: String,
    pub options: Vec<OptionDecl>,
}

impl<C> OptionRegistry<C> {
    /// Snapshot of the command name and option declarations
    #[must_use]
    pub fn describe(&self) -> CommandDescription {
        CommandDescription {
            name: self.name.clone(),
            options: self.declarations().cloned().collect(),
        }
    }
}

/// Describe command `C` as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if:
/// - The command is badly declared
/// - The description cannot be serialized
#[inline]
pub fn describe_json<C: Command>() -> Result<String> {
    let description = build_registry::<C>()?.describe();
    serde_json::to_string_pretty(&description)
        .map_err(|e| anyhow::anyhow!("Failed to serialize command description: {e}"))
}
