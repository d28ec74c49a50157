//! Option registry: validated declarations with their handlers

use crate::declaration::validation::{validate_command_name, validate_option};
use crate::declaration::option::Handler;
use crate::declaration::{Command, CommandSpec, OptionDecl};
use crate::error::OptsError;
use crate::operations::scan::TokenPatterns;
use crate::value::ValueConverter;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Position of an option in its registry, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionId(pub(crate) usize);

impl OptionId {
    /// Declaration index of the option
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A declaration together with its bound handler
pub(crate) struct BoundOption<C> {
    pub(crate) decl: OptionDecl,
    pub(crate) handler: Handler<C>,
}

/// Immutable mapping from option declarations to handlers for one command
///
/// Options keep their declaration order; the short and long name tables both
/// point into that list.
pub struct OptionRegistry<C> {
    pub(crate) name: String,
    pub(crate) options: Vec<BoundOption<C>>,
    pub(crate) converters: Vec<Box<dyn ValueConverter>>,
    by_short: HashMap<char, OptionId>,
    by_long: HashMap<String, OptionId>,
    pub(crate) patterns: TokenPatterns,
}

/// Build the registry for a command type
///
/// # Errors
///
/// Returns an error if the command or one of its options is badly declared
#[inline]
pub fn build_registry<C: Command>() -> Result<OptionRegistry<C>, OptsError> {
    OptionRegistry::from_spec(C::declare())
}

impl<C> OptionRegistry<C> {
    /// Validate a command declaration and index its options
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command has no display name
    /// - An option is missing a name, a description or an action
    /// - Two options share a short name or a long name
    /// - The option token patterns fail to compile
    pub fn from_spec(spec: CommandSpec<C>) -> Result<Self, OptsError> {
        validate_command_name(&spec.name)?;
        let patterns = TokenPatterns::new()?;

        let mut options = Vec::with_capacity(spec.options.len());
        let mut by_short = HashMap::new();
        let mut by_long = HashMap::new();

        for (index, option) in spec.options.into_iter().enumerate() {
            let (decl, value_name, handler) = option.into_parts();
            validate_option(&decl, value_name.as_deref(), index)?;
            let Some(handler) = handler else {
                return Err(OptsError::validation(format!(
                    "Option #{} ({}): option has no bound action",
                    index + 1,
                    decl.display_name()
                )));
            };

            let id = OptionId(index);

            if let Some(short) = decl.short {
                match by_short.entry(short) {
                    Entry::Occupied(_) => {
                        return Err(OptsError::validation(format!(
                            "duplicate option with short name -{short}"
                        )));
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(id);
                    }
                }
            }

            if let Some(long) = decl.long.as_ref().filter(|long| !long.is_empty()) {
                match by_long.entry(long.clone()) {
                    Entry::Occupied(_) => {
                        return Err(OptsError::validation(format!(
                            "duplicate option with long name --{long}"
                        )));
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(id);
                    }
                }
            }

            options.push(BoundOption { decl, handler });
        }

        debug!(
            "Registered {} option(s) for command '{}'",
            options.len(),
            spec.name
        );

        Ok(Self {
            name: spec.name,
            options,
            converters: spec.converters,
            by_short,
            by_long,
            patterns,
        })
    }

    /// Display name of the command
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declared options
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the command declares no options
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option declarations in declaration order
    #[inline]
    pub fn declarations(&self) -> impl Iterator<Item = &OptionDecl> {
        self.options.iter().map(|option| &option.decl)
    }

    /// Declaration of one option
    ///
    /// # Panics
    ///
    /// Panics if `id` was obtained from another registry with fewer options
    #[must_use]
    #[inline]
    pub fn declaration(&self, id: OptionId) -> &OptionDecl {
        &self.options[id.0].decl
    }

    /// Find an option by its short name
    #[must_use]
    #[inline]
    pub fn find_short(&self, name: char) -> Option<OptionId> {
        self.by_short.get(&name).copied()
    }

    /// Find an option by its long name
    #[must_use]
    #[inline]
    pub fn find_long(&self, name: &str) -> Option<OptionId> {
        self.by_long.get(name).copied()
    }

    /// Whether any option may be repeated
    #[must_use]
    #[inline]
    pub fn has_multiple(&self) -> bool {
        self.declarations().any(|decl| decl.multiple)
    }
}
