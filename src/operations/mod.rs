//! Operations module
//!
//! Builds option registries and runs them: scanning arguments, replaying
//! handlers, rendering usage and descriptions

pub mod describe;
pub mod execute;
pub mod registry;
pub mod scan;
pub mod usage;

pub use describe::*;
pub use execute::*;
pub use registry::*;
pub use scan::*;
pub use usage::*;
