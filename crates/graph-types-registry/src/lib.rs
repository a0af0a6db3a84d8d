//! Graph type registry.
//!
//! Maps host data types to schema type descriptors and records which types
//! extend which. Populated once at startup by the schema builder, then read.

pub mod builtins;
mod extensions;
mod options;
mod registry;

pub use extensions::ExtensionMap;
pub use options::{ExtensionPolicy, RegistryOptions};
pub use registry::TypeRegistry;
